//! External process capability.
//!
//! Every shell-out in the tool goes through the [`ProcessRunner`] trait:
//! "run this program with these arguments in this directory". The real
//! implementation spawns the system binary; tests substitute a scripted
//! fake that records invocations instead of spawning anything, which is how
//! the dispatcher and lifecycle loops are tested without a network or a
//! `git` binary.
//!
//! Two execution modes exist, matching the two ways the tool uses external
//! commands:
//!
//! - **interactive**: stdin/stdout/stderr are inherited from the invoking
//!   process, so clones prompting for credentials and long-running dev
//!   servers behave as if the operator ran them directly. The call blocks
//!   until the child exits; there is deliberately no timeout.
//! - **captured**: stdout/stderr are collected for the small git queries
//!   whose output the tool parses.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Output of a captured run.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Exit code (0 on success).
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Capability interface for spawning external commands.
pub trait ProcessRunner {
    /// Run with inherited stdio; returns the child's exit code.
    ///
    /// A child killed by a signal has no exit code and is surfaced as
    /// [`Error::CommandFailed`] with `code: None`. A non-zero exit code is
    /// NOT an error at this level — callers decide what it means.
    fn run_interactive(&self, program: &str, args: &[&str], cwd: &Path) -> Result<i32>;

    /// Run with captured output.
    fn run_captured(&self, program: &str, args: &[&str], cwd: &Path) -> Result<Captured>;
}

/// The real implementation, spawning system binaries.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run_interactive(&self, program: &str, args: &[&str], cwd: &Path) -> Result<i32> {
        log::debug!("spawn (interactive): {} {} in {}", program, args.join(" "), cwd.display());
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()?;
        status.code().ok_or_else(|| Error::CommandFailed {
            program: program.to_string(),
            code: None,
        })
    }

    fn run_captured(&self, program: &str, args: &[&str], cwd: &Path) -> Result<Captured> {
        log::debug!("spawn (captured): {} {} in {}", program, args.join(" "), cwd.display());
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()?;
        Ok(Captured {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
