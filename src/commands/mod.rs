//! # CLI Command Implementations
//!
//! One module per subcommand of the `sm` command-line tool. Each command
//! module contains an optional clap `Args` struct and an `execute` function
//! that orchestrates calls into the `submod` library.
//!
//! Commands share a [`CommandContext`] built once in `cli.rs`: the resolved
//! registry and the output configuration. Workspace-root discovery happens
//! inside each command, since the completions command must work outside a
//! workspace.

use submod::config::Registry;
use submod::output::OutputConfig;

pub mod completions;
pub mod init;
pub mod links;
pub mod run;
pub mod status;
pub mod sync;

/// State shared by every workspace-bound command.
pub struct CommandContext {
    pub registry: Registry,
    pub output: OutputConfig,
}
