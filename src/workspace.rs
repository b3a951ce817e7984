//! Workspace root discovery.
//!
//! The workspace root is the nearest ancestor directory (including the
//! starting directory itself) that contains a `.git` entry. It is resolved
//! once per invocation; every filesystem path in the tool is derived from
//! it.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Find the workspace root by walking up from `start`.
pub fn find_root_from(start: &Path) -> Result<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(".git").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(Error::WorkspaceRootNotFound {
                start: start.to_path_buf(),
            });
        }
    }
}

/// Find the workspace root by walking up from the current directory.
pub fn find_root() -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    find_root_from(&cwd)
}
