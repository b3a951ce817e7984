//! # Error Handling
//!
//! Centralized error type for the `submod` library, built with `thiserror`.
//! One variant exists per failure class in the workspace model: fatal
//! conditions (no workspace root, base directory creation) abort the whole
//! operation, per-request conditions (unknown project or product,
//! unsupported build tool, failed external command) abort a single request.
//! Per-entry failures inside multi-entry loops never surface here as a
//! top-level result — those are logged and accumulated by the caller so
//! the loop can continue.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for submod operations
#[derive(Error, Debug)]
pub enum Error {
    /// No enclosing git repository was found walking up from the starting
    /// directory. Nothing can run without a workspace root.
    #[error(
        "not inside a git repository (searched upward from {})\n  \
         hint: run this command from within your workspace checkout",
        start.display()
    )]
    WorkspaceRootNotFound { start: PathBuf },

    /// A directory every later step depends on could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The named project has no checkout under the submodules directory.
    #[error(
        "project '{name}' not found in {}{}",
        submodules_dir.display(),
        hint.as_ref().map(|h| format!("\n  hint: did you mean '{h}'?")).unwrap_or_default()
    )]
    ProjectNotFound {
        name: String,
        submodules_dir: PathBuf,
        /// Closest registry name by edit distance, when one exists.
        hint: Option<String>,
    },

    /// No registry entry carries the requested product label.
    #[error("no projects found for product '{product}'")]
    ProductNotFound { product: String },

    /// The project directory exists but carries none of the recognized
    /// build-tool marker files.
    #[error(
        "no supported build tool found in '{name}' (expected justfile, package.json, or Makefile)"
    )]
    UnsupportedProject { name: String },

    /// An external command ran and exited non-zero (or died to a signal).
    #[error("command '{program}' failed{}", code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    CommandFailed { program: String, code: Option<i32> },

    /// A git subprocess could not be executed or reported an error.
    #[error("git {context} failed: {message}")]
    GitCommand { context: String, message: String },

    /// The registry file could not be parsed.
    #[error("invalid registry file {}: {source}", path.display())]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
