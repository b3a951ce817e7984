//! Shared test utilities for the CLI E2E tests.
//!
//! Provides a workspace fixture (a temp directory with a `.git` marker, a
//! registry file, and optional fake checkouts) plus re-exports of the
//! common test dependencies.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let ws = Workspace::new();
//!     ws.checkout("lingbo-web", Some("package.json"));
//!     ws.sm().arg("run").arg("--list").assert().success();
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::Workspace;
}

/// A throwaway workspace: `.git` marker, registry file, fake checkouts.
pub struct Workspace {
    temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    /// An empty workspace with a default empty registry.
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let ws = Self { temp };
        ws.write_registry("submodules: []\n");
        ws
    }

    /// A workspace whose registry declares `(name, type, product)` entries.
    pub fn with_entries(entries: &[(&str, &str, &str)]) -> Self {
        let ws = Self::new();
        if entries.is_empty() {
            return ws;
        }
        let mut yaml = String::from("submodules:\n");
        for (name, kind, product) in entries {
            yaml.push_str(&format!(
                "  - name: {name}\n    repo: https://invalid.invalid/{name}.git\n    type: {kind}\n    product: {product}\n"
            ));
        }
        ws.write_registry(&yaml);
        ws
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn registry_path(&self) -> PathBuf {
        self.temp.path().join("registry.yaml")
    }

    pub fn write_registry(&self, yaml: &str) {
        fs::write(self.registry_path(), yaml).unwrap();
    }

    /// Create a fake checkout directory, optionally with a runner marker.
    pub fn checkout(&self, name: &str, marker: Option<&str>) {
        let dir = self.temp.path().join(".submodules").join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(marker) = marker {
            fs::write(dir.join(marker), "").unwrap();
        }
    }

    /// The `sm` binary, run from the workspace root with its registry.
    pub fn sm(&self) -> Command {
        let mut cmd = Command::cargo_bin("sm").unwrap();
        cmd.current_dir(self.temp.path())
            .env_remove("SM_REGISTRY")
            .arg("--color")
            .arg("never")
            .arg("--registry")
            .arg(self.registry_path());
        cmd
    }
}
