//! Default values and the built-in workspace catalog.
//!
//! This module provides centralized defaults used across commands, plus the
//! hand-authored registry the tool falls back to when no registry file is
//! given. The catalog is a static snapshot: entries are added here by hand
//! when a new repository joins the workspace.

use crate::config::{Registry, SubmoduleEntry, SubmoduleKind};

/// Directory under the workspace root holding the flat checkouts.
pub const DEFAULT_SUBMODULES_DIR: &str = ".submodules";

/// Key=value bootstrap file consulted for the clone transport.
pub const BOOTSTRAP_FILENAME: &str = ".bootstrap.conf";

/// Environment variable naming an alternative registry file.
///
/// Overridden by the `--registry` CLI flag when both are present.
pub const REGISTRY_ENV: &str = "SM_REGISTRY";

fn entry(name: &str, kind: SubmoduleKind, product: &str) -> SubmoduleEntry {
    SubmoduleEntry {
        name: name.to_string(),
        repo: format!("git@github.com:inspirai-store/{name}.git"),
        kind,
        product: product.to_string(),
    }
}

/// The built-in catalog of workspace repositories.
pub fn default_registry() -> Registry {
    use SubmoduleKind::{Client, Service, Specs, Tools};

    Registry {
        submodules_dir: DEFAULT_SUBMODULES_DIR.to_string(),
        submodules: vec![
            // lingbo product line
            entry("lingbo-desktop", Client, "lingbo"),
            entry("lingbo-web", Client, "lingbo"),
            entry("lingbo-plugin", Tools, "lingbo"),
            // inspirai platform
            entry("inspirai-user", Service, "inspirai"),
            entry("inspirai-ai-gateway", Service, "inspirai"),
            entry("inspirai-admin", Client, "inspirai"),
            entry("inspirai-web", Client, "inspirai"),
            entry("inspirai-api-specs", Specs, "inspirai"),
            entry("inspirai-devkit", Tools, "inspirai"),
            // magicbook product line
            entry("magicbook-service", Service, "magicbook"),
            entry("magicbook-h5", Client, "magicbook"),
            entry("magicbook-admin", Client, "magicbook"),
            // zenix product line
            entry("zeni-x-desktop", Tools, "zenix"),
            // independent projects
            entry("skill-market", Tools, "independent"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_names_are_unique() {
        let registry = default_registry();
        let mut names = registry.names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.submodules.len());
    }

    #[test]
    fn default_registry_uses_hidden_submodules_dir() {
        assert_eq!(default_registry().submodules_dir, DEFAULT_SUBMODULES_DIR);
    }
}
