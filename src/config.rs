//! # Workspace Registry Schema and Parsing
//!
//! This module defines the data structures that describe the workspace: the
//! catalog of external repositories ("submodules"), their grouping by kind
//! and product line, and the directory they are checked out into. The
//! registry is constructed once at startup — from the built-in catalog in
//! [`crate::defaults`] or from a YAML registry file — and passed by
//! reference into every component. Nothing in the library reads it from
//! ambient global state.
//!
//! ## Key Components
//!
//! - **`SubmoduleEntry`**: one declared external repository (name, clone
//!   URL, kind, product line).
//! - **`SubmoduleKind`**: the fixed four-way classification used by the
//!   by-type navigation view.
//! - **`Registry`**: the ordered catalog plus the submodules directory
//!   name. Declaration order is preserved by every consumer.
//! - **`CloneMethod`**: the clone transport selected by the workspace's
//!   `.bootstrap.conf`, with the ssh-to-https URL rewrite.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// The fixed classification used to group entries in the by-type view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmoduleKind {
    Service,
    Client,
    Specs,
    Tools,
}

impl SubmoduleKind {
    /// All kinds, in the order their view directories are created.
    pub const ALL: [SubmoduleKind; 4] = [
        SubmoduleKind::Service,
        SubmoduleKind::Client,
        SubmoduleKind::Specs,
        SubmoduleKind::Tools,
    ];

    /// Directory name for this kind under the `by-type` view root.
    pub fn view_dir(self) -> &'static str {
        match self {
            SubmoduleKind::Service => "services",
            SubmoduleKind::Client => "clients",
            SubmoduleKind::Specs => "specs",
            SubmoduleKind::Tools => "tools",
        }
    }
}

/// One declared external repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmoduleEntry {
    /// Unique identifier; also the checkout directory name.
    pub name: String,
    /// Clone URL (ssh form in the catalog; rewritten per [`CloneMethod`]).
    pub repo: String,
    /// Classification for the by-type view.
    #[serde(rename = "type")]
    pub kind: SubmoduleKind,
    /// Free-form product-line label (e.g. "lingbo", "independent").
    pub product: String,
}

impl SubmoduleEntry {
    /// Short name used for the by-product view: the entry name with its
    /// `"<product>-"` prefix stripped, when the name actually starts with
    /// that prefix and has characters left after it.
    pub fn short_name(&self) -> &str {
        let prefix_len = self.product.len() + 1;
        match self.name.strip_prefix(self.product.as_str()) {
            Some(rest) if rest.starts_with('-') && self.name.len() > prefix_len => {
                &self.name[prefix_len..]
            }
            _ => self.name.as_str(),
        }
    }
}

/// The workspace catalog: checkout directory name plus the ordered entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// Directory under the workspace root holding one checkout per entry.
    #[serde(default = "default_submodules_dir")]
    pub submodules_dir: String,
    /// Declared entries, in declaration order.
    pub submodules: Vec<SubmoduleEntry>,
}

fn default_submodules_dir() -> String {
    defaults::DEFAULT_SUBMODULES_DIR.to_string()
}

impl Registry {
    /// Look up an entry by its unique name.
    pub fn get(&self, name: &str) -> Option<&SubmoduleEntry> {
        self.submodules.iter().find(|e| e.name == name)
    }

    /// All entries belonging to a product line, in declaration order.
    pub fn for_product<'a>(&'a self, product: &'a str) -> impl Iterator<Item = &'a SubmoduleEntry> {
        self.submodules.iter().filter(move |e| e.product == product)
    }

    /// All declared entry names, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.submodules.iter().map(|e| e.name.as_str()).collect()
    }

    /// Absolute path of the submodules directory under a workspace root.
    pub fn submodules_path(&self, root: &Path) -> PathBuf {
        root.join(&self.submodules_dir)
    }

    /// Absolute path of one entry's checkout under a workspace root.
    pub fn entry_path(&self, root: &Path, name: &str) -> PathBuf {
        self.submodules_path(root).join(name)
    }
}

/// Load a registry from a YAML file.
pub fn from_file(path: &Path) -> Result<Registry> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|source| Error::RegistryParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Clone transport selected by the workspace bootstrap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneMethod {
    #[default]
    Ssh,
    Https,
}

/// Read the clone transport from `<root>/.bootstrap.conf`.
///
/// The file is a simple key=value list; only the `GIT_CLONE_METHOD` key is
/// consulted. A missing or unreadable file, or any value other than
/// `https`, means ssh. A leading UTF-8 BOM on the first line is tolerated
/// (the file is often authored on Windows).
pub fn clone_method(root: &Path) -> CloneMethod {
    let Ok(content) = fs::read_to_string(root.join(defaults::BOOTSTRAP_FILENAME)) else {
        return CloneMethod::Ssh;
    };
    for line in content.lines() {
        let line = line.trim().trim_start_matches('\u{feff}');
        if let Some(value) = line.strip_prefix("GIT_CLONE_METHOD=") {
            if value.trim() == "https" {
                return CloneMethod::Https;
            }
            return CloneMethod::Ssh;
        }
    }
    CloneMethod::Ssh
}

/// Rewrite an ssh-form GitHub URL to https form when the https transport is
/// selected. Any other URL shape passes through untouched — the registry is
/// hand-authored, so no wider validation happens here.
pub fn rewrite_repo_url(repo: &str, method: CloneMethod) -> String {
    if method != CloneMethod::Https {
        return repo.to_string();
    }
    match repo.strip_prefix("git@github.com:") {
        Some(rest) => format!("https://github.com/{rest}"),
        None => repo.to_string(),
    }
}
