//! View Builder: the derived symlink navigation trees.
//!
//! Two views are projected from the registry, both fully derived and
//! disposable — rebuilding them at any time from the registry and the
//! current submodules directory is always safe:
//!
//! - `by-type/{services,clients,specs,tools}/<name>`: one link per entry,
//!   named by the full entry name, grouped by kind. The four group
//!   directories always exist, even when empty.
//! - `by-product/<product>/<short>`: groups appear on demand for every
//!   observed product value; link names use the short-name rule (product
//!   prefix stripped).
//!
//! Links are relative (`../../<submodules_dir>/<name>`) so the workspace
//! can be moved without breaking them. Whatever filesystem object already
//! sits at a link path is removed and replaced; the replacement is not
//! atomic, which is acceptable for an advisory navigation tree with no
//! concurrent readers.
//!
//! Per-link failures are collected into the returned report list and do
//! not abort the remaining links. Only failure to create a view group
//! directory is fatal.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Registry, SubmoduleKind};
use crate::error::{Error, Result};

/// Root directory of the by-type view, relative to the workspace root.
pub const BY_TYPE_DIR: &str = "by-type";
/// Root directory of the by-product view, relative to the workspace root.
pub const BY_PRODUCT_DIR: &str = "by-product";

/// Outcome of one link creation.
#[derive(Debug)]
pub struct LinkReport {
    /// Absolute path of the link.
    pub link: PathBuf,
    /// Relative target the link points at.
    pub target: PathBuf,
    /// The failure, when link creation did not succeed.
    pub error: Option<io::Error>,
}

impl LinkReport {
    pub fn created(&self) -> bool {
        self.error.is_none()
    }
}

/// Build (or rebuild) both navigation views. Idempotent.
pub fn build_views(registry: &Registry, root: &Path) -> Result<Vec<LinkReport>> {
    let mut reports = Vec::new();

    // by-type view: the four fixed groups.
    for kind in SubmoduleKind::ALL {
        let group_dir = root.join(BY_TYPE_DIR).join(kind.view_dir());
        ensure_dir(&group_dir)?;

        for entry in registry.submodules.iter().filter(|e| e.kind == kind) {
            let target = relative_target(&registry.submodules_dir, &entry.name);
            reports.push(replace_link(group_dir.join(&entry.name), target));
        }
    }

    // by-product view: groups on demand, short link names.
    let mut assigned: HashSet<(String, String)> = HashSet::new();
    for entry in &registry.submodules {
        let group_dir = root.join(BY_PRODUCT_DIR).join(&entry.product);
        ensure_dir(&group_dir)?;

        let short = entry.short_name();
        let link_name = if assigned.insert((entry.product.clone(), short.to_string())) {
            short
        } else if assigned.insert((entry.product.clone(), entry.name.clone())) {
            // Two entries of one product mapped to the same short name; the
            // later one keeps its full name so no link is silently lost.
            log::warn!(
                "short name '{}' already taken in product '{}', linking '{}' under its full name",
                short,
                entry.product,
                entry.name
            );
            entry.name.as_str()
        } else {
            log::warn!(
                "cannot link '{}' in product '{}': both its short and full name are taken",
                entry.name,
                entry.product
            );
            continue;
        };

        let target = relative_target(&registry.submodules_dir, &entry.name);
        reports.push(replace_link(group_dir.join(link_name), target));
    }

    Ok(reports)
}

/// Relative link target from inside a view group directory.
fn relative_target(submodules_dir: &str, name: &str) -> PathBuf {
    PathBuf::from("..").join("..").join(submodules_dir).join(name)
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove whatever sits at `link` and create a symlink to `target`.
fn replace_link(link: PathBuf, target: PathBuf) -> LinkReport {
    if let Ok(metadata) = fs::symlink_metadata(&link) {
        let removed = if metadata.is_dir() {
            fs::remove_dir_all(&link)
        } else {
            fs::remove_file(&link)
        };
        if let Err(error) = removed {
            log::warn!("failed to remove stale object at {}: {error}", link.display());
            return LinkReport {
                link,
                target,
                error: Some(error),
            };
        }
    }

    let error = symlink(&target, &link).err();
    match &error {
        None => log::debug!("link {} -> {}", link.display(), target.display()),
        Some(e) => log::warn!("failed to link {}: {e}", link.display()),
    }
    LinkReport { link, target, error }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
