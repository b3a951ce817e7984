//! Lifecycle orchestration: `init` and `sync`.
//!
//! Both operations walk the registry in declaration order and tolerate
//! per-entry failures, accumulating an outcome per entry instead of
//! stopping at the first problem. Only the conditions that make the
//! remaining work meaningless are fatal: failing to create the submodules
//! directory, or failing to create a view group directory afterwards.
//!
//! `init` clones entries whose checkout is absent (presence alone
//! suppresses a re-clone; drifted checkouts are not detected) and then
//! rebuilds both navigation views. `sync` runs `git pull --rebase` in
//! every existing checkout and silently skips absent ones.

use std::fs;
use std::path::Path;

use crate::config::{self, Registry};
use crate::error::{Error, Result};
use crate::git;
use crate::links::{self, LinkReport};
use crate::process::ProcessRunner;

/// Per-entry outcome of a clone or sync pass.
#[derive(Debug)]
pub struct EntryOutcome {
    pub name: String,
    pub kind: OutcomeKind,
}

#[derive(Debug)]
pub enum OutcomeKind {
    /// The clone or pull ran and succeeded.
    Done,
    /// Nothing to do: checkout already present (init) or absent (sync).
    Skipped,
    /// The entry's own operation failed; the pass continued.
    Failed(Error),
}

impl OutcomeKind {
    pub fn is_failed(&self) -> bool {
        matches!(self, OutcomeKind::Failed(_))
    }
}

/// Result of an `init` pass.
#[derive(Debug)]
pub struct InitReport {
    pub clones: Vec<EntryOutcome>,
    pub links: Vec<LinkReport>,
}

/// Clone every absent entry, then rebuild the navigation views.
pub fn init(registry: &Registry, root: &Path, proc: &dyn ProcessRunner) -> Result<InitReport> {
    let submodules_dir = registry.submodules_path(root);
    fs::create_dir_all(&submodules_dir).map_err(|source| Error::DirectoryCreate {
        path: submodules_dir.clone(),
        source,
    })?;

    let method = config::clone_method(root);

    let mut clones = Vec::with_capacity(registry.submodules.len());
    for entry in &registry.submodules {
        let dest = registry.entry_path(root, &entry.name);
        let kind = if dest.exists() {
            log::info!("[skip] {} already exists", entry.name);
            OutcomeKind::Skipped
        } else {
            let url = config::rewrite_repo_url(&entry.repo, method);
            log::info!("[clone] {}", entry.name);
            match git::clone(proc, &url, &dest) {
                Ok(()) => OutcomeKind::Done,
                Err(error) => {
                    log::warn!("failed to clone {}: {error}", entry.name);
                    OutcomeKind::Failed(error)
                }
            }
        };
        clones.push(EntryOutcome {
            name: entry.name.clone(),
            kind,
        });
    }

    let links = links::build_views(registry, root)?;
    Ok(InitReport { clones, links })
}

/// Pull-with-rebase every entry whose checkout exists.
pub fn sync(registry: &Registry, root: &Path, proc: &dyn ProcessRunner) -> Vec<EntryOutcome> {
    registry
        .submodules
        .iter()
        .map(|entry| {
            let path = registry.entry_path(root, &entry.name);
            let kind = if !path.exists() {
                log::info!("[skip] {} not found", entry.name);
                OutcomeKind::Skipped
            } else {
                match git::pull_rebase(proc, &path) {
                    Ok(()) => OutcomeKind::Done,
                    Err(error) => {
                        log::warn!("failed to sync {}: {error}", entry.name);
                        OutcomeKind::Failed(error)
                    }
                }
            };
            EntryOutcome {
                name: entry.name.clone(),
                kind,
            }
        })
        .collect()
}
