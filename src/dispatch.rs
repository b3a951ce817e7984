//! Command dispatch into checked-out projects.
//!
//! Given a project and a command name, the dispatcher detects the
//! project's build tool and executes the matching invocation (`just
//! <cmd>`, `npm run <cmd>`, or `make <cmd>`) in the project directory with
//! inherited stdio. Product-wide dispatch fans the same command out across
//! every project of a product line, continuing past individual failures:
//! the only whole-operation failure is an empty product. Per-project
//! results are accumulated so callers (and tests) can see exactly which
//! projects failed.

use std::path::Path;

use crate::config::Registry;
use crate::error::{Error, Result};
use crate::process::ProcessRunner;
use crate::runner::{detect, RunnerKind};
use crate::suggestions;

/// Run one command in one project.
pub fn run_in_project(
    registry: &Registry,
    root: &Path,
    proc: &dyn ProcessRunner,
    project_name: &str,
    command: &str,
) -> Result<()> {
    let project_path = registry.entry_path(root, project_name);
    if !project_path.exists() {
        let hint = suggestions::find_similar(
            project_name,
            registry.submodules.iter().map(|e| e.name.as_str()),
        );
        return Err(Error::ProjectNotFound {
            name: project_name.to_string(),
            submodules_dir: registry.submodules_path(root),
            hint: hint.map(str::to_string),
        });
    }

    let kind = detect(&project_path);
    let Some(program) = kind.program() else {
        return Err(Error::UnsupportedProject {
            name: project_name.to_string(),
        });
    };

    let args: Vec<&str> = match kind {
        RunnerKind::Npm => vec!["run", command],
        _ => vec![command],
    };

    log::info!("[{program}] {project_name} {command}");
    let code = proc.run_interactive(program, &args, &project_path)?;
    if code != 0 {
        return Err(Error::CommandFailed {
            program: program.to_string(),
            code: Some(code),
        });
    }
    Ok(())
}

/// Per-project result of a product-wide dispatch.
#[derive(Debug)]
pub struct ProjectOutcome {
    pub name: String,
    pub result: Result<()>,
}

/// Run one command across every project of a product line.
///
/// Fails only when no registry entry carries the product label; in that
/// case no external process is invoked at all. Individual project failures
/// are recorded in the returned outcomes and logged, but do not stop the
/// remaining projects.
pub fn run_for_product(
    registry: &Registry,
    root: &Path,
    proc: &dyn ProcessRunner,
    product: &str,
    command: &str,
) -> Result<Vec<ProjectOutcome>> {
    let targets: Vec<_> = registry.for_product(product).collect();
    if targets.is_empty() {
        return Err(Error::ProductNotFound {
            product: product.to_string(),
        });
    }

    let mut outcomes = Vec::with_capacity(targets.len());
    for entry in targets {
        let result = run_in_project(registry, root, proc, &entry.name, command);
        if let Err(error) = &result {
            log::warn!("{}: {error}", entry.name);
        }
        outcomes.push(ProjectOutcome {
            name: entry.name.clone(),
            result,
        });
    }
    Ok(outcomes)
}

/// One row of the `run --list` table.
#[derive(Debug)]
pub struct RunnableRow {
    pub name: String,
    pub product: String,
    pub runner: RunnerKind,
}

/// Probe every registry entry for its build tool, in declaration order.
pub fn list_runnable(registry: &Registry, root: &Path) -> Vec<RunnableRow> {
    registry
        .submodules
        .iter()
        .map(|entry| RunnableRow {
            name: entry.name.clone(),
            product: entry.product.clone(),
            runner: detect(&registry.entry_path(root, &entry.name)),
        })
        .collect()
}
