//! Repository state reporting.
//!
//! For every registry entry, three independent facts are queried from git:
//! current branch, working-tree cleanliness, and a one-line summary of the
//! latest commit. A failing query degrades only its own column. Entries
//! with no checkout are reported as `missing` without touching git at all.
//! Rows follow registry declaration order, never sorted.

use std::path::Path;

use console::Color;

use crate::config::Registry;
use crate::git::{self, TreeState};
use crate::output::{self, OutputConfig};
use crate::process::ProcessRunner;

/// State column of one status row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkState {
    /// No checkout exists under the submodules directory.
    Missing,
    Clean,
    Modified,
    /// The status query failed.
    Error,
}

impl WorkState {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkState::Missing => "missing",
            WorkState::Clean => "clean",
            WorkState::Modified => "modified",
            WorkState::Error => "error",
        }
    }

    fn color(self) -> Color {
        match self {
            WorkState::Clean => Color::Green,
            WorkState::Modified => Color::Yellow,
            WorkState::Missing | WorkState::Error => Color::Red,
        }
    }
}

impl From<TreeState> for WorkState {
    fn from(state: TreeState) -> Self {
        match state {
            TreeState::Clean => WorkState::Clean,
            TreeState::Modified => WorkState::Modified,
            TreeState::Error => WorkState::Error,
        }
    }
}

/// One row of the status table.
#[derive(Debug)]
pub struct StatusRow {
    pub name: String,
    pub branch: String,
    pub state: WorkState,
    pub commit: String,
}

/// Query the state of every registry entry, in declaration order.
pub fn collect(registry: &Registry, root: &Path, proc: &dyn ProcessRunner) -> Vec<StatusRow> {
    registry
        .submodules
        .iter()
        .map(|entry| {
            let path = registry.entry_path(root, &entry.name);
            if !path.exists() {
                return StatusRow {
                    name: entry.name.clone(),
                    branch: "-".to_string(),
                    state: WorkState::Missing,
                    commit: "-".to_string(),
                };
            }
            StatusRow {
                name: entry.name.clone(),
                branch: git::current_branch(proc, &path),
                state: git::tree_state(proc, &path).into(),
                commit: git::last_commit(proc, &path),
            }
        })
        .collect()
}

/// Render rows as a fixed-width table.
pub fn render(rows: &[StatusRow], config: &OutputConfig) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:<20} {:<15} {:<10} {}\n",
        "NAME", "BRANCH", "STATUS", "COMMIT"
    ));
    table.push_str(&"-".repeat(70));
    table.push('\n');

    for row in rows {
        let state = output::paint(
            config,
            &format!("{:<10}", row.state.as_str()),
            row.state.color(),
        );
        table.push_str(&format!(
            "{:<20} {:<15} {} {}\n",
            row.name, row.branch, state, row.commit
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SubmoduleEntry, SubmoduleKind};
    use crate::process::testing::ScriptedRunner;
    use crate::process::Captured;
    use std::fs;

    fn registry(names: &[&str]) -> Registry {
        Registry {
            submodules_dir: ".submodules".to_string(),
            submodules: names
                .iter()
                .map(|name| SubmoduleEntry {
                    name: name.to_string(),
                    repo: format!("git@github.com:example/{name}.git"),
                    kind: SubmoduleKind::Service,
                    product: "inspirai".to_string(),
                })
                .collect(),
        }
    }

    /// Answers the three git queries by their first argument.
    fn git_responder(branch: &'static str, porcelain: &'static str, log: &'static str) -> ScriptedRunner {
        ScriptedRunner::succeeding().on_captured(move |call| {
            Ok(match call.args.first().map(String::as_str) {
                Some("branch") => Captured::ok(branch),
                Some("status") => Captured::ok(porcelain),
                Some("log") => Captured::ok(log),
                other => panic!("unexpected git query: {other:?}"),
            })
        })
    }

    #[test]
    fn missing_checkout_reports_without_querying_git() {
        let reg = registry(&["inspirai-user"]);
        let ws = tempfile::tempdir().unwrap();

        let proc = ScriptedRunner::succeeding();
        let rows = collect(&reg, ws.path(), &proc);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, WorkState::Missing);
        assert_eq!(rows[0].branch, "-");
        assert_eq!(rows[0].commit, "-");
        assert!(proc.calls().is_empty());
    }

    #[test]
    fn present_checkout_queries_all_three_facts() {
        let reg = registry(&["inspirai-user"]);
        let ws = tempfile::tempdir().unwrap();
        fs::create_dir_all(reg.entry_path(ws.path(), "inspirai-user")).unwrap();

        let proc = git_responder("main\n", "", "abc1234 add login flow\n");
        let rows = collect(&reg, ws.path(), &proc);

        assert_eq!(rows[0].branch, "main");
        assert_eq!(rows[0].state, WorkState::Clean);
        assert_eq!(rows[0].commit, "abc1234 add login flow");
        assert_eq!(proc.calls().len(), 3);
    }

    #[test]
    fn dirty_tree_reports_modified() {
        let reg = registry(&["inspirai-user"]);
        let ws = tempfile::tempdir().unwrap();
        fs::create_dir_all(reg.entry_path(ws.path(), "inspirai-user")).unwrap();

        let proc = git_responder("main\n", " M src/app.ts\n", "abc1234 wip\n");
        let rows = collect(&reg, ws.path(), &proc);
        assert_eq!(rows[0].state, WorkState::Modified);
    }

    #[test]
    fn one_failing_query_does_not_block_the_others() {
        let reg = registry(&["inspirai-user"]);
        let ws = tempfile::tempdir().unwrap();
        fs::create_dir_all(reg.entry_path(ws.path(), "inspirai-user")).unwrap();

        // Only the porcelain query fails.
        let proc = ScriptedRunner::succeeding().on_captured(|call| {
            Ok(match call.args.first().map(String::as_str) {
                Some("status") => Captured::failed(128, "fatal: not a git repository"),
                Some("branch") => Captured::ok("main\n"),
                _ => Captured::ok("abc1234 still here\n"),
            })
        });

        let rows = collect(&reg, ws.path(), &proc);
        assert_eq!(rows[0].state, WorkState::Error);
        assert_eq!(rows[0].branch, "main");
        assert_eq!(rows[0].commit, "abc1234 still here");
        assert_eq!(proc.calls().len(), 3);
    }

    #[test]
    fn rows_follow_registry_declaration_order() {
        let reg = registry(&["zeta", "alpha", "mid"]);
        let ws = tempfile::tempdir().unwrap();

        let proc = ScriptedRunner::succeeding();
        let rows = collect(&reg, ws.path(), &proc);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn render_produces_stable_columns() {
        let rows = vec![
            StatusRow {
                name: "inspirai-user".to_string(),
                branch: "main".to_string(),
                state: WorkState::Clean,
                commit: "abc1234 add login flow".to_string(),
            },
            StatusRow {
                name: "lingbo-web".to_string(),
                branch: "-".to_string(),
                state: WorkState::Missing,
                commit: "-".to_string(),
            },
        ];

        let table = render(&rows, &OutputConfig::without_color());
        let lines: Vec<_> = table.lines().collect();

        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("clean"));
        assert!(lines[3].contains("missing"));
        // BRANCH column starts at the same offset in every row.
        assert_eq!(lines[2].find("main"), Some(21));
        assert_eq!(&lines[3][21..22], "-");
    }
}
