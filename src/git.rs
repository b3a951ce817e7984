//! Thin wrappers over the system `git` binary.
//!
//! Using the system git command (rather than an embedded git library) means
//! SSH keys, credential helpers, personal access tokens, and anything else
//! configured in `~/.gitconfig` work without this tool knowing about them.
//! Clone and pull run interactively so credential prompts reach the
//! operator; the state queries capture their output and parse it minimally
//! (a trimmed line, or empty-means-clean).

use std::path::Path;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;

/// Display width for the one-line latest-commit summary.
const COMMIT_SUMMARY_WIDTH: usize = 50;

/// Clone `url` into `dest`. Interactive; fails on non-zero exit.
pub fn clone(runner: &dyn ProcessRunner, url: &str, dest: &Path) -> Result<()> {
    let cwd = dest.parent().unwrap_or_else(|| Path::new("."));
    let dest_str = dest.to_string_lossy();
    let code = runner.run_interactive("git", &["clone", url, dest_str.as_ref()], cwd)?;
    if code != 0 {
        return Err(Error::GitCommand {
            context: "clone".to_string(),
            message: format!("exit code {code} for {url}"),
        });
    }
    Ok(())
}

/// Run `git pull --rebase` in an existing checkout. Interactive.
pub fn pull_rebase(runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
    let code = runner.run_interactive("git", &["pull", "--rebase"], path)?;
    if code != 0 {
        return Err(Error::GitCommand {
            context: "pull --rebase".to_string(),
            message: format!("exit code {code} in {}", path.display()),
        });
    }
    Ok(())
}

/// Current branch name; empty when detached, `unknown` when the query fails.
pub fn current_branch(runner: &dyn ProcessRunner, path: &Path) -> String {
    match runner.run_captured("git", &["branch", "--show-current"], path) {
        Ok(out) if out.success() => out.stdout.trim().to_string(),
        _ => "unknown".to_string(),
    }
}

/// Working-tree cleanliness as reported by `git status --porcelain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    Clean,
    Modified,
    /// The status query itself failed.
    Error,
}

impl TreeState {
    pub fn as_str(self) -> &'static str {
        match self {
            TreeState::Clean => "clean",
            TreeState::Modified => "modified",
            TreeState::Error => "error",
        }
    }
}

impl std::fmt::Display for TreeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query the working-tree state of a checkout.
pub fn tree_state(runner: &dyn ProcessRunner, path: &Path) -> TreeState {
    match runner.run_captured("git", &["status", "--porcelain"], path) {
        Ok(out) if out.success() => {
            if out.stdout.trim().is_empty() {
                TreeState::Clean
            } else {
                TreeState::Modified
            }
        }
        _ => TreeState::Error,
    }
}

/// One-line summary of the latest commit (`<abbrev-hash> <subject>`),
/// truncated to the display width; `unknown` when the query fails.
pub fn last_commit(runner: &dyn ProcessRunner, path: &Path) -> String {
    match runner.run_captured("git", &["log", "-1", "--format=%h %s"], path) {
        Ok(out) if out.success() => truncate_summary(out.stdout.trim()),
        _ => "unknown".to_string(),
    }
}

fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() <= COMMIT_SUMMARY_WIDTH {
        return summary.to_string();
    }
    let truncated: String = summary.chars().take(COMMIT_SUMMARY_WIDTH - 3).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::ScriptedRunner;
    use crate::process::Captured;
    use std::path::PathBuf;

    #[test]
    fn clone_invokes_git_with_url_and_destination() {
        let runner = ScriptedRunner::succeeding();
        let dest = PathBuf::from("/ws/.submodules/lingbo-web");

        clone(&runner, "git@github.com:org/lingbo-web.git", &dest).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].command_line(),
            "git clone git@github.com:org/lingbo-web.git /ws/.submodules/lingbo-web"
        );
        assert_eq!(calls[0].cwd, PathBuf::from("/ws/.submodules"));
    }

    #[test]
    fn clone_surfaces_nonzero_exit() {
        let runner = ScriptedRunner::succeeding().on_interactive(|_| Ok(128));
        let err = clone(&runner, "git@github.com:org/repo.git", Path::new("/ws/.submodules/repo"))
            .unwrap_err();
        assert!(matches!(err, Error::GitCommand { .. }));
        assert!(err.to_string().contains("clone"));
    }

    #[test]
    fn pull_rebase_runs_in_checkout_directory() {
        let runner = ScriptedRunner::succeeding();
        let path = PathBuf::from("/ws/.submodules/inspirai-user");

        pull_rebase(&runner, &path).unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0].command_line(), "git pull --rebase");
        assert_eq!(calls[0].cwd, path);
    }

    #[test]
    fn current_branch_trims_output() {
        let runner = ScriptedRunner::succeeding().on_captured(|_| Ok(Captured::ok("main\n")));
        assert_eq!(current_branch(&runner, Path::new("/p")), "main");
    }

    #[test]
    fn current_branch_reports_unknown_on_failure() {
        let runner =
            ScriptedRunner::succeeding().on_captured(|_| Ok(Captured::failed(128, "not a repo")));
        assert_eq!(current_branch(&runner, Path::new("/p")), "unknown");
    }

    #[test]
    fn tree_state_empty_porcelain_means_clean() {
        let runner = ScriptedRunner::succeeding().on_captured(|_| Ok(Captured::ok("\n")));
        assert_eq!(tree_state(&runner, Path::new("/p")), TreeState::Clean);
    }

    #[test]
    fn tree_state_any_output_means_modified() {
        let runner =
            ScriptedRunner::succeeding().on_captured(|_| Ok(Captured::ok(" M src/main.rs\n")));
        assert_eq!(tree_state(&runner, Path::new("/p")), TreeState::Modified);
    }

    #[test]
    fn tree_state_query_failure_is_error() {
        let runner =
            ScriptedRunner::succeeding().on_captured(|_| Ok(Captured::failed(1, "boom")));
        assert_eq!(tree_state(&runner, Path::new("/p")), TreeState::Error);
    }

    #[test]
    fn last_commit_truncates_long_subjects() {
        let long = format!("abc1234 {}", "x".repeat(80));
        let runner = {
            let long = long.clone();
            ScriptedRunner::succeeding().on_captured(move |_| Ok(Captured::ok(&long)))
        };

        let summary = last_commit(&runner, Path::new("/p"));
        assert_eq!(summary.chars().count(), 50);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn last_commit_keeps_short_subjects_intact() {
        let runner = ScriptedRunner::succeeding()
            .on_captured(|_| Ok(Captured::ok("abc1234 fix typo\n")));
        assert_eq!(last_commit(&runner, Path::new("/p")), "abc1234 fix typo");
    }
}
