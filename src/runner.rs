//! Build-tool detection for checked-out projects.
//!
//! A project directory is classified by probing for marker files in a
//! fixed priority order: `justfile` beats `package.json` beats `Makefile`.
//! Only existence is checked; marker contents are never parsed. The result
//! is derived fresh on every probe, never cached.

use std::path::Path;

/// The build-tool classification of a project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKind {
    /// `justfile` present: commands run as `just <command>`.
    Just,
    /// `package.json` present: commands run as `npm run <command>`.
    Npm,
    /// `Makefile` present: commands run as `make <command>`.
    Make,
    /// No recognized marker file.
    Unknown,
}

impl RunnerKind {
    /// Program name for this runner, if any.
    pub fn program(self) -> Option<&'static str> {
        match self {
            RunnerKind::Just => Some("just"),
            RunnerKind::Npm => Some("npm"),
            RunnerKind::Make => Some("make"),
            RunnerKind::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunnerKind::Just => "just",
            RunnerKind::Npm => "npm",
            RunnerKind::Make => "make",
            RunnerKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a project directory by its marker files.
pub fn detect(project_path: &Path) -> RunnerKind {
    if project_path.join("justfile").exists() {
        RunnerKind::Just
    } else if project_path.join("package.json").exists() {
        RunnerKind::Npm
    } else if project_path.join("Makefile").exists() {
        RunnerKind::Make
    } else {
        RunnerKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project_with(markers: &[&str]) -> tempfile::TempDir {
        let temp = tempfile::tempdir().unwrap();
        for marker in markers {
            fs::write(temp.path().join(marker), "").unwrap();
        }
        temp
    }

    #[test]
    fn detects_each_marker() {
        assert_eq!(detect(project_with(&["justfile"]).path()), RunnerKind::Just);
        assert_eq!(detect(project_with(&["package.json"]).path()), RunnerKind::Npm);
        assert_eq!(detect(project_with(&["Makefile"]).path()), RunnerKind::Make);
    }

    #[test]
    fn empty_directory_is_unknown() {
        assert_eq!(detect(project_with(&[]).path()), RunnerKind::Unknown);
    }

    #[test]
    fn justfile_wins_over_package_json() {
        let project = project_with(&["justfile", "package.json", "Makefile"]);
        assert_eq!(detect(project.path()), RunnerKind::Just);
    }

    #[test]
    fn package_json_wins_over_makefile() {
        let project = project_with(&["package.json", "Makefile"]);
        assert_eq!(detect(project.path()), RunnerKind::Npm);
    }

    #[test]
    fn marker_contents_are_irrelevant() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("package.json"), "this is not json").unwrap();
        assert_eq!(detect(temp.path()), RunnerKind::Npm);
    }
}
