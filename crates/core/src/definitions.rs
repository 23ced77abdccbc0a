//! Task definition sources
//!
//! Each definition source is a small text file declaring exactly one task:
//!
//! ```text
//! build
//! cargo build --release
//! codegen,vendor
//! ```
//!
//! Line 1 is the task name, line 2 the command to execute, and the optional
//! line 3 a comma-separated list of dependency task names. A missing or
//! blank third line means the task has no dependencies. Lines past the
//! third are ignored.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::registry::Task;
use crate::types::{JobberError, JobberResult};

/// Read and parse a single definition source from disk.
pub fn load_definition(path: &Path) -> JobberResult<Task> {
    let content = fs::read_to_string(path).map_err(|source| JobberError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_definition(&content, path)
}

/// Parse the three-line definition format. The source path is only used for
/// error context.
pub fn parse_definition(content: &str, path: &Path) -> JobberResult<Task> {
    let mut lines = content.lines();

    let name = lines
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| JobberError::MissingName {
            path: path.to_path_buf(),
        })?;

    let command = lines
        .next()
        .map(str::trim)
        .filter(|command| !command.is_empty())
        .ok_or_else(|| JobberError::MissingCommand {
            path: path.to_path_buf(),
        })?;

    let dependencies = lines.next().map(parse_dependency_list).unwrap_or_default();

    Ok(Task {
        name: name.to_string(),
        command: command.to_string(),
        dependencies,
    })
}

/// Split a comma-separated dependency line into a set of task names.
/// Surrounding whitespace is trimmed and empty segments are skipped, so
/// `"a, b,"` yields `{a, b}`.
fn parse_dependency_list(line: &str) -> HashSet<String> {
    line.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn source() -> PathBuf {
        PathBuf::from("test.task")
    }

    #[test]
    fn parses_full_definition() {
        let task = parse_definition("build\ncargo build\ncodegen,vendor\n", &source()).unwrap();

        assert_eq!(task.name, "build");
        assert_eq!(task.command, "cargo build");
        assert_eq!(
            task.dependencies,
            ["codegen", "vendor"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn missing_dependency_line_means_no_dependencies() {
        let task = parse_definition("clean\nrm -rf target\n", &source()).unwrap();
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn blank_dependency_line_means_no_dependencies() {
        let task = parse_definition("clean\nrm -rf target\n\n", &source()).unwrap();
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn dependency_segments_are_trimmed() {
        let task = parse_definition("a\necho a\n b , c ,\n", &source()).unwrap();
        assert_eq!(
            task.dependencies,
            ["b", "c"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn empty_source_is_missing_name() {
        let err = parse_definition("", &source()).unwrap_err();
        assert!(matches!(err, JobberError::MissingName { .. }));
    }

    #[test]
    fn blank_name_line_is_missing_name() {
        let err = parse_definition("   \necho hi\n", &source()).unwrap_err();
        assert!(matches!(err, JobberError::MissingName { .. }));
    }

    #[test]
    fn single_line_source_is_missing_command() {
        let err = parse_definition("build\n", &source()).unwrap_err();
        assert!(matches!(err, JobberError::MissingCommand { .. }));
    }

    #[test]
    fn lines_past_the_third_are_ignored() {
        let task =
            parse_definition("build\ncargo build\ncodegen\nthis line is noise\n", &source())
                .unwrap();
        assert_eq!(task.dependencies.len(), 1);
    }

    #[test]
    fn loads_definition_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.task");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "build").unwrap();
        writeln!(file, "cargo build").unwrap();

        let task = load_definition(&path).unwrap();
        assert_eq!(task.name, "build");
        assert_eq!(task.command, "cargo build");
    }

    #[test]
    fn unreadable_source_is_reported_with_path() {
        let err = load_definition(Path::new("/nonexistent/build.task")).unwrap_err();
        match err {
            JobberError::SourceUnreadable { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/build.task"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
