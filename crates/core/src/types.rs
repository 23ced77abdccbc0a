use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Jobber operations
#[derive(Debug, Error)]
pub enum JobberError {
    #[error("definition source '{}' does not declare a task name", .path.display())]
    MissingName { path: PathBuf },

    #[error("definition source '{}' does not declare a command", .path.display())]
    MissingCommand { path: PathBuf },

    #[error("failed to read definition source '{}': {}", .path.display(), .source)]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("task '{0}' is declared more than once")]
    DuplicateTask(String),

    #[error("requested task '{0}' was never declared")]
    MissingRootTask(String),

    #[error("dependency '{0}' was never declared")]
    UnknownTask(String),

    #[error("circular dependency detected: {}", .cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },

    #[error("failed to launch command for task '{task}': {source}")]
    CommandLaunch {
        task: String,
        source: std::io::Error,
    },

    #[error("internal consistency error: {0}")]
    InternalConsistency(String),
}

impl JobberError {
    /// Process exit code for this error kind. Codes start above clap's
    /// conventional usage-error code (2) so every failure mode is
    /// distinguishable from the shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            JobberError::MissingName { .. } => 3,
            JobberError::MissingCommand { .. } => 4,
            JobberError::DuplicateTask(_) => 5,
            JobberError::SourceUnreadable { .. } => 6,
            JobberError::MissingRootTask(_) => 7,
            JobberError::CircularDependency { .. } => 8,
            JobberError::UnknownTask(_) => 9,
            JobberError::InternalConsistency(_) => 10,
            JobberError::CommandLaunch { .. } => 11,
        }
    }
}

/// Result type alias for Jobber operations
pub type JobberResult<T> = Result<T, JobberError>;
