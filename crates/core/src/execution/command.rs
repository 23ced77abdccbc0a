//! Command execution utilities
//!
//! Thin wrapper around the system shell. A task's command is an opaque
//! string handed to `sh -c`; the child inherits stdio, so nothing is
//! captured or suppressed, and the call blocks until the command completes.

use std::process::{Command, ExitStatus};

use crate::types::{JobberError, JobberResult};

/// Executes task commands through the system shell.
#[derive(Debug, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run one shell command to completion and return its exit status.
    ///
    /// A non-zero exit status is a normal return here; only failing to
    /// launch the shell itself is an error.
    pub fn execute_shell_command(&self, task: &str, command: &str) -> JobberResult<ExitStatus> {
        Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|source| JobberError::CommandLaunch {
                task: task.to_string(),
                source,
            })
    }
}
