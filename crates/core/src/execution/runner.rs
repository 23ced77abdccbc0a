//! High-level task runner
//!
//! Walks an execution plan in order, running each task's command to
//! completion before starting the next. A failing command is reported and
//! recorded but does not halt the run; later tasks still execute.

use colored::*;

use crate::execution::command::CommandExecutor;
use crate::registry::TaskRegistry;
use crate::results::{ExecutionPlan, RunSummary, TaskOutcome};
use crate::types::JobberResult;

/// Sequential executor for a planned run.
pub struct TaskRunner<'a> {
    registry: &'a TaskRegistry,
}

impl<'a> TaskRunner<'a> {
    pub fn new(registry: &'a TaskRegistry) -> Self {
        Self { registry }
    }

    /// Execute every task in the plan, in order, and collect the outcomes.
    pub fn run(&self, plan: &ExecutionPlan) -> JobberResult<RunSummary> {
        let executor = CommandExecutor::new();
        let mut outcomes = Vec::with_capacity(plan.order.len());

        for name in &plan.order {
            let task = self.registry.lookup(name)?;

            println!();
            println!(
                "┌─ {}",
                format!("Running task '{}'", task.name).bold()
            );
            println!("└─ {} {}", "Command:".bright_black(), task.command);

            let status = executor.execute_shell_command(&task.name, &task.command)?;

            if status.success() {
                println!(
                    "{} {}",
                    "✓".green().bold(),
                    format!("Completed '{}'", task.name).green()
                );
            } else {
                println!(
                    "{} {}",
                    "✗".red().bold(),
                    format!(
                        "Task '{}' exited with status {}, continuing",
                        task.name,
                        status.code().unwrap_or(-1)
                    )
                    .red()
                );
            }

            outcomes.push(TaskOutcome {
                name: task.name.clone(),
                status,
            });
        }

        Ok(RunSummary { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Task;

    fn register(registry: &mut TaskRegistry, name: &str, command: String) {
        registry
            .register(Task {
                name: name.to_string(),
                command,
                dependencies: Default::default(),
            })
            .unwrap();
    }

    #[test]
    fn runs_tasks_in_plan_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("log");

        let mut registry = TaskRegistry::new();
        register(
            &mut registry,
            "first",
            format!("printf first, >> {}", log.display()),
        );
        register(
            &mut registry,
            "second",
            format!("printf second >> {}", log.display()),
        );

        let plan = ExecutionPlan {
            root: "second".to_string(),
            order: vec!["first".to_string(), "second".to_string()],
        };

        let summary = TaskRunner::new(&registry).run(&plan).unwrap();
        assert!(summary.all_succeeded());
        assert_eq!(std::fs::read_to_string(&log).unwrap(), "first,second");
    }

    #[test]
    fn failing_command_does_not_halt_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("marker");

        let mut registry = TaskRegistry::new();
        register(&mut registry, "bad", "exit 3".to_string());
        register(
            &mut registry,
            "good",
            format!("touch {}", marker.display()),
        );

        let plan = ExecutionPlan {
            root: "good".to_string(),
            order: vec!["bad".to_string(), "good".to_string()],
        };

        let summary = TaskRunner::new(&registry).run(&plan).unwrap();
        assert!(!summary.all_succeeded());
        assert_eq!(summary.failed().count(), 1);
        assert_eq!(summary.outcomes[0].status.code(), Some(3));
        assert!(marker.exists(), "the run must continue past a failure");
    }
}
