//! High-level task management interface
//!
//! This module provides the [`TaskManager`], the primary entry point for a
//! resolve-then-run pass. It owns all of one run's state — the registry,
//! the resolved subgraph, the computed order — so repeated runs never share
//! anything and the engine stays testable in isolation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jobber_core::task_manager::{TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> jobber_core::types::JobberResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     definition_sources: vec![PathBuf::from("build.task")],
//! })?;
//!
//! // Show what would run, without running it
//! let plan = manager.plan("build")?;
//!
//! // Resolve, order, and execute
//! let summary = manager.run("build")?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::definitions::load_definition;
use crate::execution::runner::TaskRunner;
use crate::registry::TaskRegistry;
use crate::resolver::DependencyResolver;
use crate::results::{ExecutionPlan, RunSummary};
use crate::scheduler::execution_order;
use crate::types::JobberResult;

/// Configuration for initializing a task manager
pub struct TaskManagerConfig {
    pub definition_sources: Vec<PathBuf>,
}

/// High-level task manager that encapsulates one run's state
#[derive(Debug)]
pub struct TaskManager {
    registry: TaskRegistry,
}

impl TaskManager {
    /// Load every definition source into a fresh registry. The first
    /// malformed source, unreadable file, or duplicate task name aborts
    /// initialization.
    pub fn new(config: TaskManagerConfig) -> JobberResult<Self> {
        let mut registry = TaskRegistry::new();
        for source in &config.definition_sources {
            let task = load_definition(source)?;
            registry.register(task)?;
        }
        Ok(Self { registry })
    }

    /// Read access to the declared tasks, for presentation.
    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Resolve the subgraph rooted at `root` and order it for execution.
    /// Nothing is executed.
    pub fn plan(&self, root: &str) -> JobberResult<ExecutionPlan> {
        let subgraph = DependencyResolver::new(&self.registry).resolve(root)?;
        let order = execution_order(&subgraph, &self.registry)?;
        Ok(ExecutionPlan {
            root: root.to_string(),
            order,
        })
    }

    /// Plan and then execute the task rooted at `root`.
    pub fn run(&self, root: &str) -> JobberResult<RunSummary> {
        let plan = self.plan(root)?;
        TaskRunner::new(&self.registry).run(&plan)
    }
}
