//! Jobber core library
//!
//! Core engine for the Jobber task runner: it loads task definitions,
//! verifies the dependency graph rooted at a requested task is acyclic and
//! fully defined, computes an execution order consistent with the
//! dependency partial order, and runs each task's command in that order.
//!
//! ## Architecture
//!
//! Data flows one direction through the modules:
//!
//! - [`definitions`] - Parsing of task definition sources
//! - [`registry`] - Flat store of declared tasks, keyed by name
//! - [`resolver`] - Depth-first reachability and cycle detection from a root
//! - [`scheduler`] - Topological ordering of the resolved subgraph
//! - [`execution`] - Sequential command execution with per-task outcomes
//! - [`task_manager`] - Facade owning one run's state end to end
//! - [`results`] - Output structures for planning and execution
//! - [`types`] - Common error types and type aliases
//!
//! The primary entry point is the [`TaskManager`]:
//!
//! ```rust,no_run
//! use jobber_core::task_manager::{TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> jobber_core::types::JobberResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     definition_sources: vec![PathBuf::from("build.task")],
//! })?;
//! let summary = manager.run("build")?;
//! # Ok(())
//! # }
//! ```

pub mod definitions;
pub mod execution;
pub mod registry;
pub mod resolver;
pub mod results;
pub mod scheduler;
pub mod task_manager;
pub mod types;

// Re-export the main types for easier usage
pub use task_manager::{TaskManager, TaskManagerConfig};
pub use types::{JobberError, JobberResult};
