//! Task registry
//!
//! Flat store for every declared task, keyed by name. The registry is
//! populated once from the definition sources and read-only for the rest of
//! the run.

use std::collections::{HashMap, HashSet};

use crate::types::{JobberError, JobberResult};

/// A named unit of work: the command to execute and the names of the tasks
/// that must run before it.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub command: String,
    pub dependencies: HashSet<String>,
}

/// Mapping from task name to task. Duplicate names are rejected at
/// registration time, so lookups are unambiguous.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task to the registry. Fails if a task with the same name was
    /// already registered, no matter which definition source declared it.
    pub fn register(&mut self, task: Task) -> JobberResult<()> {
        if self.tasks.contains_key(&task.name) {
            return Err(JobberError::DuplicateTask(task.name));
        }
        self.tasks.insert(task.name.clone(), task);
        Ok(())
    }

    /// Look up a task by name.
    pub fn lookup(&self, name: &str) -> JobberResult<&Task> {
        self.tasks
            .get(name)
            .ok_or_else(|| JobberError::UnknownTask(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Iterate over all registered tasks. No ordering guarantees; callers
    /// that present tasks sort them.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
