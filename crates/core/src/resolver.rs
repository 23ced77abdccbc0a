//! Dependency resolution
//!
//! Depth-first traversal of the dependency graph rooted at the requested
//! task. Resolution proves the rooted subgraph is acyclic and fully defined
//! and returns the set of reachable task names for the scheduler to order.
//!
//! Two marker sets drive the traversal and must stay distinct: the on-path
//! marker is cleared when a node is left (so a diamond-shaped graph is not
//! mistaken for a cycle), while subgraph membership persists. A third set
//! records nodes whose subtrees were already verified, so shared subtrees
//! are walked once instead of once per incoming path.

use std::collections::HashSet;

use crate::registry::TaskRegistry;
use crate::types::{JobberError, JobberResult};

/// One resolution pass over the registry. Holds the traversal state for a
/// single root; create a fresh resolver per run.
pub struct DependencyResolver<'a> {
    registry: &'a TaskRegistry,
    /// Names on the current traversal path, for cycle detection.
    on_path: HashSet<String>,
    /// The current traversal path in order, for cycle reporting.
    path: Vec<String>,
    /// Names whose subtrees were already verified acyclic and fully defined.
    cleared: HashSet<String>,
    /// Every name reachable from the root, including the root itself.
    subgraph: HashSet<String>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(registry: &'a TaskRegistry) -> Self {
        Self {
            registry,
            on_path: HashSet::new(),
            path: Vec::new(),
            cleared: HashSet::new(),
            subgraph: HashSet::new(),
        }
    }

    /// Compute the subgraph reachable from `root`.
    ///
    /// Fails with [`JobberError::MissingRootTask`] if `root` itself was
    /// never declared, [`JobberError::UnknownTask`] if any reachable
    /// dependency was never declared, and [`JobberError::CircularDependency`]
    /// if a dependency chain returns to a task already on the traversal
    /// path. Errors abort the pass immediately; there is no partial result.
    pub fn resolve(mut self, root: &str) -> JobberResult<HashSet<String>> {
        if !self.registry.contains(root) {
            return Err(JobberError::MissingRootTask(root.to_string()));
        }
        self.visit(root)?;
        Ok(self.subgraph)
    }

    fn visit(&mut self, name: &str) -> JobberResult<()> {
        if self.on_path.contains(name) {
            return Err(JobberError::CircularDependency {
                cycle: self.cycle_through(name),
            });
        }
        if self.cleared.contains(name) {
            return Ok(());
        }

        let task = self.registry.lookup(name)?;

        self.on_path.insert(name.to_string());
        self.path.push(name.to_string());
        self.subgraph.insert(name.to_string());

        for dependency in &task.dependencies {
            self.visit(dependency)?;
        }

        self.path.pop();
        self.on_path.remove(name);
        self.cleared.insert(name.to_string());
        Ok(())
    }

    /// Slice the current path from the first occurrence of `name` and close
    /// the loop, yielding e.g. `[b, c, b]` for a cycle entered at `b`.
    fn cycle_through(&self, name: &str) -> Vec<String> {
        let start = self
            .path
            .iter()
            .position(|entry| entry == name)
            .unwrap_or(0);
        let mut cycle: Vec<String> = self.path[start..].to_vec();
        cycle.push(name.to_string());
        cycle
    }
}
