//! Topological scheduling
//!
//! Orders a resolved subgraph so that every task appears after all of its
//! dependencies, by repeated removal: tasks with no remaining dependencies
//! are ready, and executing a ready task may make its dependents ready.
//!
//! The ready queue is a min-heap keyed by task name, so when several tasks
//! are ready at once the output is the same on every run.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::registry::TaskRegistry;
use crate::types::{JobberError, JobberResult};

/// Produce an execution order for `subgraph`: a permutation of the subgraph
/// in which every task follows all members of its dependency set.
///
/// The subgraph is assumed to be the output of a successful resolution pass,
/// i.e. acyclic and fully defined. That precondition is still checked
/// defensively: if the repeated-removal loop drains without consuming every
/// member, the input was inconsistent and the run is aborted with
/// [`JobberError::InternalConsistency`] rather than silently truncated.
pub fn execution_order(
    subgraph: &HashSet<String>,
    registry: &TaskRegistry,
) -> JobberResult<Vec<String>> {
    // Working copy of each member's dependency set, restricted to the
    // subgraph. Resolution guarantees no dependency points outside it.
    let mut pending: HashMap<String, HashSet<String>> = HashMap::new();
    let mut ready: BinaryHeap<Reverse<String>> = BinaryHeap::new();

    for name in subgraph {
        let task = registry.lookup(name)?;
        let remaining: HashSet<String> = task
            .dependencies
            .iter()
            .filter(|dependency| subgraph.contains(*dependency))
            .cloned()
            .collect();

        if remaining.is_empty() {
            ready.push(Reverse(name.clone()));
        } else {
            pending.insert(name.clone(), remaining);
        }
    }

    let mut order = Vec::with_capacity(subgraph.len());
    let mut unblocked = Vec::new();

    while let Some(Reverse(current)) = ready.pop() {
        for (name, remaining) in pending.iter_mut() {
            if remaining.remove(&current) && remaining.is_empty() {
                unblocked.push(name.clone());
            }
        }
        for name in unblocked.drain(..) {
            pending.remove(&name);
            ready.push(Reverse(name));
        }
        order.push(current);
    }

    if order.len() != subgraph.len() {
        return Err(JobberError::InternalConsistency(format!(
            "scheduled {} of {} tasks; the subgraph was not a fully defined acyclic graph",
            order.len(),
            subgraph.len()
        )));
    }

    Ok(order)
}
