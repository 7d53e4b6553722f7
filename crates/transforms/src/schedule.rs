//! Declared partial order between patch steps and schedule computation.
//!
//! The source scripts this pipeline replaces relied on the operator running
//! them in the right order by hand. Here the order lives in
//! [`StepId::requires`] and every run goes through a topological sort, so
//! an invalid invocation order cannot exist.

use crate::{Error, Result, StepId};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Computes a valid linear schedule over the requested steps.
///
/// Duplicates are dropped. Any subset may be requested: a prerequisite that
/// is not part of the run is not an error, because each step re-derives its
/// precondition from the file itself and skips when the groundwork is
/// missing.
pub fn linearize(requested: &[StepId]) -> Result<Vec<StepId>> {
    let mut graph = DiGraph::<StepId, ()>::new();
    let mut nodes: HashMap<StepId, NodeIndex> = HashMap::new();

    // node and edge insertion in canonical order keeps the sort deterministic
    for id in StepId::ALL {
        if requested.contains(&id) {
            nodes.insert(id, graph.add_node(id));
        }
    }
    for id in StepId::ALL {
        let Some(&node) = nodes.get(&id) else {
            continue;
        };
        for &dep in id.requires() {
            if let Some(&dep_node) = nodes.get(&dep) {
                graph.add_edge(dep_node, node, ());
            }
        }
    }

    let sorted = toposort(&graph, None).map_err(|cycle| {
        Error::InvalidSchedule(format!("dependency cycle at {}", graph[cycle.node_id()]))
    })?;
    Ok(sorted.into_iter().map(|node| graph[node]).collect())
}

/// Checks an explicitly ordered schedule against the declared partial
/// order.
///
/// A sequence that runs a dependent before its listed prerequisite would
/// emit references to inherited members that do not exist yet; it is
/// rejected rather than executed.
pub fn validate(order: &[StepId]) -> Result<()> {
    for (i, step) in order.iter().enumerate() {
        if order[..i].contains(step) {
            return Err(Error::InvalidSchedule(format!("step {step} listed twice")));
        }
        for &dep in step.requires() {
            if let Some(pos) = order.iter().position(|s| *s == dep)
                && pos > i
            {
                return Err(Error::InvalidSchedule(format!(
                    "{dep} must run before {step}"
                )));
            }
        }
    }
    Ok(())
}

/// Returns every declared (prerequisite, dependent) pair.
pub fn dependency_edges() -> Vec<(StepId, StepId)> {
    StepId::ALL
        .iter()
        .flat_map(|&id| id.requires().iter().map(move |&dep| (dep, id)))
        .collect()
}
