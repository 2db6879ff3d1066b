//! Iterative leaf trimming

use crate::entity::Entity;
use crate::graph::RelationGraph;
use std::collections::BTreeSet;

/// Strip leaves (degree < 2) from a copy of `graph` until none remain
///
/// All current leaves are removed together each round, then degrees are
/// recomputed. Nodes in `keepers` are never removed, whatever their degree.
pub fn trim(graph: &RelationGraph, keepers: &BTreeSet<Entity>) -> RelationGraph {
    let mut graph = graph.clone();
    let mut rounds = 0;
    let mut removed = 0;

    loop {
        let leaves: Vec<Entity> = graph
            .nodes()
            .filter(|node| !keepers.contains(*node) && graph.degree(node).unwrap_or(0) < 2)
            .cloned()
            .collect();

        if leaves.is_empty() {
            break;
        }

        rounds += 1;
        removed += leaves.len();
        graph.remove_nodes(&leaves);
    }

    tracing::debug!(
        "Trimmed {} leaves in {} rounds, {} nodes remain",
        removed,
        rounds,
        graph.node_count()
    );

    graph
}
