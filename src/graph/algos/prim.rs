//! Minimum spanning tree by Prim's method

use std::collections::HashSet;

use crate::error::{Result, SkeinError};
use crate::graph::types::Edge;
use crate::graph::Graph;

/// Grow a minimum spanning tree outward from `start`.
///
/// Each round picks the lowest-weight edge that crosses from a reached
/// node to an unreached one and absorbs its destination; ties keep the
/// first candidate in scan order (reached nodes in the order they were
/// absorbed, each node's edges in adjacency insertion order). The
/// returned tree is a fresh graph holding one directed edge per
/// absorbed node, oriented the way it was discovered. Fails with
/// [`SkeinError::Disconnected`] when unreached nodes remain but no edge
/// crosses to them.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn minimum_spanning_tree(graph: &Graph, start: &str) -> Result<Graph> {
    graph.node(start)?;

    let mut tree = Graph::new();
    tree.add_node(start);

    let mut reached: Vec<String> = vec![start.to_string()];
    let mut reached_set: HashSet<String> = HashSet::new();
    reached_set.insert(start.to_string());

    while reached.len() < graph.node_count() {
        let mut best: Option<&Edge> = None;

        for name in &reached {
            for edge in graph.outgoing(name) {
                if reached_set.contains(edge.to.as_str()) {
                    continue;
                }
                let lower = match best {
                    Some(current) => edge.weight < current.weight,
                    None => true,
                };
                if lower {
                    best = Some(edge);
                }
            }
        }

        match best {
            Some(edge) => {
                tree.add_edge(&edge.from, &edge.to, edge.weight);
                reached.push(edge.to.clone());
                reached_set.insert(edge.to.clone());
            }
            None => {
                return Err(SkeinError::Disconnected {
                    start: start.to_string(),
                    unreached: graph.node_count() - reached.len(),
                });
            }
        }
    }

    tracing::debug!(
        nodes = tree.node_count(),
        total = %tree.total_weight(),
        "spanning tree built"
    );
    Ok(tree)
}
