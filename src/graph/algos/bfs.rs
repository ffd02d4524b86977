//! Breadth-first path discovery

use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::types::Trace;
use crate::graph::Graph;

/// Walk the graph breadth-first from `start`, recording every node in
/// discovery order, and stop the moment `goal` is dequeued.
///
/// Returns a visitation trace, not necessarily a minimum-hop path: when
/// `goal` is unreachable the trace covers the entire component reachable
/// from `start` and `found` is false. Neighbors are expanded in adjacency
/// insertion order. Both names must exist in the graph.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn breadth_first(graph: &Graph, start: &str, goal: &str) -> Result<Trace> {
    graph.node(start)?;
    graph.node(goal)?;

    let mut nodes: Vec<String> = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut enqueued: HashSet<String> = HashSet::new();

    queue.push_back(start.to_string());
    enqueued.insert(start.to_string());

    while let Some(current) = queue.pop_front() {
        nodes.push(current.clone());

        if current == goal {
            return Ok(Trace {
                start: start.to_string(),
                goal: goal.to_string(),
                found: true,
                nodes,
            });
        }

        for edge in graph.outgoing(&current) {
            // A node that was ever enqueued is never enqueued again,
            // even after leaving the queue; bidirectional edges would
            // otherwise ping-pong forever.
            if !enqueued.contains(edge.to.as_str()) {
                enqueued.insert(edge.to.clone());
                queue.push_back(edge.to.clone());
            }
        }
    }

    Ok(Trace {
        start: start.to_string(),
        goal: goal.to_string(),
        found: false,
        nodes,
    })
}
