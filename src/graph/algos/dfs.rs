//! Depth-first path discovery

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::types::Trace;
use crate::graph::Graph;

/// Walk the graph depth-first from `start`, recording every node in
/// visitation order, and stop the moment `goal` is popped.
///
/// The most recently pushed neighbor is explored first, so later edges
/// in adjacency insertion order win the next hop. As with
/// [`breadth_first`](super::breadth_first), an unreachable `goal` yields
/// the whole component with `found` set to false.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn depth_first(graph: &Graph, start: &str, goal: &str) -> Result<Trace> {
    graph.node(start)?;
    graph.node(goal)?;

    let mut nodes: Vec<String> = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut pushed: HashSet<String> = HashSet::new();

    stack.push(start.to_string());
    pushed.insert(start.to_string());

    while let Some(current) = stack.pop() {
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
            if !pushed.contains(edge.to.as_str()) {
                pushed.insert(edge.to.clone());
                stack.push(edge.to.clone());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkeinError;
    use crate::graph::types::Weight;

    fn chain() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", Weight::from(1));
        graph.add_edge("b", "c", Weight::from(1));
        graph
    }

    #[test]
    fn test_start_equals_goal_is_single_element() {
        let graph = chain();
        let trace = depth_first(&graph, "a", "a").unwrap();
        assert!(trace.found);
        assert_eq!(trace.nodes, vec!["a"]);
    }

    #[test]
    fn test_follows_chain_to_goal() {
        let graph = chain();
        let trace = depth_first(&graph, "a", "c").unwrap();
        assert!(trace.found);
        assert_eq!(trace.nodes, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_last_pushed_neighbor_is_explored_first() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", Weight::from(1));
        graph.add_edge("a", "c", Weight::from(1));
        graph.add_edge("b", "d", Weight::from(1));
        graph.add_node("zzz");

        // From a, both b and c are pushed; c (pushed last) pops first.
        let trace = depth_first(&graph, "a", "zzz").unwrap();
        assert!(!trace.found);
        assert_eq!(trace.nodes, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_cycles_terminate_within_node_count() {
        let mut graph = Graph::new();
        graph.add_edge("1", "2", Weight::from(1));
        graph.add_edge("2", "1", Weight::from(1));
        graph.add_edge("2", "3", Weight::from(1));
        graph.add_edge("3", "2", Weight::from(1));
        graph.add_edge("3", "1", Weight::from(1));
        graph.add_node("island");

        let trace = depth_first(&graph, "1", "island").unwrap();
        assert!(!trace.found);
        assert!(trace.nodes.len() <= graph.node_count());

        let mut seen = trace.nodes.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), trace.nodes.len());
    }

    #[test]
    fn test_unreachable_goal_returns_component() {
        let mut graph = chain();
        graph.add_node("apart");

        let trace = depth_first(&graph, "a", "apart").unwrap();
        assert!(!trace.found);
        assert_eq!(trace.nodes, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_names_fail() {
        let graph = chain();
        assert!(matches!(
            depth_first(&graph, "ghost", "a").unwrap_err(),
            SkeinError::NodeNotFound { .. }
        ));
        assert!(matches!(
            depth_first(&graph, "a", "ghost").unwrap_err(),
            SkeinError::NodeNotFound { .. }
        ));
    }
}
