//! The graph aggregate
//!
//! `Graph` owns every [`Node`] and the adjacency mapping of outgoing
//! [`Edge`]s. Construction is monotonic: nodes and edges are added, never
//! removed, and a loaded graph is queried without further mutation. The
//! node table guarantees one `Node` per distinct name; the adjacency map
//! preserves edge insertion order, which traversal tie-breaking depends
//! on.

pub mod algos;
pub mod reader;
pub mod types;

pub use algos::{breadth_first, depth_first, minimum_spanning_tree, shortest_paths};
pub use reader::{read_path, read_str, ReadOptions};
pub use types::{Edge, Node, ShortestPaths, Trace, Weight};

use std::collections::HashMap;

use crate::error::{Result, SkeinError};

/// An in-memory directed weighted graph in adjacency-list form.
///
/// Undirected graphs are represented by inserting both directions of each
/// edge. Parallel edges and self-loops are kept as given.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node table: name → node. One entry per distinct name.
    nodes: HashMap<String, Node>,
    /// Adjacency: name → outgoing edges in insertion order. A name with
    /// no outgoing edges has no entry; lookups treat absence as empty.
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if its name is not already present. Idempotent.
    pub fn add_node(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            self.nodes.insert(name.to_string(), Node::new(name));
        }
    }

    /// Append a directed edge, creating either endpoint that does not
    /// exist yet. Parallel edges between the same pair and self-loops
    /// are preserved in insertion order, never deduplicated.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) {
        self.add_node(from);
        self.add_node(to);
        let edge = Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        };
        self.adjacency.entry(from.to_string()).or_default().push(edge);
    }

    /// Check if a node name exists in the graph
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Result<&Node> {
        self.nodes
            .get(name)
            .ok_or_else(|| SkeinError::node_not_found(name))
    }

    /// Outgoing edges of a node, in insertion order. A name without
    /// outgoing edges (or absent entirely) yields an empty slice.
    pub fn outgoing(&self, name: &str) -> &[Edge] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges in the graph
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True when the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node names, in arbitrary order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// All edges, grouped by source name in ascending order with each
    /// group in insertion order. Deterministic, so callers can re-derive
    /// the exact triple set a graph was built from.
    pub fn edges(&self) -> Vec<&Edge> {
        // Sort sources for determinism; the per-source order is already fixed.
        let mut sources: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        sources.sort_unstable();
        sources
            .into_iter()
            .flat_map(|name| self.outgoing(name))
            .collect()
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> Weight {
        self.adjacency
            .values()
            .flatten()
            .fold(Weight::ZERO, |acc, edge| acc + edge.weight)
    }
}
