use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Total edge weight accumulated along a path.
///
/// Weights are non-negative in every domain this engine is exercised on;
/// Dijkstra's correctness depends on that. `INFINITY` is the sentinel for
/// "no path known".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(f64::from(value))
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex in the graph.
///
/// Nodes carry only their identifying name; identity and equality are
/// defined by the name alone. Maps and sets throughout the engine are
/// keyed by the name string directly, never by hashing `Node` values, so
/// two lookups can never disagree about which vertex a name denotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    name: String,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Node { name: name.into() }
    }

    /// The unique, stable identifier of this vertex
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A directed, weighted arc between two named vertices.
///
/// An edge only allows traversal `from` → `to`; undirected semantics are
/// achieved by inserting two edges. Owned by the adjacency entry of its
/// source node and immutable once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node name
    pub from: String,
    /// Destination node name
    pub to: String,
    /// Traversal cost of this arc
    pub weight: Weight,
}

/// Visitation trace produced by breadth-first or depth-first search.
///
/// `nodes` lists names in discovery order, ending either at `goal` (the
/// search stopped the moment it was dequeued) or at the last node of the
/// reachable component when no path exists. `found` is true iff the last
/// element equals `goal`.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    pub start: String,
    pub goal: String,
    pub found: bool,
    pub nodes: Vec<String>,
}

/// Distance and predecessor tables produced by Dijkstra.
///
/// `dist` holds an entry for every node in the graph, `Weight::INFINITY`
/// for nodes the start cannot reach. `prev` holds the immediate
/// predecessor on some shortest path; the start node and unreachable
/// nodes have no entry.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    pub start: String,
    pub dist: HashMap<String, Weight>,
    pub prev: HashMap<String, String>,
}

impl ShortestPaths {
    /// Minimum total weight from the start node, if the name is known
    pub fn distance(&self, name: &str) -> Option<Weight> {
        self.dist.get(name).copied()
    }

    /// Immediate predecessor on a shortest path, if one is defined
    pub fn predecessor(&self, name: &str) -> Option<&str> {
        self.prev.get(name).map(String::as_str)
    }

    /// Whether a finite-weight path from the start reaches `name`
    pub fn is_reachable(&self, name: &str) -> bool {
        self.distance(name).is_some_and(|d| d.is_finite())
    }

    /// Reconstruct the node sequence of a shortest path from the start
    /// to `goal` by walking the predecessor table backwards.
    /// Returns `None` when `goal` is unknown or unreachable.
    pub fn path_to(&self, goal: &str) -> Option<Vec<String>> {
        if !self.is_reachable(goal) {
            return None;
        }

        let mut path = vec![goal.to_string()];
        let mut current = goal;
        while current != self.start {
            let pred = self.prev.get(current)?;
            path.push(pred.clone());
            current = pred;
        }
        path.reverse();
        Some(path)
    }
}
