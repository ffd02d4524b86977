//! Single-source shortest paths over non-negative weights

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::graph::types::{ShortestPaths, Weight};
use crate::graph::Graph;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// then by insertion sequence so equal-cost pops are deterministic)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub name: String,
    pub dist: Weight,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.dist.value() == other.dist.value()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist
            .value()
            .partial_cmp(&other.dist.value())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Compute shortest-path distances from `start` to every node.
///
/// Distances start at [`Weight::INFINITY`] and stay there for nodes the
/// start cannot reach. Among frontier entries of equal distance the one
/// inserted earliest is settled first. A settled distance is never
/// relaxed again, so the result is stable for a given graph.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn shortest_paths(graph: &Graph, start: &str) -> Result<ShortestPaths> {
    graph.node(start)?;

    let mut dist: HashMap<String, Weight> = graph
        .node_names()
        .map(|name| (name.to_string(), Weight::INFINITY))
        .collect();
    dist.insert(start.to_string(), Weight::ZERO);

    let mut prev: HashMap<String, String> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    heap.push(Reverse(HeapEntry {
        name: start.to_string(),
        dist: Weight::ZERO,
        seq,
    }));
    seq += 1;

    while let Some(Reverse(HeapEntry {
        name: current,
        dist: cost,
        ..
    })) = heap.pop()
    {
        // A node can sit in the heap under several costs; only the
        // first (cheapest) pop settles it, the rest are stale.
        if dist.get(&current).is_some_and(|best| cost > *best) {
            continue;
        }

        for edge in graph.outgoing(&current) {
            let candidate = cost + edge.weight;
            let known = dist
                .get(edge.to.as_str())
                .copied()
                .unwrap_or(Weight::INFINITY);
            if candidate < known {
                dist.insert(edge.to.clone(), candidate);
                prev.insert(edge.to.clone(), current.clone());
                heap.push(Reverse(HeapEntry {
                    name: edge.to.clone(),
                    dist: candidate,
                    seq,
                }));
                seq += 1;
            }
        }
    }

    Ok(ShortestPaths {
        start: start.to_string(),
        dist,
        prev,
    })
}
