//! Graph algorithm implementations
//!
//! Contains concrete implementations of the classical traversals:
//! - `bfs`: breadth-first visitation trace
//! - `dfs`: depth-first visitation trace
//! - `dijkstra`: single-source shortest paths
//! - `prim`: minimum spanning tree
//!
//! Each algorithm takes a shared borrow of the graph, so the borrow
//! checker rules out structural mutation while a traversal runs. All
//! loops strictly shrink their work set and terminate on any finite
//! graph.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;

pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use dijkstra::shortest_paths;
pub use prim::minimum_spanning_tree;
