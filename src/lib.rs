//! Skein
//!
//! In-memory weighted-graph engine: edge-list ingestion, breadth- and
//! depth-first traversal, single-source shortest paths, and minimum
//! spanning trees.

pub mod error;
pub mod graph;
pub mod logging;
