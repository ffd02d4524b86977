//! Edge-list ingestion
//!
//! Reads plain-text edge lists of whitespace-delimited `from to weight`
//! triples, one record per line, with `%` comment lines in the Matrix
//! Market convention. Ingestion is all-or-nothing: a malformed line
//! fails the whole read and no partially built graph escapes.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{Result, SkeinError};
use crate::graph::types::Weight;
use crate::graph::Graph;
use crate::trace_time;

/// Options for edge-list ingestion
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Lines whose first non-whitespace character is this marker are
    /// skipped verbatim
    pub comment_marker: char,
    /// Install the reverse edge alongside each listed triple, for files
    /// that record an undirected graph with one line per pair. Off by
    /// default: the engine inserts exactly the literal directed edges it
    /// is given, and the usual sample data already lists both directions.
    pub symmetric: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            comment_marker: '%',
            symmetric: false,
        }
    }
}

/// Read an edge list from a file into a fresh graph.
///
/// The file handle is scoped to this call and released on every exit
/// path, including parse failure.
#[tracing::instrument(skip(opts), fields(path = ?path))]
pub fn read_path(path: &Path, opts: &ReadOptions) -> Result<Graph> {
    let started = Instant::now();
    let content = fs::read_to_string(path)?;
    let graph = read_str(&content, opts)?;
    trace_time!(started, "edge_list_read", nodes = graph.node_count());
    Ok(graph)
}

/// Parse an edge list from in-memory text into a fresh graph.
///
/// Blank lines and comment lines are skipped; every other line must hold
/// exactly three tokens whose third parses as a non-negative finite
/// number. Line numbers in errors are 1-based.
#[tracing::instrument(skip(content, opts), fields(symmetric = opts.symmetric))]
pub fn read_str(content: &str, opts: &ReadOptions) -> Result<Graph> {
    let mut graph = Graph::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(opts.comment_marker) {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (from, to, token) = match (fields.next(), fields.next(), fields.next(), fields.next())
        {
            (Some(from), Some(to), Some(token), None) => (from, to, token),
            _ => {
                let count = line.split_whitespace().count();
                return Err(SkeinError::parse(
                    line_no,
                    raw_line,
                    format!("expected 3 fields, got {}", count),
                ));
            }
        };

        let weight =
            parse_weight(token).map_err(|reason| SkeinError::parse(line_no, raw_line, reason))?;

        graph.add_edge(from, to, weight);
        if opts.symmetric {
            graph.add_edge(to, from, weight);
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(graph)
}

fn parse_weight(token: &str) -> std::result::Result<Weight, String> {
    let value: f64 = token
        .parse()
        .map_err(|_| format!("weight {:?} is not a number", token))?;
    if !value.is_finite() {
        return Err(format!("weight {:?} is not finite", token));
    }
    if value < 0.0 {
        return Err(format!("weight {:?} is negative", token));
    }
    Ok(Weight::new(value))
}
