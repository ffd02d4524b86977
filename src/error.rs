//! Error types for skein
//!
//! Every failure the engine reports is deterministic: a name that is not
//! in the graph, a malformed edge-list line, or a spanning-tree request
//! on a graph that is not connected from the start node. None of these
//! are retried, and none produce silent partial results.

use thiserror::Error;

/// Errors that can occur during graph construction and traversal
#[derive(Error, Debug)]
pub enum SkeinError {
    /// A node name was referenced that is not present in the node table.
    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    /// An edge-list line did not parse. Carries the offending line for
    /// diagnostics; line numbers are 1-based.
    #[error("malformed edge list at line {line}: {reason}: {content:?}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    /// Prim's algorithm ran out of crossing edges while nodes remained
    /// unreached: the graph is not connected from the start node.
    #[error("graph is disconnected: {unreached} node(s) unreachable from {start}")]
    Disconnected { start: String, unreached: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkeinError {
    /// Create an error for a node name absent from the graph
    pub fn node_not_found(name: impl Into<String>) -> Self {
        SkeinError::NodeNotFound { name: name.into() }
    }

    /// Create an error for a malformed edge-list line
    pub fn parse(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        SkeinError::Parse {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_message() {
        let err = SkeinError::node_not_found("17");
        assert_eq!(err.to_string(), "node not found: 17");
    }

    #[test]
    fn test_parse_message_includes_line_and_content() {
        let err = SkeinError::parse(3, "1 2", "expected 3 fields, got 2");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("expected 3 fields, got 2"));
        assert!(msg.contains("\"1 2\""));
    }

    #[test]
    fn test_disconnected_message() {
        let err = SkeinError::Disconnected {
            start: "a".to_string(),
            unreached: 4,
        };
        assert_eq!(
            err.to_string(),
            "graph is disconnected: 4 node(s) unreachable from a"
        );
    }
}
