//! Integration tests for edge-list ingestion feeding the graph algorithms

use std::fs;

use skein::error::SkeinError;
use skein::graph::{
    breadth_first, depth_first, minimum_spanning_tree, read_path, read_str, shortest_paths,
    ReadOptions, Weight,
};
use skein::logging::init_tracing;
use tempfile::tempdir;

/// Two cheap hops beat one expensive edge. Both directions are
/// listed, Matrix Market style.
const SAMPLE: &str = "\
% three nodes, weighted both ways
% from to weight
1 2 4
2 1 4
2 3 1
3 2 1
1 3 10
3 1 10
";

#[test]
fn test_sample_file_end_to_end() {
    init_tracing(None, false).ok();

    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.mtx");
    fs::write(&path, SAMPLE).unwrap();

    let graph = read_path(&path, &ReadOptions::default()).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 6);

    let paths = shortest_paths(&graph, "1").unwrap();
    assert_eq!(paths.distance("1"), Some(Weight::ZERO));
    assert_eq!(paths.distance("2"), Some(Weight::from(4)));
    assert_eq!(paths.distance("3"), Some(Weight::from(5)));
    assert_eq!(
        paths.path_to("3"),
        Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
    );

    let tree = minimum_spanning_tree(&graph, "1").unwrap();
    assert_eq!(tree.edge_count(), 2);
    assert_eq!(tree.total_weight(), Weight::from(5));
}

#[test]
fn test_round_trip_preserves_directed_triples() {
    let graph = read_str(SAMPLE, &ReadOptions::default()).unwrap();

    let mut derived: Vec<(String, String, f64)> = graph
        .edges()
        .into_iter()
        .map(|edge| (edge.from.clone(), edge.to.clone(), edge.weight.value()))
        .collect();
    derived.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    let mut listed: Vec<(String, String, f64)> = SAMPLE
        .lines()
        .filter(|line| !line.starts_with('%'))
        .map(|line| {
            let mut fields = line.split_whitespace();
            (
                fields.next().unwrap().to_string(),
                fields.next().unwrap().to_string(),
                fields.next().unwrap().parse().unwrap(),
            )
        })
        .collect();
    listed.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    assert_eq!(derived, listed);
}

#[test]
fn test_malformed_line_leaves_prior_graphs_untouched() {
    let graph = read_str(SAMPLE, &ReadOptions::default()).unwrap();
    let edges_before = graph.edge_count();

    let err = read_str("1 2 4\n1 2\n", &ReadOptions::default()).unwrap_err();
    match err {
        SkeinError::Parse { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content, "1 2");
        }
        other => panic!("expected Parse, got {other:?}"),
    }

    // The failed read produced no graph at all; earlier ones are intact.
    assert_eq!(graph.edge_count(), edges_before);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_traversals_agree_on_trivial_goal() {
    let graph = read_str(SAMPLE, &ReadOptions::default()).unwrap();

    let bfs = breadth_first(&graph, "1", "1").unwrap();
    let dfs = depth_first(&graph, "1", "1").unwrap();
    assert_eq!(bfs.nodes, vec!["1"]);
    assert_eq!(bfs.nodes, dfs.nodes);
    assert!(bfs.found && dfs.found);
}

#[test]
fn test_traversals_terminate_on_cycles_without_duplicates() {
    let mut graph = read_str(SAMPLE, &ReadOptions::default()).unwrap();
    graph.add_node("island");

    for trace in [
        breadth_first(&graph, "1", "island").unwrap(),
        depth_first(&graph, "1", "island").unwrap(),
    ] {
        assert!(!trace.found);
        assert!(trace.nodes.len() <= graph.node_count());

        let mut seen = trace.nodes.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), trace.nodes.len());
    }
}

#[test]
fn test_results_serialize_to_stable_shapes() {
    let graph = read_str(SAMPLE, &ReadOptions::default()).unwrap();

    let trace = breadth_first(&graph, "1", "3").unwrap();
    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json["start"], "1");
    assert_eq!(json["goal"], "3");
    assert_eq!(json["found"], true);
    assert!(json["nodes"].is_array());

    let paths = shortest_paths(&graph, "1").unwrap();
    let json = serde_json::to_value(&paths).unwrap();
    assert_eq!(json["start"], "1");
    assert_eq!(json["dist"]["2"], 4.0);
    assert_eq!(json["prev"]["3"], "2");
}
