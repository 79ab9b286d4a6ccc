pub mod scc;
pub mod solve;
pub mod solvers;

use std::path::Path;

use anyhow::Context;
use fasrank_core::graph::AdjacencyGraph;
use fasrank_core::io::read_edge_list;
use tracing::info;

/// Label used in reports when no input file is given.
pub const SAMPLE_SOURCE: &str = "<sample>";

/// Built-in graph used when `--input` is omitted: a 4-vertex component with
/// two overlapping cycles and a disjoint 3-cycle.
pub fn sample_graph() -> AdjacencyGraph {
    AdjacencyGraph::with_edges(
        7,
        &[(0, 1), (1, 2), (2, 3), (3, 0), (3, 1), (4, 5), (5, 6), (6, 4)],
    )
}

/// Load the graph named by `--input`, or the sample graph.
///
/// Returns the graph and a label for reports.
pub fn load_graph(input: Option<&Path>) -> anyhow::Result<(AdjacencyGraph, String)> {
    let Some(path) = input else {
        info!("no input file given, using the built-in sample graph");
        return Ok((sample_graph(), SAMPLE_SOURCE.to_string()));
    };
    let graph = read_edge_list(path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;
    Ok((graph, path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_graph_shape() {
        let g = sample_graph();
        assert_eq!(g.vertex_count(), 7);
        assert_eq!(g.edge_count(), 8);
    }

    #[test]
    fn load_without_input_uses_sample() {
        let (g, source) = load_graph(None).expect("sample");
        assert_eq!(g, sample_graph());
        assert_eq!(source, SAMPLE_SOURCE);
    }

    #[test]
    fn load_reports_line_of_bad_edge() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "3\n0 1\n1 9\n").expect("write");
        let err = load_graph(Some(&path)).expect_err("out of range");
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to load graph"));
        assert!(msg.contains("line 3"), "{msg}");
    }
}
