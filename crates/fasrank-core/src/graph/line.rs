//! Line-graph construction.
//!
//! The line graph `L(G)` has one node per edge of `G`; node `(a, b)` links to
//! node `(b, c)` for every length-2 path `a → b → c`. Ranking `L(G)` scores
//! the edges of `G` by how many cycles flow through them.
//!
//! # Node identity
//!
//! Node ids are fixed before any traversal: edges are enumerated by
//! `(from, to)` ascending and keyed by their packed [`EdgeKey`]. Traversals
//! only resolve ids through that table, so every [`LineGraphStrategy`]
//! produces an identical [`LineGraph`].

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, VecDeque};

use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::graph::adjacency::{AdjacencyGraph, Edge, EdgeKey};

/// Traversal used to discover line-graph edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineGraphStrategy {
    /// Plain loop over every vertex, out-neighbour, and second hop.
    Nested,
    /// Queue-driven traversal over line nodes.
    #[default]
    BreadthFirst,
    /// Stack-driven traversal over line nodes.
    DepthFirst,
}

/// A line graph and the table mapping its nodes back to source edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineGraph {
    /// Adjacency between line nodes.
    pub graph: AdjacencyGraph,
    /// `edges[node]` is the source-graph edge represented by `node`.
    pub edges: Vec<Edge>,
}

impl LineGraph {
    /// Source edge for a line node.
    #[must_use]
    pub fn edge(&self, node: usize) -> Edge {
        self.edges[node]
    }
}

/// Build the line graph of `graph`.
#[must_use]
#[instrument(level = "trace", skip(graph), fields(edges = graph.edge_count()))]
pub fn line_graph(graph: &AdjacencyGraph, strategy: LineGraphStrategy) -> LineGraph {
    let edges: Vec<Edge> = graph.edges().collect();
    let ids: HashMap<EdgeKey, usize> = edges
        .iter()
        .enumerate()
        .map(|(id, &edge)| (EdgeKey::from(edge), id))
        .collect();
    let id_of = |from: usize, to: usize| ids[&EdgeKey::encode(from, to)];

    let mut line = AdjacencyGraph::new(edges.len());

    match strategy {
        LineGraphStrategy::Nested => {
            for u in 0..graph.vertex_count() {
                for mid in graph.neighbors(u) {
                    let head = id_of(u, mid);
                    for end in graph.neighbors(mid) {
                        line.add_edge(head, id_of(mid, end));
                    }
                }
            }
        }
        LineGraphStrategy::BreadthFirst => {
            let mut seen = FixedBitSet::with_capacity(edges.len());
            let mut queue = VecDeque::new();
            for start in 0..edges.len() {
                if seen.put(start) {
                    continue;
                }
                queue.push_back(start);
                while let Some(node) = queue.pop_front() {
                    let (_, mid) = edges[node];
                    for end in graph.neighbors(mid) {
                        let next = id_of(mid, end);
                        line.add_edge(node, next);
                        if !seen.put(next) {
                            queue.push_back(next);
                        }
                    }
                }
            }
        }
        LineGraphStrategy::DepthFirst => {
            let mut seen = FixedBitSet::with_capacity(edges.len());
            let mut stack = Vec::new();
            for start in 0..edges.len() {
                if seen.put(start) {
                    continue;
                }
                stack.push(start);
                while let Some(node) = stack.pop() {
                    let (_, mid) = edges[node];
                    for end in graph.neighbors(mid) {
                        let next = id_of(mid, end);
                        line.add_edge(node, next);
                        if !seen.put(next) {
                            stack.push(next);
                        }
                    }
                }
            }
        }
    }

    trace!(
        nodes = line.vertex_count(),
        edges = line.edge_count(),
        "line graph built"
    );
    LineGraph { graph: line, edges }
}
