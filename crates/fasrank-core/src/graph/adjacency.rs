//! Adjacency-set storage for directed, presence-only graphs.
//!
//! # Representation
//!
//! Vertices are dense indices in `[0, N)`. Each vertex owns an ordered set of
//! out-neighbours, so iteration order is ascending and every traversal built
//! on top of this type is reproducible run to run.
//!
//! | Operation       | Cost                 |
//! |-----------------|----------------------|
//! | `add_edge`      | O(log d)             |
//! | `remove_edge`   | O(log d)             |
//! | `has_edge`      | O(log d)             |
//! | `out_degree`    | O(1)                 |
//! | `in_degree`     | O(V) scan            |
//!
//! `d` is the out-degree of the source vertex.
//!
//! Out-of-range vertex indices on these operations are caller bugs and
//! panic. Use [`AdjacencyGraph::try_add_edge`] for untrusted input.

#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeSet;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::GraphError;

/// A directed edge `(from, to)`.
pub type Edge = (usize, usize);

// ---------------------------------------------------------------------------
// EdgeKey
// ---------------------------------------------------------------------------

/// Packed 64-bit identity of an edge: `from` in the high 32 bits, `to` in the
/// low 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u64);

impl EdgeKey {
    /// Pack an edge.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint does not fit in 32 bits.
    #[must_use]
    pub fn encode(from: usize, to: usize) -> Self {
        let hi = u32::try_from(from).unwrap_or_else(|_| panic!("edge source {from} exceeds u32"));
        let lo = u32::try_from(to).unwrap_or_else(|_| panic!("edge target {to} exceeds u32"));
        Self((u64::from(hi) << 32) | u64::from(lo))
    }

    /// Recover the `(from, to)` pair.
    #[must_use]
    pub const fn decode(self) -> Edge {
        ((self.0 >> 32) as usize, (self.0 & 0xFFFF_FFFF) as usize)
    }

    /// Raw packed value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<Edge> for EdgeKey {
    fn from((from, to): Edge) -> Self {
        Self::encode(from, to)
    }
}

// ---------------------------------------------------------------------------
// AdjacencyGraph
// ---------------------------------------------------------------------------

/// Directed graph over vertices `0..vertex_count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    out: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Largest vertex count accepted by [`try_new`](Self::try_new).
    ///
    /// Every vertex owns an adjacency set up front, so the vertex count alone
    /// decides the allocation. The cap also keeps indices inside the 32-bit
    /// [`EdgeKey`] domain.
    pub const MAX_VERTICES: usize = 1 << 24;

    /// Create a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            out: vec![BTreeSet::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Bounds-checked variant of [`new`](Self::new) for untrusted sizes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::TooManyVertices`] above [`Self::MAX_VERTICES`].
    pub fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count > Self::MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                count: vertex_count,
                limit: Self::MAX_VERTICES,
            });
        }
        Ok(Self::new(vertex_count))
    }

    /// Create a graph and insert every edge in `edges`. Duplicates collapse.
    ///
    /// # Panics
    ///
    /// Panics if any endpoint is `>= vertex_count`.
    #[must_use]
    pub fn with_edges(vertex_count: usize, edges: &[Edge]) -> Self {
        let mut graph = Self::new(vertex_count);
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.out.len()
    }

    /// Number of edges currently present.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `true` when the graph has no edges.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Insert `from -> to`. Returns `true` if the edge was not already present.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        assert!(
            to < self.out.len(),
            "edge target {to} out of range for {} vertices",
            self.out.len()
        );
        let inserted = self.out[from].insert(to);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// Bounds-checked variant of [`add_edge`](Self::add_edge).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is not a
    /// vertex of this graph.
    pub fn try_add_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        let vertex_count = self.out.len();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(self.add_edge(from, to))
    }

    /// Remove `from -> to`. Returns `true` if the edge was present.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of range.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let removed = self.out[from].remove(&to);
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// `true` if `from -> to` is present.
    #[must_use]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.out[from].contains(&to)
    }

    /// Out-neighbours of `vertex` in ascending order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.out[vertex].iter().copied()
    }

    /// Number of out-edges of `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.out[vertex].len()
    }

    /// Number of in-edges of `vertex`, by scanning every adjacency set.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    #[must_use]
    pub fn in_degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.out.len(), "vertex {vertex} out of range");
        self.out.iter().filter(|set| set.contains(&vertex)).count()
    }

    /// In-degree of every vertex in a single pass.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.out.len()];
        for set in &self.out {
            for &to in set {
                degrees[to] += 1;
            }
        }
        degrees
    }

    /// Every edge, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.out
            .iter()
            .enumerate()
            .flat_map(|(from, set)| set.iter().map(move |&to| (from, to)))
    }

    /// Every self-loop `(v, v)`.
    pub fn self_loops(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.out.len())
            .filter(|&v| self.out[v].contains(&v))
            .map(|v| (v, v))
    }

    /// A copy of this graph with every edge in `removed` deleted.
    ///
    /// Edges that are not present are ignored.
    #[must_use]
    pub fn without_edges(&self, removed: &[Edge]) -> Self {
        let mut graph = self.clone();
        for &(from, to) in removed {
            graph.remove_edge(from, to);
        }
        graph
    }

    /// BLAKE3 fingerprint of the vertex count and sorted edge list.
    ///
    /// Formatted as `blake3:<hex>`. Two graphs with the same vertices and
    /// edges always hash equally.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.out.len() as u64).to_le_bytes());
        for (from, to) in self.edges() {
            hasher.update(&EdgeKey::encode(from, to).get().to_le_bytes());
        }
        format!("blake3:{}", hasher.finalize())
    }

    // -----------------------------------------------------------------------
    // petgraph interop
    // -----------------------------------------------------------------------

    /// Build from a petgraph [`DiGraph`]. Parallel edges collapse; node and
    /// edge weights are dropped.
    #[must_use]
    pub fn from_petgraph<N, E>(graph: &DiGraph<N, E>) -> Self {
        let mut out = Self::new(graph.node_count());
        for edge in graph.edge_references() {
            out.add_edge(edge.source().index(), edge.target().index());
        }
        out
    }

    /// Convert to a petgraph [`DiGraph`] with unit weights. Node `i` of the
    /// result corresponds to vertex `i`.
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.out.len(), self.edge_count);
        for _ in 0..self.out.len() {
            graph.add_node(());
        }
        for (from, to) in self.edges() {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        graph
    }
}
