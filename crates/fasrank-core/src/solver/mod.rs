//! Feedback arc set solvers.
//!
//! # Overview
//!
//! Every solver takes an [`AdjacencyGraph`] and returns an ordered list of
//! edges whose removal leaves the graph acyclic. Solvers never mutate their
//! input; the caller decides what to do with the result.
//!
//! - [`PageRankSolver`] (`page_rank`): repeatedly removes the top-ranked
//!   line-graph node of every cyclic component.
//! - [`GreedySolver`] (`greedy`): Eades–Lin–Smyth vertex ordering.
//! - [`GreedyBucketSolver`] (`greedy_opt`): the same ordering with bucketed
//!   degree bookkeeping.
//! - [`InsertionOrderSolver`] (`sort`): `SortFAS` insertion ordering.
//!
//! The ordering-based solvers share [`backward_edges`]: given a vertex
//! order, every edge that points backwards (and every self-loop) is a
//! feedback arc.

use crate::graph::adjacency::{AdjacencyGraph, Edge};

pub mod greedy;
pub mod pagerank;
pub mod sort;

pub use greedy::{GreedyBucketSolver, GreedySolver};
pub use pagerank::PageRankSolver;
pub use sort::InsertionOrderSolver;

/// Ordered list of removed edges.
pub type FeedbackArcSet = Vec<Edge>;

/// Common contract for interchangeable feedback arc set solvers.
pub trait FasSolver {
    /// Short, stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Compute a feedback arc set for `graph`.
    ///
    /// Removing every returned edge from `graph` must leave it acyclic. An
    /// acyclic input yields an empty set.
    fn solve(&self, graph: &AdjacencyGraph) -> FeedbackArcSet;
}

/// Edges `(u, v)` of `graph` with `v` at or before `u` in `order`.
///
/// `order` must be a permutation of the graph's vertices. Self-loops always
/// count as backward. Output is sorted by `(from, to)`.
///
/// # Panics
///
/// Panics if `order` is not a permutation of `0..graph.vertex_count()`.
#[must_use]
pub fn backward_edges(graph: &AdjacencyGraph, order: &[usize]) -> FeedbackArcSet {
    assert_eq!(
        order.len(),
        graph.vertex_count(),
        "order must cover every vertex"
    );
    let mut position = vec![usize::MAX; order.len()];
    for (pos, &vertex) in order.iter().enumerate() {
        assert_eq!(position[vertex], usize::MAX, "vertex {vertex} repeated in order");
        position[vertex] = pos;
    }
    graph
        .edges()
        .filter(|&(from, to)| position[to] <= position[from])
        .collect()
}
