//! `SortFAS`: insertion ordering.
//!
//! Vertices are taken in index order and each one is moved left to the
//! position that minimises its backward edges against the vertices already
//! placed. Walking left from the vertex's current slot, a running balance
//! drops by one for every edge `v → w` (it would become forward) and rises by
//! one for every edge `w → v` (it would become backward). The vertex lands at
//! the leftmost slot where the balance reaches its minimum.

use tracing::{debug, instrument};

use crate::graph::adjacency::AdjacencyGraph;
use crate::solver::{FasSolver, FeedbackArcSet, backward_edges};

/// Insertion-order heuristic solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionOrderSolver;

/// Vertex order produced by the insertion heuristic.
#[must_use]
pub fn insertion_order(graph: &AdjacencyGraph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();

    for i in 0..order.len() {
        let v = order[i];
        let mut balance = 0_isize;
        let mut best = 0_isize;
        let mut target = i;

        for j in (0..i).rev() {
            let w = order[j];
            if graph.has_edge(v, w) {
                balance -= 1;
            }
            if graph.has_edge(w, v) {
                balance += 1;
            }
            if balance <= best {
                best = balance;
                target = j;
            }
        }

        if target != i {
            order.remove(i);
            order.insert(target, v);
        }
    }

    order
}

impl FasSolver for InsertionOrderSolver {
    fn name(&self) -> &'static str {
        "sort"
    }

    #[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &AdjacencyGraph) -> FeedbackArcSet {
        let fas = backward_edges(graph, &insertion_order(graph));
        debug!(fas_size = fas.len(), "insertion solver done");
        fas
    }
}
