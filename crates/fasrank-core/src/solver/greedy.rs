//! Eades–Lin–Smyth greedy ordering.
//!
//! # Algorithm
//!
//! Build a vertex order from two sequences, `head` and `tail`:
//!
//! 1. While a sink remains, remove the lowest-id sink and prepend it to
//!    `tail`.
//! 2. While a source remains, remove the lowest-id source and append it to
//!    `head`.
//! 3. If vertices remain, remove the one with the largest `out − in`
//!    (lowest id on ties) and append it to `head`. Go back to 1.
//!
//! The order is `head ++ tail`; its backward edges form the feedback arc
//! set. Degrees ignore self-loops, which are always reported.
//!
//! [`GreedySolver`] scans for candidates directly. [`GreedyBucketSolver`]
//! keeps sinks, sources and `out − in` buckets in ordered sets so each step
//! is logarithmic; both produce the same order.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::graph::adjacency::AdjacencyGraph;
use crate::solver::{FasSolver, FeedbackArcSet, backward_edges};

// ---------------------------------------------------------------------------
// Shared degree bookkeeping
// ---------------------------------------------------------------------------

/// Live degrees of the vertices not yet placed in the order.
struct Degrees {
    preds: Vec<Vec<usize>>,
    in_deg: Vec<usize>,
    out_deg: Vec<usize>,
    placed: Vec<bool>,
}

impl Degrees {
    fn new(graph: &AdjacencyGraph) -> Self {
        let n = graph.vertex_count();
        let mut preds = vec![Vec::new(); n];
        let mut in_deg = vec![0; n];
        let mut out_deg = vec![0; n];
        for (from, to) in graph.edges().filter(|(from, to)| from != to) {
            preds[to].push(from);
            in_deg[to] += 1;
            out_deg[from] += 1;
        }
        Self {
            preds,
            in_deg,
            out_deg,
            placed: vec![false; n],
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn delta(&self, vertex: usize) -> isize {
        self.out_deg[vertex] as isize - self.in_deg[vertex] as isize
    }

    /// Mark `vertex` placed and drop its edges from the unplaced degrees.
    fn place(&mut self, graph: &AdjacencyGraph, vertex: usize) {
        self.placed[vertex] = true;
        for next in graph.neighbors(vertex) {
            if next != vertex && !self.placed[next] {
                self.in_deg[next] -= 1;
            }
        }
        for &prev in &self.preds[vertex] {
            if !self.placed[prev] {
                self.out_deg[prev] -= 1;
            }
        }
    }
}

fn join(head: Vec<usize>, tail: Vec<usize>) -> Vec<usize> {
    // `tail` was built by pushing; prepending means reversing it.
    let mut order = head;
    order.extend(tail.into_iter().rev());
    order
}

// ---------------------------------------------------------------------------
// GreedySolver
// ---------------------------------------------------------------------------

/// Eades–Lin–Smyth greedy solver with direct candidate scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedySolver;

/// Vertex order chosen by the greedy heuristic.
#[must_use]
pub fn greedy_order(graph: &AdjacencyGraph) -> Vec<usize> {
    let mut degrees = Degrees::new(graph);
    let mut remaining: BTreeSet<usize> = (0..graph.vertex_count()).collect();
    let mut head = Vec::new();
    let mut tail = Vec::new();

    while !remaining.is_empty() {
        while let Some(v) = remaining.iter().copied().find(|&v| degrees.out_deg[v] == 0) {
            remaining.remove(&v);
            degrees.place(graph, v);
            tail.push(v);
        }
        while let Some(v) = remaining.iter().copied().find(|&v| degrees.in_deg[v] == 0) {
            remaining.remove(&v);
            degrees.place(graph, v);
            head.push(v);
        }

        let mut best: Option<(usize, isize)> = None;
        for &v in &remaining {
            let delta = degrees.delta(v);
            if best.is_none_or(|(_, top)| delta > top) {
                best = Some((v, delta));
            }
        }
        if let Some((v, _)) = best {
            remaining.remove(&v);
            degrees.place(graph, v);
            head.push(v);
        }
    }

    join(head, tail)
}

impl FasSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    #[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &AdjacencyGraph) -> FeedbackArcSet {
        let fas = backward_edges(graph, &greedy_order(graph));
        debug!(fas_size = fas.len(), "greedy solver done");
        fas
    }
}

// ---------------------------------------------------------------------------
// GreedyBucketSolver
// ---------------------------------------------------------------------------

/// Greedy solver with bucketed `out − in` bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyBucketSolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Sink,
    Source,
    Bucket(isize),
}

/// Sink / source / delta-bucket membership of every unplaced vertex.
#[derive(Default)]
struct Buckets {
    sinks: BTreeSet<usize>,
    sources: BTreeSet<usize>,
    by_delta: BTreeMap<isize, BTreeSet<usize>>,
}

impl Buckets {
    fn classify(degrees: &Degrees, vertex: usize) -> Class {
        if degrees.out_deg[vertex] == 0 {
            Class::Sink
        } else if degrees.in_deg[vertex] == 0 {
            Class::Source
        } else {
            Class::Bucket(degrees.delta(vertex))
        }
    }

    fn insert(&mut self, class: Class, vertex: usize) {
        match class {
            Class::Sink => {
                self.sinks.insert(vertex);
            }
            Class::Source => {
                self.sources.insert(vertex);
            }
            Class::Bucket(delta) => {
                self.by_delta.entry(delta).or_default().insert(vertex);
            }
        }
    }

    fn remove(&mut self, class: Class, vertex: usize) {
        match class {
            Class::Sink => {
                self.sinks.remove(&vertex);
            }
            Class::Source => {
                self.sources.remove(&vertex);
            }
            Class::Bucket(delta) => {
                if let Some(bucket) = self.by_delta.get_mut(&delta) {
                    bucket.remove(&vertex);
                    if bucket.is_empty() {
                        self.by_delta.remove(&delta);
                    }
                }
            }
        }
    }

    fn pop_max_delta(&mut self) -> Option<usize> {
        let mut entry = self.by_delta.last_entry()?;
        let vertex = entry.get_mut().pop_first();
        if entry.get().is_empty() {
            entry.remove();
        }
        vertex
    }
}

/// Vertex order chosen by the bucketed greedy heuristic.
#[must_use]
pub fn greedy_bucket_order(graph: &AdjacencyGraph) -> Vec<usize> {
    let mut degrees = Degrees::new(graph);
    let mut buckets = Buckets::default();
    for v in 0..graph.vertex_count() {
        buckets.insert(Buckets::classify(&degrees, v), v);
    }

    let mut head = Vec::new();
    let mut tail = Vec::new();

    // Reclassify every neighbour whose degree changes when `v` is placed.
    let place = |degrees: &mut Degrees, buckets: &mut Buckets, v: usize| {
        let before: Vec<(usize, Class)> = {
            let live: &Degrees = degrees;
            graph
                .neighbors(v)
                .chain(live.preds[v].iter().copied())
                .filter(|&w| w != v && !live.placed[w])
                .map(|w| (w, Buckets::classify(live, w)))
                .collect()
        };
        for &(w, class) in &before {
            buckets.remove(class, w);
        }
        degrees.place(graph, v);
        for &(w, _) in &before {
            buckets.insert(Buckets::classify(degrees, w), w);
        }
    };

    loop {
        while let Some(v) = buckets.sinks.pop_first() {
            place(&mut degrees, &mut buckets, v);
            tail.push(v);
        }
        while let Some(v) = buckets.sources.pop_first() {
            place(&mut degrees, &mut buckets, v);
            head.push(v);
        }
        match buckets.pop_max_delta() {
            Some(v) => {
                place(&mut degrees, &mut buckets, v);
                head.push(v);
            }
            None if buckets.sinks.is_empty() && buckets.sources.is_empty() => break,
            None => {}
        }
    }

    join(head, tail)
}

impl FasSolver for GreedyBucketSolver {
    fn name(&self) -> &'static str {
        "greedy_opt"
    }

    #[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &AdjacencyGraph) -> FeedbackArcSet {
        let fas = backward_edges(graph, &greedy_bucket_order(graph));
        debug!(fas_size = fas.len(), "greedy bucket solver done");
        fas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::scc::is_acyclic;

    fn sample_graph() -> AdjacencyGraph {
        AdjacencyGraph::with_edges(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 0), (3, 1), (4, 5), (5, 6), (6, 4)],
        )
    }

    #[test]
    fn chain_orders_topologically() {
        let g = AdjacencyGraph::with_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(greedy_order(&g), vec![0, 1, 2, 3]);
        assert_eq!(greedy_bucket_order(&g), vec![0, 1, 2, 3]);
        assert!(GreedySolver.solve(&g).is_empty());
    }

    #[test]
    fn isolated_vertices_go_to_tail() {
        let g = AdjacencyGraph::new(3);
        assert_eq!(greedy_order(&g), vec![2, 1, 0]);
        assert_eq!(greedy_bucket_order(&g), vec![2, 1, 0]);
    }

    #[test]
    fn sample_graph_is_broken() {
        let g = sample_graph();
        for fas in [GreedySolver.solve(&g), GreedyBucketSolver.solve(&g)] {
            assert!(is_acyclic(&g.without_edges(&fas)));
            assert!(fas.iter().all(|&(from, to)| g.has_edge(from, to)));
        }
    }

    #[test]
    fn four_cycle_with_chord_needs_one_edge() {
        let g = AdjacencyGraph::with_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (3, 1)]);
        let fas = GreedySolver.solve(&g);
        assert_eq!(fas.len(), 1);
        assert!(is_acyclic(&g.without_edges(&fas)));
    }

    #[test]
    fn self_loops_are_always_reported() {
        let g = AdjacencyGraph::with_edges(3, &[(0, 1), (1, 1), (1, 2)]);
        assert_eq!(GreedySolver.solve(&g), vec![(1, 1)]);
        assert_eq!(GreedyBucketSolver.solve(&g), vec![(1, 1)]);
    }

    #[test]
    fn bucket_variant_matches_scan_variant() {
        let g = AdjacencyGraph::with_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (5, 0), (1, 4), (4, 1)],
        );
        assert_eq!(greedy_bucket_order(&g), greedy_order(&g));
        assert_eq!(GreedyBucketSolver.solve(&g), GreedySolver.solve(&g));
    }
}
