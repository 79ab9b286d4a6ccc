//! Feedback arc set properties shared by every solver.
//!
//! - Removing the returned edges leaves the graph acyclic.
//! - Every returned edge exists in the input, and none repeats.
//! - Acyclic input yields an empty set.
//! - `greedy_opt` agrees exactly with `greedy`.

use std::collections::HashSet;

use proptest::prelude::*;

use fasrank_core::graph::{AdjacencyGraph, Edge, LineGraphStrategy, is_acyclic};
use fasrank_core::solver::{
    FasSolver, GreedyBucketSolver, GreedySolver, InsertionOrderSolver, PageRankSolver,
};

fn all_solvers() -> Vec<Box<dyn FasSolver>> {
    vec![
        Box::new(InsertionOrderSolver),
        Box::new(GreedySolver),
        Box::new(GreedyBucketSolver),
        Box::new(PageRankSolver::default()),
        Box::new(PageRankSolver::default().with_strategy(LineGraphStrategy::Nested)),
    ]
}

fn scenario_a() -> AdjacencyGraph {
    AdjacencyGraph::with_edges(
        7,
        &[(0, 1), (1, 2), (2, 3), (3, 0), (3, 1), (4, 5), (5, 6), (6, 4)],
    )
}

fn assert_valid_fas(name: &str, graph: &AdjacencyGraph, fas: &[Edge]) {
    let unique: HashSet<Edge> = fas.iter().copied().collect();
    assert_eq!(unique.len(), fas.len(), "{name}: repeated edge in {fas:?}");
    for &(from, to) in fas {
        assert!(graph.has_edge(from, to), "{name}: ({from}, {to}) not in graph");
    }
    assert!(
        is_acyclic(&graph.without_edges(fas)),
        "{name}: residual graph still cyclic after removing {fas:?}"
    );
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn scenario_a_every_solver_breaks_both_cycles() {
    let g = scenario_a();
    for solver in all_solvers() {
        let fas = solver.solve(&g);
        assert_valid_fas(solver.name(), &g, &fas);
    }
}

#[test]
fn scenario_a_pagerank_removes_one_edge_per_component() {
    let g = scenario_a();
    let fas = PageRankSolver::default().solve(&g);
    assert_eq!(fas.len(), 2);
    let first: Vec<_> = fas.iter().filter(|&&(from, _)| from <= 3).collect();
    let second: Vec<_> = fas.iter().filter(|&&(from, _)| from >= 4).collect();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn scenario_c_empty_graph() {
    for solver in all_solvers() {
        assert!(solver.solve(&AdjacencyGraph::new(0)).is_empty(), "{}", solver.name());
    }
}

#[test]
fn solver_names_are_distinct() {
    let names: HashSet<&str> = [
        InsertionOrderSolver.name(),
        GreedySolver.name(),
        GreedyBucketSolver.name(),
        PageRankSolver::default().name(),
    ]
    .into_iter()
    .collect();
    assert_eq!(names.len(), 4);
}

#[test]
fn complete_digraph_is_broken() {
    let n = 6;
    let edges: Vec<Edge> = (0..n)
        .flat_map(|u| (0..n).filter(move |&v| v != u).map(move |v| (u, v)))
        .collect();
    let g = AdjacencyGraph::with_edges(n, &edges);
    for solver in all_solvers() {
        let fas = solver.solve(&g);
        assert_valid_fas(solver.name(), &g, &fas);
        // A tournament order keeps exactly half of the 30 edges.
        assert!(fas.len() >= 15, "{}: {} edges", solver.name(), fas.len());
    }
}

// ===========================================================================
// Property Tests
// ===========================================================================

fn arb_graph() -> impl Strategy<Value = AdjacencyGraph> {
    (1_usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..40)
            .prop_map(move |edges| AdjacencyGraph::with_edges(n, &edges))
    })
}

fn arb_dag() -> impl Strategy<Value = AdjacencyGraph> {
    (2_usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..40).prop_map(move |pairs| {
            let edges: Vec<Edge> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.max(b), a.min(b)))
                .collect();
            AdjacencyGraph::with_edges(n, &edges)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_solver_leaves_acyclic_residual(g in arb_graph()) {
        for solver in all_solvers() {
            let fas = solver.solve(&g);
            let residual = g.without_edges(&fas);
            prop_assert!(is_acyclic(&residual), "{} left a cycle", solver.name());
            prop_assert!(fas.iter().all(|&(from, to)| g.has_edge(from, to)));
        }
    }

    #[test]
    fn prop_acyclic_input_yields_empty_set(g in arb_dag()) {
        for solver in all_solvers() {
            prop_assert!(solver.solve(&g).is_empty(), "{} removed edges from a DAG", solver.name());
        }
    }

    #[test]
    fn prop_greedy_variants_agree(g in arb_graph()) {
        prop_assert_eq!(GreedyBucketSolver.solve(&g), GreedySolver.solve(&g));
    }

    #[test]
    fn prop_pagerank_strategy_invariant(g in arb_graph()) {
        let base = PageRankSolver::default().solve(&g);
        for strategy in [LineGraphStrategy::Nested, LineGraphStrategy::DepthFirst] {
            prop_assert_eq!(PageRankSolver::default().with_strategy(strategy).solve(&g), base.clone());
        }
    }

    #[test]
    fn prop_self_loops_always_removed(g in arb_graph()) {
        let loops: Vec<Edge> = g.self_loops().collect();
        for solver in all_solvers() {
            let fas = solver.solve(&g);
            for edge in &loops {
                prop_assert!(fas.contains(edge), "{} kept self-loop {:?}", solver.name(), edge);
            }
        }
    }
}
