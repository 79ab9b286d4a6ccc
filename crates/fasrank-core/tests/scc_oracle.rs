//! Structural checks against `petgraph` as an oracle.
//!
//! - Cyclic components match `petgraph::algo::tarjan_scc` filtered to blocks
//!   with a cycle.
//! - Component subgraphs hold exactly the parent edges between members.
//! - Line graphs have one node per edge and `Σ in(v) · out(v)` edges.
//! - `is_acyclic` matches `petgraph::algo::is_cyclic_directed`.

use std::collections::BTreeSet;

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use proptest::prelude::*;

use fasrank_core::graph::{
    AdjacencyGraph, LineGraphStrategy, is_acyclic, line_graph, strongly_connected_components,
};

fn arb_graph() -> impl Strategy<Value = AdjacencyGraph> {
    (1_usize..16).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..48)
            .prop_map(move |edges| AdjacencyGraph::with_edges(n, &edges))
    })
}

fn oracle_components(graph: &AdjacencyGraph) -> BTreeSet<BTreeSet<usize>> {
    let pg = graph.to_petgraph();
    tarjan_scc(&pg)
        .into_iter()
        .map(|block| block.into_iter().map(|ix| ix.index()).collect::<BTreeSet<_>>())
        .filter(|block| {
            block.len() > 1 || block.iter().all(|&v| graph.has_edge(v, v))
        })
        .collect()
}

fn our_components(graph: &AdjacencyGraph) -> BTreeSet<BTreeSet<usize>> {
    strongly_connected_components(graph)
        .into_iter()
        .map(|c| c.vertices.into_iter().collect())
        .collect()
}

#[test]
fn two_cycles_joined_by_bridge() {
    let g = AdjacencyGraph::with_edges(6, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 4), (4, 2), (5, 5)]);
    assert_eq!(our_components(&g), oracle_components(&g));
    assert_eq!(our_components(&g).len(), 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_components_match_petgraph(g in arb_graph()) {
        prop_assert_eq!(our_components(&g), oracle_components(&g));
    }

    #[test]
    fn prop_component_edges_are_induced(g in arb_graph()) {
        for component in strongly_connected_components(&g) {
            let members: BTreeSet<usize> = component.vertices.iter().copied().collect();
            let expected: BTreeSet<(usize, usize)> = g
                .edges()
                .filter(|(from, to)| members.contains(from) && members.contains(to))
                .collect();
            let mapped: BTreeSet<(usize, usize)> = component
                .graph
                .edges()
                .map(|edge| component.original_edge(edge))
                .collect();
            prop_assert_eq!(mapped, expected);
        }
    }

    #[test]
    fn prop_line_graph_sizes(g in arb_graph()) {
        let in_deg = g.in_degrees();
        let expected: usize = (0..g.vertex_count())
            .map(|v| in_deg[v] * g.out_degree(v))
            .sum();
        for strategy in [
            LineGraphStrategy::Nested,
            LineGraphStrategy::BreadthFirst,
            LineGraphStrategy::DepthFirst,
        ] {
            let line = line_graph(&g, strategy);
            prop_assert_eq!(line.graph.vertex_count(), g.edge_count());
            prop_assert_eq!(line.graph.edge_count(), expected);
        }
    }

    #[test]
    fn prop_line_graph_strategies_identical(g in arb_graph()) {
        let base = line_graph(&g, LineGraphStrategy::Nested);
        for strategy in [LineGraphStrategy::BreadthFirst, LineGraphStrategy::DepthFirst] {
            prop_assert_eq!(&line_graph(&g, strategy), &base);
        }
    }

    #[test]
    fn prop_is_acyclic_matches_petgraph(g in arb_graph()) {
        prop_assert_eq!(is_acyclic(&g), !is_cyclic_directed(&g.to_petgraph()));
    }
}
