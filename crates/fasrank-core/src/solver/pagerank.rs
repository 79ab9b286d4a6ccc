//! `PageRank`-guided feedback arc selection.
//!
//! # Algorithm
//!
//! ```text
//! loop:
//!     components = cyclic SCCs of the working graph
//!     if none: done
//!     for each component:
//!         L  = line graph of the component
//!         r  = PageRank(L)
//!         e  = edge of the top-ranked line node (lowest id on ties)
//!         remove e from the working graph, append it to the result
//! ```
//!
//! Every pass removes at least one edge from each cyclic component, so the
//! loop ends after at most `E` passes. Components are recomputed from
//! scratch each pass because a removal can split or dissolve them.

use tracing::{debug, instrument, trace};

use crate::config::SolverConfig;
use crate::graph::adjacency::{AdjacencyGraph, Edge};
use crate::graph::line::{LineGraphStrategy, line_graph};
use crate::graph::scc::{Component, strongly_connected_components};
use crate::metrics::pagerank::{PageRankConfig, pagerank};
use crate::solver::{FasSolver, FeedbackArcSet};

/// Orchestrates SCC decomposition, line-graph ranking and edge removal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageRankSolver {
    /// Parameters for each line-graph `PageRank` run.
    pub pagerank: PageRankConfig,
    /// Traversal used to build line graphs. Does not affect the result.
    pub strategy: LineGraphStrategy,
}

impl PageRankSolver {
    /// Solver with explicit parameters.
    #[must_use]
    pub const fn new(pagerank: PageRankConfig, strategy: LineGraphStrategy) -> Self {
        Self { pagerank, strategy }
    }

    /// Solver configured from a loaded [`SolverConfig`].
    #[must_use]
    pub const fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.pagerank, config.line_graph.strategy)
    }

    /// Same solver with a different line-graph strategy.
    #[must_use]
    pub const fn with_strategy(self, strategy: LineGraphStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// Pick the edge of `component` with the highest line-graph `PageRank`,
    /// expressed in the component's parent-graph indices.
    ///
    /// # Panics
    ///
    /// Panics if the component has no edges. Decomposition only yields
    /// cyclic components, which always have at least one.
    #[must_use]
    pub fn select_edge(&self, component: &Component) -> Edge {
        let line = line_graph(&component.graph, self.strategy);
        let ranks = pagerank(&line.graph, &self.pagerank);
        let top = ranks
            .top()
            .expect("cyclic component has at least one edge");
        trace!(
            line_nodes = line.edges.len(),
            iterations = ranks.iterations,
            score = ranks.scores[top],
            "component ranked"
        );
        component.original_edge(line.edge(top))
    }
}

impl FasSolver for PageRankSolver {
    fn name(&self) -> &'static str {
        "page_rank"
    }

    #[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &AdjacencyGraph) -> FeedbackArcSet {
        let mut work = graph.clone();
        let mut removed = FeedbackArcSet::new();
        let mut pass = 0_usize;

        loop {
            let components = strongly_connected_components(&work);
            if components.is_empty() {
                break;
            }
            pass += 1;

            for component in &components {
                let (from, to) = self.select_edge(component);
                let present = work.remove_edge(from, to);
                debug_assert!(present, "selected edge ({from}, {to}) missing from graph");
                removed.push((from, to));
            }

            debug!(
                pass,
                components = components.len(),
                removed = removed.len(),
                remaining_edges = work.edge_count(),
                "pagerank pass"
            );
        }

        debug!(passes = pass, fas_size = removed.len(), "pagerank solver done");
        removed
    }
}
