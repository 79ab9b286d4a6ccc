//! Ranking metrics over graphs.
//!
//! Only `PageRank` lives here today. It is used by
//! [`crate::solver::pagerank::PageRankSolver`] to score line-graph nodes,
//! i.e. the edges of a cyclic component.
//!
//! ```rust
//! use fasrank_core::graph::AdjacencyGraph;
//! use fasrank_core::metrics::pagerank::{PageRankConfig, pagerank};
//!
//! let g = AdjacencyGraph::with_edges(2, &[(0, 1), (1, 0)]);
//! let result = pagerank(&g, &PageRankConfig::default());
//! assert!((result.total() - 1.0).abs() < 1e-9);
//! ```

pub mod pagerank;

pub use pagerank::{PageRankConfig, PageRankResult, pagerank};
