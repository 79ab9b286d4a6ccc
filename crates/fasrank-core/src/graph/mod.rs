//! Graph storage and structural transforms used by the solvers.
//!
//! # Pipeline
//!
//! ```text
//! AdjacencyGraph (may contain cycles)
//!        ↓  scc::strongly_connected_components()
//! Vec<Component> (cyclic SCCs, local indices + vertex map)
//!        ↓  line::line_graph()
//! LineGraph (one node per component edge + edge table)
//!        ↓  metrics::pagerank::pagerank()
//! per-edge scores
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use fasrank_core::graph::{AdjacencyGraph, LineGraphStrategy, line_graph, strongly_connected_components};
//!
//! let g = AdjacencyGraph::with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
//! let comps = strongly_connected_components(&g);
//! assert_eq!(comps.len(), 1);
//!
//! let lg = line_graph(&comps[0].graph, LineGraphStrategy::default());
//! assert_eq!(lg.edges.len(), 3);
//! ```

pub mod adjacency;
pub mod line;
pub mod scc;

// Re-export primary types at module level for convenience.
pub use adjacency::{AdjacencyGraph, Edge, EdgeKey};
pub use line::{LineGraph, LineGraphStrategy, line_graph};
pub use scc::{Component, is_acyclic, strongly_connected_components};
