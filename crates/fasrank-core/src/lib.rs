#![forbid(unsafe_code)]
//! fasrank-core library.
//!
//! Feedback arc set solvers over presence-only directed graphs. The main
//! solver ranks the edges of every cyclic strongly connected component with
//! `PageRank` on the component's line graph and removes the top edge, until no
//! cycle remains.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums in [`error`] for recoverable failures;
//!   `anyhow::Result` for config loading.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`). No subscriber is
//!   installed here.

pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod solver;

pub use config::SolverConfig;
pub use graph::{AdjacencyGraph, Edge};
pub use solver::{FasSolver, FeedbackArcSet};
