//! `PageRank` by power iteration.
//!
//! # Overview
//!
//! The feedback arc solver ranks the *line graph* of each cyclic component:
//! a line node is an edge of the component, so a high score marks an edge
//! that many cycles pass through.
//!
//! # Algorithm
//!
//! Standard `PageRank` uses the iterative power method:
//!
//! ```text
//! PR'(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! where `d` is the damping factor (default 0.85). Nodes without out-edges
//! are skipped when distributing rank; their mass is not redistributed.
//! Line graphs of strongly connected components never contain such nodes,
//! so on those inputs the total rank stays at 1.
//!
//! Iteration stops after `max_iter` rounds or once the L1 distance between
//! successive rank vectors drops below `tolerance`.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::error::ConfigError;
use crate::graph::adjacency::AdjacencyGraph;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for `PageRank` computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Convergence threshold: stop when L1 norm of rank delta < tolerance.
    /// Default: 1e-6.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 30.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 30,
        }
    }
}

impl PageRankConfig {
    /// Check that every parameter lies in its valid domain.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Tolerance(self.tolerance));
        }
        if self.max_iter == 0 {
            return Err(ConfigError::MaxIter);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Result of a `PageRank` computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// One score per node, indexed like the input graph.
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the L1 delta fell below tolerance within `max_iter`.
    pub converged: bool,
}

impl PageRankResult {
    /// Index of the highest score. Ties resolve to the lowest index.
    ///
    /// Returns `None` for an empty result.
    #[must_use]
    pub fn top(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &score) in self.scores.iter().enumerate() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Sum of all scores.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// Power iteration
// ---------------------------------------------------------------------------

/// Compute `PageRank` over `graph`.
///
/// # Arguments
///
/// * `graph` — any directed graph; here usually a line graph.
/// * `config` — damping, tolerance and iteration cap.
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[instrument(level = "trace", skip(graph), fields(nodes = graph.vertex_count()))]
pub fn pagerank(graph: &AdjacencyGraph, config: &PageRankConfig) -> PageRankResult {
    let n = graph.vertex_count();

    if n == 0 {
        return PageRankResult {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }

    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;

    // Initialize ranks uniformly.
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        new_ranks.fill(0.0);

        // rank · M: each node splits its rank evenly over its out-edges.
        for (node, &rank) in ranks.iter().enumerate() {
            let out_degree = graph.out_degree(node);
            if out_degree == 0 {
                continue;
            }
            let share = rank / out_degree as f64;
            for next in graph.neighbors(node) {
                new_ranks[next] += share;
            }
        }

        for r in &mut new_ranks {
            *r = config.damping.mul_add(*r, base);
        }

        // Check convergence: L1 norm of delta.
        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    trace!(iterations, converged, "pagerank finished");

    PageRankResult {
        scores: ranks,
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
