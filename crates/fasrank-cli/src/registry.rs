//! Name-keyed solver registry.

use fasrank_core::SolverConfig;
use fasrank_core::graph::LineGraphStrategy;
use fasrank_core::solver::{
    FasSolver, GreedyBucketSolver, GreedySolver, InsertionOrderSolver, PageRankSolver,
};
use serde::Serialize;

/// Default solver for `fasrank solve`.
pub const DEFAULT_SOLVER: &str = "page_rank";

/// One registry entry as listed by `fasrank solvers`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolverEntry {
    pub name: &'static str,
    pub description: &'static str,
}

pub const SOLVERS: [SolverEntry; 5] = [
    SolverEntry {
        name: "sort",
        description: "insertion ordering (SortFAS)",
    },
    SolverEntry {
        name: "greedy",
        description: "Eades-Lin-Smyth greedy ordering",
    },
    SolverEntry {
        name: "greedy_opt",
        description: "greedy ordering with bucketed degrees",
    },
    SolverEntry {
        name: "page_rank",
        description: "line-graph PageRank, configured line-graph strategy",
    },
    SolverEntry {
        name: "page_rank_lb",
        description: "line-graph PageRank, nested-loop line-graph build",
    },
];

/// Names accepted by [`build`], in listing order.
pub fn names() -> impl Iterator<Item = &'static str> {
    SOLVERS.iter().map(|entry| entry.name)
}

/// Instantiate the solver registered as `name`.
///
/// `PageRank`-based solvers take their parameters from `config`.
pub fn build(name: &str, config: &SolverConfig) -> Option<Box<dyn FasSolver>> {
    let solver: Box<dyn FasSolver> = match name {
        "sort" => Box::new(InsertionOrderSolver),
        "greedy" => Box::new(GreedySolver),
        "greedy_opt" => Box::new(GreedyBucketSolver),
        "page_rank" => Box::new(PageRankSolver::from_config(config)),
        "page_rank_lb" => Box::new(
            PageRankSolver::from_config(config).with_strategy(LineGraphStrategy::Nested),
        ),
        _ => return None,
    };
    Some(solver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_builds() {
        let config = SolverConfig::default();
        for name in names() {
            assert!(build(name, &config).is_some(), "{name} should build");
        }
    }

    #[test]
    fn default_solver_is_registered() {
        assert!(names().any(|name| name == DEFAULT_SOLVER));
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(build("simplex", &SolverConfig::default()).is_none());
    }

    #[test]
    fn core_names_match_registry_keys() {
        let config = SolverConfig::default();
        for name in ["sort", "greedy", "greedy_opt", "page_rank"] {
            let solver = build(name, &config).expect("registered");
            assert_eq!(solver.name(), name);
        }
        let lb = build("page_rank_lb", &config).expect("registered");
        assert_eq!(lb.name(), "page_rank");
    }
}
