//! Solver configuration loaded from TOML.
//!
//! ```toml
//! [pagerank]
//! damping = 0.85
//! max_iter = 30
//! tolerance = 1e-6
//!
//! [line_graph]
//! strategy = "breadth_first"   # nested | breadth_first | depth_first
//! ```
//!
//! Every key is optional; missing keys and sections fall back to defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::line::LineGraphStrategy;
use crate::metrics::pagerank::PageRankConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub pagerank: PageRankConfig,
    #[serde(default)]
    pub line_graph: LineGraphConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGraphConfig {
    #[serde(default)]
    pub strategy: LineGraphStrategy,
}

impl SolverConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, has unknown value
    /// types, or holds out-of-domain `PageRank` parameters.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("failed to parse solver config")?;
        config
            .pagerank
            .validate()
            .context("invalid [pagerank] section")?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
    }
}
