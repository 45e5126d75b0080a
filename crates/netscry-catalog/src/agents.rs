//! User-agent pool loading and selection.
//!
//! The pool is read once per run and shared read-only across all probes;
//! each probe picks one agent string uniformly at random for its
//! `User-Agent` header.

use crate::error::{CatalogError, Result};
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Ordered, read-only sequence of `User-Agent` strings.
///
/// The loader accepts an empty file; the search orchestrator rejects an
/// empty pool before dispatching any probes.
#[derive(Debug, Clone)]
pub struct AgentPool {
    agents: Vec<String>,
}

impl AgentPool {
    /// Load agents from a newline-delimited text file, trimming lines and
    /// discarding blank ones.
    ///
    /// # Errors
    /// Returns [`CatalogError::AgentsNotFound`] if the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CatalogError::AgentsNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let pool = Self::from_text(&contents);

        info!(count = pool.len(), path = %path.display(), "loaded user agent pool");

        Ok(pool)
    }

    /// Build a pool from newline-delimited text.
    #[must_use]
    pub fn from_text(contents: &str) -> Self {
        let agents = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();

        Self { agents }
    }

    /// Pick one agent uniformly at random, or `None` for an empty pool.
    #[must_use]
    pub fn pick(&self) -> Option<&str> {
        if self.agents.is_empty() {
            return None;
        }
        let idx = rand::thread_rng().gen_range(0..self.agents.len());
        Some(&self.agents[idx])
    }

    /// Number of agents in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the pool holds no agents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All agents, in file order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.agents
    }
}
