//! Search orchestration across identifiers and categories.
//!
//! The orchestrator owns the shared HTTP client and drives the category
//! dispatcher sequentially: identifiers in input order, categories in
//! catalog order. Concurrency exists only within one category, keeping
//! the coordination surface small.

use crate::dispatcher::run_category;
use crate::error::{Result, SearchError};
use crate::prober::PROBE_TIMEOUT;
use netscry_catalog::{AgentPool, Catalog};
use netscry_core::TargetResult;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

/// Drives a full search run and assembles the result tree.
///
/// Construct once and reuse across searches; the underlying `reqwest`
/// client pools connections and carries the fixed probe timeout.
pub struct SearchOrchestrator {
    client: Client,
}

impl SearchOrchestrator {
    /// Create an orchestrator with the default probe client (5 second
    /// request timeout, no retries).
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Create an orchestrator over a caller-supplied client.
    ///
    /// The client's timeout governs every probe; the default constructor
    /// is the right choice outside of tests and embeddings with special
    /// transport needs.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Search every identifier across every catalog site.
    ///
    /// Identifiers are trimmed and blanks discarded; input order is
    /// preserved in the output and duplicates are probed again, not
    /// deduplicated. Fails fast with [`SearchError::EmptyAgentPool`]
    /// before any probing when the agent pool is empty; afterwards the
    /// run always completes with a full result tree, encoding per-site
    /// failures as data.
    pub async fn search(
        &self,
        identifiers: &[String],
        agents: &Arc<AgentPool>,
        catalog: &Catalog,
        verbose: bool,
    ) -> Result<Vec<TargetResult>> {
        if agents.is_empty() {
            return Err(SearchError::EmptyAgentPool);
        }

        let mut results = Vec::new();

        for identifier in identifiers {
            let identifier = identifier.trim();
            if identifier.is_empty() {
                continue;
            }

            info!(
                identifier,
                sites = catalog.site_count(),
                "searching identifier"
            );

            let mut categories = Vec::with_capacity(catalog.category_count());
            for (category_name, sites) in catalog.categories() {
                categories.push(
                    run_category(
                        &self.client,
                        identifier,
                        category_name,
                        sites,
                        agents,
                        verbose,
                    )
                    .await,
                );
            }

            results.push(TargetResult {
                target: identifier.to_string(),
                categories,
            });
        }

        Ok(results)
    }
}
