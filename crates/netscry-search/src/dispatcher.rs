//! Bounded concurrent dispatch of probes within one category.
//!
//! All sites of a category are probed with at most [`MAX_CONCURRENT_PROBES`]
//! requests in flight. Each probe runs in its own task so an unexpected
//! fault is captured at the join boundary and converted into an
//! `error`-status result instead of aborting the batch.

use crate::prober::probe_site;
use futures::stream::{FuturesUnordered, StreamExt};
use netscry_catalog::{AgentPool, SiteDefinition};
use netscry_core::{CategoryResult, SiteResult};
use reqwest::Client;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::error;

/// Maximum number of probes in flight within one category.
pub const MAX_CONCURRENT_PROBES: usize = 8;

/// Probe every site in one category for one identifier and collect the
/// outcomes, sorted by site name case-insensitively ascending.
///
/// The category is complete only when every probe has reported; a single
/// straggler delays the category but not its siblings.
pub async fn run_category(
    client: &Client,
    identifier: &str,
    category_name: &str,
    sites: &BTreeMap<String, SiteDefinition>,
    agents: &Arc<AgentPool>,
    verbose: bool,
) -> CategoryResult {
    let mut in_flight = FuturesUnordered::new();
    let mut results: Vec<SiteResult> = Vec::with_capacity(sites.len());

    for (site_name, definition) in sites {
        let client = client.clone();
        let identifier = identifier.to_string();
        let name = site_name.clone();
        let definition = definition.clone();
        let agents = Arc::clone(agents);

        let handle = tokio::spawn(async move {
            probe_site(&client, &identifier, &name, &definition, &agents, verbose).await
        });

        let task_name = site_name.clone();
        in_flight.push(async move { (task_name, handle.await) });

        // Respect concurrency limit
        while in_flight.len() >= MAX_CONCURRENT_PROBES {
            if let Some(outcome) = in_flight.next().await {
                results.push(settle(outcome));
            }
        }
    }

    // Collect remaining results
    while let Some(outcome) = in_flight.next().await {
        results.push(settle(outcome));
    }

    results.sort_by_key(|result| result.name.to_lowercase());

    CategoryResult {
        name: category_name.to_string(),
        sites: results,
    }
}

/// Convert a joined probe outcome into a result, capturing task faults.
fn settle((site_name, joined): (String, Result<SiteResult, JoinError>)) -> SiteResult {
    match joined {
        Ok(result) => result,
        Err(e) => {
            error!(site = %site_name, error = %e, "probe task failed");
            SiteResult::probe_fault(site_name, format!("Probe task failed: {e}"))
        }
    }
}
