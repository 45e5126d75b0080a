//! Single-site probing and response classification.
//!
//! One probe issues at most one HTTP GET and always returns a
//! [`SiteResult`]; every failure mode is encoded as data. Classification
//! follows a fixed decision policy: a matching `check_text` on a 200
//! response wins, a matching `not_found_text` comes next, an unmatched 200
//! is reported as `possible`, and any non-200 response counts as
//! `not_found` regardless of body content.

use netscry_catalog::{AgentPool, SiteDefinition};
use netscry_core::{ProbeStatus, SiteResult};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Fixed per-request timeout. The orchestrator configures this on the
/// shared client; probes issue no retries.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe one site for one identifier and classify the response.
///
/// Definitions without a URL template or without `check_text` patterns are
/// reported as `skipped` without touching the network. The matched-pattern
/// vectors on the returned result are populated only when `verbose` is
/// set.
pub async fn probe_site(
    client: &Client,
    identifier: &str,
    site_name: &str,
    definition: &SiteDefinition,
    agents: &AgentPool,
    verbose: bool,
) -> SiteResult {
    let url = match definition.resolve_url(identifier) {
        Some(url) if definition.is_probeable() => url,
        url => {
            debug!(site = site_name, "skipping site: url or check text missing");
            return SiteResult::skipped(site_name, url);
        }
    };

    let mut request = client.get(&url);
    if let Some(agent) = agents.pick() {
        request = request.header(USER_AGENT, agent);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => {
            debug!(site = site_name, "probe timed out");
            return SiteResult::timed_out(site_name, url);
        }
        Err(e) => {
            debug!(site = site_name, error = %e, "probe failed");
            return SiteResult::transport_error(site_name, url, format!("Network error: {e}"));
        }
    };

    let response_code = response.status().as_u16();

    let body = match response.text().await {
        Ok(body) => body.to_lowercase(),
        Err(e) if e.is_timeout() => {
            debug!(site = site_name, "probe timed out reading body");
            return SiteResult::timed_out(site_name, url);
        }
        Err(e) => {
            debug!(site = site_name, error = %e, "probe failed reading body");
            return SiteResult::transport_error(site_name, url, format!("Network error: {e}"));
        }
    };

    let matched_check_texts: Vec<String> = definition
        .check_text
        .iter()
        .filter(|text| body.contains(&text.to_lowercase()))
        .cloned()
        .collect();
    let matched_not_found_texts: Vec<String> = definition
        .not_found_text
        .iter()
        .filter(|text| body.contains(&text.to_lowercase()))
        .cloned()
        .collect();

    let (status, message) = if response_code == 200 {
        if !matched_check_texts.is_empty() {
            (ProbeStatus::Found, "Account found.")
        } else if !matched_not_found_texts.is_empty() {
            (ProbeStatus::NotFound, "No account found.")
        } else {
            (ProbeStatus::Possible, "Possible account found.")
        }
    } else {
        (ProbeStatus::NotFound, "No account found.")
    };

    debug!(
        site = site_name,
        code = response_code,
        status = %status,
        "probed site"
    );

    SiteResult {
        name: site_name.to_string(),
        url: Some(url),
        status,
        response_code: Some(response_code),
        message: message.to_string(),
        matched_check_texts: if verbose {
            matched_check_texts
        } else {
            Vec::new()
        },
        matched_not_found_texts: if verbose {
            matched_not_found_texts
        } else {
            Vec::new()
        },
    }
}
