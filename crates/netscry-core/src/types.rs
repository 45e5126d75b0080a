//! The probe result tree shared across the netscry crates.
//!
//! The search engine produces these types and presentation consumers
//! (console, HTML report) read them. None of them carry presentation
//! markup; styling is mapped from [`ProbeStatus`] at render time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome of probing one site for one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// A configured `check_text` pattern matched a 200 response
    Found,
    /// A `not_found_text` pattern matched, or the site answered non-200
    NotFound,
    /// 200 response matching neither pattern list
    Possible,
    /// Site definition unusable (no URL template or no check texts); no
    /// network call was made
    Skipped,
    /// The request exceeded the probe timeout
    Timeout,
    /// Transport failure or an unexpected probe fault
    Error,
}

impl ProbeStatus {
    /// Stable snake_case identifier, matching the serde representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::Possible => "possible",
            Self::Skipped => "skipped",
            Self::Timeout => "timeout",
            Self::Error => "error",
        }
    }

    /// Whether this status indicates a (potential) account hit.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Found | Self::Possible)
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of probing a single site for a single identifier.
///
/// Created once by the prober (or the dispatcher, for faulted probes) and
/// never mutated afterward. `response_code` is present if and only if an
/// HTTP response was actually received; `skipped`, `timeout`, and `error`
/// results carry no code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteResult {
    /// Site name, unique within its category
    pub name: String,
    /// Resolved probe URL, absent when the definition had no template
    pub url: Option<String>,
    /// Classification outcome
    pub status: ProbeStatus,
    /// HTTP status code, present only when a response was received
    pub response_code: Option<u16>,
    /// Human-readable summary of the outcome
    pub message: String,
    /// `check_text` patterns that matched; populated only in verbose mode
    #[serde(default)]
    pub matched_check_texts: Vec<String>,
    /// `not_found_text` patterns that matched; populated only in verbose mode
    #[serde(default)]
    pub matched_not_found_texts: Vec<String>,
}

impl SiteResult {
    /// Result for a site whose definition was unusable. No network call
    /// occurred.
    #[must_use]
    pub fn skipped(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
            status: ProbeStatus::Skipped,
            response_code: None,
            message: "URL or check text missing.".to_string(),
            matched_check_texts: Vec::new(),
            matched_not_found_texts: Vec::new(),
        }
    }

    /// Result for a probe that exceeded the request timeout.
    #[must_use]
    pub fn timed_out(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
            status: ProbeStatus::Timeout,
            response_code: None,
            message: "Timeout while checking site.".to_string(),
            matched_check_texts: Vec::new(),
            matched_not_found_texts: Vec::new(),
        }
    }

    /// Result for a probe that failed at the transport level before any
    /// response was received.
    #[must_use]
    pub fn transport_error(
        name: impl Into<String>,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
            status: ProbeStatus::Error,
            response_code: None,
            message: message.into(),
            matched_check_texts: Vec::new(),
            matched_not_found_texts: Vec::new(),
        }
    }

    /// Result for a probe task that faulted unexpectedly (e.g. panicked).
    /// Used at the dispatcher boundary so one site cannot abort a batch.
    #[must_use]
    pub fn probe_fault(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            status: ProbeStatus::Error,
            response_code: None,
            message: message.into(),
            matched_check_texts: Vec::new(),
            matched_not_found_texts: Vec::new(),
        }
    }
}

/// Site results for one category of one identifier, sorted by site name
/// (case-insensitive) ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category name, unique within its target
    pub name: String,
    /// Per-site outcomes in deterministic order
    pub sites: Vec<SiteResult>,
}

impl CategoryResult {
    /// Number of sites in this category whose status counts as a hit.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.sites.iter().filter(|s| s.status.is_hit()).count()
    }
}

/// Full result tree for one searched identifier, with categories in
/// catalog iteration order. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResult {
    /// The identifier that was searched (trimmed)
    pub target: String,
    /// Per-category results in catalog order
    pub categories: Vec<CategoryResult>,
}

impl TargetResult {
    /// Total number of site probes recorded for this identifier.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.categories.iter().map(|c| c.sites.len()).sum()
    }

    /// Total hits across all categories.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.categories.iter().map(CategoryResult::hit_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_serde() {
        let json = serde_json::to_string(&ProbeStatus::NotFound).expect("serialize status");
        assert_eq!(json, "\"not_found\"");
        assert_eq!(ProbeStatus::NotFound.to_string(), "not_found");
    }

    #[test]
    fn test_status_is_hit() {
        assert!(ProbeStatus::Found.is_hit());
        assert!(ProbeStatus::Possible.is_hit());
        assert!(!ProbeStatus::NotFound.is_hit());
        assert!(!ProbeStatus::Skipped.is_hit());
        assert!(!ProbeStatus::Timeout.is_hit());
        assert!(!ProbeStatus::Error.is_hit());
    }

    #[test]
    fn test_constructors_carry_no_response_code() {
        assert!(SiteResult::skipped("a", None).response_code.is_none());
        assert!(SiteResult::timed_out("a", "https://a.test").response_code.is_none());
        assert!(
            SiteResult::transport_error("a", "https://a.test", "network error")
                .response_code
                .is_none()
        );
        assert!(SiteResult::probe_fault("a", "panicked").response_code.is_none());
    }

    #[test]
    fn test_hit_counts() {
        let category = CategoryResult {
            name: "Social".to_string(),
            sites: vec![
                SiteResult {
                    name: "one".to_string(),
                    url: Some("https://one.test/u".to_string()),
                    status: ProbeStatus::Found,
                    response_code: Some(200),
                    message: "Account found.".to_string(),
                    matched_check_texts: Vec::new(),
                    matched_not_found_texts: Vec::new(),
                },
                SiteResult::skipped("two", None),
            ],
        };
        assert_eq!(category.hit_count(), 1);

        let target = TargetResult {
            target: "alice".to_string(),
            categories: vec![category],
        };
        assert_eq!(target.site_count(), 2);
        assert_eq!(target.hit_count(), 1);
    }
}
