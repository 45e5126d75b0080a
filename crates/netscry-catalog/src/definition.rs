//! Site definition types.
//!
//! One [`SiteDefinition`] describes how to probe a single site: the URL
//! template the identifier is substituted into, and the text patterns that
//! classify the response. Definitions are immutable once loaded.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the searched identifier in URL templates.
pub const IDENTIFIER_PLACEHOLDER: &str = "{identifier}";

/// One entry in the site catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDefinition {
    /// URL template containing the `{identifier}` placeholder. A site
    /// without a template is reported as skipped by the prober.
    #[serde(rename = "url", default)]
    pub url_template: Option<String>,

    /// Category the site is grouped under
    #[serde(default = "default_category")]
    pub category: String,

    /// Substrings whose presence in a 200 response indicates a match
    #[serde(default)]
    pub check_text: Vec<String>,

    /// Substrings whose presence indicates the identifier is absent
    #[serde(default)]
    pub not_found_text: Vec<String>,
}

fn default_category() -> String {
    "Other".to_string()
}

impl SiteDefinition {
    /// Substitute the identifier into the URL template.
    ///
    /// Returns `None` when the definition has no template. A template
    /// without the placeholder is returned unchanged.
    #[must_use]
    pub fn resolve_url(&self, identifier: &str) -> Option<String> {
        self.url_template
            .as_ref()
            .map(|template| template.replace(IDENTIFIER_PLACEHOLDER, identifier))
    }

    /// Whether the prober can issue a request for this definition.
    ///
    /// Requires both a URL template and at least one `check_text` pattern;
    /// anything else is reported as skipped without a network call.
    #[must_use]
    pub fn is_probeable(&self) -> bool {
        self.url_template.is_some() && !self.check_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(url: Option<&str>, check_text: &[&str]) -> SiteDefinition {
        SiteDefinition {
            url_template: url.map(String::from),
            category: default_category(),
            check_text: check_text.iter().map(ToString::to_string).collect(),
            not_found_text: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_url_substitutes_identifier() {
        let def = definition(Some("https://example.test/u/{identifier}"), &["Profile"]);
        assert_eq!(
            def.resolve_url("alice"),
            Some("https://example.test/u/alice".to_string())
        );
    }

    #[test]
    fn test_resolve_url_without_template() {
        let def = definition(None, &["Profile"]);
        assert_eq!(def.resolve_url("alice"), None);
    }

    #[test]
    fn test_resolve_url_without_placeholder_is_unchanged() {
        let def = definition(Some("https://example.test/search"), &["Profile"]);
        assert_eq!(
            def.resolve_url("alice"),
            Some("https://example.test/search".to_string())
        );
    }

    #[test]
    fn test_is_probeable() {
        assert!(definition(Some("https://example.test/{identifier}"), &["x"]).is_probeable());
        assert!(!definition(None, &["x"]).is_probeable());
        assert!(!definition(Some("https://example.test/{identifier}"), &[]).is_probeable());
    }

    #[test]
    fn test_deserialize_defaults() {
        let def: SiteDefinition =
            serde_json::from_str(r#"{"url": "https://example.test/{identifier}"}"#)
                .expect("parse minimal definition");
        assert_eq!(def.category, "Other");
        assert!(def.check_text.is_empty());
        assert!(def.not_found_text.is_empty());
    }
}
