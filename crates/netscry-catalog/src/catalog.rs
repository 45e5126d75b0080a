//! Catalog loading from JSON documents.
//!
//! A catalog document carries exactly one of two recognized top-level
//! keys, `websites` or `phone_numbers`, mapping site name to definition.
//! Loading groups the sites by category; the grouped structure is
//! read-only afterward and shared by reference with all probes.

use crate::definition::SiteDefinition;
use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Which identifier kind a catalog targets, derived from its top-level key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Loaded from the `websites` key; searched by username
    Usernames,
    /// Loaded from the `phone_numbers` key; searched by phone number
    PhoneNumbers,
}

impl CatalogKind {
    /// The top-level JSON key this kind is recognized by.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Usernames => "websites",
            Self::PhoneNumbers => "phone_numbers",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usernames => f.write_str("username"),
            Self::PhoneNumbers => f.write_str("phone number"),
        }
    }
}

/// Raw document shape before category grouping.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    websites: Option<BTreeMap<String, SiteDefinition>>,
    #[serde(default)]
    phone_numbers: Option<BTreeMap<String, SiteDefinition>>,
}

/// The full set of configured sites, grouped by category.
///
/// Categories and sites are kept in `BTreeMap`s so iteration order is
/// deterministic (ascending by name) across runs; the emitted result tree
/// follows this order.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    categories: BTreeMap<String, BTreeMap<String, SiteDefinition>>,
}

impl Catalog {
    /// Load and group a catalog from a JSON file.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the file does not exist,
    /// [`CatalogError::Parse`] on malformed JSON, and
    /// [`CatalogError::Schema`] when the document does not carry exactly
    /// one recognized top-level key.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CatalogError::NotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents, &path.display().to_string())?;

        info!(
            kind = %catalog.kind,
            categories = catalog.category_count(),
            sites = catalog.site_count(),
            path = %path.display(),
            "loaded site catalog"
        );

        Ok(catalog)
    }

    /// Parse and group a catalog from a JSON string. `origin` names the
    /// source in error messages.
    pub fn from_json(contents: &str, origin: &str) -> Result<Self> {
        let raw: RawCatalog =
            serde_json::from_str(contents).map_err(|source| CatalogError::Parse {
                path: origin.to_string(),
                source,
            })?;

        let (kind, sites) = match (raw.websites, raw.phone_numbers) {
            (Some(sites), None) => (CatalogKind::Usernames, sites),
            (None, Some(sites)) => (CatalogKind::PhoneNumbers, sites),
            (Some(_), Some(_)) => {
                return Err(CatalogError::Schema {
                    path: origin.to_string(),
                    reason: "document carries both 'websites' and 'phone_numbers'; expected exactly one".to_string(),
                });
            }
            (None, None) => {
                return Err(CatalogError::Schema {
                    path: origin.to_string(),
                    reason: "expected a 'websites' or 'phone_numbers' top-level key".to_string(),
                });
            }
        };

        Ok(Self::from_sites(kind, sites))
    }

    /// Build a catalog from already-parsed site definitions, grouping them
    /// by category.
    #[must_use]
    pub fn from_sites(
        kind: CatalogKind,
        sites: impl IntoIterator<Item = (String, SiteDefinition)>,
    ) -> Self {
        let mut categories: BTreeMap<String, BTreeMap<String, SiteDefinition>> = BTreeMap::new();

        for (name, definition) in sites {
            categories
                .entry(definition.category.clone())
                .or_default()
                .insert(name, definition);
        }

        Self { kind, categories }
    }

    /// Which identifier kind this catalog targets.
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Iterate categories and their sites in deterministic order.
    pub fn categories(
        &self,
    ) -> impl Iterator<Item = (&String, &BTreeMap<String, SiteDefinition>)> {
        self.categories.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of sites across all categories.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Whether the catalog holds no sites at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create catalog file");
        file.write_all(contents.as_bytes()).expect("write catalog");
        path
    }

    #[test]
    fn test_load_groups_by_category() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_catalog(
            &dir,
            "usernames.json",
            r#"{
                "websites": {
                    "alpha": {"url": "https://alpha.test/{identifier}", "category": "Social", "check_text": ["Profile"]},
                    "beta": {"url": "https://beta.test/{identifier}", "category": "Forums", "check_text": ["Member"]},
                    "gamma": {"url": "https://gamma.test/{identifier}", "check_text": ["Joined"]}
                }
            }"#,
        );

        let catalog = Catalog::load(&path).expect("load catalog");
        assert_eq!(catalog.kind(), CatalogKind::Usernames);
        assert_eq!(catalog.category_count(), 3);
        assert_eq!(catalog.site_count(), 3);

        let names: Vec<&String> = catalog.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ["Forums", "Other", "Social"]);
    }

    #[test]
    fn test_load_phone_numbers_key() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_catalog(
            &dir,
            "phonenumbers.json",
            r#"{"phone_numbers": {"lookup": {"url": "https://lookup.test/{identifier}", "check_text": ["Listing"]}}}"#,
        );

        let catalog = Catalog::load(&path).expect("load catalog");
        assert_eq!(catalog.kind(), CatalogKind::PhoneNumbers);
        assert_eq!(catalog.site_count(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/usernames.json");
        assert!(matches!(result.unwrap_err(), CatalogError::NotFound { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_catalog(&dir, "broken.json", "not json [[[");

        let result = Catalog::load(&path);
        assert!(matches!(result.unwrap_err(), CatalogError::Parse { .. }));
    }

    #[test]
    fn test_unrecognized_schema() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_catalog(&dir, "odd.json", r#"{"sites": {}}"#);

        let result = Catalog::load(&path);
        assert!(matches!(result.unwrap_err(), CatalogError::Schema { .. }));
    }

    #[test]
    fn test_both_keys_rejected() {
        let result = Catalog::from_json(
            r#"{"websites": {}, "phone_numbers": {}}"#,
            "inline",
        );
        assert!(matches!(result.unwrap_err(), CatalogError::Schema { .. }));
    }

    #[test]
    fn test_duplicate_site_names_in_one_category_keep_last() {
        let catalog = Catalog::from_sites(
            CatalogKind::Usernames,
            vec![
                (
                    "alpha".to_string(),
                    SiteDefinition {
                        url_template: Some("https://old.test/{identifier}".to_string()),
                        category: "Social".to_string(),
                        check_text: vec!["Profile".to_string()],
                        not_found_text: Vec::new(),
                    },
                ),
                (
                    "alpha".to_string(),
                    SiteDefinition {
                        url_template: Some("https://new.test/{identifier}".to_string()),
                        category: "Social".to_string(),
                        check_text: vec!["Profile".to_string()],
                        not_found_text: Vec::new(),
                    },
                ),
            ],
        );

        assert_eq!(catalog.site_count(), 1);
    }
}
