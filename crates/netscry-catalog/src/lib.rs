//! Netscry Catalog - Site catalog and user-agent pool loading.
//!
//! This crate owns the read-only inputs of a search run: the JSON site
//! catalog (grouped by category) and the newline-delimited `User-Agent`
//! pool. Both are loaded once per run and shared by reference with all
//! concurrent probes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod agents;
pub mod catalog;
pub mod definition;
pub mod error;

// Re-export commonly used types
pub use agents::AgentPool;
pub use catalog::{Catalog, CatalogKind};
pub use definition::{SiteDefinition, IDENTIFIER_PLACEHOLDER};
pub use error::{CatalogError, Result};
