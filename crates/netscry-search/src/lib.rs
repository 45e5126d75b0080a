//! Netscry Search - The probing and classification engine.
//!
//! This crate coordinates one HTTP probe per catalog site for each
//! searched identifier, classifies each response by text-pattern matching,
//! and aggregates the outcomes into a deterministic result tree.
//!
//! # Features
//!
//! - Bounded concurrent probing (at most 8 sites in flight per category)
//! - Per-site failure isolation: timeouts, transport errors, and probe
//!   panics are encoded as result data, never propagated
//! - Deterministic output ordering regardless of completion order
//! - Configuration errors fail fast before any probing begins
//!
//! # Example
//!
//! ```rust,ignore
//! use netscry_catalog::{AgentPool, Catalog};
//! use netscry_search::SearchOrchestrator;
//! use std::sync::Arc;
//!
//! let catalog = Catalog::load("catalogs/usernames.json")?;
//! let agents = Arc::new(AgentPool::load("catalogs/user_agents.txt")?);
//!
//! let orchestrator = SearchOrchestrator::new()?;
//! let results = orchestrator
//!     .search(&["alice".to_string()], &agents, &catalog, false)
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod dispatcher;
pub mod error;
pub mod orchestrator;
pub mod prober;

// Re-export commonly used types
pub use dispatcher::{run_category, MAX_CONCURRENT_PROBES};
pub use error::{Result, SearchError};
pub use orchestrator::SearchOrchestrator;
pub use prober::{probe_site, PROBE_TIMEOUT};
