//! Netscry Core - Foundation crate for the netscry identifier search tool.
//!
//! This crate provides the shared result model, error handling, and
//! configuration management that the other netscry crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - The probe result tree (`ProbeStatus`, `SiteResult`,
//!   `CategoryResult`, `TargetResult`)
//!
//! # Example
//!
//! ```rust
//! use netscry_core::{ProbeStatus, SiteResult};
//!
//! let result = SiteResult::skipped("example", None);
//! assert_eq!(result.status, ProbeStatus::Skipped);
//! assert!(result.response_code.is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, CatalogsConfig, OutputConfig};
pub use error::{ConfigError, ConfigResult};
pub use types::{CategoryResult, ProbeStatus, SiteResult, TargetResult};
