//! Error types for the search engine.
//!
//! Only configuration-stage failures surface as errors; everything that
//! goes wrong during probing is encoded into the result tree instead.

use thiserror::Error;

/// Errors that can abort a search before any probing happens.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The loaded agent pool holds no usable `User-Agent` strings
    #[error("user agent pool is empty; at least one agent is required before probing")]
    EmptyAgentPool,

    /// Failed to construct the shared HTTP client
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
