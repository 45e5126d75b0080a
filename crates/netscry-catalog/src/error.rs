//! Error types for the catalog subsystem.

use thiserror::Error;

/// Errors that can occur while loading the site catalog or agent pool.
///
/// These surface before any probing begins and are never produced
/// mid-search.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file not found
    #[error("catalog file not found at {path}")]
    NotFound {
        /// Path where the catalog was expected
        path: String,
    },

    /// User-agent file not found
    #[error("user agent file not found at {path}")]
    AgentsNotFound {
        /// Path where the agent list was expected
        path: String,
    },

    /// Failed to parse the catalog JSON document
    #[error("failed to parse catalog JSON in {path}: {source}")]
    Parse {
        /// Path to the catalog file
        path: String,
        /// JSON parse error
        #[source]
        source: serde_json::Error,
    },

    /// Document parsed but carries an unrecognized top-level structure
    #[error("unrecognized catalog schema in {path}: {reason}")]
    Schema {
        /// Path to the catalog file
        path: String,
        /// What was wrong with the structure
        reason: String,
    },

    /// I/O error while reading a source file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
