//! Shared error types for the catalog explorer.
//!
//! The query engine itself never fails: malformed record data degrades to
//! "no match" semantics. Errors only surface at the edges, when a catalog
//! file is read, configuration is parsed, or user-typed names are resolved.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ssd-explorer operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Catalog contents could not be decoded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Facet name not recognised
    #[error("Unknown facet '{0}' (expected brand, category, capacity, interface or nand_type)")]
    UnknownFacet(String),

    /// Sort field not recognised
    #[error("Unknown sort field '{0}' (expected brand, model, throughput or category)")]
    UnknownSortField(String),

    /// Capacity range label not recognised
    #[error("Unknown capacity range '{0}'")]
    UnknownCapacityRange(String),

    /// No record matches the requested identifier
    #[error("No record matches '{0}'")]
    RecordNotFound(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Configuration file is not valid TOML for the config schema
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error wrapping the underlying io error
    pub fn file_system_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
