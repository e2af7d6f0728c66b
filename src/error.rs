//! Error types for xano-developer-mcp.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while resolving or reading documentation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// The requested topic does not exist in the registry.
    ///
    /// Carries the full list of valid identifiers so callers can
    /// self-correct; error text built from this variant must include them.
    #[error("unknown topic \"{requested}\". Available topics: {}", available.join(", "))]
    UnknownTopic {
        /// The topic name as the caller supplied it.
        requested: String,
        /// Every registered topic identifier, in declaration order.
        available: Vec<String>,
    },

    /// A topic's backing file could not be read.
    #[error("failed to read documentation file: {path}")]
    ReadError {
        /// Path to the backing file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
