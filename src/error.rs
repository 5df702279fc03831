//! Error types for rs-doczones.
//!
//! This module defines the error types returned by extraction, configuration,
//! and corpus-processing operations. Classification itself never fails: an
//! unmatched paragraph falls back to the `body` zone.

/// Error type for document-zoning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a document or writing a result table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A rule pattern in a configured rule table failed to compile.
    #[error("invalid pattern for rule '{label}': {source}")]
    Pattern {
        /// Zone label of the offending rule.
        label: String,
        /// Underlying regex compilation error.
        source: regex::Error,
    },

    /// A rule-table configuration file could not be deserialized.
    #[error("rule configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A string did not name a member of the closed zone-label set.
    #[error("unknown zone label: {0}")]
    UnknownZone(String),
}

/// Result type alias for document-zoning operations.
pub type Result<T> = std::result::Result<T, Error>;
