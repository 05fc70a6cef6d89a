//! Error types for the updater
//!
//! One error type per concern:
//! - `FeedError`: fetching or parsing the Medium feed (transient, the run is skipped)
//! - `PatchError`: README marker problems (fatal)
//! - `ConfigError`: invalid environment configuration (fatal)
//! - `AppError`: fatal failures of an update run

use std::path::PathBuf;

use thiserror::Error;

/// Feed retrieval errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed feed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Document patching errors
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("README markers not found (expected `{start}` followed by `{end}`)")]
    MarkersNotFound { start: String, end: String },

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Medium username must not be empty")]
    EmptyUsername,
}

/// Application errors - anything that aborts an update run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Patch(#[from] PatchError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
