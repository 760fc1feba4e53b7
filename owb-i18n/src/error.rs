//! Error types for dictionary and record handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, compiling or persisting dictionaries and records.
///
/// Phrase resolution itself never fails: an unmatched phrase falls through to
/// the untranslated path instead of producing an error.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON from {path}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialise JSON for {path}")]
    SerialiseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid regex rule '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for dictionary and record operations
pub type I18nResult<T> = Result<T, I18nError>;
