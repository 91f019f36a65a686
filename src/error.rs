//! Error types for credential derivation and export.
//!
//! The CLI layer wraps these in `anyhow`; library callers can match on them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredgenError {
    #[error("secure random source unavailable: {0}")]
    EntropySource(String),

    #[error("salt cannot be empty")]
    EmptySalt,

    #[error("encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("malformed credentials document: {0}")]
    MalformedDocument(String),

    #[error("malformed client snippet: {0}")]
    MalformedSnippet(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-fatal diagnostic for a caller-supplied salt of unexpected length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltFormatWarning {
    pub expected: usize,
    pub actual: usize,
}

impl std::fmt::Display for SaltFormatWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "salt should be {} characters (got {}); using provided salt anyway",
            self.expected, self.actual
        )
    }
}

pub type Result<T> = std::result::Result<T, CredgenError>;
