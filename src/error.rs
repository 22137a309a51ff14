//! Error types for the resolution pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad options, empty ASN set or unreadable list file.
    #[error("usage error: {0}")]
    Usage(String),

    /// Unknown output format.
    #[error("unknown output format '{0}' (expected cidr, csv or json)")]
    Format(String),

    /// Registry query failed or returned a non-zero status.
    #[error("query for {asn} ({family}) at {server} failed: {reason}")]
    Query {
        asn: String,
        family: String,
        server: String,
        reason: String,
    },

    /// One or more destinations could not be written.
    #[error("output error: {0}")]
    Output(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Query { .. } => 2,
            _ => 1,
        }
    }
}
