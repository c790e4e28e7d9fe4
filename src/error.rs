//! Error types for lichen

use std::path::PathBuf;

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by the library
///
/// There are no retries anywhere: every error aborts the operation that
/// produced it and propagates to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or contradictory configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// A branch or commit the workflow depends on does not exist remotely
    #[error("not found: {0}")]
    NotFound(String),

    /// A remote API call failed
    #[error("remote API error: {0}")]
    Remote(String),

    /// A local file named in the file list could not be read
    #[error("cannot read local file {}: {reason}", .path.display())]
    FileNotFound {
        /// Path as given in the file specifier
        path: PathBuf,
        /// Underlying I/O error text
        reason: String,
    },

    /// A non-force reference update was rejected because the reference moved
    #[error("reference update conflict: {0}")]
    Conflict(String),

    /// Credential acquisition or verification failed
    #[error("authentication error: {0}")]
    Auth(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote(err.to_string())
    }
}
