//! Error types for reference checking.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a reference check before any URL is fetched.
///
/// Per-URL failures are not errors; they are reported as
/// [`UrlStatus`](crate::UrlStatus) values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RefCheckError {
    /// The reference document could not be read.
    #[error("failed to read reference document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type alias for reference checking.
pub type Result<T> = std::result::Result<T, RefCheckError>;
