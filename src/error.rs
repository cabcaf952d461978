//! Error types for the triage_pdf crate.
//!
//! Rendering itself cannot fail; these cover the edges around it: reading
//! requests, delivering files and, with the `verify` feature, reloading output.

use thiserror::Error;

/// Primary error type for request loading and delivery.
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid download filename {0:?}: expected a single file name")]
    InvalidFilename(String),

    #[cfg(feature = "verify")]
    #[error("failed to reload rendered PDF: {0}")]
    Reload(#[from] lopdf::Error),

    #[cfg(feature = "verify")]
    #[error("rendered PDF contains no page")]
    MissingPage,
}

/// Result type alias for triage_pdf operations.
pub type Result<T> = std::result::Result<T, Error>;
