//! Error types for the remote classification path.
//!
//! These errors never escape the categorization engine: every variant is
//! absorbed by the keyword fallback. They exist so the engine can log a
//! precise reason before falling back. Task store lookups signal "not found"
//! through `Option`/`bool` return values, not through this module.

use thiserror::Error;

/// Failure of a single remote classification attempt.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Transport-level failure, including connect errors and timeouts.
    #[error("classifier request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("classifier API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted as a completion.
    #[error("malformed classifier response: {0}")]
    MalformedResponse(String),
}

/// Result type for remote classification attempts.
pub type ClassifyResult<T> = std::result::Result<T, ClassifyError>;
