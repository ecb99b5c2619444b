//! Failure taxonomy for repository operations.
//!
//! Four outcomes cover every failure: configuration missing (no request
//! attempted), local validation failed (no request attempted), network
//! failure (no response received), API error (response received with a
//! non-success status).  Nothing is fatal; each operation can simply be
//! retried by the caller.

use matcat_core::error::ValidationError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A required base URL is not configured.  Reported before any
    /// request is attempted.
    #[error("Missing configuration: {name} is not set")]
    Config { name: &'static str },

    /// Local schema validation failed.  No request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced a response (DNS failure, connection
    /// refused, timeout).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status.  `message` is the
    /// `message` or `detail` field of the JSON error body when present.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}
