//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. Errors propagate straight to the caller — the
//! SDK never retries or suppresses internally; retry policy belongs to
//! whoever orchestrates the calls.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The login endpoint rejected the credentials (non-2xx status).
    /// Carries the HTTP status line, e.g. `401 Unauthorized`.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The login endpoint answered 2xx but the body was not parseable
    /// JSON or lacked an `access_token` field.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A required identifier was empty or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A Blue API endpoint answered with a non-2xx status.
    #[error("api error: {status}: {body}")]
    ApiStatus {
        /// HTTP status line, e.g. `404 Not Found`.
        status: String,
        /// Response body text, possibly empty.
        body: String,
    },

    /// Network / transport-layer failure, passed through unwrapped so the
    /// cause chain stays intact.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON (de)serialisation error outside the token path.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
