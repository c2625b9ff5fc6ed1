//! Error types for the Animal Spotter client.

use thiserror::Error;

/// Errors that can occur when using the Animal Spotter client.
///
/// This is a closed taxonomy: every operation on [`crate::Client`] resolves
/// to exactly one variant on failure. Classification is applied in a fixed
/// order for every response — transport failure first, then a 401, then any
/// other non-2xx status, then a missing body, then a decode failure. A 401
/// with an unparsable body is therefore reported as
/// [`ClientError::Unauthorized`], not [`ClientError::Decoding`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Locally detectable bad input; no request was issued.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failed to serialize a request body.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The request never produced a response (connectivity failure,
    /// timeout, cancellation).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// No bearer token is available to attach; sign in first.
    #[error("no credential available; sign in first")]
    Unauthenticated,

    /// The server rejected the bearer token (HTTP 401).
    #[error("credential rejected by server")]
    Unauthorized,

    /// The server returned a non-2xx, non-401 status.
    #[error("server returned status {status}")]
    Server {
        /// HTTP status code, preserved for diagnostics.
        status: u16,
    },

    /// A 2xx response arrived without a payload where one was expected.
    #[error("response body was empty")]
    EmptyBody,

    /// The payload was present but did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The payload could not be interpreted as an image.
    #[error("response bytes are not a recognizable image")]
    InvalidImageData,
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
