//! Error types for the blog API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpStatus` with the raw
//! status code and body for debugging. `Timeout` and `Network` are kept
//! apart so a slow server and an unreachable one read differently in the UI.
//!
//! Every variant renders as a human-readable message suitable for inline
//! display; nothing here is retried or fatal.

use thiserror::Error;

/// Errors surfaced by the client layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty. Raised before any request is
    /// built; the network is never contacted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request could not be sent or no response arrived.
    #[error("no response received: {0}")]
    Network(String),

    /// The server returned 404 — the requested record does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
