//! HTTP client layer for the mass-mailer backend.
//!
//! The backend owns all durable state; this module only speaks its JSON and
//! multipart contracts and classifies failures into the three branches the
//! UI cares about: server-reported errors, transport failures, and malformed
//! responses.

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{StatusResponse, Template};

/// Common error type for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; carries the server-provided message verbatim when
    /// the error body could be parsed.
    #[error("{0}")]
    Server(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    MalformedResponse(String),

    /// A queued attachment could not be read from disk.
    #[error("attachment error: {0}")]
    Attachment(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::MalformedResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
