//! Error types for the actress API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "no such actress" from "the server returned an unexpected status." All
//! other non-2xx responses land in `HttpError` with the raw status code and
//! body for debugging. `ErrorKind` folds the variants onto the five failure
//! origins so callers can branch on cause without matching every variant.

use crate::validate::SchemaError;

/// Errors returned by `ActressClient` parse methods and `ActressFetcher`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or no response was received.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404; the requested actress does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not valid JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The JSON does not describe an actress.
    #[error("invalid record: {0}")]
    Schema(#[from] SchemaError),

    /// The top-level JSON value has the wrong container type.
    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Origin of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Http,
    Decode,
    Schema,
    Shape,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::NotFound | ApiError::HttpError { .. } => ErrorKind::Http,
            ApiError::DeserializationError(_) => ErrorKind::Decode,
            ApiError::Schema(_) => ErrorKind::Schema,
            ApiError::Shape { .. } => ErrorKind::Shape,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
