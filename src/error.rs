use std::time::Duration;

use crate::models::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum ScryfallError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data returned for the request")]
    EmptyBody,

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Lookup task ended without a result: {0}")]
    Task(String),

    #[error("API error: {}", .0.details)]
    Api(ApiError),

    #[error("Response matched neither the expected shape nor an API error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse failure class of a [`ScryfallError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    /// No usable bytes arrived: connection error, empty body or timeout.
    Transport,
    /// The body decoded as a Scryfall error object.
    Api,
    /// The body was present but matched no known shape.
    Decode,
    /// The request URL could not be built from the caller's input.
    Request,
}

impl ScryfallError {
    pub fn category(&self) -> FailureCategory {
        match self {
            ScryfallError::Http(_)
            | ScryfallError::Io(_)
            | ScryfallError::EmptyBody
            | ScryfallError::Timeout(_)
            | ScryfallError::Task(_) => FailureCategory::Transport,
            ScryfallError::Api(_) => FailureCategory::Api,
            ScryfallError::Decode(_) => FailureCategory::Decode,
            ScryfallError::Url(_) | ScryfallError::InvalidArgument(_) => FailureCategory::Request,
        }
    }

    /// The API's error object, if the server answered with one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ScryfallError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Text suitable for showing to an end user.
    ///
    /// API errors carry a human-readable `details` string; every other
    /// failure has no structured detail and gets a generic message.
    pub fn user_message(&self) -> &str {
        match self {
            ScryfallError::Api(err) => &err.details,
            _ => "lookup failed",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScryfallError>;
