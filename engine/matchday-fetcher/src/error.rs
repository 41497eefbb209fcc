//! Error types for the Matchday Fetcher

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for Matchday Fetcher operations
pub type Result<T> = std::result::Result<T, FetcherError>;

/// Errors that can occur while fetching fixtures
#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("API key not configured (set {})", crate::API_KEY_ENV)]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("API reported errors: {0}")]
    Upstream(String),

    #[error("Failed to decode fixtures payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
