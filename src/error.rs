//! SL client error types

use thiserror::Error;

/// Errors that can occur when talking to the SL API
#[derive(Debug, Error)]
pub enum SlError {
    /// The configured base URL does not end with a trailing slash
    #[error("base URL must end with a trailing slash")]
    MissingTrailingSlash,

    /// The configured base URL could not be parsed
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// An endpoint path could not be resolved against the base URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The API key option is empty
    #[error("API key must not be empty")]
    MissingApiKey,

    /// The location search string is empty
    #[error("search string must not be empty")]
    MissingSearchString,

    /// The realtime site identifier is empty
    #[error("site id must not be empty")]
    MissingSiteId,

    /// Connection to the SL API failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the SL API failed
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Request timed out
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to parse a response body
    #[error("parse error: {0}")]
    Parse(String),

    /// The SL API reported an error inside an otherwise well-formed envelope.
    /// Carries the upstream message text verbatim.
    #[error("{0}")]
    Api(String),

    /// A reconstruction request completed but returned no trips
    #[error("no trip found")]
    NoTripFound,
}

impl SlError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}
