//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ConfigError`] - Invalid embedded viewer configuration
//!
//! The `Display` text of a [`FetchError`] is what users see inside the
//! inline error messages of the code area.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network request failed (offline, CORS, aborted, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response: {0}")]
    ResponseReadFailed(String),
}

/// Errors raised while loading `viewer.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has wrongly typed keys.
    #[error("failed to parse viewer config: {0}")]
    Parse(String),
    /// The document parsed but holds unusable values.
    #[error("invalid viewer config: {0}")]
    Invalid(String),
}
