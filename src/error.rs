//! Error types for the Pokédex client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::NavAction;
use thiserror::Error;

/// The main error type for the Pokédex client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Navigation Errors
    // ============================================================================
    /// Navigation past an end of the listing. The rendering layer is expected
    /// to disable the affordance, so reaching this is a caller bug.
    #[error("No {action} page available")]
    NoSuchPage { action: NavAction },

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    /// A page or detail reference could not be retrieved or decoded
    #[error("Failed to fetch {reference}: {source}")]
    Fetch {
        reference: String,
        #[source]
        source: Box<Error>,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Malformed response from {reference}: {message}")]
    MalformedResponse { reference: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reference: reference.into(),
            message: message.into(),
        }
    }

    /// Wrap an error as the failure of a specific page or detail reference
    pub fn fetch(reference: impl Into<String>, source: Error) -> Self {
        Self::Fetch {
            reference: reference.into(),
            source: Box::new(source),
        }
    }

    /// Check if this error came from retrieving or decoding a remote resource
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. }
                | Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::Timeout { .. }
                | Error::MalformedResponse { .. }
                | Error::JsonParse(_)
        )
    }
}

/// Result type alias for the Pokédex client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
