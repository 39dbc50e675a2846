// src/error.rs

//! Unified error handling for the video search service.

use std::fmt;

use thiserror::Error;

/// Result type alias for video search operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Only [`AppError::Parameter`] is ever shown to the caller verbatim. Every
/// other variant is reported as an opaque upstream failure and kept for logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Query parameter could not be parsed
    #[error("{0}")]
    Parameter(String),

    /// Secret store lookup or payload extraction failed
    #[error("Credential error for '{secret}': {message}")]
    Credential { secret: String, message: String },

    /// HTTP request failed or returned a non-success status
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Platform response was not the JSON we expected
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL construction failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a query parameter error.
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter(message.into())
    }

    /// Create a credential error for the given secret.
    pub fn credential(secret: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Credential {
            secret: secret.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }

    /// Short label used in log lines to tell failure causes apart.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parameter(_) => "parameter",
            Self::Credential { .. } => "credential",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
            Self::Url(_) => "url",
            Self::Config(_) => "config",
        }
    }
}
