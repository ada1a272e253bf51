//! Error types for the TDX MCP server.
//!
//! This module defines `TdxError`, the unified error type used throughout
//! the library. The core client returns these errors; the tool layer turns
//! them into error-flagged tool results.
//!
//! # Security
//!
//! Error bodies come straight from the remote API and may echo request data.
//! Use `sanitized_display()` before putting an error in a log line or a tool
//! response so that passwords, keys and bearer tokens never leave the process.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Unified error type for all TDX operations.
#[derive(Error, Debug)]
pub enum TdxError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// One of the login endpoints returned a non-success status.
    #[error("TDX authentication failed ({}): {body}", status.as_u16())]
    Authentication {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// A scoped API request returned a non-success status.
    #[error("TDX API error ({} {method} {path}): {body}", status.as_u16())]
    Api {
        /// The HTTP method of the failed request.
        method: Method,
        /// The request path, relative to the base URL.
        path: String,
        /// The HTTP status code returned.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A success body could not be decoded as JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TdxError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        TdxError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        TdxError::Config(message.into())
    }

    /// Returns true for errors caused by configuration rather than I/O.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, TdxError::Config(_))
    }

    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TdxError::Authentication { status, .. } | TdxError::Api { status, .. } => {
                Some(*status)
            }
            TdxError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Replaces every occurrence of each secret in `message` with `[REDACTED]`.
    ///
    /// Empty secrets are skipped so they cannot match everywhere.
    #[must_use]
    pub fn sanitize_message<S: AsRef<str>>(message: &str, secrets: &[S]) -> String {
        let mut sanitized = message.to_string();
        for secret in secrets {
            let secret: &str = secret.as_ref();
            if !secret.is_empty() {
                sanitized = sanitized.replace(secret, "[REDACTED]");
            }
        }
        sanitized
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display<S: AsRef<str>>(&self, secrets: &[S]) -> String {
        Self::sanitize_message(&self.to_string(), secrets)
    }
}
