// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for kbdesk.

use thiserror::Error;

/// The primary error type used across kbdesk crates.
#[derive(Debug, Error)]
pub enum KbdeskError {
    /// Configuration errors (invalid TOML, bad endpoint, missing values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Hosted agent errors (HTTP failure, non-success status, malformed body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No credential source could produce an authorization header.
    #[error("credential error: {0}")]
    Credential(String),

    /// HTTP server errors (bind failure, serve failure).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
