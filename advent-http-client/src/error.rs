//! Error types for the puzzle input client

use thiserror::Error;

/// Errors that can occur when fetching puzzle input
#[derive(Error, Debug)]
pub enum AdventError {
    /// HTTP request failed (connection, timeout, malformed URL)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status, redirects included
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
