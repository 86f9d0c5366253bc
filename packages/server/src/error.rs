//! Errors that stop the relay process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured origin is not a valid header value
    #[error("Invalid allowed origin: '{0}'")]
    InvalidOrigin(String),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
