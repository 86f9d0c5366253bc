//! Client error definitions.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The WebSocket handshake with the relay failed
    #[error("Failed to connect to {url}: {source}")]
    Connect {
        url: String,
        source: tungstenite::Error,
    },

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("Failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Terminal input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// The session loop has already stopped
    #[error("Session is closed")]
    SessionClosed,

    #[error("Session task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
