//! Spark realtime chat relay.
//!
//! An HTTP + WebSocket server that admits browser and terminal clients and
//! broadcasts every message, tagged with its sender's connection id, to all
//! connected clients (the sender included).

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run;
