//! Terminal client for the Spark realtime chat relay.
//!
//! The [`adapter::SocketAdapter`] holds the client half of the protocol and
//! the display log; [`session`] wires it to a WebSocket connection.

pub mod adapter;
pub mod config;
pub mod display;
pub mod error;
pub mod runner;
pub mod session;

// Re-export entry points
pub use config::ClientConfig;
pub use error::ClientError;
pub use runner::run_client;
