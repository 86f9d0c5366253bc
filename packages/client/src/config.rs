//! Command-line configuration for the client.

use clap::Parser;

/// Relay endpoint used when `--url` is not given
pub const DEFAULT_URL: &str = "ws://127.0.0.1:3000/ws";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "spark-client",
    version,
    about = "Terminal client for the Spark chat relay"
)]
pub struct ClientConfig {
    /// WebSocket URL of the relay
    #[arg(short, long, default_value = DEFAULT_URL)]
    pub url: String,
}
