//! Spark realtime chat relay.
//!
//! Broadcasts every message it receives to all connected clients, the sender included.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin spark-relay
//! ```

use clap::Parser;
use spark_relay::ServerConfig;
use spark_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = ServerConfig::parse();

    // Run the server
    if let Err(e) = spark_relay::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
