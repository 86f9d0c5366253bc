//! Terminal chat client for the Spark relay.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin spark-client -- --url ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;
use spark_client::ClientConfig;
use spark_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Chat lines go to stdout; keep log noise down by default
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let config = ClientConfig::parse();

    if let Err(e) = spark_client::run_client(&config.url).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
