//! Command-line configuration for the relay.

use clap::Parser;

/// Port the relay listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 3000;

/// Browser origin of the demo chat page
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://127.0.0.1:5500";

pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Relay settings
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "spark-relay",
    version,
    about = "Realtime chat relay: broadcasts every message to all connected clients"
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Only browser connections from this origin are accepted
    #[arg(long, default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}
