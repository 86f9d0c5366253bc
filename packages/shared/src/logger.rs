//! Tracing subscriber setup for the Spark binaries.

use tracing_subscriber::EnvFilter;

/// Build the default filter directive for a binary.
///
/// Cargo exposes binary names with hyphens (`spark-relay`) while tracing
/// targets use the crate path (`spark_relay`), so hyphens are normalised.
pub fn default_directive(bin_name: &str, level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={level},spark_shared={level},tower_http={level}")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the binary's own crate and
/// `tower_http` log at `default_level`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
