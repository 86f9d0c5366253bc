//! Server startup and teardown.

use std::sync::Arc;

use tokio::net::TcpListener;

use super::{router::create_app, signal::shutdown_signal, state::AppState};
use crate::{config::ServerConfig, error::ServerError};

/// Bind the configured address and run until Ctrl+C / SIGTERM
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState::new(&config)?);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
    tracing::info!("Relay is listening on {}", address);
    tracing::info!("Accepting browser connections from {}", config.allowed_origin);

    serve(listener, state).await
}

/// Serve on an already bound listener, then tear down the registry
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = create_app(state.clone());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let closed = state.repository.drain().await;
    tracing::info!("Relay stopped, closed {} connection(s)", closed);

    Ok(())
}
