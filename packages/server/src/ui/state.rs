//! Server state.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    config::ServerConfig, domain::ConnectionRepository, error::ServerError,
    infrastructure::repository::InMemoryConnectionRepository,
};

/// Shared application state
///
/// Owns the single connection registry for the lifetime of the process.
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn ConnectionRepository>,
    /// Origin browsers must present to open a connection
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Build the state with a fresh in-memory registry
    pub fn new(config: &ServerConfig) -> Result<Self, ServerError> {
        let allowed_origin = HeaderValue::from_str(&config.allowed_origin)
            .map_err(|_| ServerError::InvalidOrigin(config.allowed_origin.clone()))?;

        Ok(Self::with_repository(
            Arc::new(InMemoryConnectionRepository::new()),
            allowed_origin,
        ))
    }

    pub fn with_repository(
        repository: Arc<dyn ConnectionRepository>,
        allowed_origin: HeaderValue,
    ) -> Self {
        Self {
            repository,
            allowed_origin,
        }
    }
}
