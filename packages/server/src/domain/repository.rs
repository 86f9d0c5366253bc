//! Repository trait for the connection registry.
//!
//! The use cases depend on this trait; the in-memory implementation lives in
//! the infrastructure layer.

use async_trait::async_trait;

use super::{Connection, ConnectionId, RepositoryError};

/// Registry of currently admitted connections
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Add a connection to the live set and return its identifier
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateConnection` if a live connection already uses the id
    async fn admit(&self, connection: Connection) -> Result<ConnectionId, RepositoryError>;

    /// Remove a connection and mark it closed
    ///
    /// Returns `false` when the id was not registered; that is not an error.
    async fn remove(&self, id: &ConnectionId) -> bool;

    /// Look up a live connection
    async fn get(&self, id: &ConnectionId) -> Option<Connection>;

    /// Snapshot of every live connection
    async fn all(&self) -> Vec<Connection>;

    async fn count(&self) -> usize;

    /// Close and remove every connection, returning how many were dropped
    async fn drain(&self) -> usize;
}
