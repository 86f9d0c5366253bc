//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// ConnectionId too long error
    #[error("ConnectionId cannot exceed {max} characters (got {actual})")]
    ConnectionIdTooLong { max: usize, actual: usize },
}

/// Errors raised by the connection registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Another live connection already holds this identifier
    #[error("Connection '{0}' is already registered")]
    DuplicateConnection(String),
}

/// Errors raised when handing a frame to a single recipient
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The connection has been removed from the registry
    #[error("Connection '{0}' is no longer live")]
    NotLive(String),

    /// The socket writer for the connection has gone away
    #[error("Outbound channel for connection '{0}' is closed")]
    ChannelClosed(String),
}
