//! Domain layer for the chat relay.
//!
//! This module contains the connection and broadcast model, independent of
//! the wire format and the transport.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{BroadcastMessage, Connection, MessageSender, Outbound};
pub use error::{DeliveryError, RepositoryError, ValueObjectError};
pub use factory::ConnectionIdFactory;
pub use repository::ConnectionRepository;
#[cfg(test)]
pub use repository::MockConnectionRepository;
pub use value_object::{ConnectionId, Timestamp};
