//! Core domain models for the chat relay.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::mpsc;

use super::{
    error::DeliveryError,
    value_object::{ConnectionId, Timestamp},
};

/// Channel feeding encoded frames to a connection's socket writer
pub type Outbound = mpsc::UnboundedSender<String>;

/// Represents one live realtime session
///
/// Clones share the same liveness flag, so a connection removed from the
/// registry is seen as closed through every snapshot that still holds it.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Identifier assigned at handshake
    pub id: ConnectionId,
    /// Timestamp when the connection was admitted
    pub connected_at: Timestamp,
    outbound: Outbound,
    live: Arc<AtomicBool>,
}

impl Connection {
    /// Create a new live connection
    pub fn new(id: ConnectionId, connected_at: Timestamp, outbound: Outbound) -> Self {
        Self {
            id,
            connected_at,
            outbound,
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether frames can still be handed to this connection
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire) && !self.outbound.is_closed()
    }

    /// Flip the liveness flag; the only mutation a connection allows
    pub fn mark_closed(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Hand an encoded frame to the socket writer without waiting on it
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` if the connection was closed or its writer is gone
    pub fn deliver(&self, frame: String) -> Result<(), DeliveryError> {
        if !self.live.load(Ordering::Acquire) {
            return Err(DeliveryError::NotLive(self.id.to_string()));
        }
        self.outbound
            .send(frame)
            .map_err(|_| DeliveryError::ChannelClosed(self.id.to_string()))
    }
}

/// Origin of a broadcast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSender {
    /// A registered client connection
    Connection(ConnectionId),
    /// The relay itself
    System,
}

/// An ephemeral message on its way to one or more connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastMessage {
    pub sender: MessageSender,
    pub text: String,
}

impl BroadcastMessage {
    /// Text of the greeting sent to every newly admitted connection
    pub const GREETING: &'static str = "Hello";

    pub fn from_connection(sender: ConnectionId, text: impl Into<String>) -> Self {
        Self {
            sender: MessageSender::Connection(sender),
            text: text.into(),
        }
    }

    pub fn greeting() -> Self {
        Self {
            sender: MessageSender::System,
            text: Self::GREETING.to_string(),
        }
    }

    /// Payload as seen by recipients: `"<sender>: <text>"`, or the bare text for the relay
    pub fn payload(&self) -> String {
        match &self.sender {
            MessageSender::Connection(id) => format!("{id}: {}", self.text),
            MessageSender::System => self.text.clone(),
        }
    }
}
