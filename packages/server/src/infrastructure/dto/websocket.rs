//! WebSocket wire events for the relay.
//!
//! Every frame is a JSON text frame of the form
//! `{"event": "<name>", "data": <payload>}`.

use serde::{Deserialize, Serialize};

/// Event name used for chat payloads in both directions
pub const EVENT_MESSAGE: &str = "message";

/// Event carried by a single frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum WireEvent {
    /// First frame after the upgrade; carries the assigned connection id
    Connect(ConnectPayload),
    /// Chat text (client to relay) or broadcast payload (relay to client)
    Message(String),
}

/// Payload of the handshake frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectPayload {
    pub sid: String,
}

impl WireEvent {
    pub fn connect(sid: impl Into<String>) -> Self {
        Self::Connect(ConnectPayload { sid: sid.into() })
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Encode as a JSON text frame
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a JSON text frame
    pub fn decode(frame: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(frame)
    }
}

/// Loosely typed frame used to dispatch inbound events by name
#[derive(Debug, Deserialize)]
struct RawFrame {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Inbound client event after dispatch on its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Text to broadcast
    Message(String),
    /// An event name the relay does not handle
    Unknown(String),
}

impl InboundEvent {
    /// Classify an inbound text frame.
    ///
    /// Frames that are not event envelopes are relayed as raw text, since the
    /// relay does not validate message content.
    pub fn parse(frame: &str) -> Self {
        let Ok(raw) = serde_json::from_str::<RawFrame>(frame) else {
            return Self::Message(frame.to_string());
        };

        match raw.event.as_str() {
            EVENT_MESSAGE => Self::Message(match raw.data {
                serde_json::Value::String(text) => text,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            }),
            _ => Self::Unknown(raw.event),
        }
    }
}
