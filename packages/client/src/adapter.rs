//! Client half of the relay protocol.
//!
//! The adapter is transport-free: it turns inbound frames into display
//! entries and user input into outbound events. Reconnecting is left to
//! whoever owns the socket (nobody, in this client).

use spark_relay::infrastructure::dto::websocket::WireEvent;

use crate::display::{DisplayEntry, DisplayLog, Label};

#[derive(Debug, Default)]
pub struct SocketAdapter {
    sid: Option<String>,
    log: DisplayLog,
}

impl SocketAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection id assigned by the relay, once the handshake frame arrived
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    pub fn log(&self) -> &DisplayLog {
        &self.log
    }

    /// Handshake completed: note the assigned id locally
    pub fn on_connect(&mut self, sid: String) -> &DisplayEntry {
        let text = format!("you connected as {sid}");
        self.sid = Some(sid);
        self.log.push(Label::System, text)
    }

    /// A relay broadcast or greeting; our own echoes are shown too
    pub fn on_message(&mut self, payload: String) -> &DisplayEntry {
        self.log.push(Label::Server, payload)
    }

    /// Decode one text frame from the relay and record it
    ///
    /// Frames that are not wire events are logged and dropped.
    pub fn on_frame(&mut self, frame: &str) -> Option<&DisplayEntry> {
        match WireEvent::decode(frame) {
            Ok(WireEvent::Connect(payload)) => Some(self.on_connect(payload.sid)),
            Ok(WireEvent::Message(payload)) => Some(self.on_message(payload)),
            Err(e) => {
                tracing::warn!("Ignoring malformed frame from relay: {}", e);
                None
            }
        }
    }

    /// User pressed send
    ///
    /// Blank input is dropped silently. Otherwise the trimmed text is shown
    /// as our own line and returned as the single event to emit; no
    /// acknowledgment is expected.
    pub fn submit(&mut self, input: &str) -> Option<WireEvent> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.log.push(Label::Me, text);
        Some(WireEvent::message(text))
    }
}
