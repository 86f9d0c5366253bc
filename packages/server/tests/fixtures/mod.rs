//! Test fixtures: an in-process relay bound to an ephemeral port and a
//! minimal WebSocket test client.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use spark_relay::{
    ServerConfig,
    domain::ConnectionRepository,
    infrastructure::dto::websocket::WireEvent,
    ui::{create_app, state::AppState},
};
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message,
};

const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const SILENCE_WINDOW: Duration = Duration::from_millis(200);

/// Relay running inside the test process
pub struct TestServer {
    addr: SocketAddr,
    pub state: Arc<AppState>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let state = Arc::new(
            AppState::new(&ServerConfig::default()).expect("Failed to build state"),
        );
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let app = create_app(state.clone());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server crashed");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Wait until the registry holds exactly `expected` connections
    pub async fn wait_for_connections(&self, expected: usize) {
        let deadline = tokio::time::Instant::now() + RECV_TIMEOUT;
        loop {
            let count = self.state.repository.count().await;
            if count == expected {
                return;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "expected {expected} connection(s), registry has {count}"
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// WebSocket client speaking the relay's JSON event frames
pub struct TestClient {
    pub sid: String,
    ws: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl TestClient {
    /// Connect and consume the `connect` handshake frame
    pub async fn connect(server: &TestServer) -> Self {
        let (ws, _) = connect_async(server.ws_url())
            .await
            .expect("Failed to connect");
        let mut client = Self {
            sid: String::new(),
            ws,
        };

        match client.recv_event().await {
            WireEvent::Connect(payload) => client.sid = payload.sid,
            other => panic!("expected connect frame, got {other:?}"),
        }
        client
    }

    /// Connect and also consume the greeting
    pub async fn connect_greeted(server: &TestServer) -> Self {
        let mut client = Self::connect(server).await;
        assert_eq!(client.recv_event().await, WireEvent::message("Hello"));
        client
    }

    pub async fn recv_event(&mut self) -> WireEvent {
        loop {
            let msg = tokio::time::timeout(RECV_TIMEOUT, self.ws.next())
                .await
                .expect("Timed out waiting for a frame")
                .expect("Stream ended")
                .expect("WebSocket error");
            if msg.is_text() {
                let text = msg.to_text().expect("Frame is not text");
                return WireEvent::decode(text).expect("Frame is not a wire event");
            }
        }
    }

    /// Assert nothing arrives for a short while
    pub async fn assert_silent(&mut self) {
        let result = tokio::time::timeout(SILENCE_WINDOW, self.ws.next()).await;
        assert!(result.is_err(), "unexpected frame: {result:?}");
    }

    pub async fn send_message(&mut self, text: &str) {
        let frame = WireEvent::message(text).encode().expect("Failed to encode");
        self.send_raw(&frame).await;
    }

    pub async fn send_raw(&mut self, frame: &str) {
        self.ws
            .send(Message::Text(frame.to_string().into()))
            .await
            .expect("Failed to send");
    }

    pub async fn close(mut self) {
        self.ws.close(None).await.expect("Failed to close");
    }
}
