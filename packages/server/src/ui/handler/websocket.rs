//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, HeaderValue, StatusCode, header::ORIGIN},
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory},
    infrastructure::dto::websocket::{InboundEvent, WireEvent},
    ui::state::AppState,
    usecase::{AdmitConnectionUseCase, BroadcastMessageUseCase, RemoveConnectionUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    if !origin_allowed(&headers, &state.allowed_origin) {
        tracing::warn!(
            "Rejected connection from origin {:?}",
            headers.get(ORIGIN)
        );
        return Err(StatusCode::FORBIDDEN);
    }

    let id = ConnectionIdFactory::generate().map_err(|e| {
        tracing::error!("Failed to generate connection id: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, id)))
}

/// Browsers always send `Origin`; native clients usually don't and are let through.
fn origin_allowed(headers: &HeaderMap, allowed: &HeaderValue) -> bool {
    match headers.get(ORIGIN) {
        Some(origin) => origin == allowed,
        None => true,
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, id: ConnectionId) {
    let (mut sender, mut receiver) = socket.split();

    // The handshake frame goes out before the connection is visible to broadcasts
    let connect_frame = match WireEvent::connect(id.as_str()).encode() {
        Ok(frame) => frame,
        Err(e) => {
            tracing::error!("Failed to encode connect frame for '{}': {}", id, e);
            return;
        }
    };
    if let Err(e) = sender.send(Message::Text(connect_frame.into())).await {
        tracing::warn!("Failed to send connect frame to '{}': {}", id, e);
        return;
    }

    // Create a channel for this client to receive frames
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let admit_usecase = AdmitConnectionUseCase::new(state.repository.clone());
    if let Err(e) = admit_usecase.execute(id.clone(), tx).await {
        tracing::warn!("Closing socket: {}", e);
        return;
    }
    tracing::info!("Client '{}' connected", id);

    let recv_id = id.clone();
    let recv_state = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        let broadcast_usecase = BroadcastMessageUseCase::new(recv_state.repository.clone());

        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", recv_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_inbound(&broadcast_usecase, &recv_id, text.as_str()).await;
                }
                Message::Binary(_) => {
                    tracing::debug!("Ignoring binary frame from '{}'", recv_id);
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", recv_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to forward queued frames to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
        // Registry dropped the connection (shutdown); say goodbye properly
        let _ = sender.close().await;
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let remove_usecase = RemoveConnectionUseCase::new(state.repository.clone());
    remove_usecase.execute(&id).await;
    tracing::info!(
        "Client '{}' disconnected, {} connection(s) remaining",
        id,
        remove_usecase.count_remaining().await
    );
}

/// Route one inbound text frame by event name
async fn dispatch_inbound(
    broadcast_usecase: &BroadcastMessageUseCase,
    sender: &ConnectionId,
    frame: &str,
) {
    match InboundEvent::parse(frame) {
        InboundEvent::Message(text) => {
            tracing::info!("Client '{}' said: {}", sender, text);
            if let Err(e) = broadcast_usecase.execute(sender.clone(), text).await {
                tracing::warn!("Failed to broadcast message from '{}': {}", sender, e);
            }
        }
        InboundEvent::Unknown(event) => {
            tracing::debug!("Ignoring unknown event '{}' from '{}'", event, sender);
        }
    }
}
