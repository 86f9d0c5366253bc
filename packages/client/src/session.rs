//! A live connection to the relay.
//!
//! One task owns the socket and the [`SocketAdapter`]; inbound frames and
//! user submissions are both handled in that task's loop, so adapter state
//! is never shared.

use futures_util::{SinkExt, StreamExt};
use tokio::{net::TcpStream, sync::mpsc, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use crate::{adapter::SocketAdapter, display::DisplayEntry, error::ClientError};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Handle to a running session
pub struct Session {
    input: mpsc::UnboundedSender<String>,
    entries: mpsc::UnboundedReceiver<DisplayEntry>,
    task: JoinHandle<Result<(), ClientError>>,
}

/// Open a WebSocket to the relay and start the session loop
pub async fn connect(url: &str) -> Result<Session, ClientError> {
    let (socket, _) = connect_async(url)
        .await
        .map_err(|source| ClientError::Connect {
            url: url.to_string(),
            source,
        })?;
    tracing::info!("Connected to {}", url);

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (entry_tx, entry_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(drive(socket, input_rx, entry_tx));

    Ok(Session {
        input: input_tx,
        entries: entry_rx,
        task,
    })
}

impl Session {
    /// Queue user input; blank input is dropped by the adapter
    pub fn submit(&self, text: impl Into<String>) -> Result<(), ClientError> {
        self.input
            .send(text.into())
            .map_err(|_| ClientError::SessionClosed)
    }

    /// Next display entry, or `None` once the relay closed the connection
    pub async fn next_entry(&mut self) -> Option<DisplayEntry> {
        self.entries.recv().await
    }

    /// Close the socket and wait for the loop to finish
    pub async fn close(self) -> Result<(), ClientError> {
        let Session { input, task, .. } = self;
        drop(input);
        task.await?
    }
}

async fn drive(
    socket: Socket,
    mut input: mpsc::UnboundedReceiver<String>,
    entries: mpsc::UnboundedSender<DisplayEntry>,
) -> Result<(), ClientError> {
    let (mut sink, mut stream) = socket.split();
    let mut adapter = SocketAdapter::new();

    loop {
        tokio::select! {
            frame = stream.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if let Some(entry) = adapter.on_frame(text.as_str()) {
                        let _ = entries.send(entry.clone());
                    }
                }
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Relay closed the connection");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
            },
            line = input.recv() => match line {
                Some(line) => {
                    let Some(event) = adapter.submit(&line) else {
                        continue;
                    };
                    if let Some(entry) = adapter.log().last() {
                        let _ = entries.send(entry.clone());
                    }
                    sink.send(Message::Text(event.encode()?.into())).await?;
                }
                None => {
                    let _ = sink.close().await;
                    break;
                }
            },
        }
    }

    Ok(())
}
