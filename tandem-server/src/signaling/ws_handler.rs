use crate::room::RoomCommand;
use crate::state::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tandem_core::{ConnectionId, SignalMessage};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, connection_id, state))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId, state: Arc<AppState>) {
    info!("New WebSocket connection: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let signaling = state.signaling.clone();
    signaling.add_connection(connection_id, tx);
    signaling.send_signal(connection_id, SignalMessage::Welcome { connection_id });
    signaling.send_signal(
        connection_id,
        SignalMessage::IceConfig {
            ice_servers: signaling.get_ice_servers(),
        },
    );

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let room_tx = state.room_tx.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                let text = match msg {
                    Message::Text(text) => text,
                    Message::Close(_) => break,
                    Message::Binary(_) => {
                        warn!("Ignoring binary frame from {}", connection_id);
                        continue;
                    }
                    _ => continue,
                };

                let signal = match serde_json::from_str::<SignalMessage>(text.as_str()) {
                    Ok(signal) => signal,
                    Err(e) => {
                        warn!("Invalid SignalMessage from {}: {}", connection_id, e);
                        continue;
                    }
                };

                let cmd = match signal {
                    SignalMessage::ClientConnected => RoomCommand::Announce { connection_id },
                    other => match other.into_negotiation() {
                        Ok(negotiation) => RoomCommand::Relay {
                            connection_id,
                            negotiation,
                        },
                        Err(unexpected) => {
                            debug!(
                                "Ignoring server-only message from {}: {:?}",
                                connection_id, unexpected
                            );
                            continue;
                        }
                    },
                };

                if let Err(e) = room_tx.send(cmd).await {
                    error!("Room died: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Queued behind every command this socket already sent.
    if let Err(e) = state
        .room_tx
        .send(RoomCommand::Disconnect { connection_id })
        .await
    {
        error!("Failed to report disconnect of {}: {}", connection_id, e);
    }

    signaling.remove_connection(&connection_id);
    info!("WebSocket disconnected: {}", connection_id);
}
