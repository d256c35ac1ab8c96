use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use tandem_core::{ConnectionId, IceServerConfig, Negotiation, SignalMessage};
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    ice_servers: Vec<IceServerConfig>,
}

/// Registry of open sockets, addressed by connection id.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new(ice_servers: Vec<IceServerConfig>) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
                ice_servers,
            }),
        }
    }

    pub fn get_ice_servers(&self) -> Vec<IceServerConfig> {
        self.inner.ice_servers.clone()
    }

    pub fn add_connection(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(connection_id, tx);
    }

    pub fn remove_connection(&self, connection_id: &ConnectionId) {
        self.inner.connections.remove(connection_id);
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }

    pub fn send_signal(&self, connection_id: ConnectionId, msg: SignalMessage) {
        let Some(connection) = self.inner.connections.get(&connection_id) else {
            warn!(
                "Attempted to send signal to disconnected connection {}",
                connection_id
            );
            return;
        };

        match serde_json::to_string(&msg) {
            Ok(json) => {
                if let Err(e) = connection.send(Message::Text(json.into())) {
                    error!("Failed to send WS message to {}: {:?}", connection_id, e);
                }
            }
            Err(e) => error!("Failed to serialize signal message: {}", e),
        }
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send_initiate(&self, connection_id: ConnectionId) {
        self.send_signal(connection_id, SignalMessage::Initiate);
    }

    async fn send_full(&self, connection_id: ConnectionId, reason: String) {
        self.send_signal(connection_id, SignalMessage::Full(reason));
    }

    async fn send_connected(&self, connection_id: ConnectionId, occupancy: usize) {
        self.send_signal(connection_id, SignalMessage::Connected(occupancy));
    }

    async fn forward(&self, connection_id: ConnectionId, negotiation: Negotiation) {
        self.send_signal(connection_id, negotiation.into());
    }
}
