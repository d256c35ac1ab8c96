use crate::error::RoomError;
use crate::room::room_command::RoomCommand;
use crate::room::room_registry::{JoinResult, RoomRegistry};
use crate::signaling::SignalingOutput;
use std::sync::Arc;
use tandem_core::{ConnectionId, Negotiation};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub const ROOM_FULL_REASON: &str = "Room is full";

/// Turns transport events into registry operations and outbound signals.
///
/// The relay is the only owner of the [`RoomRegistry`]. Commands are handled
/// one at a time to completion, which is what keeps the capacity check and
/// the seat mutation atomic with respect to other connections.
pub struct SignalingRelay {
    registry: RoomRegistry,
    signaling: Arc<dyn SignalingOutput>,
}

impl SignalingRelay {
    pub fn new(registry: RoomRegistry, signaling: Arc<dyn SignalingOutput>) -> Self {
        Self {
            registry,
            signaling,
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    pub async fn run(mut self, mut command_rx: mpsc::Receiver<RoomCommand>) {
        info!("Room event loop started");

        while let Some(cmd) = command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Command channel closed. Room event loop finished");
    }

    pub async fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::Announce { connection_id } => self.on_announce(connection_id).await,
            RoomCommand::Relay {
                connection_id,
                negotiation,
            } => self.on_negotiation(connection_id, negotiation).await,
            RoomCommand::Disconnect { connection_id } => self.on_disconnect(connection_id).await,
        }
    }

    async fn on_announce(&mut self, connection_id: ConnectionId) {
        match self.registry.join(connection_id) {
            Ok(JoinResult::Seated { position }) => {
                info!("Connection {} seated at position {}", connection_id, position);
            }
            Ok(JoinResult::RoomComplete { position }) => {
                info!(
                    "Connection {} completed the room at position {}",
                    connection_id, position
                );
                let Some(initiator) = self.registry.initiator() else {
                    warn!("Room complete without an initiator");
                    return;
                };
                self.signaling.send_initiate(initiator).await;
            }
            Err(RoomError::RoomFull { capacity }) => {
                warn!(
                    "Rejecting {}: room already has {} occupants",
                    connection_id, capacity
                );
                self.signaling
                    .send_full(connection_id, ROOM_FULL_REASON.to_string())
                    .await;
            }
            Err(e) => debug!("Ignoring announce from {}: {}", connection_id, e),
        }
    }

    async fn on_negotiation(&mut self, sender: ConnectionId, negotiation: Negotiation) {
        if let Err(e) = self.registry.ensure_occupant(&sender) {
            debug!("Dropping {}: {}", negotiation.kind(), e);
            return;
        }

        for target in self.registry.others(&sender) {
            debug!("Relaying {} from {} to {}", negotiation.kind(), sender, target);
            self.signaling.forward(target, negotiation.clone()).await;
        }
    }

    async fn on_disconnect(&mut self, connection_id: ConnectionId) {
        let result = self.registry.leave(&connection_id);
        if !result.removed {
            debug!("Disconnect of {} who held no seat", connection_id);
            return;
        }

        info!(
            "Connection {} left the room, {} remaining",
            connection_id, result.occupancy
        );

        for peer in result.remaining {
            self.signaling.send_connected(peer, result.occupancy).await;
        }
    }
}
