use async_trait::async_trait;
use tandem_core::{ConnectionId, Negotiation};

/// Outbound side of the room: whatever owns the client sockets implements
/// this so the relay can reach individual connections.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Tell `connection_id` to start negotiating by producing an offer.
    async fn send_initiate(&self, connection_id: ConnectionId);

    /// Tell `connection_id` its join was rejected.
    async fn send_full(&self, connection_id: ConnectionId, reason: String);

    /// Report the current room occupancy.
    async fn send_connected(&self, connection_id: ConnectionId, occupancy: usize);

    /// Deliver a negotiation message from another occupant.
    async fn forward(&self, connection_id: ConnectionId, negotiation: Negotiation);
}
