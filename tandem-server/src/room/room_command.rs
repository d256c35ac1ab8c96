use tandem_core::{ConnectionId, Negotiation};

/// Commands the transport feeds into the room, one stream for all sockets.
#[derive(Debug)]
pub enum RoomCommand {
    /// The client finished local setup and asks for a seat.
    Announce { connection_id: ConnectionId },

    /// Offer, answer or candidate to pass on to the other occupant.
    Relay {
        connection_id: ConnectionId,
        negotiation: Negotiation,
    },

    /// The socket is gone.
    Disconnect { connection_id: ConnectionId },
}
