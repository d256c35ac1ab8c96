mod connection;
mod role;
mod signaling;

pub use connection::ConnectionId;
pub use role::Role;
pub use signaling::{IceServerConfig, Negotiation, NegotiationKind, SignalMessage};
