use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl IceServerConfig {
    pub fn stun(url: impl Into<String>) -> Self {
        Self {
            urls: vec![url.into()],
            username: None,
            credential: None,
        }
    }
}

/// Every frame exchanged over the signaling socket.
///
/// Frames are encoded as `{"op": "<kind>", "d": <payload>}`; kinds without a
/// payload omit `d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "d", rename_all = "snake_case")]
pub enum SignalMessage {
    /// Server -> client, first frame on a fresh socket.
    Welcome { connection_id: ConnectionId },

    /// Server -> client, connectivity-assistance servers passed through as configured.
    IceConfig { ice_servers: Vec<IceServerConfig> },

    /// Client -> server, request a seat in the room.
    ClientConnected,

    /// Server -> client, room occupancy after somebody left.
    Connected(usize),

    /// Server -> client, recipient must produce the first offer.
    Initiate,

    /// Server -> client, join rejected.
    Full(String),

    Offer(Value),
    Answer(Value),
    Candidate(Value),
}

impl SignalMessage {
    /// Splits off the relayable part of a frame.
    pub fn into_negotiation(self) -> Result<Negotiation, SignalMessage> {
        match self {
            SignalMessage::Offer(data) => Ok(Negotiation::Offer(data)),
            SignalMessage::Answer(data) => Ok(Negotiation::Answer(data)),
            SignalMessage::Candidate(data) => Ok(Negotiation::Candidate(data)),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationKind {
    Offer,
    Answer,
    Candidate,
}

impl fmt::Display for NegotiationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NegotiationKind::Offer => "offer",
            NegotiationKind::Answer => "answer",
            NegotiationKind::Candidate => "candidate",
        };
        f.write_str(name)
    }
}

/// A negotiation message routed between occupants. The payload is never
/// inspected.
#[derive(Debug, Clone, PartialEq)]
pub enum Negotiation {
    Offer(Value),
    Answer(Value),
    Candidate(Value),
}

impl Negotiation {
    pub fn kind(&self) -> NegotiationKind {
        match self {
            Negotiation::Offer(_) => NegotiationKind::Offer,
            Negotiation::Answer(_) => NegotiationKind::Answer,
            Negotiation::Candidate(_) => NegotiationKind::Candidate,
        }
    }

    pub fn payload(&self) -> &Value {
        match self {
            Negotiation::Offer(data) | Negotiation::Answer(data) | Negotiation::Candidate(data) => {
                data
            }
        }
    }
}

impl From<Negotiation> for SignalMessage {
    fn from(negotiation: Negotiation) -> Self {
        match negotiation {
            Negotiation::Offer(data) => SignalMessage::Offer(data),
            Negotiation::Answer(data) => SignalMessage::Answer(data),
            Negotiation::Candidate(data) => SignalMessage::Candidate(data),
        }
    }
}
