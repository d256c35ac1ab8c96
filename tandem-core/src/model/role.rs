use serde::{Deserialize, Serialize};

/// Negotiation role of a room occupant.
///
/// Roles are handed out when the room fills up: the occupant that completes
/// the room becomes the `Initiator` and produces the first offer, everybody
/// already seated becomes a `Responder`.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Unassigned,
    Initiator,
    Responder,
}
