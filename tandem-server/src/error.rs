use tandem_core::ConnectionId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("room is full ({capacity} occupants)")]
    RoomFull { capacity: usize },

    #[error("connection {0} is already seated")]
    DuplicateJoin(ConnectionId),

    #[error("connection {0} is not an occupant")]
    UnknownSender(ConnectionId),
}
