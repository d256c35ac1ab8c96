use crate::error::RoomError;
use tandem_core::{ConnectionId, Role};

/// Number of seats in the room.
pub const ROOM_CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinResult {
    /// Seated, room still has free seats.
    Seated { position: usize },
    /// Seated and the room is now full; the joiner became the initiator.
    RoomComplete { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveResult {
    /// `false` when the id was not seated and nothing changed.
    pub removed: bool,
    pub occupancy: usize,
    pub remaining: Vec<ConnectionId>,
}

#[derive(Debug, Clone, Copy)]
struct Seat {
    id: ConnectionId,
    role: Role,
}

/// Membership and role assignment of the single shared room.
///
/// Seats are kept in join order. Every mutating operation performs its
/// capacity or membership check and the mutation in one `&mut self` call, so
/// whoever owns the registry serializes them.
#[derive(Debug)]
pub struct RoomRegistry {
    capacity: usize,
    seats: Vec<Seat>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::with_capacity(ROOM_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            seats: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.seats.len() >= self.capacity
    }

    pub fn join(&mut self, id: ConnectionId) -> Result<JoinResult, RoomError> {
        if self.contains(&id) {
            return Err(RoomError::DuplicateJoin(id));
        }
        if self.is_complete() {
            return Err(RoomError::RoomFull {
                capacity: self.capacity,
            });
        }

        self.seats.push(Seat {
            id,
            role: Role::Unassigned,
        });
        let position = self.seats.len();

        if position < self.capacity {
            return Ok(JoinResult::Seated { position });
        }

        for seat in &mut self.seats {
            seat.role = if seat.id == id {
                Role::Initiator
            } else {
                Role::Responder
            };
        }

        Ok(JoinResult::RoomComplete { position })
    }

    /// Vacates the seat of `id`, if any. On a real departure every remaining
    /// occupant drops back to `Role::Unassigned`, so the next joiner is elected
    /// initiator again. An id without a seat leaves roles untouched.
    pub fn leave(&mut self, id: &ConnectionId) -> LeaveResult {
        let before = self.seats.len();
        self.seats.retain(|seat| seat.id != *id);

        if self.seats.len() == before {
            return LeaveResult {
                removed: false,
                occupancy: before,
                remaining: self.occupants(),
            };
        }

        for seat in &mut self.seats {
            seat.role = Role::Unassigned;
        }

        LeaveResult {
            removed: true,
            occupancy: self.seats.len(),
            remaining: self.occupants(),
        }
    }

    pub fn occupants(&self) -> Vec<ConnectionId> {
        self.seats.iter().map(|seat| seat.id).collect()
    }

    /// Occupants a message from `sender` fans out to.
    pub fn others(&self, sender: &ConnectionId) -> Vec<ConnectionId> {
        self.seats
            .iter()
            .filter(|seat| seat.id != *sender)
            .map(|seat| seat.id)
            .collect()
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.seats.iter().any(|seat| seat.id == *id)
    }

    pub fn ensure_occupant(&self, id: &ConnectionId) -> Result<(), RoomError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(RoomError::UnknownSender(*id))
        }
    }

    pub fn role_of(&self, id: &ConnectionId) -> Option<Role> {
        self.seats
            .iter()
            .find(|seat| seat.id == *id)
            .map(|seat| seat.role)
    }

    pub fn initiator(&self) -> Option<ConnectionId> {
        self.seats
            .iter()
            .find(|seat| seat.role == Role::Initiator)
            .map(|seat| seat.id)
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}
