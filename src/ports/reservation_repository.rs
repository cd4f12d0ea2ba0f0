//! Reservation repository port.
//!
//! The store owns slot uniqueness: a second insert for the same
//! (room, date) must fail with `SlotTaken` regardless of any check the
//! caller performed beforehand.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, RoomId};
use crate::domain::reservation::{Reservation, ReservationRequest};
use async_trait::async_trait;

/// Repository port for Reservation persistence and queries.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a reservation and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `SlotTaken` (details `room_id`, `date`) if the slot is occupied
    /// - `RoomNotFound` (detail `room_id`) if the room doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, request: &ReservationRequest) -> Result<Reservation, DomainError>;

    /// List reservations for a room dated on or after `from`, ascending by date.
    async fn list_for_room_from(
        &self,
        room_id: &RoomId,
        from: NaiveDate,
    ) -> Result<Vec<Reservation>, DomainError>;

    /// Check whether the (room, date) slot is reserved.
    async fn exists_on(&self, room_id: &RoomId, date: NaiveDate) -> Result<bool, DomainError>;
}
