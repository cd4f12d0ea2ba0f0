//! Room repository port.
//!
//! Defines the contract for persisting and querying conference rooms.
//!
//! # Design
//!
//! - **Store-assigned ids**: `insert` returns the persisted room with its id
//! - **Uniqueness in storage**: implementations must reject duplicate names
//!   with `DuplicateRoomName` even if the caller pre-checked
//! - **Cascading delete**: removing a room removes its reservations

use crate::domain::foundation::{DomainError, RoomId};
use crate::domain::room::{Room, RoomDraft, RoomFilter};
use async_trait::async_trait;

/// Repository port for Room persistence.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Insert a new room and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DuplicateRoomName` (detail `name`) if the name is taken
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, draft: &RoomDraft) -> Result<Room, DomainError>;

    /// Replace the attributes of an existing room.
    ///
    /// # Errors
    ///
    /// - `RoomNotFound` (detail `room_id`) if the room doesn't exist
    /// - `DuplicateRoomName` (detail `name`) if another room has the name
    /// - `DatabaseError` on persistence failure
    async fn update(&self, id: &RoomId, draft: &RoomDraft) -> Result<Room, DomainError>;

    /// Find a room by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError>;

    /// Find a room by exact, case-sensitive name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Room>, DomainError>;

    /// List rooms matching the filter, ordered by id ascending.
    async fn list(&self, filter: &RoomFilter) -> Result<Vec<Room>, DomainError>;

    /// Delete a room and, by cascade, all of its reservations.
    ///
    /// # Errors
    ///
    /// - `RoomNotFound` (detail `room_id`) if the room doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &RoomId) -> Result<(), DomainError>;
}
