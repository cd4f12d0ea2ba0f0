//! Room entity and its validated draft.
//!
//! A `RoomDraft` carries the user-editable attributes of a room after
//! validation; the store turns a draft into a `Room` by assigning an id.

use crate::domain::foundation::{RoomId, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum length for a room name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Validated room attributes, ready to be inserted or applied as an update.
///
/// # Invariants
///
/// - `name` is non-empty and at most 255 characters
/// - `capacity` is strictly positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    name: String,
    capacity: i32,
    has_projector: bool,
}

impl RoomDraft {
    /// Validate room attributes.
    ///
    /// Checks run in the order a user sees them on the form: name first,
    /// then capacity.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is empty
    /// - `TooLong` if name exceeds 255 characters
    /// - `NotPositive` if capacity is zero or negative
    pub fn new(
        name: impl Into<String>,
        capacity: i32,
        has_projector: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, length));
        }
        if capacity <= 0 {
            return Err(ValidationError::not_positive("capacity", capacity as i64));
        }

        Ok(Self {
            name,
            capacity,
            has_projector,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn has_projector(&self) -> bool {
        self.has_projector
    }
}

/// A bookable conference room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    capacity: i32,
    has_projector: bool,
}

impl Room {
    /// Build a room from a validated draft and a store-assigned id.
    pub fn from_draft(id: RoomId, draft: RoomDraft) -> Self {
        Self {
            id,
            name: draft.name,
            capacity: draft.capacity,
            has_projector: draft.has_projector,
        }
    }

    /// Reconstitute a room from persistence (no validation).
    pub fn reconstitute(id: RoomId, name: String, capacity: i32, has_projector: bool) -> Self {
        Self {
            id,
            name,
            capacity,
            has_projector,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the room ID.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of seats.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Returns whether the room is equipped with a projector.
    pub fn has_projector(&self) -> bool {
        self.has_projector
    }

    /// Replace the room's attributes with a validated draft.
    pub fn apply(&mut self, draft: RoomDraft) {
        self.name = draft.name;
        self.capacity = draft.capacity;
        self.has_projector = draft.has_projector;
    }
}
