//! Room listing filter.

use serde::{Deserialize, Serialize};

use super::Room;

/// Conjunctive filter over rooms. Every unset option matches all rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFilter {
    /// Case-sensitive substring of the room name.
    pub name_contains: Option<String>,

    /// Exact seat count. This is an equality match, not a lower bound.
    pub capacity: Option<i32>,

    /// Projector flag, exact match.
    pub has_projector: Option<bool>,
}

impl RoomFilter {
    /// Filter matching every room.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_name_containing(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
        self
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_projector(mut self, has_projector: bool) -> Self {
        self.has_projector = Some(has_projector);
        self
    }

    /// Evaluates the filter against a single room.
    pub fn matches(&self, room: &Room) -> bool {
        if let Some(fragment) = &self.name_contains {
            if !room.name().contains(fragment.as_str()) {
                return false;
            }
        }
        if let Some(capacity) = self.capacity {
            if room.capacity() != capacity {
                return false;
            }
        }
        if let Some(has_projector) = self.has_projector {
            if room.has_projector() != has_projector {
                return false;
            }
        }
        true
    }
}
