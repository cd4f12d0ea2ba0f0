//! HTTP adapter for the room module.
//!
//! This module exposes room registry, reservation and search operations via
//! form-encoded endpoints that answer with JSON.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::{RoomApiError, RoomAppState};
pub use routes::room_router;
