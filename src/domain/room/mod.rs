//! Room domain module.
//!
//! Conference rooms are the bookable resources. Names are unique across the
//! registry, capacity is positive, and deleting a room removes every
//! reservation made for it.

mod aggregate;
mod errors;
mod filter;

pub use aggregate::{Room, RoomDraft, MAX_NAME_LENGTH};
pub use errors::RoomError;
pub use filter::RoomFilter;
