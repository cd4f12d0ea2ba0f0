//! Room search query handler.

mod search_rooms;

pub use search_rooms::{RoomAvailability, SearchRoomsHandler, SearchRoomsQuery};
