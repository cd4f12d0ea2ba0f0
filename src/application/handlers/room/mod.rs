//! Room command and query handlers.

mod create_room;
mod delete_room;
mod get_room;
mod get_room_details;
mod list_rooms;
mod update_room;

pub use create_room::{CreateRoomCommand, CreateRoomHandler};
pub use delete_room::{DeleteRoomCommand, DeleteRoomHandler};
pub use get_room::{GetRoomHandler, GetRoomQuery};
pub use get_room_details::{GetRoomDetailsHandler, GetRoomDetailsQuery, RoomDetails};
pub use list_rooms::{ListRoomsHandler, ListRoomsQuery};
pub use update_room::{UpdateRoomCommand, UpdateRoomHandler};
