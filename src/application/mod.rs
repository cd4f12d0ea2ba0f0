//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, update, delete, reserve) are kept apart from
//! query handlers (list, details, search).

pub mod handlers;

pub use handlers::reservation::{
    CheckReservedTodayHandler, CheckReservedTodayQuery, ListUpcomingHandler, ListUpcomingQuery,
    ReserveRoomCommand, ReserveRoomHandler,
};
pub use handlers::room::{
    CreateRoomCommand, CreateRoomHandler, DeleteRoomCommand, DeleteRoomHandler, GetRoomDetailsHandler,
    GetRoomDetailsQuery, GetRoomHandler, GetRoomQuery, ListRoomsHandler, ListRoomsQuery, RoomDetails,
    UpdateRoomCommand, UpdateRoomHandler,
};
pub use handlers::search::{RoomAvailability, SearchRoomsHandler, SearchRoomsQuery};
