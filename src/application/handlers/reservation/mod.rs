//! Reservation command and query handlers.

mod check_reserved_today;
mod list_upcoming;
mod reserve_room;

pub use check_reserved_today::{CheckReservedTodayHandler, CheckReservedTodayQuery};
pub use list_upcoming::{ListUpcomingHandler, ListUpcomingQuery};
pub use reserve_room::{ReserveRoomCommand, ReserveRoomHandler};
