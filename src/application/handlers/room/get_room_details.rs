//! GetRoomDetailsHandler - Query handler for a room and its upcoming bookings.
//!
//! Backs both the room details view and the context shown next to the
//! reservation form.

use std::sync::Arc;

use serde::Serialize;

use crate::application::handlers::reservation::{ListUpcomingHandler, ListUpcomingQuery};
use crate::domain::foundation::RoomId;
use crate::domain::reservation::Reservation;
use crate::domain::room::{Room, RoomError};
use crate::ports::{Clock, ReservationRepository, RoomRepository};

use super::get_room::{GetRoomHandler, GetRoomQuery};

/// Query for a room's details.
#[derive(Debug, Clone)]
pub struct GetRoomDetailsQuery {
    pub room_id: RoomId,
}

/// A room together with its reservations from today onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomDetails {
    pub room: Room,
    pub upcoming: Vec<Reservation>,
}

/// Handler for room details.
pub struct GetRoomDetailsHandler {
    get_room: GetRoomHandler,
    list_upcoming: ListUpcomingHandler,
}

impl GetRoomDetailsHandler {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        reservations: Arc<dyn ReservationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            get_room: GetRoomHandler::new(rooms.clone()),
            list_upcoming: ListUpcomingHandler::new(rooms, reservations, clock),
        }
    }

    pub async fn handle(&self, query: GetRoomDetailsQuery) -> Result<RoomDetails, RoomError> {
        let room = self
            .get_room
            .handle(GetRoomQuery {
                room_id: query.room_id,
            })
            .await?;

        // A room deleted between the two reads surfaces as NotFound
        let upcoming = self
            .list_upcoming
            .handle(ListUpcomingQuery {
                room_id: query.room_id,
            })
            .await?;

        Ok(RoomDetails { room, upcoming })
    }
}
