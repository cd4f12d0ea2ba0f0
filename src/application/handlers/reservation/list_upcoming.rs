//! ListUpcomingHandler - Query handler for a room's future reservations.

use std::sync::Arc;

use crate::domain::foundation::RoomId;
use crate::domain::reservation::{Reservation, ReservationError};
use crate::ports::{Clock, ReservationRepository, RoomRepository};

/// Query for reservations dated today or later.
#[derive(Debug, Clone)]
pub struct ListUpcomingQuery {
    pub room_id: RoomId,
}

/// Handler for listing upcoming reservations, ascending by date.
pub struct ListUpcomingHandler {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
    clock: Arc<dyn Clock>,
}

impl ListUpcomingHandler {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        reservations: Arc<dyn ReservationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rooms,
            reservations,
            clock,
        }
    }

    pub async fn handle(
        &self,
        query: ListUpcomingQuery,
    ) -> Result<Vec<Reservation>, ReservationError> {
        if self.rooms.find_by_id(&query.room_id).await?.is_none() {
            return Err(ReservationError::room_not_found(query.room_id));
        }

        Ok(self
            .reservations
            .list_for_room_from(&query.room_id, self.clock.today())
            .await?)
    }
}
