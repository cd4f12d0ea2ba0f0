//! CheckReservedTodayHandler - Query handler for today's occupancy of a room.

use std::sync::Arc;

use crate::domain::foundation::RoomId;
use crate::domain::reservation::ReservationError;
use crate::ports::{Clock, ReservationRepository};

/// Query whether a room has a reservation for today.
#[derive(Debug, Clone)]
pub struct CheckReservedTodayQuery {
    pub room_id: RoomId,
}

/// Handler answering "is this room reserved today?" with a single
/// existence query.
pub struct CheckReservedTodayHandler {
    reservations: Arc<dyn ReservationRepository>,
    clock: Arc<dyn Clock>,
}

impl CheckReservedTodayHandler {
    pub fn new(reservations: Arc<dyn ReservationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reservations,
            clock,
        }
    }

    pub async fn handle(&self, query: CheckReservedTodayQuery) -> Result<bool, ReservationError> {
        Ok(self
            .reservations
            .exists_on(&query.room_id, self.clock.today())
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::InMemoryBookingStore;
    use crate::domain::reservation::ReservationRequest;
    use crate::domain::room::RoomDraft;
    use crate::ports::RoomRepository;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn reflects_reservation_for_today_only() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let tomorrow = today.succ_opt().unwrap();
        let store = Arc::new(InMemoryBookingStore::new());
        let alpha = RoomRepository::insert(store.as_ref(), &RoomDraft::new("Alpha", 10, false).unwrap())
            .await
            .unwrap();
        let beta = RoomRepository::insert(store.as_ref(), &RoomDraft::new("Beta", 10, false).unwrap())
            .await
            .unwrap();

        let handler = CheckReservedTodayHandler::new(store.clone(), Arc::new(FixedClock::new(today)));
        assert!(!handler
            .handle(CheckReservedTodayQuery { room_id: alpha.id() })
            .await
            .unwrap());

        let request = ReservationRequest::new(alpha.id(), today, None, today).unwrap();
        ReservationRepository::insert(store.as_ref(), &request)
            .await
            .unwrap();
        let request = ReservationRequest::new(beta.id(), tomorrow, None, today).unwrap();
        ReservationRepository::insert(store.as_ref(), &request)
            .await
            .unwrap();

        assert!(handler
            .handle(CheckReservedTodayQuery { room_id: alpha.id() })
            .await
            .unwrap());
        assert!(!handler
            .handle(CheckReservedTodayQuery { room_id: beta.id() })
            .await
            .unwrap());
    }
}
