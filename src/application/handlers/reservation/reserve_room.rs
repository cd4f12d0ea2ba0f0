//! ReserveRoomHandler - Command handler for booking a room on a date.
//!
//! The slot check is delegated to the store's uniqueness constraint: the
//! insert is attempted and a `SlotTaken` failure becomes a conflict.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::RoomId;
use crate::domain::reservation::{Reservation, ReservationError, ReservationRequest};
use crate::ports::{Clock, ReservationRepository, RoomRepository};

/// Command to reserve a room for one date.
#[derive(Debug, Clone)]
pub struct ReserveRoomCommand {
    pub room_id: RoomId,
    pub date: NaiveDate,
    pub comment: Option<String>,
}

/// Handler for reserving rooms.
pub struct ReserveRoomHandler {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
    clock: Arc<dyn Clock>,
}

impl ReserveRoomHandler {
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

    pub async fn handle(&self, cmd: ReserveRoomCommand) -> Result<Reservation, ReservationError> {
        // 1. Room must exist
        if self.rooms.find_by_id(&cmd.room_id).await?.is_none() {
            return Err(ReservationError::room_not_found(cmd.room_id));
        }

        // 2. Validate against today's date
        let request =
            ReservationRequest::new(cmd.room_id, cmd.date, cmd.comment, self.clock.today())?;

        // 3. Insert; the store rejects an occupied slot
        let reservation = match self.reservations.insert(&request).await {
            Ok(reservation) => reservation,
            Err(err) => {
                let err = ReservationError::from(err);
                if let ReservationError::SlotTaken { room_id, date } = &err {
                    tracing::warn!(room_id = %room_id, %date, "Reservation slot already taken");
                }
                return Err(err);
            }
        };

        tracing::info!(
            reservation_id = %reservation.id(),
            room_id = %reservation.room_id(),
            date = %reservation.date(),
            "Room reserved"
        );
        Ok(reservation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::InMemoryBookingStore;
    use crate::domain::room::RoomDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn setup(today: NaiveDate) -> (ReserveRoomHandler, RoomId) {
        let store = Arc::new(InMemoryBookingStore::new());
        let room = RoomRepository::insert(store.as_ref(), &RoomDraft::new("Alpha", 10, false).unwrap())
            .await
            .unwrap();
        let handler =
            ReserveRoomHandler::new(store.clone(), store, Arc::new(FixedClock::new(today)));
        (handler, room.id())
    }

    fn command(room_id: RoomId, on: NaiveDate, comment: &str) -> ReserveRoomCommand {
        ReserveRoomCommand {
            room_id,
            date: on,
            comment: Some(comment.to_string()),
        }
    }

    #[tokio::test]
    async fn reserves_free_slot() {
        let today = date(2025, 1, 1);
        let (handler, room_id) = setup(today).await;

        let reservation = handler
            .handle(command(room_id, date(2025, 1, 15), "kickoff"))
            .await
            .unwrap();

        assert_eq!(reservation.room_id(), room_id);
        assert_eq!(reservation.date(), date(2025, 1, 15));
        assert_eq!(reservation.comment(), Some("kickoff"));
    }

    #[tokio::test]
    async fn today_is_bookable() {
        let today = date(2025, 1, 1);
        let (handler, room_id) = setup(today).await;

        assert!(handler.handle(command(room_id, today, "standup")).await.is_ok());
    }

    #[tokio::test]
    async fn past_date_is_rejected() {
        let today = date(2025, 1, 1);
        let (handler, room_id) = setup(today).await;

        let result = handler
            .handle(command(room_id, date(2024, 12, 31), "past"))
            .await;
        assert!(matches!(
            result,
            Err(ReservationError::ValidationFailed { ref field, .. }) if field == "date"
        ));
    }

    #[tokio::test]
    async fn second_booking_of_same_slot_conflicts() {
        let today = date(2025, 1, 1);
        let (handler, room_id) = setup(today).await;

        handler
            .handle(command(room_id, date(2025, 1, 2), "first"))
            .await
            .unwrap();
        let result = handler
            .handle(command(room_id, date(2025, 1, 2), "dup"))
            .await;

        assert_eq!(
            result,
            Err(ReservationError::SlotTaken {
                room_id,
                date: date(2025, 1, 2),
            })
        );
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let today = date(2025, 1, 1);
        let (handler, _) = setup(today).await;

        let result = handler
            .handle(command(RoomId::new(404), today, "nowhere"))
            .await;
        assert_eq!(result, Err(ReservationError::RoomNotFound(RoomId::new(404))));
    }
}
