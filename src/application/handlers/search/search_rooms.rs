//! SearchRoomsHandler - Filtered room listing annotated with today's status.

use std::sync::Arc;

use serde::Serialize;

use crate::application::handlers::reservation::{
    CheckReservedTodayHandler, CheckReservedTodayQuery,
};
use crate::application::handlers::room::{ListRoomsHandler, ListRoomsQuery};
use crate::domain::room::{Room, RoomError, RoomFilter};
use crate::ports::{Clock, ReservationRepository, RoomRepository};

/// Search criteria. Unset criteria match every room.
#[derive(Debug, Clone, Default)]
pub struct SearchRoomsQuery {
    /// Case-sensitive substring of the room name.
    pub name: Option<String>,
    /// Exact seat count.
    pub capacity: Option<i32>,
    pub has_projector: Option<bool>,
}

impl SearchRoomsQuery {
    fn to_filter(&self) -> RoomFilter {
        RoomFilter {
            name_contains: self.name.clone(),
            capacity: self.capacity,
            has_projector: self.has_projector,
        }
    }
}

/// A room with its reservation status for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAvailability {
    pub room: Room,
    pub reserved_today: bool,
}

/// Handler for room search: a room listing followed by one
/// reserved-today check per match.
pub struct SearchRoomsHandler {
    list_rooms: ListRoomsHandler,
    reserved_today: CheckReservedTodayHandler,
}

impl SearchRoomsHandler {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        reservations: Arc<dyn ReservationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            list_rooms: ListRoomsHandler::new(rooms),
            reserved_today: CheckReservedTodayHandler::new(reservations, clock),
        }
    }

    pub async fn handle(&self, query: SearchRoomsQuery) -> Result<Vec<RoomAvailability>, RoomError> {
        let rooms = self
            .list_rooms
            .handle(ListRoomsQuery {
                filter: query.to_filter(),
            })
            .await?;

        let mut results = Vec::with_capacity(rooms.len());
        for room in rooms {
            let reserved_today = self
                .reserved_today
                .handle(CheckReservedTodayQuery { room_id: room.id() })
                .await?;
            results.push(RoomAvailability {
                room,
                reserved_today,
            });
        }

        tracing::debug!(matches = results.len(), "Room search completed");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::InMemoryBookingStore;
    use crate::domain::reservation::ReservationRequest;
    use crate::domain::room::RoomDraft;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    async fn setup() -> SearchRoomsHandler {
        let store = Arc::new(InMemoryBookingStore::new());
        let mut ids = Vec::new();
        for (name, capacity, projector) in [
            ("Alpha", 10, false),
            ("Beta", 10, true),
            ("Alphabet", 4, true),
        ] {
            let room = RoomRepository::insert(
                store.as_ref(),
                &RoomDraft::new(name, capacity, projector).unwrap(),
            )
            .await
            .unwrap();
            ids.push(room.id());
        }
        // Alpha is busy today, Beta tomorrow
        let request = ReservationRequest::new(ids[0], today(), None, today()).unwrap();
        ReservationRepository::insert(store.as_ref(), &request)
            .await
            .unwrap();
        let request =
            ReservationRequest::new(ids[1], today().succ_opt().unwrap(), None, today()).unwrap();
        ReservationRepository::insert(store.as_ref(), &request)
            .await
            .unwrap();

        SearchRoomsHandler::new(store.clone(), store, Arc::new(FixedClock::new(today())))
    }

    fn summary(results: &[RoomAvailability]) -> Vec<(&str, bool)> {
        results
            .iter()
            .map(|r| (r.room.name(), r.reserved_today))
            .collect()
    }

    #[tokio::test]
    async fn annotates_every_room_with_todays_status() {
        let handler = setup().await;

        let results = handler.handle(SearchRoomsQuery::default()).await.unwrap();
        assert_eq!(
            summary(&results),
            vec![("Alpha", true), ("Beta", false), ("Alphabet", false)]
        );
    }

    #[tokio::test]
    async fn name_query_filters_by_substring() {
        let handler = setup().await;

        let results = handler
            .handle(SearchRoomsQuery {
                name: Some("Alpha".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(summary(&results), vec![("Alpha", true), ("Alphabet", false)]);
    }

    #[tokio::test]
    async fn name_query_without_match_returns_nothing() {
        let handler = setup().await;

        let results = handler
            .handle(SearchRoomsQuery {
                name: Some("Zeta".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn capacity_and_projector_criteria_combine() {
        let handler = setup().await;

        let results = handler
            .handle(SearchRoomsQuery {
                name: None,
                capacity: Some(10),
                has_projector: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(summary(&results), vec![("Beta", false)]);
    }
}
