//! In-Memory Booking Store Adapter
//!
//! Implements both repository ports over a single lock so that room deletion
//! cascades to reservations and the name / slot uniqueness constraints hold
//! exactly as they do in PostgreSQL. Useful for tests and for running the
//! service without a database.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ReservationId, RoomId};
use crate::domain::reservation::{Reservation, ReservationRequest};
use crate::domain::room::{Room, RoomDraft, RoomFilter};
use crate::ports::{ReservationRepository, RoomRepository};

#[derive(Debug, Default)]
struct BookingState {
    rooms: BTreeMap<RoomId, Room>,
    reservations: BTreeMap<ReservationId, Reservation>,
    last_room_id: i64,
    last_reservation_id: i64,
}

impl BookingState {
    fn name_taken(&self, name: &str, except: Option<RoomId>) -> bool {
        self.rooms
            .values()
            .any(|room| room.name() == name && Some(room.id()) != except)
    }
}

/// In-memory storage for rooms and reservations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    state: Arc<RwLock<BookingState>>,
}

impl InMemoryBookingStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored rooms
    pub async fn room_count(&self) -> usize {
        self.state.read().await.rooms.len()
    }

    /// Get the number of stored reservations
    pub async fn reservation_count(&self) -> usize {
        self.state.read().await.reservations.len()
    }
}

fn room_not_found(id: &RoomId) -> DomainError {
    DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", id))
        .with_detail("room_id", id.to_string())
}

fn duplicate_name(name: &str) -> DomainError {
    DomainError::new(
        ErrorCode::DuplicateRoomName,
        format!("Room name already exists: {}", name),
    )
    .with_detail("name", name)
}

#[async_trait]
impl RoomRepository for InMemoryBookingStore {
    async fn insert(&self, draft: &RoomDraft) -> Result<Room, DomainError> {
        let mut state = self.state.write().await;
        if state.name_taken(draft.name(), None) {
            return Err(duplicate_name(draft.name()));
        }

        state.last_room_id += 1;
        let room = Room::from_draft(RoomId::new(state.last_room_id), draft.clone());
        state.rooms.insert(room.id(), room.clone());
        Ok(room)
    }

    async fn update(&self, id: &RoomId, draft: &RoomDraft) -> Result<Room, DomainError> {
        let mut state = self.state.write().await;
        if !state.rooms.contains_key(id) {
            return Err(room_not_found(id));
        }
        if state.name_taken(draft.name(), Some(*id)) {
            return Err(duplicate_name(draft.name()));
        }

        let room = state.rooms.get_mut(id).ok_or_else(|| room_not_found(id))?;
        room.apply(draft.clone());
        Ok(room.clone())
    }

    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        Ok(self.state.read().await.rooms.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Room>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .rooms
            .values()
            .find(|room| room.name() == name)
            .cloned())
    }

    async fn list(&self, filter: &RoomFilter) -> Result<Vec<Room>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .rooms
            .values()
            .filter(|room| filter.matches(room))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &RoomId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.rooms.remove(id).is_none() {
            return Err(room_not_found(id));
        }
        state
            .reservations
            .retain(|_, reservation| reservation.room_id() != *id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryBookingStore {
    async fn insert(&self, request: &ReservationRequest) -> Result<Reservation, DomainError> {
        let mut state = self.state.write().await;
        if !state.rooms.contains_key(&request.room_id()) {
            return Err(room_not_found(&request.room_id()));
        }
        let taken = state
            .reservations
            .values()
            .any(|r| r.room_id() == request.room_id() && r.date() == request.date());
        if taken {
            return Err(DomainError::new(
                ErrorCode::SlotTaken,
                format!(
                    "Room {} is already reserved on {}",
                    request.room_id(),
                    request.date()
                ),
            )
            .with_detail("room_id", request.room_id().to_string())
            .with_detail("date", request.date().to_string()));
        }

        state.last_reservation_id += 1;
        let reservation = Reservation::from_request(
            ReservationId::new(state.last_reservation_id),
            request.clone(),
        );
        state
            .reservations
            .insert(reservation.id(), reservation.clone());
        Ok(reservation)
    }

    async fn list_for_room_from(
        &self,
        room_id: &RoomId,
        from: NaiveDate,
    ) -> Result<Vec<Reservation>, DomainError> {
        let state = self.state.read().await;
        let mut reservations: Vec<Reservation> = state
            .reservations
            .values()
            .filter(|r| r.room_id() == *room_id && r.is_upcoming(from))
            .cloned()
            .collect();
        reservations.sort_by_key(|r| r.date());
        Ok(reservations)
    }

    async fn exists_on(&self, room_id: &RoomId, date: NaiveDate) -> Result<bool, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .reservations
            .values()
            .any(|r| r.room_id() == *room_id && r.date() == date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(name: &str) -> RoomDraft {
        RoomDraft::new(name, 8, false).unwrap()
    }

    fn booking(room_id: RoomId, on: NaiveDate) -> ReservationRequest {
        ReservationRequest::new(room_id, on, None, date(2025, 1, 1)).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryBookingStore::new();
        let first = RoomRepository::insert(&store, &draft("Alpha")).await.unwrap();
        let second = RoomRepository::insert(&store, &draft("Beta")).await.unwrap();

        assert_eq!(first.id(), RoomId::new(1));
        assert_eq!(second.id(), RoomId::new(2));
        assert_eq!(store.room_count().await, 2);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_name() {
        let store = InMemoryBookingStore::new();
        RoomRepository::insert(&store, &draft("Alpha")).await.unwrap();

        let err = RoomRepository::insert(&store, &draft("Alpha")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateRoomName);
        assert_eq!(err.detail("name"), Some("Alpha"));
    }

    #[tokio::test]
    async fn update_allows_keeping_own_name() {
        let store = InMemoryBookingStore::new();
        let room = RoomRepository::insert(&store, &draft("Alpha")).await.unwrap();

        let updated = store
            .update(&room.id(), &RoomDraft::new("Alpha", 20, true).unwrap())
            .await
            .unwrap();
        assert_eq!(updated.capacity(), 20);
        assert!(updated.has_projector());
    }

    #[tokio::test]
    async fn update_rejects_name_of_other_room() {
        let store = InMemoryBookingStore::new();
        RoomRepository::insert(&store, &draft("Alpha")).await.unwrap();
        let beta = RoomRepository::insert(&store, &draft("Beta")).await.unwrap();

        let err = store.update(&beta.id(), &draft("Alpha")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateRoomName);
    }

    #[tokio::test]
    async fn update_unknown_room_is_not_found() {
        let store = InMemoryBookingStore::new();
        let err = store.update(&RoomId::new(5), &draft("Alpha")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
        assert_eq!(err.detail("room_id"), Some("5"));
    }

    #[tokio::test]
    async fn delete_cascades_to_reservations() {
        let store = InMemoryBookingStore::new();
        let alpha = RoomRepository::insert(&store, &draft("Alpha")).await.unwrap();
        let beta = RoomRepository::insert(&store, &draft("Beta")).await.unwrap();
        ReservationRepository::insert(&store, &booking(alpha.id(), date(2025, 2, 1)))
            .await
            .unwrap();
        ReservationRepository::insert(&store, &booking(beta.id(), date(2025, 2, 1)))
            .await
            .unwrap();

        RoomRepository::delete(&store, &alpha.id()).await.unwrap();

        assert_eq!(store.reservation_count().await, 1);
        assert!(!store.exists_on(&alpha.id(), date(2025, 2, 1)).await.unwrap());
        assert!(store.exists_on(&beta.id(), date(2025, 2, 1)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_unknown_room_is_not_found() {
        let store = InMemoryBookingStore::new();
        let err = RoomRepository::delete(&store, &RoomId::new(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }

    #[tokio::test]
    async fn reservation_insert_enforces_slot_uniqueness() {
        let store = InMemoryBookingStore::new();
        let room = RoomRepository::insert(&store, &draft("Alpha")).await.unwrap();
        let request = booking(room.id(), date(2025, 2, 1));

        ReservationRepository::insert(&store, &request).await.unwrap();
        let err = ReservationRepository::insert(&store, &request).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SlotTaken);
        assert_eq!(err.detail("date"), Some("2025-02-01"));
    }

    #[tokio::test]
    async fn reservation_insert_requires_existing_room() {
        let store = InMemoryBookingStore::new();
        let err = ReservationRepository::insert(&store, &booking(RoomId::new(3), date(2025, 2, 1)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }

    #[tokio::test]
    async fn list_from_is_sorted_and_bounded() {
        let store = InMemoryBookingStore::new();
        let room = RoomRepository::insert(&store, &draft("Alpha")).await.unwrap();
        for day in [20, 5, 12, 1] {
            ReservationRepository::insert(&store, &booking(room.id(), date(2025, 3, day)))
                .await
                .unwrap();
        }

        let listed = store
            .list_for_room_from(&room.id(), date(2025, 3, 5))
            .await
            .unwrap();
        let days: Vec<NaiveDate> = listed.iter().map(|r| r.date()).collect();
        assert_eq!(
            days,
            vec![date(2025, 3, 5), date(2025, 3, 12), date(2025, 3, 20)]
        );
    }

    #[tokio::test]
    async fn list_applies_filter() {
        let store = InMemoryBookingStore::new();
        RoomRepository::insert(&store, &RoomDraft::new("Alpha", 10, true).unwrap())
            .await
            .unwrap();
        RoomRepository::insert(&store, &RoomDraft::new("Beta", 10, false).unwrap())
            .await
            .unwrap();

        let rooms = store
            .list(&RoomFilter::all().with_projector(true))
            .await
            .unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name(), "Alpha");
    }
}
