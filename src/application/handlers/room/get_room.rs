//! GetRoomHandler - Query handler for a single room.

use std::sync::Arc;

use crate::domain::foundation::RoomId;
use crate::domain::room::{Room, RoomError};
use crate::ports::RoomRepository;

/// Query for a room by id.
#[derive(Debug, Clone)]
pub struct GetRoomQuery {
    pub room_id: RoomId,
}

/// Handler for fetching a room.
pub struct GetRoomHandler {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRoomQuery) -> Result<Room, RoomError> {
        self.repository
            .find_by_id(&query.room_id)
            .await?
            .ok_or(RoomError::NotFound(query.room_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingStore;
    use crate::domain::room::RoomDraft;

    #[tokio::test]
    async fn returns_existing_room() {
        let store = Arc::new(InMemoryBookingStore::new());
        let room = store
            .insert(&RoomDraft::new("Alpha", 10, true).unwrap())
            .await
            .unwrap();

        let handler = GetRoomHandler::new(store);
        let found = handler.handle(GetRoomQuery { room_id: room.id() }).await.unwrap();
        assert_eq!(found, room);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let handler = GetRoomHandler::new(Arc::new(InMemoryBookingStore::new()));
        let result = handler
            .handle(GetRoomQuery {
                room_id: RoomId::new(1),
            })
            .await;
        assert_eq!(result, Err(RoomError::NotFound(RoomId::new(1))));
    }
}
