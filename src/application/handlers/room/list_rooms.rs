//! ListRoomsHandler - Query handler for filtered room listings.

use std::sync::Arc;

use crate::domain::room::{Room, RoomError, RoomFilter};
use crate::ports::RoomRepository;

/// Query listing rooms that match a filter.
#[derive(Debug, Clone, Default)]
pub struct ListRoomsQuery {
    pub filter: RoomFilter,
}

/// Handler for listing rooms.
pub struct ListRoomsHandler {
    repository: Arc<dyn RoomRepository>,
}

impl ListRoomsHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListRoomsQuery) -> Result<Vec<Room>, RoomError> {
        Ok(self.repository.list(&query.filter).await?)
    }
}
