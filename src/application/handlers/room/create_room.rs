//! CreateRoomHandler - Command handler for registering new rooms.

use std::sync::Arc;

use crate::domain::room::{Room, RoomDraft, RoomError};
use crate::ports::RoomRepository;

/// Command to register a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomCommand {
    pub name: String,
    pub capacity: i32,
    pub has_projector: bool,
}

/// Handler for creating rooms.
pub struct CreateRoomHandler {
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateRoomCommand) -> Result<Room, RoomError> {
        // 1. Validate attributes (name, then capacity)
        let draft = RoomDraft::new(cmd.name, cmd.capacity, cmd.has_projector)?;

        // 2. Reject a taken name up front; the store constraint still backs this
        if self.repository.find_by_name(draft.name()).await?.is_some() {
            return Err(RoomError::duplicate_name(draft.name()));
        }

        // 3. Persist
        let room = self.repository.insert(&draft).await?;

        tracing::info!(room_id = %room.id(), name = room.name(), "Room created");
        Ok(room)
    }
}
