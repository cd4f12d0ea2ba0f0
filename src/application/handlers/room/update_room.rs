//! UpdateRoomHandler - Command handler for modifying a room.

use std::sync::Arc;

use crate::domain::foundation::RoomId;
use crate::domain::room::{Room, RoomDraft, RoomError};
use crate::ports::RoomRepository;

/// Command to replace a room's attributes.
#[derive(Debug, Clone)]
pub struct UpdateRoomCommand {
    pub room_id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub has_projector: bool,
}

/// Handler for updating rooms.
pub struct UpdateRoomHandler {
    repository: Arc<dyn RoomRepository>,
}

impl UpdateRoomHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateRoomCommand) -> Result<Room, RoomError> {
        if self.repository.find_by_id(&cmd.room_id).await?.is_none() {
            return Err(RoomError::not_found(cmd.room_id));
        }

        let draft = RoomDraft::new(cmd.name, cmd.capacity, cmd.has_projector)?;

        // Keeping the current name is allowed; taking another room's is not
        if let Some(owner) = self.repository.find_by_name(draft.name()).await? {
            if owner.id() != cmd.room_id {
                return Err(RoomError::duplicate_name(draft.name()));
            }
        }

        let room = self.repository.update(&cmd.room_id, &draft).await?;

        tracing::info!(room_id = %room.id(), name = room.name(), "Room updated");
        Ok(room)
    }
}
