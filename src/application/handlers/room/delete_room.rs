//! DeleteRoomHandler - Command handler for removing a room.
//!
//! Deletion cascades to the room's reservations in storage.

use std::sync::Arc;

use crate::domain::foundation::RoomId;
use crate::domain::room::RoomError;
use crate::ports::RoomRepository;

/// Command to delete a room.
#[derive(Debug, Clone)]
pub struct DeleteRoomCommand {
    pub room_id: RoomId,
}

/// Handler for deleting rooms.
pub struct DeleteRoomHandler {
    repository: Arc<dyn RoomRepository>,
}

impl DeleteRoomHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteRoomCommand) -> Result<(), RoomError> {
        self.repository.delete(&cmd.room_id).await?;

        tracing::info!(room_id = %cmd.room_id, "Room deleted");
        Ok(())
    }
}
