//! Route configuration for room endpoints.
//!
//! Configures Axum router with room and reservation routes.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_room, delete_room, get_room, health, reserve_room, room_details, search_rooms,
    update_room, RoomAppState,
};

/// Creates the room router with all endpoints.
///
/// Routes:
/// - `GET /` - Search rooms (`name`, `capacity`, `projector` query parameters)
/// - `POST /room/new/` - Create a room
/// - `GET|POST /room/delete/:id/` - Delete a room
/// - `GET /room/modify/:id/` - Current room values
/// - `POST /room/modify/:id/` - Update a room
/// - `GET /room/reserve/:id/` - Room with upcoming reservations
/// - `POST /room/reserve/:id/` - Reserve a room for a date
/// - `GET /room/:id/` - Room with upcoming reservations
/// - `GET /health` - Liveness probe
pub fn room_router() -> Router<RoomAppState> {
    Router::new()
        .route("/", get(search_rooms))
        .route("/room/new/", axum::routing::post(create_room))
        .route("/room/delete/:id/", get(delete_room).post(delete_room))
        .route("/room/modify/:id/", get(get_room).post(update_room))
        .route("/room/reserve/:id/", get(room_details).post(reserve_room))
        .route("/room/:id/", get(room_details))
        .route("/health", get(health))
}
