//! HTTP handlers for room and reservation endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    CreateRoomCommand, CreateRoomHandler, DeleteRoomCommand, DeleteRoomHandler,
    GetRoomDetailsHandler, GetRoomDetailsQuery, GetRoomHandler, GetRoomQuery, ReserveRoomCommand,
    ReserveRoomHandler, SearchRoomsHandler, UpdateRoomCommand, UpdateRoomHandler,
};
use crate::domain::foundation::{ErrorCode, RoomId};
use crate::domain::reservation::ReservationError;
use crate::domain::room::RoomError;
use crate::ports::{Clock, ReservationRepository, RoomRepository};

use super::dto::{
    ErrorResponse, FieldError, ReservationForm, ReservationResponse, RoomCommandResponse,
    RoomDetailsResponse, RoomForm, RoomListItemResponse, RoomListResponse, RoomResponse,
    SearchParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct RoomAppState {
    pub rooms: Arc<dyn RoomRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub clock: Arc<dyn Clock>,
}

impl RoomAppState {
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

    pub fn create_room_handler(&self) -> CreateRoomHandler {
        CreateRoomHandler::new(self.rooms.clone())
    }

    pub fn update_room_handler(&self) -> UpdateRoomHandler {
        UpdateRoomHandler::new(self.rooms.clone())
    }

    pub fn delete_room_handler(&self) -> DeleteRoomHandler {
        DeleteRoomHandler::new(self.rooms.clone())
    }

    pub fn get_room_handler(&self) -> GetRoomHandler {
        GetRoomHandler::new(self.rooms.clone())
    }

    pub fn room_details_handler(&self) -> GetRoomDetailsHandler {
        GetRoomDetailsHandler::new(
            self.rooms.clone(),
            self.reservations.clone(),
            self.clock.clone(),
        )
    }

    pub fn reserve_room_handler(&self) -> ReserveRoomHandler {
        ReserveRoomHandler::new(
            self.rooms.clone(),
            self.reservations.clone(),
            self.clock.clone(),
        )
    }

    pub fn search_rooms_handler(&self) -> SearchRoomsHandler {
        SearchRoomsHandler::new(
            self.rooms.clone(),
            self.reservations.clone(),
            self.clock.clone(),
        )
    }
}

fn parse_room_id(raw: &str) -> Result<RoomId, RoomApiError> {
    raw.parse().map_err(|_| RoomApiError::BadRequest {
        field: "id".to_string(),
        message: format!("Invalid room ID '{}'", raw),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - List rooms, optionally filtered by name, capacity and projector
pub async fn search_rooms(
    State(state): State<RoomAppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, RoomApiError> {
    let Query(params) = params?;
    let query = params.into_query()?;
    let rooms = state.search_rooms_handler().handle(query).await?;

    let response = RoomListResponse {
        rooms: rooms.into_iter().map(RoomListItemResponse::from).collect(),
    };

    Ok(Json(response))
}

/// GET /room/:id/ and GET /room/reserve/:id/ - Room with upcoming reservations
pub async fn room_details(
    State(state): State<RoomAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, RoomApiError> {
    let room_id = parse_room_id(&id)?;
    let details = state
        .room_details_handler()
        .handle(GetRoomDetailsQuery { room_id })
        .await?;

    Ok(Json(RoomDetailsResponse::from(details)))
}

/// GET /room/modify/:id/ - Current room values for the edit form
pub async fn get_room(
    State(state): State<RoomAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, RoomApiError> {
    let room_id = parse_room_id(&id)?;
    let room = state
        .get_room_handler()
        .handle(GetRoomQuery { room_id })
        .await?;

    Ok(Json(RoomResponse::from(room)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /room/new/ - Register a room
pub async fn create_room(
    State(state): State<RoomAppState>,
    form: Result<Form<RoomForm>, FormRejection>,
) -> Result<impl IntoResponse, RoomApiError> {
    let Form(form) = form?;
    let cmd = CreateRoomCommand {
        capacity: form.capacity()?,
        has_projector: form.has_projector(),
        name: form.name,
    };

    let room = state.create_room_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(RoomResponse::from(room))))
}

/// POST /room/modify/:id/ - Replace a room's attributes
pub async fn update_room(
    State(state): State<RoomAppState>,
    Path(id): Path<String>,
    form: Result<Form<RoomForm>, FormRejection>,
) -> Result<impl IntoResponse, RoomApiError> {
    let room_id = parse_room_id(&id)?;
    let Form(form) = form?;
    let cmd = UpdateRoomCommand {
        room_id,
        capacity: form.capacity()?,
        has_projector: form.has_projector(),
        name: form.name,
    };

    let room = state.update_room_handler().handle(cmd).await?;

    Ok(Json(RoomResponse::from(room)))
}

/// GET|POST /room/delete/:id/ - Remove a room and its reservations
pub async fn delete_room(
    State(state): State<RoomAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, RoomApiError> {
    let room_id = parse_room_id(&id)?;
    state
        .delete_room_handler()
        .handle(DeleteRoomCommand { room_id })
        .await?;

    let response = RoomCommandResponse {
        room_id: room_id.as_i64(),
        message: "Room deleted successfully".to_string(),
    };

    Ok(Json(response))
}

/// POST /room/reserve/:id/ - Book a room for one day
pub async fn reserve_room(
    State(state): State<RoomAppState>,
    Path(id): Path<String>,
    form: Result<Form<ReservationForm>, FormRejection>,
) -> Result<impl IntoResponse, RoomApiError> {
    let room_id = parse_room_id(&id)?;
    let Form(form) = form?;
    let cmd = ReserveRoomCommand {
        room_id,
        date: form.date()?,
        comment: form.comment,
    };

    let reservation = state.reserve_room_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponse::from(reservation)),
    ))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub enum RoomApiError {
    BadRequest { field: String, message: String },
    NotFound(String),
    Conflict { code: ErrorCode, message: String },
    Internal(String),
}

impl From<FieldError> for RoomApiError {
    fn from(err: FieldError) -> Self {
        RoomApiError::BadRequest {
            field: err.field.to_string(),
            message: err.message,
        }
    }
}

impl From<FormRejection> for RoomApiError {
    fn from(rejection: FormRejection) -> Self {
        RoomApiError::BadRequest {
            field: "form".to_string(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for RoomApiError {
    fn from(rejection: QueryRejection) -> Self {
        RoomApiError::BadRequest {
            field: "query".to_string(),
            message: rejection.body_text(),
        }
    }
}

impl From<RoomError> for RoomApiError {
    fn from(err: RoomError) -> Self {
        let message = err.message();
        match err {
            RoomError::NotFound(_) => RoomApiError::NotFound(message),
            RoomError::DuplicateName(_) => RoomApiError::Conflict {
                code: ErrorCode::DuplicateRoomName,
                message,
            },
            RoomError::ValidationFailed { field, message } => {
                RoomApiError::BadRequest { field, message }
            }
            RoomError::Infrastructure(msg) => RoomApiError::Internal(msg),
        }
    }
}

impl From<ReservationError> for RoomApiError {
    fn from(err: ReservationError) -> Self {
        let message = err.message();
        match err {
            ReservationError::RoomNotFound(_) => RoomApiError::NotFound(message),
            ReservationError::SlotTaken { .. } => RoomApiError::Conflict {
                code: ErrorCode::SlotTaken,
                message,
            },
            ReservationError::ValidationFailed { field, message } => {
                RoomApiError::BadRequest { field, message }
            }
            ReservationError::Infrastructure(msg) => RoomApiError::Internal(msg),
        }
    }
}

impl IntoResponse for RoomApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RoomApiError::BadRequest { field, message } => {
                tracing::warn!(field = %field, message = %message, "Rejected request input");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::validation(&field, message),
                )
            }
            RoomApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::RoomNotFound, msg),
            ),
            RoomApiError::Conflict { code, message } => {
                tracing::warn!(code = %code, message = %message, "Rejected conflicting request");
                (StatusCode::CONFLICT, ErrorResponse::new(code, message))
            }
            RoomApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::InternalError, "Internal server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn room_errors_map_to_api_errors() {
        assert!(matches!(
            RoomApiError::from(RoomError::not_found(RoomId::new(3))),
            RoomApiError::NotFound(_)
        ));
        assert!(matches!(
            RoomApiError::from(RoomError::duplicate_name("Alpha")),
            RoomApiError::Conflict {
                code: ErrorCode::DuplicateRoomName,
                ..
            }
        ));
        assert!(matches!(
            RoomApiError::from(RoomError::ValidationFailed {
                field: "name".to_string(),
                message: "missing".to_string(),
            }),
            RoomApiError::BadRequest { .. }
        ));
        assert!(matches!(
            RoomApiError::from(RoomError::Infrastructure("pool closed".to_string())),
            RoomApiError::Internal(_)
        ));
    }

    #[test]
    fn reservation_errors_map_to_api_errors() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(matches!(
            RoomApiError::from(ReservationError::slot_taken(RoomId::new(1), date)),
            RoomApiError::Conflict {
                code: ErrorCode::SlotTaken,
                ..
            }
        ));
        assert!(matches!(
            RoomApiError::from(ReservationError::room_not_found(RoomId::new(1))),
            RoomApiError::NotFound(_)
        ));
    }

    #[test]
    fn error_statuses() {
        let cases = [
            (
                RoomApiError::BadRequest {
                    field: "name".to_string(),
                    message: "missing".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                RoomApiError::NotFound("gone".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                RoomApiError::Conflict {
                    code: ErrorCode::SlotTaken,
                    message: "taken".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                RoomApiError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn invalid_path_id_is_bad_request() {
        assert!(matches!(
            parse_room_id("abc"),
            Err(RoomApiError::BadRequest { .. })
        ));
        assert_eq!(parse_room_id("7").unwrap(), RoomId::new(7));
    }
}
