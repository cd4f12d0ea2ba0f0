//! HTTP DTOs for room and reservation endpoints.
//!
//! Request types mirror the HTML form and query-string contract (`room-name`,
//! `capacity`, `projector=on`, `date`, `comment`); response types decouple the
//! JSON shape from domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::{RoomAvailability, RoomDetails, SearchRoomsQuery};
use crate::domain::foundation::ErrorCode;
use crate::domain::reservation::Reservation;
use crate::domain::room::Room;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form submitted to create or modify a room.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomForm {
    #[serde(rename = "room-name", default)]
    pub name: String,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub projector: Option<String>,
}

impl RoomForm {
    /// Seat count; a missing or blank field counts as zero.
    pub fn capacity(&self) -> Result<i32, FieldError> {
        match self.capacity.as_deref().map(str::trim) {
            None | Some("") => Ok(0),
            Some(raw) => raw.parse().map_err(|_| FieldError {
                field: "capacity",
                message: "The room capacity must be a positive number".to_string(),
            }),
        }
    }

    /// Checkbox semantics: only `on` means checked.
    pub fn has_projector(&self) -> bool {
        self.projector.as_deref() == Some("on")
    }
}

/// Form submitted to reserve a room.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ReservationForm {
    /// Parses the `YYYY-MM-DD` date field.
    pub fn date(&self) -> Result<NaiveDate, FieldError> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(FieldError {
                field: "date",
                message: "The reservation date was not provided".to_string(),
            });
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FieldError {
            field: "date",
            message: format!("Invalid date '{}', expected YYYY-MM-DD", raw),
        })
    }
}

/// Query parameters for the room list / search page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub projector: Option<String>,
}

impl SearchParams {
    /// Converts raw parameters into a search query. Blank values are ignored.
    pub fn into_query(self) -> Result<SearchRoomsQuery, FieldError> {
        let name = non_blank(self.name);

        let capacity = match non_blank(self.capacity) {
            None => None,
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| FieldError {
                field: "capacity",
                message: format!("Invalid capacity '{}'", raw),
            })?),
        };

        let has_projector = match non_blank(self.projector).as_deref() {
            None => None,
            Some("on" | "true" | "1") => Some(true),
            Some("off" | "false" | "0") => Some(false),
            Some(other) => {
                return Err(FieldError {
                    field: "projector",
                    message: format!("Invalid projector flag '{}'", other),
                })
            }
        };

        Ok(SearchRoomsQuery {
            name,
            capacity,
            has_projector,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A form or query field that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Room representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub has_projector: bool,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id().as_i64(),
            name: room.name().to_string(),
            capacity: room.capacity(),
            has_projector: room.has_projector(),
        }
    }
}

/// Room list entry with today's reservation status.
#[derive(Debug, Clone, Serialize)]
pub struct RoomListItemResponse {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub has_projector: bool,
    pub reserved_today: bool,
}

impl From<RoomAvailability> for RoomListItemResponse {
    fn from(item: RoomAvailability) -> Self {
        Self {
            id: item.room.id().as_i64(),
            name: item.room.name().to_string(),
            capacity: item.room.capacity(),
            has_projector: item.room.has_projector(),
            reserved_today: item.reserved_today,
        }
    }
}

/// Room list.
#[derive(Debug, Clone, Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomListItemResponse>,
}

/// Reservation representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub room_id: i64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id().as_i64(),
            room_id: reservation.room_id().as_i64(),
            date: reservation.date().format("%Y-%m-%d").to_string(),
            comment: reservation.comment().map(str::to_string),
        }
    }
}

/// Room with its upcoming reservations.
#[derive(Debug, Clone, Serialize)]
pub struct RoomDetailsResponse {
    pub room: RoomResponse,
    pub upcoming: Vec<ReservationResponse>,
}

impl From<RoomDetails> for RoomDetailsResponse {
    fn from(details: RoomDetails) -> Self {
        Self {
            room: details.room.into(),
            upcoming: details.upcoming.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for room command operations without a body of their own.
#[derive(Debug, Clone, Serialize)]
pub struct RoomCommandResponse {
    pub room_id: i64,
    pub message: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }
}
