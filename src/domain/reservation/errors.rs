//! Reservation-specific error types.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, RoomId, ValidationError};

/// Reservation ledger errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// The room being booked does not exist.
    RoomNotFound(RoomId),
    /// The (room, date) slot already holds a reservation.
    SlotTaken { room_id: RoomId, date: NaiveDate },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ReservationError {
    pub fn room_not_found(id: RoomId) -> Self {
        ReservationError::RoomNotFound(id)
    }
    pub fn slot_taken(room_id: RoomId, date: NaiveDate) -> Self {
        ReservationError::SlotTaken { room_id, date }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ReservationError::RoomNotFound(_) => ErrorCode::RoomNotFound,
            ReservationError::SlotTaken { .. } => ErrorCode::SlotTaken,
            ReservationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReservationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ReservationError::RoomNotFound(id) => format!("Room not found: {}", id),
            ReservationError::SlotTaken { date, .. } => {
                format!("The room is already reserved on {}", date)
            }
            ReservationError::ValidationFailed { message, .. } => message.clone(),
            ReservationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ReservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReservationError {}

impl From<ValidationError> for ReservationError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::InPast { value, .. } => {
                format!("A reservation cannot be made for a past date ({})", value)
            }
            other => other.to_string(),
        };
        ReservationError::ValidationFailed {
            field: err.field().to_string(),
            message,
        }
    }
}

impl From<DomainError> for ReservationError {
    fn from(err: DomainError) -> Self {
        let room_id: Option<RoomId> = err.detail("room_id").and_then(|s| s.parse().ok());
        match (err.code, room_id) {
            (ErrorCode::RoomNotFound, Some(room_id)) => ReservationError::RoomNotFound(room_id),
            (ErrorCode::SlotTaken, Some(room_id)) => {
                match err.detail("date").and_then(|s| s.parse().ok()) {
                    Some(date) => ReservationError::SlotTaken { room_id, date },
                    None => ReservationError::Infrastructure(err.to_string()),
                }
            }
            (ErrorCode::ValidationFailed, _) => ReservationError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => ReservationError::Infrastructure(err.to_string()),
        }
    }
}
