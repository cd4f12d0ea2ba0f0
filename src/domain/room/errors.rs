//! Room-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, RoomId, ValidationError};
use crate::domain::reservation::ReservationError;

/// Room registry errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// Room was not found.
    NotFound(RoomId),
    /// Another room already uses this name.
    DuplicateName(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl RoomError {
    pub fn not_found(id: RoomId) -> Self {
        RoomError::NotFound(id)
    }
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        RoomError::DuplicateName(name.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            RoomError::NotFound(_) => ErrorCode::RoomNotFound,
            RoomError::DuplicateName(_) => ErrorCode::DuplicateRoomName,
            RoomError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RoomError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            RoomError::NotFound(id) => format!("Room not found: {}", id),
            RoomError::DuplicateName(_) => {
                "The room with the provided name already exists".to_string()
            }
            RoomError::ValidationFailed { message, .. } => message.clone(),
            RoomError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RoomError {}

impl From<ValidationError> for RoomError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::EmptyField { .. } => {
                "The conference room name was not provided".to_string()
            }
            ValidationError::NotPositive { .. } => {
                "The room capacity must be a positive number".to_string()
            }
            other => other.to_string(),
        };
        RoomError::ValidationFailed {
            field: err.field().to_string(),
            message,
        }
    }
}

impl From<DomainError> for RoomError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::RoomNotFound => match err.detail("room_id").and_then(|s| s.parse().ok()) {
                Some(id) => RoomError::NotFound(id),
                None => RoomError::Infrastructure(err.to_string()),
            },
            ErrorCode::DuplicateRoomName => {
                RoomError::DuplicateName(err.detail("name").unwrap_or_default().to_string())
            }
            ErrorCode::ValidationFailed => RoomError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => RoomError::Infrastructure(err.to_string()),
        }
    }
}

/// Reservation reads composed into room queries only fail on a missing room
/// or the store itself.
impl From<ReservationError> for RoomError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::RoomNotFound(id) => RoomError::NotFound(id),
            ReservationError::Infrastructure(msg) => RoomError::Infrastructure(msg),
            other => RoomError::Infrastructure(other.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_maps_to_user_message() {
        let err: RoomError = ValidationError::empty_field("name").into();
        assert_eq!(err.message(), "The conference room name was not provided");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn non_positive_capacity_maps_to_user_message() {
        let err: RoomError = ValidationError::not_positive("capacity", 0).into();
        assert_eq!(err.message(), "The room capacity must be a positive number");
        assert!(matches!(err, RoomError::ValidationFailed { ref field, .. } if field == "capacity"));
    }

    #[test]
    fn duplicate_name_domain_error_converts() {
        let err = DomainError::new(ErrorCode::DuplicateRoomName, "exists").with_detail("name", "Alpha");
        assert_eq!(RoomError::from(err), RoomError::DuplicateName("Alpha".to_string()));
    }

    #[test]
    fn room_not_found_domain_error_keeps_id() {
        let err = DomainError::new(ErrorCode::RoomNotFound, "missing").with_detail("room_id", "9");
        assert_eq!(RoomError::from(err), RoomError::NotFound(RoomId::new(9)));
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err = DomainError::database("Failed to list rooms", "timeout");
        assert!(matches!(RoomError::from(err), RoomError::Infrastructure(_)));
    }

    #[test]
    fn reservation_errors_fold_into_room_errors() {
        assert_eq!(
            RoomError::from(ReservationError::RoomNotFound(RoomId::new(4))),
            RoomError::NotFound(RoomId::new(4))
        );
        assert_eq!(
            RoomError::from(ReservationError::Infrastructure("pool closed".to_string())),
            RoomError::Infrastructure("pool closed".to_string())
        );
    }
}
