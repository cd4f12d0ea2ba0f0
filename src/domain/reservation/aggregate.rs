//! Reservation entity and booking request.
//!
//! A reservation books one room for one calendar date. The (room, date)
//! slot is unique; that uniqueness is owned by the store, not by this type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReservationId, RoomId, ValidationError};

/// A validated request to book a slot.
///
/// # Invariants
///
/// - `date` is not before the day the request was validated against
/// - `comment` is either absent or contains non-whitespace text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    room_id: RoomId,
    date: NaiveDate,
    comment: Option<String>,
}

impl ReservationRequest {
    /// Validate a booking request against the current calendar date.
    ///
    /// Today is bookable; anything strictly earlier is rejected.
    ///
    /// # Errors
    ///
    /// - `InPast` if `date < today`
    pub fn new(
        room_id: RoomId,
        date: NaiveDate,
        comment: Option<String>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if date < today {
            return Err(ValidationError::in_past("date", date));
        }

        let comment = comment.filter(|c| !c.trim().is_empty());
        Ok(Self {
            room_id,
            date,
            comment,
        })
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// A booking of one room for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    room_id: RoomId,
    date: NaiveDate,
    comment: Option<String>,
}

impl Reservation {
    /// Build a reservation from an accepted request and a store-assigned id.
    pub fn from_request(id: ReservationId, request: ReservationRequest) -> Self {
        Self {
            id,
            room_id: request.room_id,
            date: request.date,
            comment: request.comment,
        }
    }

    /// Reconstitute a reservation from persistence (no validation).
    pub fn reconstitute(
        id: ReservationId,
        room_id: RoomId,
        date: NaiveDate,
        comment: Option<String>,
    ) -> Self {
        Self {
            id,
            room_id,
            date,
            comment,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns true if the reservation falls on `today` or later.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn request_for_today_is_accepted() {
        let today = date(2025, 1, 1);
        let request = ReservationRequest::new(RoomId::new(1), today, None, today).unwrap();
        assert_eq!(request.date(), today);
    }

    #[test]
    fn request_for_yesterday_is_rejected() {
        let today = date(2025, 1, 1);
        let err = ReservationRequest::new(RoomId::new(1), date(2024, 12, 31), None, today)
            .unwrap_err();
        assert_eq!(err.field(), "date");
        assert!(matches!(err, ValidationError::InPast { .. }));
    }

    #[test]
    fn blank_comment_is_dropped() {
        let today = date(2025, 1, 1);
        let request =
            ReservationRequest::new(RoomId::new(1), today, Some("   ".to_string()), today)
                .unwrap();
        assert_eq!(request.comment(), None);
    }

    #[test]
    fn comment_text_is_kept_verbatim() {
        let today = date(2025, 1, 1);
        let request = ReservationRequest::new(
            RoomId::new(1),
            today,
            Some(" kickoff ".to_string()),
            today,
        )
        .unwrap();
        assert_eq!(request.comment(), Some(" kickoff "));
    }

    #[test]
    fn upcoming_includes_today() {
        let today = date(2025, 3, 10);
        let reservation =
            Reservation::reconstitute(ReservationId::new(1), RoomId::new(1), today, None);
        assert!(reservation.is_upcoming(today));
        assert!(!reservation.is_upcoming(date(2025, 3, 11)));
    }
}
