//! PostgreSQL implementation of ReservationRepository.
//!
//! Slot uniqueness comes from `UNIQUE (room_id, date)` on the reservations
//! table. The insert is attempted directly and a unique violation is
//! reported as `SlotTaken`, so concurrent bookings of the same slot cannot
//! both succeed.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ReservationId, RoomId};
use crate::domain::reservation::{Reservation, ReservationRequest};
use crate::ports::ReservationRepository;

/// PostgreSQL implementation of ReservationRepository.
#[derive(Clone)]
pub struct PostgresReservationRepository {
    pool: PgPool,
}

impl PostgresReservationRepository {
    /// Creates a new PostgresReservationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {
    async fn insert(&self, request: &ReservationRequest) -> Result<Reservation, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO reservations (room_id, date, comment)
            VALUES ($1, $2, $3)
            RETURNING id, room_id, date, comment
            "#,
        )
        .bind(request.room_id().as_i64())
        .bind(request.date())
        .bind(request.comment())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => row_to_reservation(row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DomainError::new(
                    ErrorCode::SlotTaken,
                    format!(
                        "Room {} is already reserved on {}",
                        request.room_id(),
                        request.date()
                    ),
                )
                .with_detail("room_id", request.room_id().to_string())
                .with_detail("date", request.date().to_string()),
            ),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => Err(
                DomainError::new(
                    ErrorCode::RoomNotFound,
                    format!("Room not found: {}", request.room_id()),
                )
                .with_detail("room_id", request.room_id().to_string()),
            ),
            Err(e) => Err(DomainError::database("Failed to insert reservation", e)),
        }
    }

    async fn list_for_room_from(
        &self,
        room_id: &RoomId,
        from: NaiveDate,
    ) -> Result<Vec<Reservation>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, room_id, date, comment
            FROM reservations
            WHERE room_id = $1 AND date >= $2
            ORDER BY date ASC
            "#,
        )
        .bind(room_id.as_i64())
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list reservations", e))?;

        rows.into_iter().map(row_to_reservation).collect()
    }

    async fn exists_on(&self, room_id: &RoomId, date: NaiveDate) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM reservations WHERE room_id = $1 AND date = $2)",
        )
        .bind(room_id.as_i64())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to check reservation", e))?;

        Ok(result.0)
    }
}

fn row_to_reservation(row: sqlx::postgres::PgRow) -> Result<Reservation, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let room_id: i64 = row
        .try_get("room_id")
        .map_err(|e| DomainError::database("Failed to get room_id", e))?;
    let date: NaiveDate = row
        .try_get("date")
        .map_err(|e| DomainError::database("Failed to get date", e))?;
    let comment: Option<String> = row
        .try_get("comment")
        .map_err(|e| DomainError::database("Failed to get comment", e))?;

    Ok(Reservation::reconstitute(
        ReservationId::new(id),
        RoomId::new(room_id),
        date,
        comment,
    ))
}
