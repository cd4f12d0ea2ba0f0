//! PostgreSQL implementation of RoomRepository.
//!
//! Name uniqueness is backed by the `rooms.name` UNIQUE constraint and
//! reservation cleanup by `ON DELETE CASCADE` on `reservations.room_id`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, RoomId};
use crate::domain::room::{Room, RoomDraft, RoomFilter};
use crate::ports::RoomRepository;

/// PostgreSQL implementation of RoomRepository.
#[derive(Clone)]
pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    /// Creates a new PostgresRoomRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn insert(&self, draft: &RoomDraft) -> Result<Room, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO rooms (name, capacity, has_projector)
            VALUES ($1, $2, $3)
            RETURNING id, name, capacity, has_projector
            "#,
        )
        .bind(draft.name())
        .bind(draft.capacity())
        .bind(draft.has_projector())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => row_to_room(row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(duplicate_name(draft.name()))
            }
            Err(e) => Err(DomainError::database("Failed to insert room", e)),
        }
    }

    async fn update(&self, id: &RoomId, draft: &RoomDraft) -> Result<Room, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE rooms SET
                name = $2,
                capacity = $3,
                has_projector = $4
            WHERE id = $1
            RETURNING id, name, capacity, has_projector
            "#,
        )
        .bind(id.as_i64())
        .bind(draft.name())
        .bind(draft.capacity())
        .bind(draft.has_projector())
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => row_to_room(row),
            Ok(None) => Err(room_not_found(id)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(duplicate_name(draft.name()))
            }
            Err(e) => Err(DomainError::database("Failed to update room", e)),
        }
    }

    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        let row = sqlx::query("SELECT id, name, capacity, has_projector FROM rooms WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch room", e))?;

        row.map(row_to_room).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Room>, DomainError> {
        let row =
            sqlx::query("SELECT id, name, capacity, has_projector FROM rooms WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch room by name", e))?;

        row.map(row_to_room).transpose()
    }

    async fn list(&self, filter: &RoomFilter) -> Result<Vec<Room>, DomainError> {
        // strpos keeps the substring match literal; LIKE would treat % and _ as wildcards
        let rows = sqlx::query(
            r#"
            SELECT id, name, capacity, has_projector
            FROM rooms
            WHERE ($1::TEXT IS NULL OR strpos(name, $1) > 0)
              AND ($2::INTEGER IS NULL OR capacity = $2)
              AND ($3::BOOLEAN IS NULL OR has_projector = $3)
            ORDER BY id ASC
            "#,
        )
        .bind(filter.name_contains.as_deref())
        .bind(filter.capacity)
        .bind(filter.has_projector)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list rooms", e))?;

        rows.into_iter().map(row_to_room).collect()
    }

    async fn delete(&self, id: &RoomId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete room", e))?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn room_not_found(id: &RoomId) -> DomainError {
    DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", id))
        .with_detail("room_id", id.to_string())
}

fn duplicate_name(name: &str) -> DomainError {
    DomainError::new(
        ErrorCode::DuplicateRoomName,
        format!("Room name already exists: {}", name),
    )
    .with_detail("name", name)
}

fn row_to_room(row: sqlx::postgres::PgRow) -> Result<Room, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;
    let capacity: i32 = row
        .try_get("capacity")
        .map_err(|e| DomainError::database("Failed to get capacity", e))?;
    let has_projector: bool = row
        .try_get("has_projector")
        .map_err(|e| DomainError::database("Failed to get has_projector", e))?;

    Ok(Room::reconstitute(
        RoomId::new(id),
        name,
        capacity,
        has_projector,
    ))
}
