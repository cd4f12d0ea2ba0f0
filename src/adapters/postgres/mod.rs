//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresRoomRepository` - Room persistence and filtering
//! - `PostgresReservationRepository` - Reservation persistence and slot queries
//!
//! Schema lives in `migrations/` and is applied with [`run_migrations`].

mod reservation_repository;
mod room_repository;

pub use reservation_repository::PostgresReservationRepository;
pub use room_repository::PostgresRoomRepository;

use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Open a connection pool and, when configured, bring the schema up to date.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config
        .connect_options()
        .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;
    let pool = config.pool_options().connect_with(options).await?;

    if config.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
