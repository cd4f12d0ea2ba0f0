//! Room booking service entry point.
//!
//! Loads configuration, initializes tracing, wires the storage backend into
//! the HTTP router and serves until Ctrl-C.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use room_booking::adapters::clock::SystemClock;
use room_booking::adapters::http::{app_router, RoomAppState};
use room_booking::adapters::memory::InMemoryBookingStore;
use room_booking::adapters::postgres::{
    self, PostgresReservationRepository, PostgresRoomRepository,
};
use room_booking::config::{AppConfig, LogFormat, ServerConfig};
use room_booking::ports::{Clock, ReservationRepository, RoomRepository};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Server terminated with error");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match server.log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init(),
    }
}

async fn run(config: AppConfig) -> Result<(), BoxError> {
    config.validate()?;

    let (rooms, reservations) = storage(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = RoomAppState::new(rooms, reservations, clock);
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        "Room booking service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn storage(
    config: &AppConfig,
) -> Result<(Arc<dyn RoomRepository>, Arc<dyn ReservationRepository>), BoxError> {
    match config.storage.postgres() {
        Some(database) => {
            let pool = postgres::connect(database).await?;
            Ok((
                Arc::new(PostgresRoomRepository::new(pool.clone())),
                Arc::new(PostgresReservationRepository::new(pool)),
            ))
        }
        None => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let store = Arc::new(InMemoryBookingStore::new());
            Ok((store.clone(), store))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
