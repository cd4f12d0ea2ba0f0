//! HTTP adapters - REST API implementations.
//!
//! The room module owns every endpoint; this module wraps its router with the
//! cross-cutting tower layers (request ids, tracing, timeouts).

pub mod room;

use std::time::Duration;

use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use room::{room_router, RoomApiError, RoomAppState};

/// Builds the complete application router.
pub fn app_router(state: RoomAppState, request_timeout: Duration) -> Router {
    room_router()
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
