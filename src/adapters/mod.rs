//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx repositories
//! - `memory` - Process-local store for tests and development
//! - `clock` - System and fixed clocks
//! - `http` - Axum REST endpoints

pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;
