//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `room` - Conference room entity, validation and listing filter
//! - `reservation` - Per-date room bookings

pub mod foundation;
pub mod reservation;
pub mod room;
