//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod reservation;
pub mod room;
pub mod search;
