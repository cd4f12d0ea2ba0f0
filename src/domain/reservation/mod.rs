//! Reservation domain module.
//!
//! Reservations book a room for a single calendar date. A slot moves from
//! free to reserved exactly once; there is no cancellation.

mod aggregate;
mod errors;

pub use aggregate::{Reservation, ReservationRequest};
pub use errors::ReservationError;
