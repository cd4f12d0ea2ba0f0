//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports and are
//! injected into application handlers as `Arc<dyn Port>`.
//!
//! - `RoomRepository` - Room persistence and filtering
//! - `ReservationRepository` - Reservation persistence and slot queries
//! - `Clock` - Current calendar date

mod clock;
mod reservation_repository;
mod room_repository;

pub use clock::Clock;
pub use reservation_repository::ReservationRepository;
pub use room_repository::RoomRepository;
