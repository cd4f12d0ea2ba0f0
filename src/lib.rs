//! Room Booking - Conference Room Registry and Reservation Service
//!
//! This crate manages a registry of conference rooms and single-day
//! reservations for them, exposed over HTTP.
//!
//! # Architecture
//!
//! - `domain` - Rooms, reservations and their validation rules
//! - `ports` - Repository and clock traits the application depends on
//! - `application` - Command and query handlers
//! - `adapters` - PostgreSQL, in-memory and HTTP implementations
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
