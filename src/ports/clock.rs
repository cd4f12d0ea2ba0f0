//! Calendar clock port.
//!
//! Every "today" comparison (past-date rejection, upcoming listings,
//! reserved-today annotation) reads the date through this port so tests can
//! pin it.

use chrono::NaiveDate;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}
