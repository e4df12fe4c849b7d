//! Utility modules for the stampgen application.
//!
//! - [`datetime`] - Calendar arithmetic and relative-time formatting

pub mod datetime;
