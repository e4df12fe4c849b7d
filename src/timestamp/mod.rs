//! Discord timestamp markup generation
//!
//! Turns a calendar date and an `HH:MM` time of day into `<t:EPOCH:CODE>`
//! strings, the syntax Discord clients render as localized dates and times.
//!
//! * [`format`] - the seven format codes and their labels
//! * [`time_of_day`] - raw time text and its lenient parse
//! * [`zone`] - the time zone the selection is interpreted in
//! * [`generator`] - epoch computation and markup rendering
//! * [`preview`] - approximate client-side rendering for display

pub mod format;
pub mod generator;
pub mod preview;
pub mod time_of_day;
pub mod zone;

pub use format::{FormatParseError, TimestampFormat};
pub use generator::{epoch_millis, epoch_seconds, generate, generate_all, render, Epoch};
pub use preview::preview;
pub use time_of_day::TimeOfDay;
pub use zone::{resolve_wall_clock, ZoneParseError, ZoneSetting};
