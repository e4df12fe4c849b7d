//! Date + time-of-day to `<t:EPOCH:CODE>` markup

use super::{TimeOfDay, TimestampFormat, ZoneSetting};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use std::fmt;

/// Seconds since the Unix epoch, or NaN when the time of day did not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epoch {
    Seconds(i64),
    NaN,
}

impl Epoch {
    #[must_use]
    pub fn seconds(self) -> Option<i64> {
        match self {
            Epoch::Seconds(seconds) => Some(seconds),
            Epoch::NaN => None,
        }
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Epoch::Seconds(seconds) => write!(f, "{seconds}"),
            Epoch::NaN => f.write_str("NaN"),
        }
    }
}

/// Milliseconds since the epoch for `date` at `time`, seconds zeroed.
///
/// Hours and minutes beyond their usual range carry into the neighbouring
/// day or hour. `None` when the time does not parse or the result falls
/// outside chrono's representable range.
#[must_use]
pub fn epoch_millis(date: NaiveDate, time: &TimeOfDay, zone: ZoneSetting) -> Option<i64> {
    let (hours, minutes) = time.components()?;
    let wall = date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::try_hours(hours)?)?
        .checked_add_signed(TimeDelta::try_minutes(minutes)?)?;
    Some(zone.timestamp_millis(wall))
}

#[must_use]
pub fn epoch_seconds(date: NaiveDate, time: &TimeOfDay, zone: ZoneSetting) -> Epoch {
    match epoch_millis(date, time, zone) {
        Some(millis) => Epoch::Seconds(millis.div_euclid(1000)),
        None => Epoch::NaN,
    }
}

/// Markup for an already computed epoch
#[must_use]
pub fn render(epoch: Epoch, format: TimestampFormat) -> String {
    format!("<t:{}:{}>", epoch, format.code())
}

/// Discord markup for the selection, or an empty string when no date is selected.
///
/// Recomputed from scratch on every call.
#[must_use]
pub fn generate(date: Option<NaiveDate>, time: &TimeOfDay, format: TimestampFormat, zone: ZoneSetting) -> String {
    match date {
        Some(date) => render(epoch_seconds(date, time, zone), format),
        None => String::new(),
    }
}

/// Markup for every format, in display order
#[must_use]
pub fn generate_all(
    date: Option<NaiveDate>,
    time: &TimeOfDay,
    zone: ZoneSetting,
) -> Vec<(TimestampFormat, String)> {
    TimestampFormat::ALL
        .into_iter()
        .map(|format| (format, generate(date, time, format, zone)))
        .collect()
}
