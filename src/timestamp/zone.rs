//! Time zone used to interpret a wall-clock date and time
//!
//! The combined date/time picked by the user has no zone of its own. Which
//! instant it denotes depends on this setting, so it is an explicit part of the
//! configuration rather than an implicit property of the environment.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSetting {
    /// The operating system's local zone, including its DST rules
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneParseError {
    #[error("invalid timezone '{0}': expected \"local\", \"utc\" or an offset like \"+05:30\"")]
    Invalid(String),
    #[error("offset '{0}' is out of range (must be within ±23:59)")]
    OutOfRange(String),
}

impl ZoneSetting {
    /// Milliseconds since the epoch for a wall-clock time in this zone.
    ///
    /// Local DST transitions follow [`resolve_wall_clock`].
    #[must_use]
    pub fn timestamp_millis(&self, wall: NaiveDateTime) -> i64 {
        match self {
            ZoneSetting::Local => resolve_wall_clock(&Local, wall),
            ZoneSetting::Utc => wall.and_utc().timestamp_millis(),
            ZoneSetting::Fixed(offset) => resolve_wall_clock(offset, wall),
        }
    }

    /// Wall-clock reading of an epoch second in this zone
    #[must_use]
    pub fn wall_clock(&self, epoch_seconds: i64) -> Option<NaiveDateTime> {
        let instant = DateTime::<Utc>::from_timestamp(epoch_seconds, 0)?;
        Some(match self {
            ZoneSetting::Local => instant.with_timezone(&Local).naive_local(),
            ZoneSetting::Utc => instant.naive_utc(),
            ZoneSetting::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        })
    }

    /// Today's calendar date in this zone
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            ZoneSetting::Local => Local::now().date_naive(),
            ZoneSetting::Utc => Utc::now().date_naive(),
            ZoneSetting::Fixed(offset) => Utc::now().with_timezone(offset).date_naive(),
        }
    }
}

/// How far back to look for the offset in effect before a skipped wall-clock time
const GAP_LOOKBACK_HOURS: i64 = 48;

/// Milliseconds since the epoch for a wall-clock time in `tz`.
///
/// An ambiguous time (clocks going back) resolves to the earlier instant. A
/// time skipped by a forward jump keeps the offset in effect before the jump,
/// so 02:30 on a night that skips 02:00-03:00 lands on 03:30.
#[must_use]
pub fn resolve_wall_clock<Tz: TimeZone>(tz: &Tz, wall: NaiveDateTime) -> i64 {
    match tz.offset_from_local_datetime(&wall) {
        LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => apply_offset(wall, &offset),
        LocalResult::None => (1..=GAP_LOOKBACK_HOURS)
            .find_map(|hours| {
                let before = wall.checked_sub_signed(TimeDelta::hours(hours))?;
                tz.offset_from_local_datetime(&before).earliest()
            })
            .map(|offset| apply_offset(wall, &offset))
            .unwrap_or_else(|| wall.and_utc().timestamp_millis()),
    }
}

fn apply_offset<O: Offset>(wall: NaiveDateTime, offset: &O) -> i64 {
    let offset_millis = i64::from(offset.fix().local_minus_utc()) * 1000;
    wall.and_utc().timestamp_millis() - offset_millis
}

impl fmt::Display for ZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSetting::Local => f.write_str("local"),
            ZoneSetting::Utc => f.write_str("utc"),
            ZoneSetting::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for ZoneSetting {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(ZoneSetting::Local),
            "utc" | "z" => return Ok(ZoneSetting::Utc),
            _ => {}
        }

        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(ZoneParseError::Invalid(s.to_string())),
        };
        let (hours, minutes) = rest
            .split_once(':')
            .ok_or_else(|| ZoneParseError::Invalid(s.to_string()))?;
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(ZoneParseError::Invalid(s.to_string()));
        }
        let hours: i32 = hours.parse().map_err(|_| ZoneParseError::Invalid(s.to_string()))?;
        let minutes: i32 = minutes.parse().map_err(|_| ZoneParseError::Invalid(s.to_string()))?;
        if hours > 23 || minutes > 59 {
            return Err(ZoneParseError::OutOfRange(s.to_string()));
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(ZoneSetting::Fixed)
            .ok_or_else(|| ZoneParseError::OutOfRange(s.to_string()))
    }
}
