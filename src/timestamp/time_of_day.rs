//! Raw `HH:MM` time-of-day text and its lenient numeric interpretation

use std::fmt;

/// Minutes in one day
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day exactly as the user typed it.
///
/// The text is kept verbatim: the formatter reads the hours and minutes out of
/// it on every render, so a half-typed or malformed value is representable and
/// flows through to a `NaN` epoch instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeOfDay(String);

impl Default for TimeOfDay {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_TIME_OF_DAY.to_string())
    }
}

impl TimeOfDay {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build a normalized `HH:MM` value, wrapping out-of-range input into the day.
    #[must_use]
    pub fn from_minutes(total_minutes: i64) -> Self {
        let minutes = total_minutes.rem_euclid(MINUTES_PER_DAY);
        Self(format!("{:02}:{:02}", minutes / 60, minutes % 60))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hours and minutes read the way a JavaScript `Number(...)` would read them.
    ///
    /// `None` stands for NaN: either part is non-numeric or the minutes part is
    /// missing. Empty parts count as zero. Values are not range-checked, so
    /// `"25:00"` yields `(25, 0)` and rolls into the next day downstream.
    #[must_use]
    pub fn components(&self) -> Option<(i64, i64)> {
        let mut parts = self.0.split(':');
        let hours = parts.next().and_then(lenient_number)?;
        let minutes = parts.next().and_then(lenient_number)?;
        Some((hours, minutes))
    }

    /// True when the text is a canonical `HH:MM` with both fields in range
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let bytes = self.0.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return false;
        }
        if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
            return false;
        }
        matches!(self.components(), Some((h, m)) if (0..24).contains(&h) && (0..60).contains(&m))
    }

    /// Shift by a number of minutes, wrapping within the day.
    ///
    /// A value that does not parse is treated as midnight.
    #[must_use]
    pub fn step_minutes(&self, delta: i64) -> Self {
        let (hours, minutes) = self.components().unwrap_or((0, 0));
        let current = hours.saturating_mul(60).saturating_add(minutes);
        Self::from_minutes(current.saturating_add(delta))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeOfDay {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TimeOfDay {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Whitespace-trimmed numeric parse; empty is zero, fractions truncate toward zero.
///
/// Unsigned `0x`, `0o` and `0b` literals are read in their radix.
fn lenient_number(part: &str) -> Option<i64> {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Some(value) = radix_literal(trimmed) {
        return value;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    // Rust accepts "inf"/"nan" spellings that JavaScript rejects; is_finite covers both.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() < i64::MAX as f64 => Some(value.trunc() as i64),
        _ => None,
    }
}

/// `Some(parsed)` when `text` carries a radix prefix, `None` otherwise
fn radix_literal(text: &str) -> Option<Option<i64>> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    // from_str_radix takes a sign; a prefixed literal never does
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Some(None);
    }
    Some(i64::from_str_radix(digits, radix).ok())
}
