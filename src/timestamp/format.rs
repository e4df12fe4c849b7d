//! Discord timestamp format codes

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the seven rendering styles a Discord client applies to `<t:...>` markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampFormat {
    ShortTime,
    LongTime,
    ShortDate,
    LongDate,
    ShortDateTime,
    LongDateTime,
    Relative,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatParseError {
    #[error("unknown timestamp format code '{0}' (expected one of t, T, d, D, f, F, R)")]
    UnknownCode(String),
}

impl TimestampFormat {
    /// Every format, in display order.
    pub const ALL: [TimestampFormat; 7] = [
        TimestampFormat::ShortTime,
        TimestampFormat::LongTime,
        TimestampFormat::ShortDate,
        TimestampFormat::LongDate,
        TimestampFormat::ShortDateTime,
        TimestampFormat::LongDateTime,
        TimestampFormat::Relative,
    ];

    /// The single-character code embedded in the markup
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            TimestampFormat::ShortTime => 't',
            TimestampFormat::LongTime => 'T',
            TimestampFormat::ShortDate => 'd',
            TimestampFormat::LongDate => 'D',
            TimestampFormat::ShortDateTime => 'f',
            TimestampFormat::LongDateTime => 'F',
            TimestampFormat::Relative => 'R',
        }
    }

    /// Human-readable label shown next to the rendered markup
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TimestampFormat::ShortTime => "Short Time",
            TimestampFormat::LongTime => "Long Time",
            TimestampFormat::ShortDate => "Short Date",
            TimestampFormat::LongDate => "Long Date",
            TimestampFormat::ShortDateTime => "Short Date/Time",
            TimestampFormat::LongDateTime => "Long Date/Time",
            TimestampFormat::Relative => "Relative Time",
        }
    }

    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.code() == code)
    }

    /// Position of this format in [`TimestampFormat::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|format| *format == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TimestampFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code).ok_or_else(|| FormatParseError::UnknownCode(s.to_string())),
            _ => Err(FormatParseError::UnknownCode(s.to_string())),
        }
    }
}
