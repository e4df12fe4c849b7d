//! Approximate client-side rendering of each format
//!
//! Discord formats the markup in the reader's own locale and zone. The preview
//! uses the English 24-hour style and the configured zone, which is close
//! enough to tell the formats apart before copying one.

use super::{Epoch, TimestampFormat, ZoneSetting};
use crate::utils::datetime::format_relative;

/// Shown when the epoch is NaN
pub const INVALID_DATE: &str = "Invalid Date";

/// Preview text for `epoch` rendered as `format`, relative to `now` (epoch seconds).
#[must_use]
pub fn preview(epoch: Epoch, format: TimestampFormat, zone: ZoneSetting, now: i64) -> String {
    let Some(seconds) = epoch.seconds() else {
        return INVALID_DATE.to_string();
    };

    if format == TimestampFormat::Relative {
        return format_relative(seconds.saturating_sub(now));
    }

    let Some(wall) = zone.wall_clock(seconds) else {
        return INVALID_DATE.to_string();
    };

    let pattern = match format {
        TimestampFormat::ShortTime => "%H:%M",
        TimestampFormat::LongTime => "%H:%M:%S",
        TimestampFormat::ShortDate => "%d/%m/%Y",
        TimestampFormat::LongDate => "%-d %B %Y",
        TimestampFormat::ShortDateTime => "%-d %B %Y %H:%M",
        TimestampFormat::LongDateTime => "%A, %-d %B %Y %H:%M",
        TimestampFormat::Relative => unreachable!("handled above"),
    };
    wall.format(pattern).to_string()
}
