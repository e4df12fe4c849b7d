//! Date and time utility functions
//!
//! Calendar arithmetic for the month grid and human-readable relative
//! durations in the style Discord uses for `R` timestamps.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Date format accepted on the command line and shown by default in the UI
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Move a date by whole months, clamping the day to the target month's length.
///
/// Dates that would leave chrono's range are returned unchanged.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Move a date by days, saturating at chrono's range
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Weekday columns starting from `week_start`
pub fn week_days(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Two-letter column header for a weekday
pub fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Weeks of the month containing `date`, each a row of seven cells.
///
/// Cells outside the month are `None`. The grid always has 4 to 6 rows.
pub fn month_grid(date: NaiveDate, week_start: Weekday) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(date);
    let leading = ((first.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7) as usize;

    let mut rows = Vec::new();
    let mut row = [None; 7];
    let mut column = leading;
    let mut day = Some(first);

    while let Some(current) = day {
        if current.month() != first.month() {
            break;
        }
        row[column] = Some(current);
        column += 1;
        if column == 7 {
            rows.push(row);
            row = [None; 7];
            column = 0;
        }
        day = current.succ_opt();
    }
    if column > 0 {
        rows.push(row);
    }
    rows
}

/// Human-readable relative time for a signed offset in seconds.
///
/// Positive offsets are in the future ("in 3 days"), negative ones in the
/// past ("3 days ago"). Thresholds follow the usual humanize buckets.
pub fn format_relative(delta_seconds: i64) -> String {
    let future = delta_seconds >= 0;
    let seconds = delta_seconds.unsigned_abs();

    let minutes = (seconds as f64 / 60.0).round() as u64;
    let hours = (seconds as f64 / 3600.0).round() as u64;
    let days = (seconds as f64 / 86_400.0).round() as u64;

    let phrase = if seconds < 45 {
        "a few seconds".to_string()
    } else if seconds < 90 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{hours} hours")
    } else if hours < 36 {
        "a day".to_string()
    } else if days < 26 {
        format!("{days} days")
    } else if days < 46 {
        "a month".to_string()
    } else if days < 320 {
        format!("{} months", ((days as f64) / 30.44).round() as u64)
    } else if days < 548 {
        "a year".to_string()
    } else {
        format!("{} years", ((days as f64) / 365.25).round() as u64)
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// "January 2024" style heading for the month containing `date`
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
