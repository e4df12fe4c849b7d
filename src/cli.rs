//! Command line interface

use crate::timestamp::{self, TimeOfDay, TimestampFormat, ZoneSetting};
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pick a date and time, get Discord `<t:EPOCH:CODE>` timestamps.
#[derive(Parser, Debug)]
#[command(name = "stampgen", version, about, long_about = None)]
pub struct Cli {
    /// Config file path override
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive picker (default)
    Run,

    /// Print the markup for a date without opening the picker
    Print {
        /// Calendar date, YYYY-MM-DD
        date: String,

        /// Time of day, HH:MM (defaults to the configured default time)
        time: Option<String>,

        /// Only print this format code (t, T, d, D, f, F or R)
        #[arg(short, long)]
        format: Option<TimestampFormat>,

        /// Interpret the time in UTC
        #[arg(long, conflicts_with = "offset")]
        utc: bool,

        /// Interpret the time at a fixed offset, e.g. +05:30
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<ZoneSetting>,
    },

    /// Write a default configuration file
    GenerateConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Zone requested on the command line, falling back to the configured one
pub fn resolve_zone(utc: bool, offset: Option<ZoneSetting>, configured: ZoneSetting) -> ZoneSetting {
    if utc {
        ZoneSetting::Utc
    } else {
        offset.unwrap_or(configured)
    }
}

pub fn parse_date_arg(date: &str) -> Result<NaiveDate> {
    datetime::parse_date(date).with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))
}

/// One line per format: code, label, markup and a preview of how it reads.
///
/// With `only` set, just the bare markup for that format is returned.
pub fn format_lines(
    date: NaiveDate,
    time: &TimeOfDay,
    zone: ZoneSetting,
    only: Option<TimestampFormat>,
    now: i64,
) -> Vec<String> {
    if let Some(format) = only {
        return vec![timestamp::generate(Some(date), time, format, zone)];
    }

    let epoch = timestamp::epoch_seconds(date, time, zone);
    timestamp::generate_all(Some(date), time, zone)
        .into_iter()
        .map(|(format, markup)| {
            format!(
                "{}  {:<16} {:<22} {}",
                format.code(),
                format.label(),
                markup,
                timestamp::preview(epoch, format, zone, now)
            )
        })
        .collect()
}
