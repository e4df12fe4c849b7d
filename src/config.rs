//! Configuration management for stampgen
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, COPIED_CLEAR_DELAY_MAX_MS, COPIED_CLEAR_DELAY_MIN_MS, COPIED_CLEAR_DELAY_MS,
    DEFAULT_TIME_OF_DAY,
};
use crate::icons::IconTheme;
use crate::timestamp::{TimeOfDay, ZoneSetting};
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// First column of the calendar: "monday" or "sunday"
    pub week_starts_on: String,
    /// Time of day the picker starts with
    pub default_time: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Zone the picked date and time are interpreted in: "local", "utc" or "+05:30"
    pub timezone: String,
    /// Show how a Discord client would render each format
    pub show_preview: bool,
    /// Date format for the selected date line
    pub date_format: String,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Clipboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Write copies to the system clipboard
    pub enabled: bool,
    /// How long the "copied" acknowledgement stays visible
    pub clear_after_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            week_starts_on: "monday".to_string(),
            default_time: DEFAULT_TIME_OF_DAY.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: "local".to_string(),
            show_preview: true,
            date_format: datetime::ISO_DATE_FORMAT.to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clear_after_ms: COPIED_CLEAR_DELAY_MS,
        }
    }
}

impl UiConfig {
    /// Weekday shown in the calendar's first column
    pub fn week_start(&self) -> Result<Weekday> {
        match self.week_starts_on.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Mon),
            "sunday" | "sun" => Ok(Weekday::Sun),
            other => anyhow::bail!("week_starts_on must be monday or sunday, got '{}'", other),
        }
    }

    pub fn initial_time(&self) -> TimeOfDay {
        TimeOfDay::new(self.default_time.clone())
    }
}

impl DisplayConfig {
    pub fn zone(&self) -> Result<ZoneSetting> {
        self.timezone
            .parse::<ZoneSetting>()
            .with_context(|| format!("Invalid timezone '{}'", self.timezone))
    }
}

impl ClipboardConfig {
    pub fn clear_after(&self) -> Duration {
        Duration::from_millis(self.clear_after_ms)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("stampgen.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("stampgen").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.ui.week_start()?;

        if !self.ui.initial_time().is_well_formed() {
            anyhow::bail!("default_time must be a valid HH:MM time, got '{}'", self.ui.default_time);
        }

        self.display.zone()?;

        // Time or zone fields can't be filled from a date alone and fail here
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::default().format(&self.display.date_format)).is_err() {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        let delay = self.clipboard.clear_after_ms;
        if !(COPIED_CLEAR_DELAY_MIN_MS..=COPIED_CLEAR_DELAY_MAX_MS).contains(&delay) {
            anyhow::bail!(
                "clear_after_ms must be between {} and {} milliseconds, got {}",
                COPIED_CLEAR_DELAY_MIN_MS,
                COPIED_CLEAR_DELAY_MAX_MS,
                delay
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# stampgen Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::ISO_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("stampgen"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
