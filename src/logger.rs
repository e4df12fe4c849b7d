use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Every entry is kept in memory for the logs dialog. When file logging is
/// enabled, entries are also forwarded to the `log` facade, which a `fern`
/// dispatch writes to the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_path: None,
        }
    }

    /// Build a logger from the `[logging] enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }

        let path = Self::get_log_file_path()?;
        Self::install_file_dispatch(&path)?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_path: Some(path),
        })
    }

    fn install_file_dispatch(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let installed = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .chain(file)
            .apply();

        // A global logger can only be installed once per process; later calls keep the first one.
        if installed.is_err() {
            log::debug!("File logger already installed, reusing it");
        }
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);
        self.push(message);
    }

    /// Add a warning entry
    pub fn warn(&self, message: String) {
        log::warn!("{}", message);
        self.push(message);
    }

    fn push(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether entries are also written to a file
    pub fn is_enabled(&self) -> bool {
        self.log_path.is_some()
    }

    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Location of the log file: `<data dir>/stampgen/stampgen.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("stampgen").join("stampgen.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
