//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Selection defaults
pub const DEFAULT_TIME_OF_DAY: &str = "00:00";
/// Longest text the time input accepts ("HH:MM")
pub const TIME_INPUT_MAX_LEN: usize = 5;

// Clipboard
/// Delay before the "copied" acknowledgement clears itself
pub const COPIED_CLEAR_DELAY_MS: u64 = 2000;
pub const COPIED_CLEAR_DELAY_MIN_MS: u64 = 100;
pub const COPIED_CLEAR_DELAY_MAX_MS: u64 = 60_000;

// UI Titles
pub const APP_TITLE: &str = "Discord Timestamp Generator";
pub const TITLE_DATE: &str = "Select Date";
pub const TITLE_TIME: &str = "Select Time";
pub const TITLE_FORMATS: &str = "Timestamps";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Messages
pub const NO_DATE_SELECTED: &str = "No date selected";
pub const STATUS_COPIED: &str = "✅ Copied";
pub const STATUS_SHORTCUTS: &str = "Tab: focus • Enter: select/copy • 1-7: copy • ?: help • q: quit";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Log Messages
pub const LOG_CLIPBOARD_UNAVAILABLE: &str = "⚠️ Clipboard unavailable, copies will not reach the system clipboard";
pub const LOG_CLIPBOARD_WRITE_FAILED: &str = "❌ Failed to write to clipboard";

// UI Layout Constants
/// Width of the left column holding the calendar and time input
pub const PICKER_COLUMN_WIDTH: u16 = 36;
/// Height of the calendar block (title, weekday header, 6 weeks, selection line, borders)
pub const CALENDAR_HEIGHT: u16 = 11;
/// Height of the time input block
pub const TIME_INPUT_HEIGHT: u16 = 3;
