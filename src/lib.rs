//! stampgen - a terminal picker for Discord timestamps
//!
//! Choose a calendar date and a time of day; stampgen renders the
//! `<t:EPOCH:CODE>` markup for all seven Discord formats and copies the one
//! you pick to the system clipboard.
//!
//! # Modules
//!
//! * [`timestamp`] - Epoch computation and markup rendering
//! * [`state`] - Selection and "copied" state
//! * [`clipboard`] - System clipboard access
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`cli`] - Command line entry points

/// Command line parsing and the non-interactive print mode
pub mod cli;

/// Clipboard backends
pub mod clipboard;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Selection and copy acknowledgement state
pub mod state;

/// Discord timestamp markup generation
pub mod timestamp;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;
