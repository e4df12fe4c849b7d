//! Core UI functionality for stampgen.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions, and background work.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`notifier`] - Clipboard copy and the self-clearing "copied" state
//! - [`task_manager`] - Background task management and async operation handling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Tasks** are managed asynchronously via the [`TaskManager`] and report
//!    back as actions on a channel

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod notifier;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use notifier::ClipboardNotifier;
pub use task_manager::{TaskId, TaskManager, TaskResult};
