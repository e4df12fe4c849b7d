//! Reusable UI components

pub mod badge;
pub mod status_bar;

// Component architecture
pub mod calendar_component;
pub mod dialog_component;
pub mod dialogs;
pub mod format_list_component;
pub mod time_input_component;

// Component exports
pub use calendar_component::CalendarComponent;
pub use dialog_component::DialogComponent;
pub use format_list_component::{FormatListComponent, FormatRow};
pub use status_bar::StatusBar;
pub use time_input_component::TimeInputComponent;
