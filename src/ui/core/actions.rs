use crate::timestamp::{TimeOfDay, TimestampFormat};
use chrono::NaiveDate;

/// The pane that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Calendar,
    Time,
    Formats,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::Calendar => Focus::Time,
            Focus::Time => Focus::Formats,
            Focus::Formats => Focus::Calendar,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Focus::Calendar => Focus::Formats,
            Focus::Time => Focus::Calendar,
            Focus::Formats => Focus::Time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Selection
    SelectDate(NaiveDate),
    ClearDate,
    SetTime(TimeOfDay),

    // Clipboard
    Copy(TimestampFormat),
    /// Clear the "copied" acknowledgement for the given copy generation
    ResetCopied(u64),
    ClipboardFailed(String),

    // Focus
    FocusNext,
    FocusPrevious,
    Focus(Focus),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIcons,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
