//! Modal dialog component for help and logs.

use crate::ui::components::dialogs::{help_dialog, logs_dialog};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

/// Modal overlay shown on top of the picker.
///
/// While a dialog is open it receives every key; closing it returns
/// [`Action::HideDialog`].
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub logs: Vec<String>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logs: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn update_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };

        match (dialog_type, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => Action::HideDialog,
            (DialogType::Help, KeyCode::Char('?')) => Action::HideDialog,
            (DialogType::Logs, KeyCode::Char('G')) => Action::HideDialog,
            (_, KeyCode::Down | KeyCode::Char('j')) => {
                self.scroll_by(1);
                Action::None
            }
            (_, KeyCode::Up | KeyCode::Char('k')) => {
                self.scroll_by(-1);
                Action::None
            }
            (_, KeyCode::PageDown) => {
                self.scroll_by(10);
                Action::None
            }
            (_, KeyCode::PageUp) => {
                self.scroll_by(-10);
                Action::None
            }
            (_, KeyCode::Home) => {
                self.scroll_offset = 0;
                Action::None
            }
            (_, KeyCode::End) => {
                // Clamped to the last page while rendering
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(*dialog_type);
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => {
                self.scroll_offset =
                    help_dialog::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            Some(DialogType::Logs) => {
                self.scroll_offset =
                    logs_dialog::render_logs_dialog(f, rect, &self.logs, self.scroll_offset, &mut self.scrollbar_state);
            }
            None => {}
        }
    }
}
