//! `HH:MM` text input

use crate::constants::{TIME_INPUT_MAX_LEN, TITLE_TIME};
use crate::icons::IconService;
use crate::timestamp::TimeOfDay;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Free-text time entry limited to digits and `:`.
///
/// Every edit is forwarded as [`Action::SetTime`]; the text is not validated
/// beyond its character set and length.
pub struct TimeInputComponent {
    pub buffer: String,
    pub focused: bool,
    pub icons: IconService,
}

impl TimeInputComponent {
    pub fn new(time: &TimeOfDay) -> Self {
        Self {
            buffer: time.as_str().to_string(),
            focused: false,
            icons: IconService::default(),
        }
    }

    pub fn time(&self) -> TimeOfDay {
        TimeOfDay::new(self.buffer.clone())
    }

    fn step(&mut self, minutes: i64) -> Action {
        self.buffer = self.time().step_minutes(minutes).as_str().to_string();
        Action::SetTime(self.time())
    }
}

impl Component for TimeInputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == ':' => {
                if self.buffer.len() >= TIME_INPUT_MAX_LEN {
                    return Action::None;
                }
                self.buffer.push(c);
                Action::SetTime(self.time())
            }
            KeyCode::Backspace => {
                if self.buffer.pop().is_some() {
                    Action::SetTime(self.time())
                } else {
                    Action::None
                }
            }
            KeyCode::Up => self.step(1),
            KeyCode::Down => self.step(-1),
            KeyCode::PageUp => self.step(60),
            KeyCode::PageDown => self.step(-60),
            KeyCode::Enter => Action::FocusNext,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SetTime(time) = &action {
            if time.as_str() != self.buffer {
                self.buffer = time.as_str().to_string();
            }
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let valid = self.time().is_well_formed();
        let border_color = match (valid, self.focused) {
            (false, _) => Color::Red,
            (true, true) => Color::Cyan,
            (true, false) => Color::DarkGray,
        };

        let icons = self.icons.icons();
        let mut title = format!(" {} {} ", icons.ui.time_title, TITLE_TIME);
        if !valid {
            title.push_str(&format!("{} HH:MM ", icons.ui.invalid));
        }

        let cursor = if self.focused { "█" } else { "" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(format!("{}{}", self.buffer, cursor))
            .block(block)
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
