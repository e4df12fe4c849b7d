//! Month-grid date picker

use crate::constants::{NO_DATE_SELECTED, TITLE_DATE};
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::utils::datetime::{
    month_grid, month_title, shift_days, shift_months, week_days, weekday_short, ISO_DATE_FORMAT,
};
use chrono::{NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::fmt::Write as _;

/// Calendar with a movable cursor.
///
/// The cursor is where the highlight sits; the selection only changes when
/// the user confirms the cursor (Enter/Space) or clears it.
pub struct CalendarComponent {
    pub cursor: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub today: NaiveDate,
    pub week_start: Weekday,
    pub date_format: String,
    pub focused: bool,
    pub icons: IconService,
}

impl CalendarComponent {
    pub fn new(today: NaiveDate, selected: Option<NaiveDate>, week_start: Weekday) -> Self {
        Self {
            cursor: selected.unwrap_or(today),
            selected,
            today,
            week_start,
            date_format: ISO_DATE_FORMAT.to_string(),
            focused: false,
            icons: IconService::default(),
        }
    }

    pub fn move_days(&mut self, days: i64) {
        self.cursor = shift_days(self.cursor, days);
    }

    pub fn move_months(&mut self, months: i32) {
        self.cursor = shift_months(self.cursor, months);
    }

    /// Text of the line under the grid
    pub fn selection_label(&self) -> String {
        match self.selected {
            Some(date) => {
                let mut label = String::from("Selected: ");
                if write!(label, "{}", date.format(&self.date_format)).is_err() {
                    label = format!("Selected: {}", date.format(ISO_DATE_FORMAT));
                }
                label
            }
            None => NO_DATE_SELECTED.to_string(),
        }
    }

    fn day_style(&self, date: NaiveDate) -> Style {
        let mut style = Style::default().fg(Color::White);
        if date == self.today {
            style = style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
        }
        if Some(date) == self.selected {
            style = style.bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD);
        }
        if date == self.cursor {
            style = if self.focused {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style.add_modifier(Modifier::BOLD)
            };
        }
        style
    }

    fn grid_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let header: Vec<Span> = week_days(self.week_start)
            .iter()
            .map(|day| Span::styled(format!("{:>3}", weekday_short(*day)), Style::default().fg(Color::Gray)))
            .collect();
        lines.push(Line::from(header));

        for week in month_grid(self.cursor, self.week_start) {
            let cells: Vec<Span> = week
                .iter()
                .map(|cell| match cell {
                    Some(date) => Span::styled(format!("{:>3}", date.format("%-d")), self.day_style(*date)),
                    None => Span::raw("   "),
                })
                .collect();
            lines.push(Line::from(cells));
        }

        lines
    }
}

impl Component for CalendarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_days(-1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_days(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_days(-7);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_days(7);
                Action::None
            }
            KeyCode::PageUp | KeyCode::Char('[') => {
                self.move_months(-1);
                Action::None
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                self.move_months(1);
                Action::None
            }
            KeyCode::Char('t') => {
                self.cursor = self.today;
                Action::SelectDate(self.today)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::SelectDate(self.cursor),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('x') => Action::ClearDate,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::SelectDate(date) => self.selected = Some(*date),
            Action::ClearDate => self.selected = None,
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let title = format!(
            " {} {} - {} ",
            self.icons.icons().ui.date_title,
            TITLE_DATE,
            month_title(self.cursor)
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(border_color));

        let mut lines = self.grid_lines();
        lines.push(Line::from(""));
        let label_style = if self.selected.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };
        lines.push(Line::from(Span::styled(self.selection_label(), label_style)));

        let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Center);
        f.render_widget(paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
