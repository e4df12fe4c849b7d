//! Status bar component

use crate::constants::{STATUS_COPIED, STATUS_SHORTCUTS};
use crate::ui::components::badge::create_zone_badge;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown right of the zone badge
    #[must_use]
    pub fn status_text(copied: &str, error_message: Option<&str>) -> (String, Color) {
        if !copied.is_empty() {
            (format!("{}: {}", STATUS_COPIED, copied), Color::Rgb(67, 181, 129))
        } else if let Some(error) = error_message {
            (error.to_string(), Color::Red)
        } else {
            (STATUS_SHORTCUTS.to_string(), Color::Gray)
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, zone: &str, copied: &str, error_message: Option<&str>) {
        let (text, color) = Self::status_text(copied, error_message);

        let line = Line::from(vec![
            create_zone_badge(zone),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(color)),
        ]);

        let status_bar = Paragraph::new(line).alignment(Alignment::Center);
        f.render_widget(status_bar, area);
    }
}
