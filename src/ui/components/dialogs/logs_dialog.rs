//! Logs dialog for displaying the in-memory log buffer

use super::common::{self, shortcuts};
use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph, ScrollbarState},
    Frame,
};

/// Pick a color for a log message from its marker emoji or wording
fn message_style(message: &str, fallback: Style) -> Style {
    if message.contains("❌") || message.contains("Failed") {
        Style::default().fg(Color::Red)
    } else if message.contains("✅") || message.contains("Copied") {
        Style::default().fg(Color::Green)
    } else if message.contains("⚠️") || message.contains("Warning") {
        Style::default().fg(Color::Yellow)
    } else {
        fallback
    }
}

fn log_item(index: usize, log: &str) -> ListItem<'_> {
    let style = if index % 2 == 0 {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    // Entries look like "[HH:MM:SS.mmm] message"
    match log.find("] ") {
        Some(bracket_end) if log.starts_with('[') => {
            let timestamp = &log[1..bracket_end];
            let message = &log[bracket_end + 2..];
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", timestamp), Style::default().fg(Color::DarkGray)),
                Span::styled(message, message_style(message, style)),
            ]))
        }
        _ => ListItem::new(Line::from(Span::styled(log, style))),
    }
}

/// Draw the logs overlay and return the scroll offset actually used
pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let (percent_x, percent_y) = LayoutManager::dialog_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(percent_x, percent_y, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(DIALOG_TITLE_LOGS, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let visible_height = chunks[0].height as usize;
    let offset = common::clamp_scroll(scroll_offset, logs.len(), visible_height);

    if logs.is_empty() {
        let no_logs = Paragraph::new("No logs yet")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(no_logs, chunks[0]);
    } else {
        let items: Vec<ListItem> = logs
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_height)
            .map(|(i, log)| log_item(i, log))
            .collect();

        f.render_widget(List::new(items), chunks[0]);
        common::render_scrollbar(f, chunks[0], scrollbar_state, logs.len(), visible_height, offset);
    }

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::SCROLL,
        shortcuts::SEPARATOR,
        shortcuts::HOME_END,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CLOSE,
    ]);
    f.render_widget(instructions, chunks[1]);
    offset
}
