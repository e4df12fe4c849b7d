//! Layout management and calculations

use crate::constants::{CALENDAR_HEIGHT, PICKER_COLUMN_WIDTH, TIME_INPUT_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (header, body, 1-line status bar)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Calculate the body layout (picker column on the left, formats on the right)
    #[must_use]
    pub fn body_layout(area: Rect) -> Vec<Rect> {
        let picker_width = std::cmp::min(PICKER_COLUMN_WIDTH, area.width / 2);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(picker_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate the picker column layout (calendar above the time input)
    #[must_use]
    pub fn picker_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CALENDAR_HEIGHT),
                Constraint::Length(TIME_INPUT_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate dialog dimensions (percent of width, percent of height) based on screen size
    #[must_use]
    pub fn dialog_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 90 } else { 70 };
        let height = if screen_height < 30 { 90 } else { 70 };
        (width, height)
    }
}
