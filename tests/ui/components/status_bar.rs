use ratatui::style::Color;
use stampgen::constants::{STATUS_COPIED, STATUS_SHORTCUTS};
use stampgen::ui::components::StatusBar;

#[test]
fn test_idle_status_shows_shortcuts() {
    let (text, color) = StatusBar::status_text("", None);
    assert_eq!(text, STATUS_SHORTCUTS);
    assert_eq!(color, Color::Gray);
}

#[test]
fn test_copied_status_wins_over_error() {
    let (text, _) = StatusBar::status_text("<t:0:t>", Some("boom"));
    assert_eq!(text, format!("{}: <t:0:t>", STATUS_COPIED));
}

#[test]
fn test_error_status() {
    let (text, color) = StatusBar::status_text("", Some("boom"));
    assert_eq!(text, "boom");
    assert_eq!(color, Color::Red);
}
