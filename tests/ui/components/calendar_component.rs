use chrono::{NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use stampgen::ui::components::CalendarComponent;
use stampgen::ui::core::{Action, Component};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn calendar() -> CalendarComponent {
    CalendarComponent::new(date(2024, 1, 15), Some(date(2024, 1, 15)), Weekday::Mon)
}

#[test]
fn test_cursor_movement() {
    let mut calendar = calendar();

    assert_eq!(calendar.handle_key_events(key(KeyCode::Right)), Action::None);
    assert_eq!(calendar.cursor, date(2024, 1, 16));

    calendar.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(calendar.cursor, date(2024, 1, 9));

    calendar.handle_key_events(key(KeyCode::PageDown));
    assert_eq!(calendar.cursor, date(2024, 2, 9));

    calendar.handle_key_events(key(KeyCode::Char('[')));
    calendar.handle_key_events(key(KeyCode::Char('[')));
    assert_eq!(calendar.cursor, date(2023, 12, 9));

    // Moving the cursor does not change the selection
    assert_eq!(calendar.selected, Some(date(2024, 1, 15)));
}

#[test]
fn test_select_and_clear() {
    let mut calendar = calendar();
    calendar.handle_key_events(key(KeyCode::Down));

    let action = calendar.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::SelectDate(date(2024, 1, 22)));
    calendar.update(action);
    assert_eq!(calendar.selected, Some(date(2024, 1, 22)));

    let action = calendar.handle_key_events(key(KeyCode::Char('x')));
    assert_eq!(action, Action::ClearDate);
    calendar.update(action);
    assert_eq!(calendar.selected, None);
    assert_eq!(calendar.selection_label(), "No date selected");
}

#[test]
fn test_today_jumps_and_selects() {
    let mut calendar = calendar();
    calendar.move_months(3);

    assert_eq!(calendar.handle_key_events(key(KeyCode::Char('t'))), Action::SelectDate(date(2024, 1, 15)));
    assert_eq!(calendar.cursor, date(2024, 1, 15));
}

#[test]
fn test_selection_label_uses_date_format() {
    let mut calendar = calendar();
    calendar.date_format = "%d/%m/%Y".to_string();
    assert_eq!(calendar.selection_label(), "Selected: 15/01/2024");
}

#[test]
fn test_selection_label_with_time_fields_falls_back_to_iso() {
    let mut calendar = calendar();
    calendar.date_format = "%Y-%m-%d %H:%M".to_string();
    assert_eq!(calendar.selection_label(), "Selected: 2024-01-15");

    let backend = TestBackend::new(40, 14);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| calendar.render(f, f.area())).unwrap();
}

#[test]
fn test_render_shows_month() {
    let mut calendar = calendar();
    let mut terminal = Terminal::new(TestBackend::new(36, 11)).unwrap();
    terminal.draw(|f| calendar.render(f, f.area())).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("January 2024"));
    assert!(text.contains("Mo"));
    assert!(text.contains("31"));
    assert!(text.contains("Selected: 2024-01-15"));
}
