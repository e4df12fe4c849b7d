use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use stampgen::timestamp::TimestampFormat;
use stampgen::ui::components::{FormatListComponent, FormatRow};
use stampgen::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn rows(copied: Option<TimestampFormat>) -> Vec<FormatRow> {
    TimestampFormat::ALL
        .into_iter()
        .map(|format| FormatRow {
            format,
            rendered: format!("<t:1704067200:{}>", format.code()),
            preview: None,
            copied: Some(format) == copied,
        })
        .collect()
}

#[test]
fn test_navigation_wraps() {
    let mut list = FormatListComponent::new();
    assert_eq!(list.selected_format(), TimestampFormat::ShortTime);

    list.handle_key_events(key(KeyCode::Up));
    assert_eq!(list.selected_format(), TimestampFormat::Relative);

    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected_format(), TimestampFormat::ShortTime);

    list.handle_key_events(key(KeyCode::End));
    assert_eq!(list.selected_format(), TimestampFormat::Relative);

    list.handle_key_events(key(KeyCode::Home));
    assert_eq!(list.selected_format(), TimestampFormat::ShortTime);
}

#[test]
fn test_copy_keys() {
    let mut list = FormatListComponent::new();
    list.handle_key_events(key(KeyCode::Down));

    for code in [KeyCode::Enter, KeyCode::Char('c'), KeyCode::Char('y')] {
        assert_eq!(list.handle_key_events(key(code)), Action::Copy(TimestampFormat::LongTime));
    }
}

#[test]
fn test_render_rows() {
    let mut list = FormatListComponent::new();
    list.update_rows(rows(Some(TimestampFormat::LongDate)));

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|f| list.render(f, f.area())).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("Timestamps"));
    assert!(text.contains("[t]"));
    assert!(text.contains("Short Time"));
    assert!(text.contains("<t:1704067200:R>"));
    assert!(text.contains("✓"));
}

#[test]
fn test_render_without_date() {
    let mut list = FormatListComponent::new();
    list.update_rows(
        TimestampFormat::ALL
            .into_iter()
            .map(|format| FormatRow {
                format,
                rendered: String::new(),
                preview: None,
                copied: false,
            })
            .collect(),
    );

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|f| list.render(f, f.area())).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("No date selected"));
    assert!(!text.contains("<t:"));
}
