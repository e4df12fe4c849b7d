use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use stampgen::ui::components::DialogComponent;
use stampgen::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_dialog_visibility() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None);

    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::None);

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_logs_dialog_closes_on_g() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Logs));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::HideDialog);
}

#[test]
fn test_scroll_is_clamped_when_rendered() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    dialog.handle_key_events(key(KeyCode::End));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let bottom = dialog.scroll_offset;
    assert!(bottom > 0 && bottom < usize::MAX);

    // Scrolling up from the bottom moves immediately
    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.scroll_offset, bottom - 1);

    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);
}

#[test]
fn test_logs_render() {
    let mut dialog = DialogComponent::new();
    dialog.update_logs(vec!["[12:00:00.000] Copy: Short Time <t:0:t>".to_string()]);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("Copy: Short Time <t:0:t>"));
}
