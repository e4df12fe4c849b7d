use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stampgen::timestamp::TimeOfDay;
use stampgen::ui::components::TimeInputComponent;
use stampgen::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_typing_a_time() {
    let mut input = TimeInputComponent::new(&TimeOfDay::from(""));

    for c in "09:4".chars() {
        input.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(
        input.handle_key_events(key(KeyCode::Char('5'))),
        Action::SetTime(TimeOfDay::from("09:45"))
    );

    // Full field ignores extra characters
    assert_eq!(input.handle_key_events(key(KeyCode::Char('1'))), Action::None);
    assert_eq!(input.buffer, "09:45");

    // Letters are not accepted
    assert_eq!(input.handle_key_events(key(KeyCode::Char('a'))), Action::None);
}

#[test]
fn test_backspace() {
    let mut input = TimeInputComponent::new(&TimeOfDay::from("1"));
    assert_eq!(input.handle_key_events(key(KeyCode::Backspace)), Action::SetTime(TimeOfDay::from("")));
    assert_eq!(input.handle_key_events(key(KeyCode::Backspace)), Action::None);
}

#[test]
fn test_arrow_keys_step_time() {
    let mut input = TimeInputComponent::new(&TimeOfDay::from("23:59"));

    assert_eq!(input.handle_key_events(key(KeyCode::Up)), Action::SetTime(TimeOfDay::from("00:00")));
    assert_eq!(input.handle_key_events(key(KeyCode::PageDown)), Action::SetTime(TimeOfDay::from("23:00")));
    assert_eq!(input.handle_key_events(key(KeyCode::Down)), Action::SetTime(TimeOfDay::from("22:59")));
}

#[test]
fn test_enter_moves_focus() {
    let mut input = TimeInputComponent::new(&TimeOfDay::default());
    assert_eq!(input.handle_key_events(key(KeyCode::Enter)), Action::FocusNext);
}

#[test]
fn test_update_syncs_buffer() {
    let mut input = TimeInputComponent::new(&TimeOfDay::default());
    input.update(Action::SetTime(TimeOfDay::from("12:34")));
    assert_eq!(input.time(), TimeOfDay::from("12:34"));
}
