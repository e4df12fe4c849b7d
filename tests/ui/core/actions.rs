use stampgen::ui::core::actions::{Action, DialogType, Focus};

#[test]
fn test_focus_cycle() {
    assert_eq!(Focus::default(), Focus::Calendar);
    assert_eq!(Focus::Calendar.next(), Focus::Time);
    assert_eq!(Focus::Time.next(), Focus::Formats);
    assert_eq!(Focus::Formats.next(), Focus::Calendar);

    for focus in [Focus::Calendar, Focus::Time, Focus::Formats] {
        assert_eq!(focus.next().previous(), focus);
    }
}

#[test]
fn test_action_equality() {
    assert_eq!(Action::ShowDialog(DialogType::Help), Action::ShowDialog(DialogType::Help));
    assert_ne!(Action::ShowDialog(DialogType::Help), Action::ShowDialog(DialogType::Logs));
    assert_ne!(Action::ResetCopied(1), Action::ResetCopied(2));
}
