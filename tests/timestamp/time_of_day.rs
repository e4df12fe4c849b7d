use stampgen::timestamp::TimeOfDay;

#[test]
fn test_default_is_midnight() {
    assert_eq!(TimeOfDay::default().as_str(), "00:00");
}

#[test]
fn test_text_is_kept_verbatim() {
    let time = TimeOfDay::from("7:5");
    assert_eq!(time.to_string(), "7:5");
    assert_eq!(time.components(), Some((7, 5)));
    assert!(!time.is_well_formed());
}

#[test]
fn test_components() {
    assert_eq!(TimeOfDay::from("23:59").components(), Some((23, 59)));
    assert_eq!(TimeOfDay::from("25:61").components(), Some((25, 61)));
    assert_eq!(TimeOfDay::from("").components(), None);
    assert_eq!(TimeOfDay::from("12").components(), None);
    assert_eq!(TimeOfDay::from("ab:cd").components(), None);
    assert_eq!(TimeOfDay::from("12:").components(), Some((12, 0)));
    assert_eq!(TimeOfDay::from("0x1A:0b1").components(), Some((26, 1)));
    assert_eq!(TimeOfDay::from("-0x1:00").components(), None);
}

#[test]
fn test_is_well_formed() {
    assert!(TimeOfDay::from("00:00").is_well_formed());
    assert!(TimeOfDay::from("23:59").is_well_formed());
    assert!(!TimeOfDay::from("24:00").is_well_formed());
    assert!(!TimeOfDay::from("12:60").is_well_formed());
    assert!(!TimeOfDay::from("1:30").is_well_formed());
    assert!(!TimeOfDay::from("+1:30").is_well_formed());
}

#[test]
fn test_from_minutes_wraps() {
    assert_eq!(TimeOfDay::from_minutes(0).as_str(), "00:00");
    assert_eq!(TimeOfDay::from_minutes(-1).as_str(), "23:59");
    assert_eq!(TimeOfDay::from_minutes(24 * 60 + 5).as_str(), "00:05");
}

#[test]
fn test_step_minutes() {
    assert_eq!(TimeOfDay::from("23:59").step_minutes(1).as_str(), "00:00");
    assert_eq!(TimeOfDay::from("00:30").step_minutes(-60).as_str(), "23:30");
    assert_eq!(TimeOfDay::from("9:5").step_minutes(60).as_str(), "10:05");
    // Unparseable text steps from midnight
    assert_eq!(TimeOfDay::from("ab:cd").step_minutes(1).as_str(), "00:01");
}
