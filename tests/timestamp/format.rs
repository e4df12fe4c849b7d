use stampgen::timestamp::{FormatParseError, TimestampFormat};

#[test]
fn test_codes_in_display_order() {
    let codes: String = TimestampFormat::ALL.iter().map(|f| f.code()).collect();
    assert_eq!(codes, "tTdDfFR");
}

#[test]
fn test_labels() {
    assert_eq!(TimestampFormat::ShortTime.label(), "Short Time");
    assert_eq!(TimestampFormat::LongDateTime.label(), "Long Date/Time");
    assert_eq!(TimestampFormat::Relative.label(), "Relative Time");
}

#[test]
fn test_from_code_and_index() {
    for (i, format) in TimestampFormat::ALL.iter().enumerate() {
        assert_eq!(TimestampFormat::from_code(format.code()), Some(*format));
        assert_eq!(format.index(), i);
    }
    assert_eq!(TimestampFormat::from_code('x'), None);
}

#[test]
fn test_parse_is_case_sensitive() {
    assert_eq!("d".parse::<TimestampFormat>().unwrap(), TimestampFormat::ShortDate);
    assert_eq!("D".parse::<TimestampFormat>().unwrap(), TimestampFormat::LongDate);
    assert_eq!(
        "r".parse::<TimestampFormat>(),
        Err(FormatParseError::UnknownCode("r".to_string()))
    );
    assert!("tt".parse::<TimestampFormat>().is_err());
    assert!("".parse::<TimestampFormat>().is_err());
}

#[test]
fn test_display_prints_code() {
    assert_eq!(TimestampFormat::ShortDateTime.to_string(), "f");
}
