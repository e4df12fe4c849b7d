use chrono::{FixedOffset, NaiveDate};
use stampgen::timestamp::{
    epoch_millis, epoch_seconds, generate, generate_all, render, Epoch, TimeOfDay, TimestampFormat, ZoneSetting,
};

fn new_year_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn utc(time: &str, format: TimestampFormat) -> String {
    generate(Some(new_year_2024()), &TimeOfDay::from(time), format, ZoneSetting::Utc)
}

#[test]
fn test_midnight_short_time() {
    assert_eq!(utc("00:00", TimestampFormat::ShortTime), "<t:1704067200:t>");
}

#[test]
fn test_end_of_day_relative() {
    assert_eq!(utc("23:59", TimestampFormat::Relative), "<t:1704153540:R>");
}

#[test]
fn test_radix_prefixed_hours() {
    assert_eq!(utc("0x1:00", TimestampFormat::ShortTime), "<t:1704070800:t>");
    assert_eq!(utc("0o2:0b11", TimestampFormat::ShortTime), "<t:1704074580:t>");
}

#[test]
fn test_unparseable_time_renders_nan() {
    assert_eq!(utc("ab:cd", TimestampFormat::ShortTime), "<t:NaN:t>");
    assert_eq!(utc("12", TimestampFormat::LongDate), "<t:NaN:D>");
    assert_eq!(utc("1e:00", TimestampFormat::ShortDate), "<t:NaN:d>");
}

#[test]
fn test_no_date_renders_empty() {
    for format in TimestampFormat::ALL {
        assert_eq!(generate(None, &TimeOfDay::from("12:00"), format, ZoneSetting::Utc), "");
    }
}

#[test]
fn test_lenient_time_parsing() {
    // Empty parts read as zero
    assert_eq!(utc(":30", TimestampFormat::ShortTime), "<t:1704069000:t>");
    assert_eq!(utc(":", TimestampFormat::ShortTime), "<t:1704067200:t>");
    // Surrounding whitespace is ignored
    assert_eq!(utc(" 1: 05", TimestampFormat::ShortTime), "<t:1704071100:t>");
    // Fractions truncate
    assert_eq!(utc("1.9:00", TimestampFormat::ShortTime), "<t:1704070800:t>");
}

#[test]
fn test_out_of_range_time_rolls_over() {
    // 25:00 is 01:00 the next day
    assert_eq!(utc("25:00", TimestampFormat::ShortTime), "<t:1704157200:t>");
    // 00:90 is 01:30
    assert_eq!(utc("00:90", TimestampFormat::ShortTime), "<t:1704072600:t>");
    // -1:00 is 23:00 the previous day
    assert_eq!(utc("-1:00", TimestampFormat::ShortTime), "<t:1704063600:t>");
}

#[test]
fn test_pre_epoch_dates_are_negative() {
    let date = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
    let markup = generate(Some(date), &TimeOfDay::from("23:59"), TimestampFormat::ShortTime, ZoneSetting::Utc);
    assert_eq!(markup, "<t:-60:t>");
}

#[test]
fn test_fixed_offset_zone() {
    let zone = ZoneSetting::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap());
    let markup = generate(Some(new_year_2024()), &TimeOfDay::from("00:00"), TimestampFormat::ShortTime, zone);
    assert_eq!(markup, "<t:1704047400:t>");
}

#[test]
fn test_epoch_is_floor_of_millis() {
    let time = TimeOfDay::from("13:37");
    let millis = epoch_millis(new_year_2024(), &time, ZoneSetting::Utc).unwrap();
    assert_eq!(
        epoch_seconds(new_year_2024(), &time, ZoneSetting::Utc),
        Epoch::Seconds(millis.div_euclid(1000))
    );
    assert_eq!(epoch_millis(new_year_2024(), &TimeOfDay::from("x"), ZoneSetting::Utc), None);
}

#[test]
fn test_output_shape_for_every_format() {
    let dates = [
        NaiveDate::from_ymd_opt(1950, 6, 15).unwrap(),
        new_year_2024(),
        NaiveDate::from_ymd_opt(2038, 1, 19).unwrap(),
    ];

    for date in dates {
        for (format, markup) in generate_all(Some(date), &TimeOfDay::from("08:45"), ZoneSetting::Utc) {
            let body = markup
                .strip_prefix("<t:")
                .and_then(|rest| rest.strip_suffix('>'))
                .unwrap_or_else(|| panic!("malformed markup: {markup}"));
            let (epoch, code) = body.rsplit_once(':').unwrap();
            assert!(epoch.parse::<i64>().is_ok(), "epoch not an integer: {markup}");
            assert_eq!(code, format.code().to_string());
        }
    }
}

#[test]
fn test_generate_is_idempotent() {
    let time = TimeOfDay::from("16:20");
    let first = generate_all(Some(new_year_2024()), &time, ZoneSetting::Local);
    let second = generate_all(Some(new_year_2024()), &time, ZoneSetting::Local);
    assert_eq!(first, second);
}

#[test]
fn test_render_markup() {
    assert_eq!(render(Epoch::Seconds(0), TimestampFormat::LongDateTime), "<t:0:F>");
    assert_eq!(render(Epoch::NaN, TimestampFormat::Relative), "<t:NaN:R>");
}
