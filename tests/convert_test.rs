use chrono::{TimeZone, Utc};
use isodur::duration::{
    Component, Converted, DurationConverter, DurationValue, FieldMap, Representation, convert,
};
use isodur::error::DurationError;
use std::time::Duration;

#[test]
fn test_day_hours_minutes_to_field_map_and_seconds() {
    let value = DurationValue::iso("P1DT2H30M");

    let fields = convert(&value, Representation::FieldMap)
        .unwrap()
        .into_field_map()
        .unwrap();
    let expected = FieldMap::new()
        .with(Component::Days, 1)
        .with(Component::Hours, 2)
        .with(Component::Minutes, 30);
    assert_eq!(fields, expected);

    let total = convert(&value, Representation::TotalSeconds).unwrap();
    assert_eq!(total.as_total_seconds(), Some(95_400.0));
}

#[test]
fn test_seconds_only() {
    let total = convert(&DurationValue::iso("PT45S"), Representation::TotalSeconds).unwrap();
    assert_eq!(total, Converted::TotalSeconds(45.0));
}

#[test]
fn test_plain_text_is_invalid_format() {
    let result = convert(&DurationValue::iso("1 hour"), Representation::TotalSeconds);
    assert_eq!(
        result.unwrap_err(),
        DurationError::InvalidFormat {
            input: "1 hour".to_string()
        }
    );
}

#[test]
fn test_ninety_minutes_to_iso() {
    let out = convert(
        &DurationValue::Elapsed(Duration::from_secs(90 * 60)),
        Representation::Iso8601,
    )
    .unwrap();
    assert_eq!(out.into_iso8601().as_deref(), Some("PT1H30M"));
}

#[test]
fn test_iso_field_map_iso_keeps_order() {
    for input in ["P1Y2M3W4DT5H6M7S", "P3W", "P2MT2M", "PT12H", "P1Y4D", "P10DT1S"] {
        let fields = convert(&DurationValue::iso(input), Representation::FieldMap)
            .unwrap()
            .into_field_map()
            .unwrap();
        let back = convert(&DurationValue::Fields(fields), Representation::Iso8601)
            .unwrap()
            .into_iso8601()
            .unwrap();
        assert_eq!(back, input);
    }
}

#[test]
fn test_explicit_zero_does_not_survive_reformat() {
    let fields = convert(&DurationValue::iso("P1DT0H"), Representation::FieldMap)
        .unwrap()
        .into_field_map()
        .unwrap();
    assert_eq!(fields.get(Component::Hours), Some(0));

    let back = convert(&DurationValue::Fields(fields), Representation::Iso8601).unwrap();
    assert_eq!(back, Converted::Iso8601("P1D".to_string()));
}

#[test]
fn test_time_only_components_ignore_reference() {
    let value = DurationValue::iso("PT1H");
    let early = DurationConverter::at(Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap());
    let late = DurationConverter::at(Utc.with_ymd_and_hms(2028, 2, 29, 0, 0, 0).unwrap());

    for converter in [early, late, DurationConverter::new()] {
        let total = converter.convert(&value, Representation::TotalSeconds).unwrap();
        assert_eq!(total.as_total_seconds(), Some(3_600.0));
    }
}

#[test]
fn test_elapsed_total_seconds_ignores_reference() {
    let value = DurationValue::Elapsed(Duration::from_secs(3 * 86_400 + 7));
    let a = DurationConverter::at(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    let b = DurationConverter::at(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());

    assert_eq!(
        a.convert(&value, Representation::TotalSeconds).unwrap(),
        b.convert(&value, Representation::TotalSeconds).unwrap()
    );
}

#[test]
fn test_month_length_follows_reference() {
    let value = DurationValue::iso("P1M");
    let february = DurationConverter::at(Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap());
    let march = DurationConverter::at(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());

    let feb = february.convert(&value, Representation::Elapsed).unwrap();
    let mar = march.convert(&value, Representation::Elapsed).unwrap();

    assert_eq!(feb, Converted::Elapsed(Duration::from_secs(29 * 86_400)));
    assert_eq!(mar, Converted::Elapsed(Duration::from_secs(31 * 86_400)));
}

#[test]
fn test_elapsed_field_map_only_has_day_and_time_components() {
    let fields = convert(
        &DurationValue::Elapsed(Duration::from_secs(35 * 86_400 + 3_600)),
        Representation::FieldMap,
    )
    .unwrap()
    .into_field_map()
    .unwrap();

    assert_eq!(fields.get(Component::Days), Some(35));
    assert_eq!(fields.get(Component::Hours), Some(1));
    assert!(!fields.contains(Component::Weeks));
    assert!(!fields.contains(Component::Months));
    assert!(!fields.contains(Component::Minutes));
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let converter = DurationConverter::at(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    let handles: Vec<_> = (1..=4u64)
        .map(|h| {
            std::thread::spawn(move || {
                converter
                    .convert(&DurationValue::iso(format!("PT{}H", h)), Representation::TotalSeconds)
                    .unwrap()
                    .as_total_seconds()
                    .unwrap()
            })
        })
        .collect();

    let totals: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(totals, vec![3_600.0, 7_200.0, 10_800.0, 14_400.0]);
}
