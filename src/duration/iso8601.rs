//! ISO 8601 duration strings: `P[n]Y[n]M[n]W[n]D[T[n]H[n]M[n]S]`.

use crate::duration::fields::{Component, FieldMap};
use crate::error::DurationError;
use regex::Regex;
use std::sync::LazyLock;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^P(?:(?<Years>[0-9]+)Y)?(?:(?<Months>[0-9]+)M)?(?:(?<Weeks>[0-9]+)W)?(?:(?<Days>[0-9]+)D)?(?<T>T(?:(?<Hours>[0-9]+)H)?(?:(?<Minutes>[0-9]+)M)?(?:(?<Seconds>[0-9]+)S)?)?$",
    )
    .expect("ISO 8601 duration pattern compiles")
});

/// Parse an ISO 8601 duration into the components it names.
///
/// Components that are written with a zero magnitude are kept, components
/// that are not written are absent from the result.
pub fn parse(input: &str) -> Result<FieldMap, DurationError> {
    let invalid = || DurationError::InvalidFormat {
        input: input.to_string(),
    };

    // Capture group names match Component::name()
    let caps = DURATION_PATTERN.captures(input).ok_or_else(invalid)?;

    let mut fields = FieldMap::new();
    for component in Component::ALL {
        if let Some(m) = caps.name(component.name()) {
            let value: u64 = m.as_str().parse().map_err(|_| DurationError::OutOfRange {
                input: input.to_string(),
            })?;
            fields.insert(component, value);
        }
    }

    // "P" and "PT" match the pattern but name nothing; "P1DT" has a dangling separator
    if fields.is_empty() {
        return Err(invalid());
    }
    if caps.name("T").is_some() && !fields.iter().any(|(c, _)| c.is_time()) {
        return Err(invalid());
    }

    Ok(fields)
}

/// Render a component set, skipping zero entries.
///
/// A set with nothing left to write renders as `PT0S`.
pub fn format(fields: &FieldMap) -> String {
    let mut date = String::new();
    let mut time = String::new();

    for (component, value) in fields.iter() {
        if value == 0 {
            continue;
        }
        let target = if component.is_time() {
            &mut time
        } else {
            &mut date
        };
        target.push_str(&value.to_string());
        target.push(component.designator());
    }

    if date.is_empty() && time.is_empty() {
        return "PT0S".to_string();
    }

    let mut out = String::with_capacity(1 + date.len() + 1 + time.len());
    out.push('P');
    out.push_str(&date);
    if !time.is_empty() {
        out.push('T');
        out.push_str(&time);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_duration() {
        let fields = parse("P1Y2M3W4DT5H6M7S").unwrap();
        assert_eq!(fields.get(Component::Years), Some(1));
        assert_eq!(fields.get(Component::Months), Some(2));
        assert_eq!(fields.get(Component::Weeks), Some(3));
        assert_eq!(fields.get(Component::Days), Some(4));
        assert_eq!(fields.get(Component::Hours), Some(5));
        assert_eq!(fields.get(Component::Minutes), Some(6));
        assert_eq!(fields.get(Component::Seconds), Some(7));
    }

    #[test]
    fn test_month_and_minute_are_told_apart_by_separator() {
        let fields = parse("P5MT5M").unwrap();
        assert_eq!(fields.get(Component::Months), Some(5));
        assert_eq!(fields.get(Component::Minutes), Some(5));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_parse_keeps_explicit_zero() {
        let fields = parse("PT0H30M").unwrap();
        assert_eq!(fields.get(Component::Hours), Some(0));
        assert_eq!(fields.get(Component::Minutes), Some(30));
        assert!(!fields.contains(Component::Seconds));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in [
            "",
            "P",
            "PT",
            "P1DT",
            "1 hour",
            "PT1H1D",
            "P1H",
            "pt1h",
            "P-1D",
            "P1.5D",
            " PT1H",
            "PT\u{0663}H",
        ] {
            assert!(
                matches!(parse(input), Err(DurationError::InvalidFormat { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_reports_oversized_magnitude() {
        let result = parse("PT99999999999999999999999S");
        assert!(matches!(result, Err(DurationError::OutOfRange { .. })));
    }

    #[test]
    fn test_invalid_format_message_links_reference() {
        let err = parse("1 hour").unwrap_err();
        assert!(err.to_string().contains("ISO_8601#Durations"));
    }

    #[test]
    fn test_format_drops_zero_components() {
        let fields = FieldMap::new()
            .with(Component::Days, 1)
            .with(Component::Hours, 0)
            .with(Component::Minutes, 30);
        assert_eq!(format(&fields), "P1DT30M");
    }

    #[test]
    fn test_format_date_only() {
        let fields = FieldMap::new()
            .with(Component::Years, 1)
            .with(Component::Weeks, 2);
        assert_eq!(format(&fields), "P1Y2W");
    }

    #[test]
    fn test_format_empty_is_zero_seconds() {
        assert_eq!(format(&FieldMap::new()), "PT0S");
        assert_eq!(format(&FieldMap::new().with(Component::Hours, 0)), "PT0S");
    }

    #[test]
    fn test_non_ascii_digits_are_invalid_format() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        for input in ["PT\u{0663}H", "P\u{0661}\u{0662}D", "P\u{FF11}Y"] {
            assert!(
                matches!(parse(input), Err(DurationError::InvalidFormat { .. })),
                "{input:?} should be rejected"
            );
        }
    }
}
