//! Rendering intervals as interval input, database output and ISO 8601.

use postgres_interval::{parse, Interval, IsoOptions};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_native_input() {
    for (input, expected) in [
        ("01:02:03", "1 hours 2 minutes 3 seconds"),
        ("100:02:03", "100 hours 2 minutes 3 seconds"),
        ("1 year -32 days", "1 years -32 days"),
        ("1 day -00:00:03", "1 days -3 seconds"),
        ("2 mons 1 day -00:00:03", "2 months 1 days -3 seconds"),
        ("00:00:00", "0"),
        ("00:00:01.100", "1.1 seconds"),
        ("00:00:00.5", "0.5 seconds"),
        ("00:00:00.100500", "0.1005 seconds"),
        ("00:00:00.123456", "0.123456 seconds"),
        ("-00:00:00.123456", "-0.123456 seconds"),
    ] {
        assert_eq!(parse(input).to_native_input(), expected, "{}", input);
    }
}

#[test]
fn test_native_input_remainder_only() {
    assert_eq!(
        Interval::new().with_milliseconds(1000.0).to_native_input(),
        "1 seconds"
    );
}

#[test]
fn test_native_output() {
    for (input, expected) in [
        ("01:02:03", "01:02:03"),
        ("1 year -32 days", "1 years -32 days"),
        ("1 day -00:00:03", "1 days -00:00:03"),
        ("-00:00:00.123456", "-00:00:00.123456"),
        ("00:00:00.100500", "00:00:00.1005"),
        ("1 hours 2 minutes 3 seconds", "01:02:03"),
        ("", "00:00:00"),
    ] {
        assert_eq!(parse(input).to_native_output(), expected, "{}", input);
    }
}

#[test]
fn test_iso() {
    for (input, expected) in [
        ("01:02:03", "P0Y0M0DT1H2M3S"),
        ("100:02:03", "P0Y0M0DT100H2M3S"),
        ("1 year -32 days", "P1Y0M-32DT0H0M0S"),
        ("1 day -00:00:03", "P0Y0M1DT0H0M-3S"),
        ("00:00:00", "P0Y0M0DT0H0M0S"),
        ("00:00:00.0", "P0Y0M0DT0H0M0S"),
        ("00:00:01.100", "P0Y0M0DT0H0M1.1S"),
        ("00:00:00.5", "P0Y0M0DT0H0M0.5S"),
        ("00:00:00.100500", "P0Y0M0DT0H0M0.1005S"),
        ("00:00:00.123456", "P0Y0M0DT0H0M0.123456S"),
        ("-00:00:00.123456", "P0Y0M0DT0H0M-0.123456S"),
    ] {
        assert_eq!(parse(input).to_iso(IsoOptions::new()), expected, "{}", input);
    }
}

#[test]
fn test_iso_short() {
    for (input, expected) in [
        ("01:02:03", "PT1H2M3S"),
        ("100:02:03", "PT100H2M3S"),
        ("1 year -32 days", "P1Y-32D"),
        ("1 day -00:00:03", "P1DT-3S"),
        ("00:00:00", "PT0S"),
        ("00:00:00.0", "PT0S"),
        ("00:00:01.100", "PT1.1S"),
        ("00:00:00.5", "PT0.5S"),
        ("00:00:00.100500", "PT0.1005S"),
        ("00:00:00.123456", "PT0.123456S"),
        ("-00:00:00.123456", "PT-0.123456S"),
        ("3 years 1 mon 10 days", "P3Y1M10D"),
    ] {
        assert_eq!(
            parse(input).to_iso(IsoOptions::new().short(true)),
            expected,
            "{}",
            input
        );
        assert_eq!(parse(input).to_iso_short(), expected, "{}", input);
    }
}

#[test]
fn test_negative_zero_hours_render_as_zero() {
    let interval = parse("-00:00:03");

    assert_eq!(interval.to_iso(IsoOptions::new()), "P0Y0M0DT0H0M-3S");
    assert_eq!(interval.to_native_input(), "-3 seconds");
}

#[test]
fn test_iso_short_has_no_zero_designators() {
    for interval in common::sample_intervals() {
        let iso = interval.to_iso_short();
        if interval.is_zero() {
            assert_eq!(iso, "PT0S");
            continue;
        }

        let designators = iso
            .trim_start_matches('P')
            .split('T')
            .flat_map(|part| part.split_inclusive(|c: char| c.is_ascii_uppercase()))
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();

        assert!(!designators.is_empty(), "{}", iso);
        for token in designators {
            let value: f64 = token[..token.len() - 1]
                .parse()
                .expect("designator should have a number in front of it");
            assert!(value != 0.0, "{} contains the zero designator {}", iso, token);
        }
    }
}
