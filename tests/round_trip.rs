//! Every rendering that is meant to be read back parses into the same interval.

use postgres_interval::{interval, parse, parse_strict, Interval, IntervalFields};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_native_input_round_trip() {
    for interval in common::sample_intervals() {
        assert_eq!(
            parse(interval.to_native_input().as_str()),
            interval,
            "{}",
            interval.to_native_input()
        );
    }
}

#[test]
fn test_native_output_round_trip() {
    for interval in common::sample_intervals() {
        assert_eq!(
            parse_strict(&interval.to_native_output()),
            Ok(interval),
            "{}",
            interval
        );
    }
}

#[test]
fn test_fields_round_trip() {
    for interval in common::sample_intervals() {
        assert_eq!(Interval::from_fields(interval.to_fields()), interval);
    }

    assert_eq!(parse("00:00:00").to_fields(), IntervalFields::default());
}

#[test]
fn test_mixed_signs_in_the_verbose_form() {
    let interval = interval!(01:02:03).with_minutes(-2).with_days(-1);

    assert_eq!(
        interval.to_native_input(),
        "-1 days 1 hours -2 minutes 3 seconds"
    );
    assert_eq!(parse(interval.to_native_input().as_str()), interval);
}

#[test]
fn test_native_input_folds_the_remainder_into_the_seconds() {
    let interval = Interval::new().with_seconds(1).with_milliseconds(-500.0);
    assert_eq!(interval.to_native_input(), "0.5 seconds");

    let parsed = parse(interval.to_native_input().as_str());
    assert_eq!((parsed.seconds(), parsed.microseconds()), (0, 500_000));
    assert_ne!(parsed, interval);

    // the fields keep both parts
    assert_eq!(Interval::from_fields(interval.to_fields()), interval);
}
