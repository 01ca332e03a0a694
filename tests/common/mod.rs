use postgres_interval::{Interval, IntervalFields};

/// Builds an interval from a field object, like a caller constructing one by
/// hand would.
#[must_use]
#[allow(dead_code)]
pub fn from_fields(
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: f64,
) -> Interval {
    Interval::from_fields(IntervalFields {
        years: Some(years),
        months: Some(months),
        days: Some(days),
        hours: Some(hours),
        minutes: Some(minutes),
        seconds: Some(seconds),
        milliseconds: Some(milliseconds),
    })
}

/// A set of small intervals with mixed signs. Time fields share one sign,
/// like they do in everything the database emits.
#[must_use]
#[allow(dead_code)]
pub fn sample_intervals() -> Vec<Interval> {
    vec![
        Interval::new(),
        from_fields(0, 0, 0, 1, 2, 3, 456.0),
        from_fields(0, 0, 0, -1, -2, -3, -456.0),
        from_fields(1, 0, -32, 0, 0, 0, 0.0),
        from_fields(0, 0, 1, 0, 0, -3, 0.0),
        from_fields(3, 1, 10, 0, 0, 0, 0.0),
        from_fields(0, 2, 1, 0, 0, -3, 0.0),
        from_fields(0, 0, 0, 100, 2, 3, 0.0),
        from_fields(0, 0, 0, 0, 0, 0, 100.5),
        from_fields(0, 0, 0, 0, 0, 0, -123.456),
        from_fields(-4, -3, -2, -26, -11, -11, -500.0),
        from_fields(4, 3, 2, 26, 11, 11, 500.0),
        from_fields(0, 0, 0, 0, 0, 59, 999.999),
    ]
}
