/// Creates an [`Interval`](crate::Interval) from a clock literal, checking the
/// minutes and seconds at compile time.
///
/// Hours are not limited, like in the database output.
///
/// ```
/// use postgres_interval::interval;
///
/// let interval = interval!(100:02:03);
/// assert_eq!(interval.hours(), 100);
/// assert_eq!(interval.minutes(), 2);
/// ```
#[macro_export]
macro_rules! interval {
    ( $hours:literal : $mins:literal : $secs:literal ) => {{
        $crate::static_assertions::const_assert!($mins < 60);
        $crate::static_assertions::const_assert!($secs < 60);

        $crate::Interval::new()
            .with_hours($hours)
            .with_minutes($mins)
            .with_seconds($secs)
    }};
}
