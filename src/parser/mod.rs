//! Parsing of interval strings.
//!
//! Two grammars are tried in order. The compact one matches what the database
//! emits in its default output style (`1 year 2 mons -3 days 04:05:06.789`),
//! the verbose one matches interval input where every component has its own
//! unit word (`1 year 2 hours -3.5 seconds`).

use log::{debug, trace};

use crate::interval::{Interval, Unit};

mod compact;
mod error;
mod lexer;
mod verbose;

pub use error::*;

/// Parses an interval, falling back to the zero interval for anything that
/// is not a valid interval.
///
/// ```
/// use postgres_interval::parse;
///
/// let interval = parse("1 year -32 days 01:02:03.5");
/// assert_eq!(interval.years(), 1);
/// assert_eq!(interval.days(), -32);
/// assert_eq!(interval.milliseconds(), 500.0);
///
/// assert!(parse(None).is_zero());
/// assert!(parse("00:00:00-5").is_zero());
/// ```
#[must_use]
pub fn parse<'a>(input: impl Into<Option<&'a str>>) -> Interval {
    let Some(input) = input.into() else {
        return Interval::new();
    };

    match parse_strict(input) {
        Ok(interval) => interval,
        Err(error) => {
            debug!("using the zero interval: {}", error);
            Interval::new()
        }
    }
}

/// Parses an interval, failing if the input matches neither grammar.
///
/// Empty input is the zero interval.
pub fn parse_strict(input: &str) -> Result<Interval, ParseError> {
    if input.is_empty() {
        return Ok(Interval::new());
    }

    let compact_mismatch = match compact::parse(input) {
        Ok(interval) => return Ok(interval),
        Err(mismatch) => mismatch,
    };

    trace!(
        "\"{}\" is not in the output format ({}), trying the verbose format",
        input,
        compact_mismatch
    );

    match verbose::parse(input) {
        Ok(interval) => Ok(interval),
        Err(verbose_mismatch) => Err(ParseError::new(
            input,
            compact_mismatch.furthest(verbose_mismatch),
        )),
    }
}

/// Collects the components of one parse and rejects repeated units.
#[derive(Debug, Clone, Copy, Default)]
struct Components {
    interval: Interval,
    seen: [bool; Unit::ALL.len()],
}

impl Components {
    fn set(&mut self, unit: Unit, value: i64, offset: usize) -> Result<(), Mismatch> {
        if self.seen[unit.index()] {
            return Err(Mismatch::DuplicateUnit { offset, unit });
        }

        self.seen[unit.index()] = true;
        self.interval = self.interval.with_unit(unit, value);
        Ok(())
    }

    fn set_remainder(&mut self, microseconds: i64) {
        self.interval = self.interval.with_microseconds(microseconds);
    }

    fn finish(self) -> Interval {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        assert_eq!(parse(""), Interval::new());
        assert_eq!(parse(None), Interval::new());
        assert_eq!(parse_strict(""), Ok(Interval::new()));
        assert_eq!(parse_strict("   "), Ok(Interval::new()));
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse("aaa"), Interval::new());
        assert_eq!(parse("1 year garbage"), Interval::new());
        assert!(parse_strict("aaa").is_err());
    }

    #[test]
    fn test_error_reports_furthest_mismatch() {
        let error = parse_strict("1 year 00:00:00-5").unwrap_err();

        assert_eq!(error.input(), "1 year 00:00:00-5");
        assert_eq!(
            error.reason(),
            &Mismatch::Unexpected {
                offset: 15,
                found: '-'
            }
        );
    }

    #[test]
    fn test_duplicate_unit() {
        assert_eq!(
            parse_strict("1 year 2 years").map_err(|e| e.reason().clone()),
            Err(Mismatch::DuplicateUnit {
                offset: 7,
                unit: Unit::Years
            })
        );
    }

    #[test]
    fn test_components_reject_repeated_units() {
        let mut components = Components::default();

        assert_eq!(components.set(Unit::Days, 3, 0), Ok(()));
        assert_eq!(
            components.set(Unit::Days, 4, 7),
            Err(Mismatch::DuplicateUnit {
                offset: 7,
                unit: Unit::Days
            })
        );
        assert_eq!(components.finish(), Interval::new().with_days(3));
    }
}
