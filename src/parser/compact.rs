//! `{ <n> year|mon|day } [ [-]H:MM:SS[.ffffff] ]`
//!
//! The database normalizes seconds into minutes and minutes into hours when
//! it renders an interval, so minutes and seconds always have two digits.
//! Hours do not overflow into days and can have any number of digits.

use crate::interval::{Interval, Sign, Unit};
use crate::parser::lexer::{Lexer, Parsed};
use crate::parser::{Components, Mismatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clock {
    sign: Sign,
    hours: i64,
    minutes: i64,
    seconds: i64,
    microseconds: i64,
}

pub(super) fn parse(full: &str) -> Result<Interval, Mismatch> {
    let lexer = Lexer::new(full);
    let mut components = Components::default();
    let mut input = lexer.whitespace(full).input;

    while !input.is_empty() {
        let date_mismatch = match date_component(&lexer, input) {
            Ok(Parsed {
                value: (unit, value),
                input: rest,
            }) => {
                components.set(unit, value, lexer.offset(input))?;
                input = lexer.whitespace(rest).input;
                continue;
            }
            Err(mismatch) => mismatch,
        };

        let Parsed {
            value: clock,
            input: rest,
        } = self::clock(&lexer, input).map_err(|mismatch| date_mismatch.furthest(mismatch))?;

        for (unit, value) in [
            (Unit::Hours, clock.hours),
            (Unit::Minutes, clock.minutes),
            (Unit::Seconds, clock.seconds),
        ] {
            components.set(unit, clock.sign.apply(value), lexer.offset(input))?;
        }
        components.set_remainder(clock.sign.apply(clock.microseconds));

        // the clock is always the last part
        let rest = lexer.whitespace(rest).input;
        if !rest.is_empty() {
            return Err(lexer.mismatch(rest));
        }
        input = rest;
    }

    Ok(components.finish())
}

/// `[+-]digits <ws> year|mon|day`
fn date_component<'i>(
    lexer: &Lexer<'i>,
    input: &'i str,
) -> Result<Parsed<'i, (Unit, i64)>, Mismatch> {
    let Parsed { value, input } = lexer.integer(input)?;
    let input = lexer.required_whitespace(input)?;
    let Parsed { value: unit, input: rest } = lexer.unit(input)?;

    if !unit.is_date() {
        return Err(Mismatch::UnitNotAllowed {
            offset: lexer.offset(input),
            unit,
        });
    }

    Ok(Parsed {
        value: (unit, value),
        input: rest,
    })
}

/// `[+-]H+:MM:SS[.f{1,6}]`
fn clock<'i>(lexer: &Lexer<'i>, input: &'i str) -> Result<Parsed<'i, Clock>, Mismatch> {
    let Parsed { value: sign, input } = lexer.sign(input);
    let Parsed { value: hours, input } = lexer.unsigned(input)?;
    let input = lexer.expect(input, ':')?;
    let Parsed { value: minutes, input } = lexer.fixed_digits(input, 2)?;
    let input = lexer.expect(input, ':')?;
    let Parsed { value: seconds, input } = lexer.fixed_digits(input, 2)?;
    let Parsed { value: fraction, input } = lexer.fraction(input)?;

    Ok(Parsed {
        value: Clock {
            sign: sign.unwrap_or_default(),
            hours,
            minutes,
            seconds,
            microseconds: fraction.unwrap_or_default(),
        },
        input,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_clock() {
        let lexer = Lexer::new("-100:02:03.456 ");
        assert_eq!(
            clock(&lexer, "-100:02:03.456 "),
            Ok(Parsed {
                value: Clock {
                    sign: Sign::Negative,
                    hours: 100,
                    minutes: 2,
                    seconds: 3,
                    microseconds: 456_000,
                },
                input: " "
            })
        );
    }

    #[test]
    fn test_clock_needs_two_digit_minutes() {
        let lexer = Lexer::new("1:2:03");
        assert_eq!(
            clock(&lexer, "1:2:03"),
            Err(Mismatch::Unexpected {
                offset: 3,
                found: ':'
            })
        );
    }

    #[test]
    fn test_date_components() {
        assert_eq!(
            parse("1 year 2 mons -3 days"),
            Ok(Interval::new()
                .with_years(1)
                .with_months(2)
                .with_days(-3))
        );
    }

    #[test]
    fn test_date_components_in_any_order() {
        assert_eq!(
            parse("-3 days 1 year"),
            Ok(Interval::new().with_years(1).with_days(-3))
        );
    }

    #[test]
    fn test_whitespace_between_tokens_is_optional() {
        assert_eq!(
            parse("  1 years2 mons-00:00:01 "),
            Ok(Interval::new()
                .with_years(1)
                .with_months(2)
                .with_seconds(-1))
        );
    }

    #[test]
    fn test_negative_zero_hours() {
        let interval = parse("-00:02:03.5").unwrap();

        assert_eq!(interval.hours(), 0);
        assert_eq!(interval.minutes(), -2);
        assert_eq!(interval.seconds(), -3);
        assert_eq!(interval.microseconds(), -500_000);
    }

    #[test]
    fn test_time_units_are_not_allowed() {
        assert_eq!(
            parse("1 hour"),
            Err(Mismatch::UnitNotAllowed {
                offset: 2,
                unit: Unit::Hours
            })
        );
    }

    #[test]
    fn test_trailing_input_after_clock() {
        assert_eq!(
            parse("00:00:00-5"),
            Err(Mismatch::Unexpected {
                offset: 8,
                found: '-'
            })
        );
        assert_eq!(
            parse("00:00:00 1 day"),
            Err(Mismatch::Unexpected {
                offset: 9,
                found: '1'
            })
        );
    }

    #[test]
    fn test_fraction_too_long() {
        assert!(parse("00:00:00.1234567").is_err());
    }
}
