use core::fmt;

use crate::format::{ClockSeconds, DecimalSeconds};
use crate::interval::{Interval, Sign, Unit};

impl Interval {
    /// Renders the interval as interval input, e.g. `1 years -32 days 3.5 seconds`.
    ///
    /// Unit words are always plural. Zero fields are left out, the zero
    /// interval is `0`.
    ///
    /// Whole seconds and the sub-second remainder are written as one decimal,
    /// so parsing the result puts the whole part back into the seconds. An
    /// interval whose seconds and remainder have opposite signs, or whose
    /// remainder is a second or more, does not come back unchanged:
    ///
    /// ```
    /// use postgres_interval::{parse, Interval};
    ///
    /// let interval = Interval::new().with_seconds(1).with_milliseconds(-500.0);
    /// assert_eq!(interval.to_native_input(), "0.5 seconds");
    ///
    /// let parsed = parse("0.5 seconds");
    /// assert_eq!((parsed.seconds(), parsed.microseconds()), (0, 500_000));
    /// ```
    ///
    /// Use [`Interval::to_fields`] to keep every field as it is.
    #[must_use]
    pub fn to_native_input(&self) -> String {
        let mut parts = Vec::with_capacity(Unit::ALL.len());

        for unit in Unit::ALL {
            if unit == Unit::Seconds {
                if self.seconds() != 0 || self.microseconds() != 0 {
                    parts.push(format!(
                        "{} {}",
                        DecimalSeconds(self.seconds_with_remainder()),
                        unit.input_word()
                    ));
                }
            } else if self.unit(unit) != 0 {
                parts.push(format!("{} {}", self.unit(unit), unit.input_word()));
            }
        }

        if parts.is_empty() {
            return "0".to_string();
        }

        parts.join(" ")
    }

    /// Renders the interval the way the database outputs it by default, see
    /// the [`Display`](fmt::Display) implementation.
    #[must_use]
    pub fn to_native_output(&self) -> String {
        self.to_string()
    }

    /// The single sign of the clock, negative if any time field is.
    fn time_sign(&self) -> Sign {
        let signs = [
            i128::from(self.hours()),
            i128::from(self.minutes()),
            self.seconds_with_remainder(),
        ]
        .map(|value| if value < 0 { Sign::Negative } else { Sign::Positive });

        signs
            .into_iter()
            .find(Sign::is_negative)
            .unwrap_or_default()
    }
}

/// `1 years 2 mons 3 days 04:05:06.789`
///
/// Date fields that are zero are left out, the clock is only left out when
/// there are date fields and all of the time fields are zero. The clock has a
/// single sign, which is negative if any time field is. Nothing is carried
/// over, so minutes or seconds outside of `0..60` are written as they are.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";

        for unit in Unit::ALL.into_iter().filter(Unit::is_date) {
            let value = self.unit(unit);
            if value != 0 {
                write!(f, "{}{} {}", separator, value, unit.output_word())?;
                separator = " ";
            }
        }

        if !self.has_zero_time() || separator.is_empty() {
            write!(
                f,
                "{}{}{:02}:{:02}:{}",
                separator,
                self.time_sign().prefix(),
                self.hours().unsigned_abs(),
                self.minutes().unsigned_abs(),
                ClockSeconds(self.seconds_with_remainder().unsigned_abs())
            )?;
        }

        Ok(())
    }
}
