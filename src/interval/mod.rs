use core::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};

use crate::parser::{self, ParseError};

mod fields;
pub use fields::*;
mod sign;
pub use sign::*;
mod unit;
pub use unit::*;

pub(crate) const MICROS_PER_MILLI: i64 = 1_000;
pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;

/// A PostgreSQL interval split into its textual components.
///
/// The fields are stored as they were written. Nothing carries over into the
/// next larger unit, so `100:00:00` has 100 hours and no days.
///
/// The sub-second remainder is kept as whole microseconds, which is the
/// resolution of the database type. It is exposed as fractional milliseconds
/// through [`Interval::milliseconds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    microseconds: i64,
}

impl Interval {
    /// Returns the zero interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            years: 0,
            months: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            microseconds: 0,
        }
    }

    /// Builds an interval from a field object, missing fields are zero.
    ///
    /// Milliseconds are rounded to the nearest microsecond.
    #[must_use]
    pub fn from_fields(fields: IntervalFields) -> Self {
        Self::new()
            .with_years(fields.years.unwrap_or_default())
            .with_months(fields.months.unwrap_or_default())
            .with_days(fields.days.unwrap_or_default())
            .with_hours(fields.hours.unwrap_or_default())
            .with_minutes(fields.minutes.unwrap_or_default())
            .with_seconds(fields.seconds.unwrap_or_default())
            .with_milliseconds(fields.milliseconds.unwrap_or_default())
    }

    /// The non-zero fields of this interval.
    #[must_use]
    pub fn to_fields(&self) -> IntervalFields {
        let non_zero = |value: i64| (value != 0).then_some(value);

        IntervalFields {
            years: non_zero(self.years),
            months: non_zero(self.months),
            days: non_zero(self.days),
            hours: non_zero(self.hours),
            minutes: non_zero(self.minutes),
            seconds: non_zero(self.seconds),
            milliseconds: (self.microseconds != 0).then(|| self.milliseconds()),
        }
    }

    #[must_use]
    pub const fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub const fn with_months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    #[must_use]
    pub const fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    #[must_use]
    pub const fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    #[must_use]
    pub const fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    #[must_use]
    pub const fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Sets the sub-second remainder. It does not carry into the seconds.
    #[must_use]
    pub const fn with_microseconds(mut self, microseconds: i64) -> Self {
        self.microseconds = microseconds;
        self
    }

    #[must_use]
    pub fn with_milliseconds(self, milliseconds: f64) -> Self {
        // `as` saturates and maps NaN to zero
        self.with_microseconds((milliseconds * MICROS_PER_MILLI as f64).round() as i64)
    }

    /// Sets the value of the given unit.
    #[must_use]
    pub const fn with_unit(self, unit: Unit, value: i64) -> Self {
        match unit {
            Unit::Years => self.with_years(value),
            Unit::Months => self.with_months(value),
            Unit::Days => self.with_days(value),
            Unit::Hours => self.with_hours(value),
            Unit::Minutes => self.with_minutes(value),
            Unit::Seconds => self.with_seconds(value),
        }
    }

    #[must_use]
    pub const fn years(&self) -> i64 {
        self.years
    }

    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second remainder in milliseconds, e.g. `100.5` for
    /// `00:00:00.100500`.
    #[must_use]
    pub fn milliseconds(&self) -> f64 {
        self.microseconds as f64 / MICROS_PER_MILLI as f64
    }

    /// The sub-second remainder in microseconds.
    #[must_use]
    pub const fn microseconds(&self) -> i64 {
        self.microseconds
    }

    #[must_use]
    pub const fn unit(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// The whole seconds and the remainder combined, in microseconds.
    ///
    /// This is what gets rendered as the seconds of the textual formats.
    #[must_use]
    pub const fn seconds_with_remainder(&self) -> i128 {
        self.seconds as i128 * MICROS_PER_SECOND as i128 + self.microseconds as i128
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.has_zero_time()
    }

    /// Whether the hours, minutes, seconds and remainder are all zero.
    #[must_use]
    pub const fn has_zero_time(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.microseconds == 0
    }
}

impl From<IntervalFields> for Interval {
    fn from(fields: IntervalFields) -> Self {
        Self::from_fields(fields)
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parser::parse_strict(string)
    }
}

struct IntervalVisitor;

impl<'de> de::Visitor<'de> for IntervalVisitor {
    type Value = Interval;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("an interval string or a map of interval fields")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Interval::from_str(value).map_err(E::custom)
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        IntervalFields::deserialize(de::value::MapAccessDeserializer::new(map)).map(Interval::from)
    }
}

/// Accepts interval text, like `"1 day 02:30:00"`, or a field object.
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(IntervalVisitor)
    }
}

/// Written as its non-zero [`IntervalFields`]. Neither text form keeps every
/// interval apart, the field object does.
impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.to_fields().serialize(serializer)
    }
}
