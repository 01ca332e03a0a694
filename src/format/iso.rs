use crate::format::DecimalSeconds;
use crate::interval::{Interval, Unit};

/// Options for [`Interval::to_iso`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoOptions {
    short: bool,
}

impl IsoOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { short: false }
    }

    /// Leave out designators whose value is zero.
    #[must_use]
    pub const fn short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    #[must_use]
    pub const fn is_short(&self) -> bool {
        self.short
    }
}

impl Interval {
    /// Renders the interval as an ISO 8601 duration with designators.
    ///
    /// Every designator keeps the sign of its own field, so the result can
    /// have mixed signs like `P1Y0M-32DT0H0M0S`.
    ///
    /// ```
    /// use postgres_interval::{parse, IsoOptions};
    ///
    /// let interval = parse("1 year -32 days");
    /// assert_eq!(interval.to_iso(IsoOptions::new()), "P1Y0M-32DT0H0M0S");
    /// assert_eq!(interval.to_iso(IsoOptions::new().short(true)), "P1Y-32D");
    /// ```
    #[must_use]
    pub fn to_iso(&self, options: IsoOptions) -> String {
        let mut date = String::new();
        let mut time = String::new();

        for unit in Unit::ALL {
            let part = if unit.is_date() { &mut date } else { &mut time };

            if unit == Unit::Seconds {
                let seconds = self.seconds_with_remainder();
                if !options.is_short() || seconds != 0 {
                    part.push_str(&format!("{}{}", DecimalSeconds(seconds), unit.designator()));
                }
            } else {
                let value = self.unit(unit);
                if !options.is_short() || value != 0 {
                    part.push_str(&format!("{}{}", value, unit.designator()));
                }
            }
        }

        match (date.is_empty(), time.is_empty()) {
            (true, true) => "PT0S".to_string(),
            (_, true) => format!("P{}", date),
            (_, false) => format!("P{}T{}", date, time),
        }
    }

    /// Same as `to_iso(IsoOptions::new().short(true))`.
    #[must_use]
    pub fn to_iso_short(&self) -> String {
        self.to_iso(IsoOptions::new().short(true))
    }
}
