use derive_more::Display;

/// One of the six named components of an interval.
///
/// The sub-second remainder has no unit word of its own, it is always written
/// as the fraction of [`Unit::Seconds`].
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    #[display("years")]
    Years,
    #[display("months")]
    Months,
    #[display("days")]
    Days,
    #[display("hours")]
    Hours,
    #[display("minutes")]
    Minutes,
    #[display("seconds")]
    Seconds,
}

impl Unit {
    pub const ALL: [Self; 6] = [
        Self::Years,
        Self::Months,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Looks up the unit for a word of interval input.
    ///
    /// The lookup is case-sensitive, singular and plural spellings are
    /// accepted regardless of the value in front of them.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "year" | "years" => Self::Years,
            "mon" | "mons" | "month" | "months" => Self::Months,
            "day" | "days" => Self::Days,
            "hour" | "hours" => Self::Hours,
            "min" | "mins" | "minute" | "minutes" => Self::Minutes,
            "sec" | "secs" | "second" | "seconds" => Self::Seconds,
            _ => return None,
        })
    }

    /// Whether the unit can appear in front of the clock literal in the
    /// database output format.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Years | Self::Months | Self::Days)
    }

    /// The word PostgreSQL itself uses in its default output style.
    #[must_use]
    pub const fn output_word(&self) -> &'static str {
        match self {
            Self::Months => "mons",
            other => other.input_word(),
        }
    }

    /// The word used when rendering interval input. Always plural.
    #[must_use]
    pub const fn input_word(&self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// The ISO 8601 designator, `M` is used for both months and minutes.
    #[must_use]
    pub const fn designator(&self) -> char {
        match self {
            Self::Years => 'Y',
            Self::Months => 'M',
            Self::Days => 'D',
            Self::Hours => 'H',
            Self::Minutes => 'M',
            Self::Seconds => 'S',
        }
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}
