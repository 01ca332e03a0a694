use core::ops::Mul;

/// The sign of a literal in an interval string.
///
/// A missing sign is [`Sign::Positive`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Positive),
            '-' => Some(Self::Negative),
            _ => None,
        }
    }

    /// The prefix used when rendering a value, which is empty for positive values.
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Positive => "",
            Self::Negative => "-",
        }
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Applies the sign to a magnitude. `-0` is `0`.
    #[must_use]
    pub const fn apply(&self, magnitude: i64) -> i64 {
        match self {
            Self::Positive => magnitude,
            Self::Negative => -magnitude,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Positive, Self::Positive) => Self::Positive,
            (Self::Positive, Self::Negative) => Self::Negative,
            (Self::Negative, Self::Positive) => Self::Negative,
            (Self::Negative, Self::Negative) => Self::Positive,
        }
    }
}
