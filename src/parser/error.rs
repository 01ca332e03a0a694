use thiserror::Error;

use crate::interval::Unit;

/// The reason a grammar stopped matching, with the byte offset into the input
/// where it stopped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Mismatch {
    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected { offset: usize, found: char },
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },
    #[error("unknown unit {word:?} at offset {offset}")]
    UnknownUnit { offset: usize, word: String },
    #[error("{unit} are not allowed at offset {offset}")]
    UnitNotAllowed { offset: usize, unit: Unit },
    #[error("{unit} are given more than once, again at offset {offset}")]
    DuplicateUnit { offset: usize, unit: Unit },
    #[error("{unit} can not have a fractional value, found one at offset {offset}")]
    FractionNotAllowed { offset: usize, unit: Unit },
    #[error("number at offset {offset} is too large")]
    Overflow { offset: usize },
}

impl Mismatch {
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Unexpected { offset, .. }
            | Self::UnexpectedEnd { offset }
            | Self::UnknownUnit { offset, .. }
            | Self::UnitNotAllowed { offset, .. }
            | Self::DuplicateUnit { offset, .. }
            | Self::FractionNotAllowed { offset, .. }
            | Self::Overflow { offset } => *offset,
        }
    }

    /// Returns the mismatch that got further into the input, preferring `self`
    /// on a tie.
    #[must_use]
    pub(crate) fn furthest(self, other: Self) -> Self {
        if other.offset() > self.offset() {
            other
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\"{input}\" is not a valid interval: {reason}")]
pub struct ParseError {
    input: String,
    reason: Mismatch,
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, reason: Mismatch) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn reason(&self) -> &Mismatch {
        &self.reason
    }
}
