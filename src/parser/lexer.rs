use crate::interval::{Sign, Unit, MICROS_PER_SECOND};
use crate::parser::Mismatch;

/// The value of a grammar step together with the input that is left after it.
///
/// The remaining input is the only cursor a parse has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Parsed<'i, T> {
    pub(super) value: T,
    pub(super) input: &'i str,
}

/// A signed number with an optional fraction of up to six digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Decimal {
    pub(super) sign: Sign,
    pub(super) whole: i64,
    /// The fraction in microseconds, unsigned.
    pub(super) fraction: Option<i64>,
}

/// Tokenizes a suffix of `full`, which is only kept to report offsets.
#[derive(Debug, Clone, Copy)]
pub(super) struct Lexer<'i> {
    full: &'i str,
}

impl<'i> Lexer<'i> {
    pub(super) const fn new(full: &'i str) -> Self {
        Self { full }
    }

    pub(super) fn offset(&self, input: &'i str) -> usize {
        self.full.len() - input.len()
    }

    /// The mismatch for an unexpected character at the start of `input`.
    pub(super) fn mismatch(&self, input: &'i str) -> Mismatch {
        let offset = self.offset(input);
        match input.chars().next() {
            Some(found) => Mismatch::Unexpected { offset, found },
            None => Mismatch::UnexpectedEnd { offset },
        }
    }

    /// Skips any whitespace, the value is the number of skipped bytes.
    pub(super) fn whitespace(&self, input: &'i str) -> Parsed<'i, usize> {
        let rest = input.trim_start();
        Parsed {
            value: input.len() - rest.len(),
            input: rest,
        }
    }

    /// Skips whitespace, at least one character of it.
    pub(super) fn required_whitespace(&self, input: &'i str) -> Result<&'i str, Mismatch> {
        let Parsed { value, input: rest } = self.whitespace(input);
        if value == 0 {
            return Err(self.mismatch(input));
        }

        Ok(rest)
    }

    pub(super) fn sign(&self, input: &'i str) -> Parsed<'i, Option<Sign>> {
        match input.chars().next().and_then(Sign::from_symbol) {
            Some(sign) => Parsed {
                value: Some(sign),
                input: &input[1..],
            },
            None => Parsed { value: None, input },
        }
    }

    pub(super) fn expect(&self, input: &'i str, expected: char) -> Result<&'i str, Mismatch> {
        input
            .strip_prefix(expected)
            .ok_or_else(|| self.mismatch(input))
    }

    /// A run of ascii digits, which may be empty.
    pub(super) fn digits(&self, input: &'i str) -> Parsed<'i, &'i str> {
        let end = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());

        Parsed {
            value: &input[..end],
            input: &input[end..],
        }
    }

    /// Exactly `count` ascii digits.
    pub(super) fn fixed_digits(
        &self,
        input: &'i str,
        count: usize,
    ) -> Result<Parsed<'i, i64>, Mismatch> {
        let Parsed { value: digits, .. } = self.digits(input);
        if digits.len() < count {
            return Err(self.mismatch(&input[digits.len()..]));
        }

        self.magnitude(input, &input[..count])
            .map(|value| Parsed {
                value,
                input: &input[count..],
            })
    }

    /// One or more ascii digits, without a sign.
    pub(super) fn unsigned(&self, input: &'i str) -> Result<Parsed<'i, i64>, Mismatch> {
        let Parsed { value: digits, input: rest } = self.digits(input);
        if digits.is_empty() {
            return Err(self.mismatch(input));
        }

        Ok(Parsed {
            value: self.magnitude(input, digits)?,
            input: rest,
        })
    }

    /// `[+-]digits`
    pub(super) fn integer(&self, input: &'i str) -> Result<Parsed<'i, i64>, Mismatch> {
        let Parsed { value: sign, input } = self.sign(input);
        let Parsed { value, input } = self.unsigned(input)?;

        Ok(Parsed {
            value: sign.unwrap_or_default().apply(value),
            input,
        })
    }

    /// `[+-][+-]digits[.digits]`, two signs multiply.
    pub(super) fn decimal(&self, input: &'i str) -> Result<Parsed<'i, Decimal>, Mismatch> {
        let Parsed { value: outer, input } = self.sign(input);
        let Parsed { value: inner, input } = self.sign(input);
        let sign = outer.unwrap_or_default() * inner.unwrap_or_default();

        let Parsed { value: whole, input } = self.unsigned(input)?;
        let Parsed { value: fraction, input } = self.fraction(input)?;

        Ok(Parsed {
            value: Decimal {
                sign,
                whole,
                fraction,
            },
            input,
        })
    }

    /// An optional `.` followed by one to six digits, converted to
    /// microseconds by right-padding the digits with zeros.
    pub(super) fn fraction(&self, input: &'i str) -> Result<Parsed<'i, Option<i64>>, Mismatch> {
        let Some(after_point) = input.strip_prefix('.') else {
            return Ok(Parsed { value: None, input });
        };

        let Parsed { value: digits, input: rest } = self.digits(after_point);
        if digits.is_empty() {
            return Err(self.mismatch(after_point));
        }
        if digits.len() > 6 {
            return Err(self.mismatch(&after_point[6..]));
        }

        let scale = MICROS_PER_SECOND / 10_i64.pow(digits.len() as u32);
        let micros = self.magnitude(after_point, digits)? * scale;

        Ok(Parsed {
            value: Some(micros),
            input: rest,
        })
    }

    /// A unit word, which is the longest run of ascii letters.
    pub(super) fn unit(&self, input: &'i str) -> Result<Parsed<'i, Unit>, Mismatch> {
        let end = input
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(input.len());
        let word = &input[..end];

        if word.is_empty() {
            return Err(self.mismatch(input));
        }

        let unit = Unit::from_word(word).ok_or_else(|| Mismatch::UnknownUnit {
            offset: self.offset(input),
            word: word.to_string(),
        })?;

        Ok(Parsed {
            value: unit,
            input: &input[end..],
        })
    }

    fn magnitude(&self, at: &'i str, digits: &str) -> Result<i64, Mismatch> {
        digits.parse().map_err(|_| Mismatch::Overflow {
            offset: self.offset(at),
        })
    }
}
