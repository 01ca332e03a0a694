use core::fmt;

use crate::interval::MICROS_PER_SECOND;

mod iso;
pub use iso::*;
mod native;

/// Renders microseconds as decimal seconds with at most six fractional
/// digits, e.g. `1.1` or `-0.123456`. Trailing zeros and a dangling point are
/// stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalSeconds(pub(crate) i128);

impl fmt::Display for DecimalSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / MICROS_PER_SECOND as u128;
        let fraction = magnitude % MICROS_PER_SECOND as u128;

        write!(f, "{}{}", sign, whole)?;
        if fraction != 0 {
            let digits = format!("{:06}", fraction);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        Ok(())
    }
}

/// Like [`DecimalSeconds`], but without a sign and with the whole seconds
/// padded to two digits, as they appear on a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClockSeconds(pub(crate) u128);

impl fmt::Display for ClockSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / MICROS_PER_SECOND as u128;
        let fraction = self.0 % MICROS_PER_SECOND as u128;

        write!(f, "{:02}", whole)?;
        if fraction != 0 {
            let digits = format!("{:06}", fraction);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        Ok(())
    }
}
