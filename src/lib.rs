//! Parses the text of PostgreSQL `interval` values and renders it again, as
//! interval input or as an ISO 8601 duration.
//!
//! ```
//! use postgres_interval::{parse, IsoOptions};
//!
//! let interval = parse("1 day -00:00:03.5");
//!
//! assert_eq!(interval.to_native_input(), "1 days -3.5 seconds");
//! assert_eq!(interval.to_string(), "1 days -00:00:03.5");
//! assert_eq!(interval.to_iso(IsoOptions::new()), "P0Y0M1DT0H0M-3.5S");
//! assert_eq!(interval.to_iso_short(), "P1DT-3.5S");
//! ```

mod utils;

#[doc(hidden)]
pub use static_assertions;

pub mod format;
pub mod interval;
pub mod parser;

pub use crate::format::IsoOptions;
pub use crate::interval::{Interval, IntervalFields, Sign, Unit};
pub use crate::parser::{parse, parse_strict, Mismatch, ParseError};
