//! Measurement formatting module
//!
//! This module renders exact measurements back into the mixed-number form a
//! framer reads off a ruler. The main entry point is the `format_measurement`
//! function.

mod mixed;
mod report;

pub use mixed::{MixedNumber, to_mixed_number};
pub use report::{REPORT_HEADING, RULE, report_lines};

use crate::types::Measurement;

/// Format a measurement as a mixed number
///
/// # Examples
/// ```
/// use frame_calc::Measurement;
/// use frame_calc::formatter::format_measurement;
///
/// assert_eq!(format_measurement(&Measurement::new(17, 4).unwrap()), "4 1/4");
/// assert_eq!(format_measurement(&Measurement::from_integer(8)), "8");
/// assert_eq!(format_measurement(&Measurement::new(1, 2).unwrap()), "1/2");
/// ```
pub fn format_measurement(value: &Measurement) -> String {
    to_mixed_number(value.as_ratio()).to_string()
}

/// Format a measurement that may not have been supplied
///
/// An absent value renders as an empty string.
pub fn format_optional(value: Option<&Measurement>) -> String {
    value.map(format_measurement).unwrap_or_default()
}
