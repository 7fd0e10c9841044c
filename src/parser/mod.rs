//! Measurement parsing module
//!
//! This module is responsible for turning the text a user types into an exact
//! `Measurement`. The main entry point is the `parse_measurement` function.

pub(crate) mod combinators;
mod measurement;
mod tokens;

pub use combinators::MeasurementSyntax;
pub use measurement::{parse_measurement, parse_optional_measurement};
