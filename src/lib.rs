pub mod calculator;
pub mod config;
pub mod error;
pub mod formatter;
pub mod frontend;
pub mod logger;
pub mod parser;
pub mod types;

// Main API
pub use calculator::{Calculator, calculate, compute_dimensions};
pub use config::{CalculationSettings, FrameConfig};
pub use error::{FrameError, ParseError};
pub use formatter::{format_measurement, format_optional};
pub use parser::{parse_measurement, parse_optional_measurement};
pub use types::*;

#[cfg(test)]
mod tests;
