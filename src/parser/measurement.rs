use winnow::Parser;

use crate::error::ParseError;
use crate::parser::combinators::parse_measurement_syntax;
use crate::types::Measurement;

/// Parse a measurement string into an exact value
///
/// This is the main public API entry point of this module. Accepts a plain
/// integer (`8`), a simple fraction (`1/2`) or a mixed number (`1 1/2`),
/// with surrounding whitespace ignored.
///
/// # Arguments
/// * `input_str` - The text the user typed
///
/// # Returns
/// * `Result<Measurement, ParseError>` - The exact value, or why it was rejected
///
/// # Examples
/// ```
/// use frame_calc::parser::parse_measurement;
///
/// let value = parse_measurement("1 1/2").unwrap();
/// assert_eq!(value, frame_calc::Measurement::new(3, 2).unwrap());
/// ```
pub fn parse_measurement(input_str: &str) -> Result<Measurement, ParseError> {
    let trimmed = input_str.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let invalid = || ParseError::InvalidFormat {
        input: input_str.to_string(),
    };

    let mut input = trimmed;
    let syntax = parse_measurement_syntax
        .parse_next(&mut input)
        .map_err(|_| invalid())?;

    if !input.is_empty() {
        tracing::debug!(input = input_str, remaining = input, "trailing characters in measurement");
        return Err(invalid());
    }

    let value = syntax.evaluate(input_str)?;
    tracing::debug!(input = input_str, value = %value, "parsed measurement");
    Ok(value)
}

/// Parse a measurement that the user may leave blank
///
/// Empty or whitespace-only input means no value was supplied and yields
/// `Ok(None)`; anything else must parse.
pub fn parse_optional_measurement(input_str: &str) -> Result<Option<Measurement>, ParseError> {
    if input_str.trim().is_empty() {
        return Ok(None);
    }
    parse_measurement(input_str).map(Some)
}
