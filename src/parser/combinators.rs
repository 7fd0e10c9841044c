use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use winnow::combinator::alt;
use winnow::{ModalResult, Parser};

use crate::error::ParseError;
use crate::parser::tokens::*;
use crate::types::Measurement;

/// The shape a measurement string was written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasurementSyntax {
    /// `8`
    Integer { negative: bool, whole: BigInt },
    /// `1/2`
    Fraction {
        negative: bool,
        numer: BigInt,
        denom: BigInt,
    },
    /// `1 1/2`, the sign belongs to the whole value
    Mixed {
        negative: bool,
        whole: BigInt,
        numer: BigInt,
        denom: BigInt,
    },
}

impl MeasurementSyntax {
    /// Evaluate the syntax into an exact value
    ///
    /// `input` is only used to build the error message.
    pub fn evaluate(self, input: &str) -> Result<Measurement, ParseError> {
        let zero_denominator = || ParseError::ZeroDenominator {
            input: input.to_string(),
        };

        let (negative, magnitude) = match self {
            MeasurementSyntax::Integer { negative, whole } => {
                (negative, BigRational::from_integer(whole))
            }
            MeasurementSyntax::Fraction {
                negative,
                numer,
                denom,
            } => {
                if denom.is_zero() {
                    return Err(zero_denominator());
                }
                (negative, BigRational::new(numer, denom))
            }
            MeasurementSyntax::Mixed {
                negative,
                whole,
                numer,
                denom,
            } => {
                if denom.is_zero() {
                    return Err(zero_denominator());
                }
                (
                    negative,
                    BigRational::from_integer(whole) + BigRational::new(numer, denom),
                )
            }
        };

        let value = if negative { -magnitude } else { magnitude };
        Ok(Measurement::from_ratio(value))
    }
}

/// Parse a mixed number such as `1 1/2`
pub fn parse_mixed_number(input: &mut &str) -> ModalResult<MeasurementSyntax> {
    (
        parse_sign,
        parse_unsigned,
        parse_mixed_separator,
        parse_fraction_parts,
    )
        .map(|(negative, whole, (), (numer, denom))| MeasurementSyntax::Mixed {
            negative,
            whole,
            numer,
            denom,
        })
        .parse_next(input)
}

/// Parse a simple fraction such as `1/2`
pub fn parse_simple_fraction(input: &mut &str) -> ModalResult<MeasurementSyntax> {
    (parse_sign, parse_fraction_parts)
        .map(|(negative, (numer, denom))| MeasurementSyntax::Fraction {
            negative,
            numer,
            denom,
        })
        .parse_next(input)
}

/// Parse a plain integer such as `8`
pub fn parse_integer(input: &mut &str) -> ModalResult<MeasurementSyntax> {
    (parse_sign, parse_unsigned)
        .map(|(negative, whole)| MeasurementSyntax::Integer { negative, whole })
        .parse_next(input)
}

/// Parse any accepted measurement shape
///
/// The longest shape is tried first so that `1 1/2` is not read as `1`.
pub fn parse_measurement_syntax(input: &mut &str) -> ModalResult<MeasurementSyntax> {
    alt((parse_mixed_number, parse_simple_fraction, parse_integer)).parse_next(input)
}
