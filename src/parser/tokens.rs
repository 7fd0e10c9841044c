use num_bigint::BigInt;
use winnow::ascii::{digit1, multispace1};
use winnow::combinator::{opt, separated_pair};
use winnow::error::ErrMode;
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

// Sign parser, true for a leading '-'
pub fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

// Digit run of any length, no sign
pub fn parse_unsigned(input: &mut &str) -> ModalResult<BigInt> {
    digit1
        .parse_to::<BigInt>()
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// numerator/denominator, both unsigned
pub fn parse_fraction_parts(input: &mut &str) -> ModalResult<(BigInt, BigInt)> {
    separated_pair(parse_unsigned, literal("/"), parse_unsigned).parse_next(input)
}

// Whitespace between the whole part and the fraction of a mixed number
pub fn parse_mixed_separator(input: &mut &str) -> ModalResult<()> {
    multispace1.void().parse_next(input)
}
