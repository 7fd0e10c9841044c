use crate::error::ParseError;
use crate::parser::*;
use crate::types::*;

fn m(numer: i64, denom: i64) -> Measurement {
    Measurement::new(numer, denom).unwrap()
}

#[test]
fn test_plain_integer() {
    assert_eq!(parse_measurement("8").unwrap(), m(8, 1));
    assert_eq!(parse_measurement("0").unwrap(), m(0, 1));
    assert_eq!(parse_measurement("+12").unwrap(), m(12, 1));
    assert_eq!(parse_measurement("-3").unwrap(), m(-3, 1));
}

#[test]
fn test_simple_fraction() {
    assert_eq!(parse_measurement("1/2").unwrap(), m(1, 2));
    assert_eq!(parse_measurement("4/8").unwrap(), m(1, 2));
    assert_eq!(parse_measurement("17/4").unwrap(), m(17, 4));
    assert_eq!(parse_measurement("-3/16").unwrap(), m(-3, 16));
}

#[test]
fn test_mixed_number() {
    assert_eq!(parse_measurement("1 1/2").unwrap(), m(3, 2));
    assert_eq!(parse_measurement("8 9/16").unwrap(), m(137, 16));
    assert_eq!(parse_measurement("2   3/4").unwrap(), m(11, 4));
    assert_eq!(parse_measurement("2\t3/4").unwrap(), m(11, 4));
}

#[test]
fn test_mixed_number_sign_applies_to_whole_value() {
    assert_eq!(parse_measurement("-1 1/2").unwrap(), m(-3, 2));
    assert_eq!(parse_measurement("+1 1/2").unwrap(), m(3, 2));
}

#[test]
fn test_surrounding_whitespace_ignored() {
    assert_eq!(parse_measurement("  1 1/2\n").unwrap(), m(3, 2));
    assert_eq!(parse_measurement("\t8 ").unwrap(), m(8, 1));
}

#[test]
fn test_large_values_do_not_overflow() {
    let value = parse_measurement("123456789012345678901234567890 1/3").unwrap();
    assert_eq!(value.to_string(), "123456789012345678901234567890 1/3");
}

#[test]
fn test_zero_denominator() {
    assert_eq!(
        parse_measurement("1/0"),
        Err(ParseError::ZeroDenominator {
            input: "1/0".to_string()
        })
    );
    assert!(matches!(
        parse_measurement("3 1/0"),
        Err(ParseError::ZeroDenominator { .. })
    ));
}

#[test]
fn test_invalid_format() {
    for input in ["abc", "1/", "/2", "1 1", "1/2/3", "1.5", "1 -1/2", "1/-2", "- 1", "1 1/2 in"] {
        assert_eq!(
            parse_measurement(input),
            Err(ParseError::InvalidFormat {
                input: input.to_string()
            }),
            "input {input:?}"
        );
    }
}

#[test]
fn test_invalid_format_message_names_accepted_formats() {
    let err = parse_measurement("abc").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input. Please use format: '1/2' or '1 1/2'"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_measurement(""), Err(ParseError::Empty));
    assert_eq!(parse_measurement("   "), Err(ParseError::Empty));
    assert_eq!(parse_optional_measurement(""), Ok(None));
    assert_eq!(parse_optional_measurement(" \t"), Ok(None));
    assert_eq!(parse_optional_measurement("1/4"), Ok(Some(m(1, 4))));
    assert!(parse_optional_measurement("x").is_err());
}

#[test]
fn test_from_str() {
    let value: Measurement = "2 1/8".parse().unwrap();
    assert_eq!(value, m(17, 8));
    assert!("nope".parse::<Measurement>().is_err());
}

#[test]
fn test_syntax_shapes() {
    use crate::parser::combinators::parse_measurement_syntax;
    use winnow::Parser;

    let mut input = "1 1/2";
    let syntax = parse_measurement_syntax.parse_next(&mut input).unwrap();
    assert_eq!(
        syntax,
        MeasurementSyntax::Mixed {
            negative: false,
            whole: 1.into(),
            numer: 1.into(),
            denom: 2.into(),
        }
    );
    assert!(input.is_empty());

    let mut input = "1/2 rest";
    let syntax = parse_measurement_syntax.parse_next(&mut input).unwrap();
    assert!(matches!(syntax, MeasurementSyntax::Fraction { negative: false, .. }));
    assert_eq!(input, " rest");
}
