use frame_calc::{Measurement, format_measurement, format_optional, parse_measurement};

fn fmt(numer: i64, denom: i64) -> String {
    format_measurement(&Measurement::new(numer, denom).unwrap())
}

#[test]
fn test_whole_numbers() {
    assert_eq!(fmt(8, 1), "8");
    assert_eq!(fmt(0, 1), "0");
    assert_eq!(fmt(32, 16), "2");
    assert_eq!(fmt(-5, 1), "-5");
}

#[test]
fn test_mixed_numbers() {
    assert_eq!(fmt(17, 4), "4 1/4");
    assert_eq!(fmt(3, 2), "1 1/2");
    assert_eq!(fmt(137, 16), "8 9/16");
    assert_eq!(fmt(34, 16), "2 1/8");
    assert_eq!(fmt(-17, 4), "-4 1/4");
}

#[test]
fn test_proper_fractions() {
    assert_eq!(fmt(1, 2), "1/2");
    assert_eq!(fmt(2, 32), "1/16");
    assert_eq!(fmt(-1, 2), "-1/2");
}

#[test]
fn test_absent_value_is_empty() {
    assert_eq!(format_optional(None), "");
    assert_eq!(format_optional(Some(&Measurement::new(9, 16).unwrap())), "9/16");
}

#[test]
fn test_display_matches_formatter() {
    let value = Measurement::new(23, 8).unwrap();
    assert_eq!(value.to_string(), format_measurement(&value));
}

#[test]
fn test_parse_inverts_format() {
    for denom in [1, 2, 3, 4, 8, 16, 32, 64, 7] {
        for numer in -100..=100 {
            let value = Measurement::new(numer, denom).unwrap();
            let text = format_measurement(&value);
            assert_eq!(parse_measurement(&text).unwrap(), value, "round trip of {text:?}");
        }
    }
}
