use super::*;
use crate::file_locations::FileLocations;

fn run(tag: RawTag, text: &str) -> (TokenValue, Vec<LexError>) {
    let locations = FileLocations::new(text.as_bytes(), "test.star");
    let mut errors = Vec::new();
    let value = cook(tag, text, 0, &locations, &mut errors);
    (value, errors)
}

#[test]
fn decimal_int() {
    let (value, errors) = run(RawTag::Int, "123");
    assert_eq!(value, TokenValue::Int(IntValue::Small(123)));
    assert!(errors.is_empty());
}

#[test]
fn hex_int() {
    let (value, errors) = run(RawTag::HexInt, "0xFF");
    assert_eq!(value, TokenValue::Int(IntValue::Small(255)));
    assert!(errors.is_empty());
}

#[test]
fn binary_int() {
    let (value, errors) = run(RawTag::BinInt, "0b101");
    assert_eq!(value, TokenValue::Int(IntValue::Small(5)));
    assert!(errors.is_empty());
}

#[test]
fn octal_int() {
    let (value, errors) = run(RawTag::OctInt, "0o17");
    assert_eq!(value, TokenValue::Int(IntValue::Small(15)));
    assert!(errors.is_empty());
}

#[test]
fn empty_octal_digits_is_silently_zero() {
    let (value, errors) = run(RawTag::OctInt, "0o");
    assert_eq!(value, TokenValue::Int(IntValue::Small(0)));
    assert!(errors.is_empty());
}

#[test]
fn empty_hex_digits_errors() {
    let (value, errors) = run(RawTag::HexInt, "0x");
    assert_eq!(value, TokenValue::Int(IntValue::Small(0)));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("invalid hex literal"));
}

#[test]
fn empty_binary_digits_errors() {
    let (value, errors) = run(RawTag::BinInt, "0b");
    assert_eq!(value, TokenValue::Int(IntValue::Small(0)));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("invalid binary literal"));
}

#[test]
fn overflowing_decimal_widens_to_bigint() {
    let (value, errors) = run(RawTag::Int, "99999999999999999999999999999999");
    match value {
        TokenValue::Int(IntValue::Big(v)) => {
            assert_eq!(v.to_string(), "99999999999999999999999999999999");
        }
        other => panic!("expected Big, got {other:?}"),
    }
    assert!(errors.is_empty());
}

#[test]
fn float_parses() {
    let (value, errors) = run(RawTag::Float, "3.25");
    assert_eq!(value, TokenValue::Float(3.25));
    assert!(errors.is_empty());
}

#[test]
fn float_too_large_errors_but_keeps_infinite_value() {
    let (value, errors) = run(RawTag::Float, "1e400");
    assert_eq!(value, TokenValue::Float(f64::INFINITY));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("too large"));
}
