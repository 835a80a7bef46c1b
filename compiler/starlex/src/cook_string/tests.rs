use super::*;
use crate::file_locations::FileLocations;
use starlex_core::RawTag;

fn run(raw: &[u8], tag: RawTag) -> (TokenValue, Vec<LexError>) {
    let locations = FileLocations::new(raw, "test.star");
    let mut errors = Vec::new();
    let value = cook(tag, raw, 0, true, &locations, &mut errors);
    (value, errors)
}

#[test]
fn hex_escape_decodes_byte() {
    let (value, errors) = run(br#""a\x41b""#, RawTag::String);
    assert_eq!(value, TokenValue::Str("aAb".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn raw_string_keeps_backslash_literal() {
    let (value, errors) = run(br#"r"a\nb""#, RawTag::String);
    assert_eq!(value, TokenValue::Str("a\\nb".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn octal_overflow_errors_and_substitutes() {
    let (value, errors) = run(br#""\400""#, RawTag::String);
    assert_eq!(value, TokenValue::Str("\u{FFFD}".to_owned()));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("octal escape"));
}

#[test]
fn unterminated_string_reports_unclosed_and_keeps_partial_value() {
    let (value, errors) = run(br#""abc"#, RawTag::UnterminatedString);
    assert_eq!(value, TokenValue::Str("abc".to_owned()));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unclosed string"));
}

#[test]
fn byte_literal_keeps_raw_high_byte() {
    let (value, errors) = run(br#"b"\xff""#, RawTag::Byte);
    assert_eq!(value, TokenValue::Bytes(vec![0xff]));
    assert!(errors.is_empty());
}

#[test]
fn non_ascii_byte_escape_in_string_is_replaced() {
    let (value, errors) = run(br#""\xff""#, RawTag::String);
    assert_eq!(value, TokenValue::Str("\u{FFFD}".to_owned()));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("non-ASCII byte escape"));
}

#[test]
fn unicode_escape_decodes_code_point() {
    let (value, errors) = run(b"\"\\u00e9\"", RawTag::String);
    assert_eq!(value, TokenValue::Str("\u{e9}".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn verbatim_utf8_content_passes_through() {
    let (value, errors) = run("\"é\"".as_bytes(), RawTag::String);
    assert_eq!(value, TokenValue::Str("é".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn surrogate_code_point_errors_and_substitutes() {
    let (value, errors) = run(br#""\ud800""#, RawTag::String);
    assert_eq!(value, TokenValue::Str("\u{FFFD}".to_owned()));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("surrogate"));
}

#[test]
fn triple_quoted_string_keeps_embedded_newline() {
    let (value, errors) = run(b"\"\"\"a\nb\"\"\"", RawTag::String);
    assert_eq!(value, TokenValue::Str("a\nb".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn crlf_is_normalized_to_lf() {
    let (value, errors) = run(b"\"a\r\nb\"", RawTag::String);
    assert_eq!(value, TokenValue::Str("a\nb".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn backslash_newline_is_line_continuation() {
    let (value, errors) = run(b"\"a\\\nb\"", RawTag::String);
    assert_eq!(value, TokenValue::Str("ab".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn reserved_n_escape_is_kept_literal_with_error() {
    let (value, errors) = run(br#""\N{DEGREE SIGN}""#, RawTag::String);
    assert_eq!(value, TokenValue::Str("\\N{DEGREE SIGN}".to_owned()));
    assert_eq!(errors.len(), 1);
}

#[test]
fn unknown_escape_is_kept_literal_and_warns() {
    let (value, errors) = run(br#""\q""#, RawTag::String);
    assert_eq!(value, TokenValue::Str("\\q".to_owned()));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("invalid escape sequence"));
}
