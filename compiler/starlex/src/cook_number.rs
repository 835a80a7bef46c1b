//! Numeric literal cooking (§4.E): strip the radix prefix, parse digits,
//! and record the handful of malformed-literal diagnostics the raw scanner
//! itself cannot detect (it only recognizes the *shape* of a numeric
//! literal, not whether a `0x`/`0o`/`0b` prefix is followed by at least one
//! valid digit).
//!
//! Follows `cooker::cook_number`'s prefix-strip-then-parse shape; the
//! arbitrary-precision widening and the three-way radix dispatch are this
//! grammar's own, via [`crate::parse_helpers`].

use crate::file_locations::FileLocations;
use crate::lex_error::LexError;
use crate::parse_helpers::{parse_float, parse_int_radix};
use crate::token::{IntValue, TokenValue};
use starlex_core::RawTag;

/// Cook a `RawTag::{Int,HexInt,OctInt,BinInt,Float}` token's text into its
/// decoded value.
pub(crate) fn cook(
    tag: RawTag,
    text: &str,
    start: u32,
    locations: &FileLocations,
    errors: &mut Vec<LexError>,
) -> TokenValue {
    match tag {
        RawTag::Int => {
            TokenValue::Int(parse_int_radix(text, 10).expect("raw scanner guarantees >=1 digit"))
        }
        RawTag::HexInt => cook_prefixed(text, start, 16, locations, errors, LexError::invalid_hex_literal),
        RawTag::OctInt => {
            let digits = strip_prefix(text);
            match parse_int_radix(digits, 8) {
                Some(value) => TokenValue::Int(value),
                // A bare "0o" with no following digits is treated the same as a
                // legacy bare "0": silently zero, no diagnostic.
                None => TokenValue::Int(IntValue::Small(0)),
            }
        }
        RawTag::BinInt => {
            cook_prefixed(text, start, 2, locations, errors, LexError::invalid_binary_literal)
        }
        RawTag::Float => cook_float(text, start, locations, errors),
        other => unreachable!("cook_number::cook called with non-numeric tag {other:?}"),
    }
}

fn strip_prefix(text: &str) -> &str {
    &text[2.min(text.len())..]
}

fn cook_prefixed(
    text: &str,
    start: u32,
    radix: u32,
    locations: &FileLocations,
    errors: &mut Vec<LexError>,
    on_invalid: fn(crate::file_locations::Location) -> LexError,
) -> TokenValue {
    let digits = strip_prefix(text);
    match parse_int_radix(digits, radix) {
        Some(value) => TokenValue::Int(value),
        None => {
            errors.push(on_invalid(locations.locate(start)));
            TokenValue::Int(IntValue::Small(0))
        }
    }
}

fn cook_float(
    text: &str,
    start: u32,
    locations: &FileLocations,
    errors: &mut Vec<LexError>,
) -> TokenValue {
    match parse_float(text) {
        Some(value) if value.is_infinite() => {
            errors.push(LexError::float_too_large(locations.locate(start)));
            TokenValue::Float(value)
        }
        Some(value) => TokenValue::Float(value),
        None => {
            errors.push(LexError::invalid_float_literal(locations.locate(start)));
            TokenValue::Float(0.0)
        }
    }
}

#[cfg(test)]
mod tests;
