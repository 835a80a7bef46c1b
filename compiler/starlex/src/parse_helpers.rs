//! Numeric parsing helpers for the cooking layer.
//!
//! The grammar (§4.E) has no underscore-separated numeric literals, so
//! unlike `parse_int_skip_underscores` these parsers run straight over the
//! digit text the raw scanner already isolated. Overflow
//! widens to [`num_bigint::BigUint`] rather than failing, per the
//! arbitrary-precision `IntValue` requirement.

use crate::token::IntValue;
use num_bigint::BigUint;

/// Parse `digits` (with the `0x`/`0o`/`0b` prefix already stripped, or plain
/// decimal digits) in the given `radix`, widening to [`BigUint`] on overflow.
///
/// Returns `None` only when `digits` is empty or contains a byte that isn't
/// a valid digit in `radix` — the raw scanner only ever hands this function
/// text it has already validated as digit-shaped, so `None` in practice
/// means "zero digits" (an empty base-prefixed literal).
#[must_use]
pub(crate) fn parse_int_radix(digits: &str, radix: u32) -> Option<IntValue> {
    if digits.is_empty() {
        return None;
    }

    let mut small: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        match small
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(next) => small = next,
            None => return BigUint::parse_bytes(digits.as_bytes(), radix).map(IntValue::Big),
        }
    }
    Some(IntValue::Small(small))
}

/// Parse a decimal float literal (already validated digit/`.`/exponent
/// shape by the raw scanner).
#[must_use]
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.parse().ok()
}
