//! String/byte literal cooking (§4.D): prefix/delimiter parsing and escape
//! decoding.
//!
//! The raw scanner (`starlex_core::raw_scanner`) only classifies a literal's
//! *boundaries* — it does not record whether the `r` prefix was present
//! (see `RawTag::String`'s doc comment), so this module re-examines the
//! first 1-2 bytes of the token's own text to recover that before decoding.
//! Follows `ori_lexer_core::raw_scanner`'s `memchr3`-based delimiter
//! seeking for the byte-scanning shape, and `ori_lexer::cook_escape`'s
//! fast-path/escape-path split for the cooking-layer structure — the
//! escape grammar itself, the STRING/BYTE divergence, and every message
//! template are this grammar's own (the `\n \r \t \\ \" \0` escape set
//! `ori_lexer::cook_escape` handles has no octal/hex/unicode/raw forms to
//! generalize from).

use crate::file_locations::FileLocations;
use crate::lex_error::LexError;
use crate::token::TokenValue;
use starlex_core::{Cursor, RawTag};

/// Cook a `RawTag::{String,Byte,UnterminatedString,UnterminatedByte}` token
/// into its decoded value. `raw` is the full token text (prefix, quotes,
/// and content); `start` is its offset in the source buffer.
pub(crate) fn cook(
    tag: RawTag,
    raw: &[u8],
    start: u32,
    restrict_string_escapes: bool,
    locations: &FileLocations,
    errors: &mut Vec<LexError>,
) -> TokenValue {
    let is_byte = matches!(tag, RawTag::Byte | RawTag::UnterminatedByte);
    let terminated = matches!(tag, RawTag::String | RawTag::Byte);

    let prefix_len = raw.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    let is_raw = raw[..prefix_len].iter().any(|b| matches!(b, b'r' | b'R'));
    let delim = raw[prefix_len];
    let triple =
        raw.get(prefix_len + 1) == Some(&delim) && raw.get(prefix_len + 2) == Some(&delim);
    let quote_len = if triple { 3 } else { 1 };
    let content_start_rel = prefix_len + quote_len;
    let content_end_rel = if terminated {
        raw.len() - quote_len
    } else {
        raw.len()
    };
    let content = &raw[content_start_rel..content_end_rel];
    let content_start_abs = start + content_start_rel as u32;

    if !terminated {
        let end = start + raw.len() as u32;
        let kind = if is_byte { "byte" } else { "string" };
        errors.push(LexError::unclosed(locations.locate(end), kind));
    }

    let decoded = decode(
        content,
        content_start_abs,
        is_raw,
        is_byte,
        restrict_string_escapes,
        locations,
        errors,
    );
    if is_byte {
        TokenValue::Bytes(decoded)
    } else {
        TokenValue::Str(
            String::from_utf8(decoded).expect("decoded STRING content is valid UTF-8 by construction"),
        )
    }
}

/// Decode the escape-aware content between a literal's delimiters.
///
/// `content_start` is `content`'s offset in the source buffer, used only for
/// error locations.
fn decode(
    content: &[u8],
    content_start: u32,
    is_raw: bool,
    is_byte: bool,
    restrict_string_escapes: bool,
    locations: &FileLocations,
    errors: &mut Vec<LexError>,
) -> Vec<u8> {
    // Fast path: no backslash and no bare CR means every byte (and every CR
    // normalization) is a no-op, so the raw slice already equals the decoded
    // value.
    if !content.contains(&b'\\') && !content.contains(&b'\r') {
        return content.to_vec();
    }

    let mut out = Vec::with_capacity(content.len());
    let mut i = 0usize;
    while i < content.len() {
        let b = content[i];

        // A bare CR (not part of a backslash escape) is line-ending
        // normalization, not an escape: CR alone is dropped, CRLF collapses
        // to the LF that the next iteration appends as plain content.
        if b == b'\r' {
            i += 1;
            continue;
        }

        if b != b'\\' {
            let width = char_width(b);
            out.extend_from_slice(&content[i..(i + width).min(content.len())]);
            i += width;
            continue;
        }

        let Some(&next) = content.get(i + 1) else {
            out.push(b'\\');
            i += 1;
            continue;
        };

        if is_raw {
            i = decode_raw_escape(content, i, next, &mut out);
            continue;
        }

        let at = locations.locate(content_start + i as u32);
        i = decode_plain_escape(
            content,
            i,
            next,
            at,
            is_byte,
            restrict_string_escapes,
            &mut out,
            errors,
        );
    }
    out
}

/// Raw-string escape handling: backslash and the following character are
/// preserved verbatim, except a line ending after the backslash normalizes
/// to `\n` (raw strings never end a line with a lone `\`).
fn decode_raw_escape(content: &[u8], i: usize, next: u8, out: &mut Vec<u8>) -> usize {
    match next {
        b'\r' => {
            out.push(b'\\');
            out.push(b'\n');
            i + if content.get(i + 2) == Some(&b'\n') { 3 } else { 2 }
        }
        b'\n' => {
            out.push(b'\\');
            out.push(b'\n');
            i + 2
        }
        _ => {
            out.push(b'\\');
            let (_, width) = char_at(content, i + 1);
            out.extend_from_slice(&content[i + 1..i + 1 + width]);
            i + 1 + width
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn decode_plain_escape(
    content: &[u8],
    i: usize,
    next: u8,
    at: crate::file_locations::Location,
    is_byte: bool,
    restrict_string_escapes: bool,
    out: &mut Vec<u8>,
    errors: &mut Vec<LexError>,
) -> usize {
    match next {
        b'\n' => i + 2,
        b'\r' => i + if content.get(i + 2) == Some(&b'\n') { 3 } else { 2 },
        b'n' => {
            out.push(b'\n');
            i + 2
        }
        b'r' => {
            out.push(b'\r');
            i + 2
        }
        b't' => {
            out.push(b'\t');
            i + 2
        }
        b'\\' => {
            out.push(b'\\');
            i + 2
        }
        b'\'' => {
            out.push(b'\'');
            i + 2
        }
        b'"' => {
            out.push(b'"');
            i + 2
        }
        b'a' => {
            out.push(0x07);
            i + 2
        }
        b'b' => {
            out.push(0x08);
            i + 2
        }
        b'f' => {
            out.push(0x0C);
            i + 2
        }
        b'v' => {
            out.push(0x0B);
            i + 2
        }
        b'0'..=b'7' => {
            let (value, consumed) = read_octal(content, i + 1);
            if value > 0xFF {
                errors.push(LexError::octal_escape_out_of_range(at));
                if is_byte {
                    out.push((value & 0xFF) as u8);
                } else {
                    push_replacement(out);
                }
            } else if !is_byte && value > 127 {
                errors.push(LexError::non_ascii_byte_escape_in_string(at, value as u8));
                push_replacement(out);
            } else {
                out.push(value as u8);
            }
            i + 1 + consumed
        }
        b'x' => {
            let (parsed, consumed) = read_hex(content, i + 2, 2);
            match parsed {
                Some(value) => {
                    if !is_byte && value > 127 {
                        errors.push(LexError::non_ascii_byte_escape_in_string(at, value as u8));
                        push_replacement(out);
                    } else {
                        out.push(value as u8);
                    }
                }
                None => {
                    errors.push(LexError::invalid_hex_escape(
                        at,
                        tail_str(content, i + 2, consumed),
                    ));
                    push_replacement(out);
                }
            }
            i + 2 + consumed
        }
        b'u' | b'U' => {
            let width = if next == b'u' { 4 } else { 8 };
            let (parsed, consumed) = read_hex(content, i + 2, width);
            match parsed {
                Some(cp) => {
                    if cp > 0x0010_FFFF {
                        errors.push(LexError::code_point_too_large(at));
                        push_replacement(out);
                    } else if (0xD800..=0xDFFF).contains(&cp) {
                        errors.push(LexError::surrogate_code_point(at));
                        push_replacement(out);
                    } else {
                        let ch = char::from_u32(cp).expect("range validated above");
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                    }
                }
                None => {
                    errors.push(LexError::invalid_unicode_escape(
                        at,
                        char::from(next),
                        tail_str(content, i + 2, consumed),
                    ));
                    push_replacement(out);
                }
            }
            i + 2 + consumed
        }
        b'N' => {
            errors.push(LexError::reserved_escape_n(at));
            out.push(b'\\');
            out.push(b'N');
            i + 2
        }
        _ => {
            if restrict_string_escapes {
                errors.push(LexError::invalid_escape_sequence(at, char::from(next)));
            }
            out.push(b'\\');
            let (_, width) = char_at(content, i + 1);
            out.extend_from_slice(&content[i + 1..i + 1 + width]);
            i + 1 + width
        }
    }
}

fn read_octal(content: &[u8], start: usize) -> (u32, usize) {
    let mut value = 0u32;
    let mut n = 0;
    while n < 3 {
        match content.get(start + n) {
            Some(&b) if (b'0'..=b'7').contains(&b) => {
                value = value * 8 + u32::from(b - b'0');
                n += 1;
            }
            _ => break,
        }
    }
    (value, n)
}

fn read_hex(content: &[u8], start: usize, max: usize) -> (Option<u32>, usize) {
    let mut value = 0u32;
    let mut n = 0;
    while n < max {
        match content.get(start + n).and_then(|&b| char::from(b).to_digit(16)) {
            Some(d) => {
                value = value * 16 + d;
                n += 1;
            }
            None => break,
        }
    }
    if n == max {
        (Some(value), n)
    } else {
        (None, n)
    }
}

fn tail_str(content: &[u8], start: usize, len: usize) -> &str {
    content
        .get(start..start + len)
        .and_then(|s| std::str::from_utf8(s).ok())
        .unwrap_or("")
}

fn push_replacement(out: &mut Vec<u8>) {
    out.extend_from_slice("\u{FFFD}".as_bytes());
}

fn char_width(b: u8) -> usize {
    Cursor::utf8_char_width(b) as usize
}

fn char_at(content: &[u8], i: usize) -> (char, usize) {
    let width = char_width(content[i]).min(content.len() - i);
    match std::str::from_utf8(&content[i..i + width]) {
        Ok(s) => (s.chars().next().unwrap_or('\u{FFFD}'), width),
        Err(_) => ('\u{FFFD}', 1),
    }
}

#[cfg(test)]
mod tests;
