//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, decode escapes, parse numeric values, or track indentation and
//! bracket depth — those are deferred to the cooking layer (`starlex`).
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// The scanner's current cursor, for callers that need to resume
    /// scanning elsewhere (e.g. the cooking layer recreating a positioned
    /// cursor for each `next_token` call).
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'r' | b'R' => self.r_prefix(start),
            b'b' | b'B' => self.b_prefix(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'.' | b'0'..=b'9' => self.number(start),
            b'"' => self.string_literal(start, b'"', false, false),
            b'\'' => self.string_literal(start, b'\'', false, false),
            b'#' => self.hash(start),
            b'\\' => self.backslash(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.star(start),
            b'/' => self.slash(start),
            b'%' => self.percent(start),
            b'~' => self.single(start, RawTag::Tilde),
            b'&' => self.amp(start),
            b'^' => self.caret(start),
            b'|' => self.pipe(start),
            b'=' => self.equals(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'(' => self.single(start, RawTag::LParen),
            b')' => self.single(start, RawTag::RParen),
            b'[' => self.single(start, RawTag::LBracket),
            b']' => self.single(start, RawTag::RBracket),
            b'{' => self.single(start, RawTag::LBrace),
            b'}' => self.single(start, RawTag::RBrace),
            b':' => self.single(start, RawTag::Colon),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'!' => self.bang(start),
            // Control characters (excluding \t, \n, \r), DEL, and non-ASCII bytes.
            1..=8 | 11..=12 | 14..=31 | 127..=255 => self.invalid_byte(start),
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte — advance past it. The integration layer
            // skips InteriorNull tokens since SourceBuffer already reported
            // these via encoding_issues() with more specific diagnostics.
            let start = self.cursor.pos();
            self.cursor.advance();
            RawToken {
                tag: RawTag::InteriorNull,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // CRLF normalization: \r\n -> single Newline with len=2
            self.cursor.advance();
            RawToken {
                tag: RawTag::Newline,
                len: self.cursor.pos() - start,
            }
        } else {
            // Lone \r: consumed silently, contributes nothing (per indentation rules).
            RawToken {
                tag: RawTag::Whitespace,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::Newline,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn hash(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '#'
        self.cursor.eat_until_newline_or_eof();
        RawToken {
            tag: RawTag::LineComment,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Line continuation ─────────────────────────────────────────

    fn backslash(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\'
        match self.cursor.current() {
            b'\n' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::LineContinuation,
                    len: self.cursor.pos() - start,
                }
            }
            b'\r' if self.cursor.peek() == b'\n' => {
                self.cursor.advance_n(2);
                RawToken {
                    tag: RawTag::LineContinuation,
                    len: self.cursor.pos() - start,
                }
            }
            _ => RawToken {
                tag: RawTag::InvalidByte,
                len: self.cursor.pos() - start,
            },
        }
    }

    // ─── Identifiers & string prefixes ─────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first byte (already validated)
        self.cursor.eat_while(is_ident_continue);
        RawToken {
            tag: RawTag::Ident,
            len: self.cursor.pos() - start,
        }
    }

    /// Dispatch on a leading `r`/`R`: `r"…"`, `r'…'`, `rb"…"`, `rb'…'`, or a
    /// plain identifier starting with `r`.
    fn r_prefix(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'"' => {
                self.cursor.advance_n(2);
                self.scan_literal_body(start, b'"', true, false)
            }
            b'\'' => {
                self.cursor.advance_n(2);
                self.scan_literal_body(start, b'\'', true, false)
            }
            b'b' | b'B' if matches!(self.cursor.peek2(), b'"' | b'\'') => {
                let delim = self.cursor.peek2();
                self.cursor.advance_n(3);
                self.scan_literal_body(start, delim, true, true)
            }
            _ => self.identifier(start),
        }
    }

    /// Dispatch on a leading `b`/`B`: `b"…"`, `b'…'`, or a plain identifier
    /// starting with `b`.
    fn b_prefix(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'"' => {
                self.cursor.advance_n(2);
                self.scan_literal_body(start, b'"', false, true)
            }
            b'\'' => {
                self.cursor.advance_n(2);
                self.scan_literal_body(start, b'\'', false, true)
            }
            _ => self.identifier(start),
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '+'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::PlusEq,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Plus,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn minus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '-'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::MinusEq,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Minus,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn star(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '*'
        match self.cursor.current() {
            b'*' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::StarStar,
                    len: self.cursor.pos() - start,
                }
            }
            b'=' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::StarEq,
                    len: self.cursor.pos() - start,
                }
            }
            _ => RawToken {
                tag: RawTag::Star,
                len: self.cursor.pos() - start,
            },
        }
    }

    fn slash(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    RawToken {
                        tag: RawTag::SlashSlashEq,
                        len: self.cursor.pos() - start,
                    }
                } else {
                    RawToken {
                        tag: RawTag::SlashSlash,
                        len: self.cursor.pos() - start,
                    }
                }
            }
            b'=' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::SlashEq,
                    len: self.cursor.pos() - start,
                }
            }
            _ => RawToken {
                tag: RawTag::Slash,
                len: self.cursor.pos() - start,
            },
        }
    }

    fn percent(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '%'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::PercentEq,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Percent,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn caret(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '^'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::CaretEq,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Caret,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn amp(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '&'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::AmpEq,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Amp,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '|'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::PipeEq,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Pipe,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn equals(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '='
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::EqEq,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Equals,
                len: self.cursor.pos() - start,
            }
        }
    }

    /// `!` has no standalone token in this grammar — only `!=` is valid.
    /// A lone `!` is an invalid byte.
    fn bang(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            RawToken {
                tag: RawTag::NotEq,
                len: self.cursor.pos() - start,
            }
        } else {
            self.cursor.advance();
            RawToken {
                tag: RawTag::InvalidByte,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::LessEq,
                    len: self.cursor.pos() - start,
                }
            }
            b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    RawToken {
                        tag: RawTag::LessLessEq,
                        len: self.cursor.pos() - start,
                    }
                } else {
                    RawToken {
                        tag: RawTag::LessLess,
                        len: self.cursor.pos() - start,
                    }
                }
            }
            _ => RawToken {
                tag: RawTag::Less,
                len: self.cursor.pos() - start,
            },
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '>'
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::GreaterEq,
                    len: self.cursor.pos() - start,
                }
            }
            b'>' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    RawToken {
                        tag: RawTag::GreaterGreaterEq,
                        len: self.cursor.pos() - start,
                    }
                } else {
                    RawToken {
                        tag: RawTag::GreaterGreater,
                        len: self.cursor.pos() - start,
                    }
                }
            }
            _ => RawToken {
                tag: RawTag::Greater,
                len: self.cursor.pos() - start,
            },
        }
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'.' {
            // A `.` not followed by a digit is the DOT token.
            if !self.cursor.peek().is_ascii_digit() {
                return self.single(start, RawTag::Dot);
            }
            self.cursor.advance(); // consume '.'
            self.eat_decimal_digits();
            self.eat_exponent();
            return RawToken {
                tag: RawTag::Float,
                len: self.cursor.pos() - start,
            };
        }

        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' && matches!(self.cursor.current(), b'x' | b'X') {
            return self.hex_number(start);
        }
        if first == b'0' && matches!(self.cursor.current(), b'o' | b'O') {
            return self.oct_number(start);
        }
        if first == b'0' && matches!(self.cursor.current(), b'b' | b'B') {
            return self.bin_number(start);
        }

        self.eat_decimal_digits();

        if self.cursor.current() == b'.' && self.cursor.peek() != b'.' {
            // A trailing dot promotes to float even without following digits
            // (e.g. `1.`); the `..` range case does not arise in this grammar
            // but a following `.` is excluded defensively to mirror §4.E.
            self.cursor.advance();
            self.eat_decimal_digits();
            self.eat_exponent();
            return RawToken {
                tag: RawTag::Float,
                len: self.cursor.pos() - start,
            };
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            self.eat_exponent();
            return RawToken {
                tag: RawTag::Float,
                len: self.cursor.pos() - start,
            };
        }

        RawToken {
            tag: RawTag::Int,
            len: self.cursor.pos() - start,
        }
    }

    fn hex_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume 'x' or 'X'
        self.cursor.eat_while(u8::is_ascii_hexdigit);
        RawToken {
            tag: RawTag::HexInt,
            len: self.cursor.pos() - start,
        }
    }

    fn oct_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume 'o' or 'O'
        self.cursor.eat_while(|b| matches!(b, b'0'..=b'7'));
        RawToken {
            tag: RawTag::OctInt,
            len: self.cursor.pos() - start,
        }
    }

    fn bin_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume 'b' or 'B'
        self.cursor.eat_while(|b| b == b'0' || b == b'1');
        RawToken {
            tag: RawTag::BinInt,
            len: self.cursor.pos() - start,
        }
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }

    fn eat_exponent(&mut self) {
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
        }
    }

    // ─── String & byte literals ────────────────────────────────────

    /// Entry point for an unprefixed string/byte literal: the opening
    /// delimiter has not yet been consumed.
    fn string_literal(&mut self, start: u32, delim: u8, is_raw: bool, is_byte: bool) -> RawToken {
        self.cursor.advance(); // consume opening delimiter
        self.scan_literal_body(start, delim, is_raw, is_byte)
    }

    /// Entry point once the opening delimiter has already been consumed
    /// (used by the `r`/`b` prefix dispatch). Detects triple-quoting and
    /// dispatches to the matching scan loop.
    fn scan_literal_body(&mut self, start: u32, delim: u8, is_raw: bool, is_byte: bool) -> RawToken {
        let result_tag = if is_byte { RawTag::Byte } else { RawTag::String };
        let unterminated_tag = if is_byte {
            RawTag::UnterminatedByte
        } else {
            RawTag::UnterminatedString
        };

        if self.cursor.current() == delim && self.cursor.peek() == delim {
            self.cursor.advance_n(2); // consume the second and third delimiter bytes
            self.scan_triple_quoted(start, delim, is_raw, result_tag, unterminated_tag)
        } else {
            self.scan_single_quoted(start, delim, is_raw, result_tag, unterminated_tag)
        }
    }

    fn scan_single_quoted(
        &mut self,
        start: u32,
        delim: u8,
        is_raw: bool,
        result_tag: RawTag,
        unterminated_tag: RawTag,
    ) -> RawToken {
        loop {
            let b = self.cursor.skip_to_delim(delim);
            match b {
                found if found == delim => {
                    self.cursor.advance(); // consume closing delimiter
                    return RawToken {
                        tag: result_tag,
                        len: self.cursor.pos() - start,
                    };
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    // A raw string's fast skip still needs to step past the
                    // escaped byte so `\"` doesn't look like a terminator.
                    let _ = is_raw;
                    if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
                        self.cursor.advance_n(2); // \<CR><LF> line continuation
                    } else if self.cursor.current() != 0 || !self.cursor.is_eof() {
                        self.cursor.advance();
                    }
                }
                b'\n' | b'\r' => {
                    return RawToken {
                        tag: unterminated_tag,
                        len: self.cursor.pos() - start,
                    };
                }
                0 => {
                    if self.cursor.is_eof() {
                        return RawToken {
                            tag: unterminated_tag,
                            len: self.cursor.pos() - start,
                        };
                    }
                    // Interior null — advance past it; the cooking layer reports it.
                    self.cursor.advance();
                }
                _ => unreachable!("skip_to_delim returned unexpected byte"),
            }
        }
    }

    fn scan_triple_quoted(
        &mut self,
        start: u32,
        delim: u8,
        is_raw: bool,
        result_tag: RawTag,
        unterminated_tag: RawTag,
    ) -> RawToken {
        loop {
            let b = self.cursor.skip_to_delim(delim);
            match b {
                found if found == delim => {
                    // Only three consecutive delimiter bytes terminate.
                    if self.cursor.peek() == delim && self.cursor.peek2() == delim {
                        self.cursor.advance_n(3);
                        return RawToken {
                            tag: result_tag,
                            len: self.cursor.pos() - start,
                        };
                    }
                    // A lone or doubled delimiter is literal content.
                    self.cursor.advance();
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    let _ = is_raw;
                    if self.cursor.current() != 0 || !self.cursor.is_eof() {
                        self.cursor.advance();
                    }
                }
                b'\n' | b'\r' => {
                    // Raw newlines inside triple-quoted literals do not terminate.
                    self.cursor.advance();
                }
                0 => {
                    if self.cursor.is_eof() {
                        return RawToken {
                            tag: unterminated_tag,
                            len: self.cursor.pos() - start,
                        };
                    }
                    self.cursor.advance();
                }
                _ => unreachable!("skip_to_delim returned unexpected byte"),
            }
        }
    }

    // ─── Error tokens ──────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::InvalidByte,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// Table lookup replaces the multi-range `matches!` with a single indexed read.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming/iterator access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
