//! Lexer for a Starlark-family configuration/scripting dialect.
//!
//! `starlex` is the cooking layer atop `starlex_core`'s zero-dependency raw
//! byte scanner: it resolves keywords, decodes string/byte escapes, parses
//! numeric literals, and drives indentation/bracket-depth bookkeeping to
//! produce the closed [`TokenKind`] set a parser consumes. See
//! [`Lexer::next_token`] for the per-call state machine.

mod comments;
mod cook_number;
mod cook_string;
mod file_locations;
mod indent;
mod interner;
mod keywords;
mod lex_error;
mod parse_helpers;
mod span;
mod token;

pub use comments::Comment;
pub use file_locations::{FileLocations, Location};
pub use interner::{Name, StringInterner};
pub use lex_error::LexError;
pub use span::{Span, SpanError};
pub use token::{IntValue, Token, TokenKind, TokenValue};

use indent::IndentEngine;
use starlex_core::{Cursor, RawScanner, RawTag, SourceBuffer};
use std::sync::Arc;

/// Lexer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Emit a diagnostic for any `\X` escape not in the fixed escape table
    /// (the two characters are still kept literally either way). Defaults
    /// to `true`, matching the grammar's own default.
    pub restrict_string_escapes: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            restrict_string_escapes: true,
        }
    }
}

/// One token at a time, accumulating diagnostics into a caller-owned list.
///
/// Single-use: construct one `Lexer` per source file and call
/// [`next_token`](Lexer::next_token) until it returns `TokenKind::Eof`
/// (which it then returns forever, per the defensive post-EOF contract).
pub struct Lexer<'a> {
    source: SourceBuffer,
    locations: FileLocations,
    pos: u32,
    options: LexerOptions,
    comments: Vec<Comment>,
    indent: IndentEngine,
    open_paren_depth: u32,
    check_indentation: bool,
    dents: i32,
    errors: &'a mut Vec<LexError>,
    /// Whether the EOF-arrival decision (emit a synthetic trailing NEWLINE
    /// or fall straight through to dent-draining) has already been made.
    /// EOF is detected on every call once reached, but that decision is
    /// made exactly once.
    eof_handled: bool,
    /// Kind of the last token actually returned, tracked only to answer
    /// "did the source already end with a NEWLINE" at the EOF-arrival
    /// decision point.
    prev_was_newline: bool,
    /// Set once the real `Eof` token has been returned; every later call
    /// short-circuits straight back to it.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Construct a lexer over `buffer`, attributing diagnostics to `file`.
    ///
    /// `buffer` need not be valid UTF-8: invalid sequences are replaced with
    /// U+FFFD (matching `SourceBuffer`'s own text-oriented contract), and
    /// `errors` records interior-null/BOM issues `SourceBuffer` detects at
    /// construction.
    #[must_use]
    pub fn new(
        buffer: &[u8],
        file: impl Into<Arc<str>>,
        options: LexerOptions,
        errors: &'a mut Vec<LexError>,
    ) -> Lexer<'a> {
        let text = String::from_utf8_lossy(buffer);
        let source = SourceBuffer::new(&text);
        let locations = FileLocations::new(source.as_bytes(), file);

        for issue in source.encoding_issues() {
            errors.push(LexError::encoding_issue(
                locations.locate(issue.pos),
                describe_encoding_issue(issue.kind),
            ));
        }

        tracing::debug!(file = %locations.file(), len = source.len(), "lexer constructed");

        Lexer {
            source,
            locations,
            pos: 0,
            options,
            comments: Vec::new(),
            indent: IndentEngine::new(),
            open_paren_depth: 0,
            check_indentation: true,
            dents: 0,
            errors,
            eof_handled: false,
            prev_was_newline: false,
            finished: false,
        }
    }

    /// Comments collected so far, in source order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Produce the next token.
    ///
    /// Order per call: drain any pending indentation measurement, decide
    /// whether EOF has just been reached (and if so, whether a synthetic
    /// trailing NEWLINE is still owed), drain one pending INDENT/OUTDENT,
    /// then dispatch on the next raw token.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn next_token(&mut self) -> Token {
        debug_assert!(
            !self.check_indentation || self.open_paren_depth == 0,
            "indentation is only ever (re-)measured outside brackets"
        );

        if self.check_indentation {
            self.check_indentation = false;
            let bytes = self.source.as_bytes();
            let delta = self.indent.measure(
                bytes,
                &mut self.pos,
                &self.locations,
                &mut self.comments,
                self.errors,
            );
            self.dents += delta;
        }

        if !self.eof_handled && self.at_eof() {
            if let Some(token) = self.handle_eof_arrival() {
                return token;
            }
        }

        if let Some(token) = self.drain_dent() {
            return token;
        }

        if self.finished {
            return Token::synthetic(TokenKind::Eof, self.pos);
        }

        if self.at_eof() {
            self.finished = true;
            return self.finish(Token::synthetic(TokenKind::Eof, self.pos));
        }

        self.scan_next()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Make the one-shot EOF-arrival decision: if the last token actually
    /// returned wasn't a NEWLINE, the source is missing its trailing one —
    /// manufacture it (and re-arm indentation draining for the next call)
    /// before falling through to dent-draining or the real EOF token.
    fn handle_eof_arrival(&mut self) -> Option<Token> {
        self.eof_handled = true;
        if self.prev_was_newline {
            return None;
        }
        if self.open_paren_depth == 0 {
            self.check_indentation = true;
        }
        Some(self.finish(Token::synthetic(TokenKind::Newline, self.pos)))
    }

    /// Emit one pending INDENT/OUTDENT if `dents != 0`, moving it one step
    /// toward zero.
    fn drain_dent(&mut self) -> Option<Token> {
        if self.dents > 0 {
            self.dents -= 1;
            Some(self.finish(Token::synthetic(TokenKind::Indent, self.pos)))
        } else if self.dents < 0 {
            self.dents += 1;
            Some(self.finish(Token::synthetic(TokenKind::Outdent, self.pos)))
        } else {
            None
        }
    }

    /// Reconstruct a cursor positioned at `self.pos` (the raw scanner has
    /// no persistent-cursor API of its own — see `starlex_core::Cursor`'s
    /// `pub(crate)` constructor) and scan/cook the next significant token,
    /// skipping trivia and handling NEWLINE/EOF raw tokens discovered
    /// mid-loop exactly as at the top of [`Self::next_token`].
    fn scan_next(&mut self) -> Token {
        loop {
            let mut cursor = self.source.cursor();
            cursor.advance_n(self.pos);
            let mut scanner = RawScanner::new(cursor);
            let start = self.pos;
            let raw = scanner.next_token();
            self.pos = scanner.cursor().pos();

            match raw.tag {
                RawTag::Whitespace | RawTag::LineContinuation | RawTag::InteriorNull => continue,
                RawTag::LineComment => {
                    let text = self.slice(start, self.pos).to_owned();
                    self.comments.push(Comment {
                        location: self.locations.locate(start),
                        start,
                        text,
                    });
                    continue;
                }
                RawTag::Newline => {
                    if self.open_paren_depth > 0 {
                        continue;
                    }
                    self.check_indentation = true;
                    return self.finish(Token::new(
                        TokenKind::Newline,
                        Span::new(start, self.pos),
                        None,
                    ));
                }
                RawTag::Eof => {
                    if !self.eof_handled {
                        if let Some(token) = self.handle_eof_arrival() {
                            return token;
                        }
                    }
                    self.finished = true;
                    return self.finish(Token::synthetic(TokenKind::Eof, self.pos));
                }
                RawTag::InvalidByte => return self.finish(self.cook_invalid_byte(start)),
                other => return self.finish(self.cook(other, start)),
            }
        }
    }

    fn slice(&self, start: u32, end: u32) -> &str {
        slice_str(self.source.as_bytes(), start, end)
    }

    /// Cook every raw tag that isn't trivia, NEWLINE, EOF, or `InvalidByte`
    /// (those are handled directly in [`Self::scan_next`]).
    fn cook(&mut self, tag: RawTag, start: u32) -> Token {
        let end = self.pos;
        let span = Span::new(start, end);
        // Borrow only the `source` field (not all of `self`) so `text` can
        // stay alive alongside the later `self.errors`/`self.locations`
        // borrows the match arms below need.
        let text = slice_str(self.source.as_bytes(), start, end);

        match tag {
            RawTag::Ident => {
                let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
                let value = (kind == TokenKind::Identifier)
                    .then(|| TokenValue::Ident(interner::global().intern(text)));
                Token::new(kind, span, value)
            }
            RawTag::Int | RawTag::HexInt | RawTag::OctInt | RawTag::BinInt => {
                let value = cook_number::cook(tag, text, start, &self.locations, self.errors);
                Token::new(TokenKind::Int, span, Some(value))
            }
            RawTag::Float => {
                let value = cook_number::cook(tag, text, start, &self.locations, self.errors);
                Token::new(TokenKind::Float, span, Some(value))
            }
            RawTag::String | RawTag::UnterminatedString => {
                let raw_bytes = self.source.as_bytes()[start as usize..end as usize].to_vec();
                let value = cook_string::cook(
                    tag,
                    &raw_bytes,
                    start,
                    self.options.restrict_string_escapes,
                    &self.locations,
                    self.errors,
                );
                Token::new(TokenKind::String, span, Some(value))
            }
            RawTag::Byte | RawTag::UnterminatedByte => {
                let raw_bytes = self.source.as_bytes()[start as usize..end as usize].to_vec();
                let value = cook_string::cook(
                    tag,
                    &raw_bytes,
                    start,
                    self.options.restrict_string_escapes,
                    &self.locations,
                    self.errors,
                );
                Token::new(TokenKind::Byte, span, Some(value))
            }
            _ => {
                let kind = self.cook_operator(tag);
                Token::new(kind, span, None)
            }
        }
    }

    /// Map an operator/punctuation `RawTag` to its `TokenKind`, updating
    /// `open_paren_depth` for bracket opens/closes along the way (§4.G/§4.C:
    /// bracket depth gates NEWLINE suppression and indentation measurement).
    fn cook_operator(&mut self, tag: RawTag) -> TokenKind {
        use TokenKind as K;
        match tag {
            RawTag::LParen => {
                self.open_paren_depth += 1;
                K::LParen
            }
            RawTag::LBracket => {
                self.open_paren_depth += 1;
                K::LBracket
            }
            RawTag::LBrace => {
                self.open_paren_depth += 1;
                K::LBrace
            }
            RawTag::RParen => {
                indent::pop_paren(&mut self.open_paren_depth, self.pos, &self.locations, self.errors);
                K::RParen
            }
            RawTag::RBracket => {
                indent::pop_paren(&mut self.open_paren_depth, self.pos, &self.locations, self.errors);
                K::RBracket
            }
            RawTag::RBrace => {
                indent::pop_paren(&mut self.open_paren_depth, self.pos, &self.locations, self.errors);
                K::RBrace
            }
            RawTag::Colon => K::Colon,
            RawTag::Comma => K::Comma,
            RawTag::Semicolon => K::Semicolon,
            RawTag::Dot => K::Dot,
            RawTag::Plus => K::Plus,
            RawTag::Minus => K::Minus,
            RawTag::Star => K::Star,
            RawTag::Slash => K::Slash,
            RawTag::Percent => K::Percent,
            RawTag::Tilde => K::Tilde,
            RawTag::Amp => K::Amp,
            RawTag::Caret => K::Caret,
            RawTag::Pipe => K::Pipe,
            RawTag::Equals => K::Equals,
            RawTag::Less => K::Less,
            RawTag::Greater => K::Greater,
            RawTag::StarStar => K::StarStar,
            RawTag::EqEq => K::EqEq,
            RawTag::NotEq => K::NotEq,
            RawTag::GreaterEq => K::GreaterEq,
            RawTag::LessEq => K::LessEq,
            RawTag::PlusEq => K::PlusEq,
            RawTag::MinusEq => K::MinusEq,
            RawTag::StarEq => K::StarEq,
            RawTag::SlashEq => K::SlashEq,
            RawTag::PercentEq => K::PercentEq,
            RawTag::CaretEq => K::CaretEq,
            RawTag::AmpEq => K::AmpEq,
            RawTag::PipeEq => K::PipeEq,
            RawTag::GreaterGreater => K::GreaterGreater,
            RawTag::LessLess => K::LessLess,
            RawTag::SlashSlash => K::SlashSlash,
            RawTag::GreaterGreaterEq => K::GreaterGreaterEq,
            RawTag::LessLessEq => K::LessLessEq,
            RawTag::SlashSlashEq => K::SlashSlashEq,
            other => unreachable!("cook_operator called with non-operator tag {other:?}"),
        }
    }

    /// Consolidate one or more single-byte `InvalidByte` raw tokens into a
    /// single ILLEGAL token spanning one full Unicode character — the raw
    /// scanner emits `InvalidByte` per byte, which would otherwise split a
    /// multi-byte confusable into several tokens.
    fn cook_invalid_byte(&mut self, start: u32) -> Token {
        let bytes = self.source.as_bytes();
        let width = (Cursor::utf8_char_width(bytes[start as usize]) as usize).min(bytes.len() - start as usize);
        let end = start + width as u32;
        let c = std::str::from_utf8(&bytes[start as usize..end as usize])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or('\u{FFFD}');
        self.pos = end;
        self.errors
            .push(LexError::invalid_character(self.locations.locate(start), c));
        Token::new(TokenKind::Illegal, Span::new(start, end), None)
    }

    fn finish(&mut self, token: Token) -> Token {
        self.prev_was_newline = matches!(token.kind, TokenKind::Newline);
        token
    }
}

fn describe_encoding_issue(kind: starlex_core::EncodingIssueKind) -> &'static str {
    use starlex_core::EncodingIssueKind as K;
    match kind {
        K::Utf8Bom => "UTF-8 byte order mark is not valid at the start of a source file",
        K::Utf16LeBom => "source appears to be UTF-16 (little-endian), not UTF-8",
        K::Utf16BeBom => "source appears to be UTF-16 (big-endian), not UTF-8",
        K::InteriorNull => "interior null byte in source content",
    }
}

fn slice_str(bytes: &[u8], start: u32, end: u32) -> &str {
    std::str::from_utf8(&bytes[start as usize..end as usize]).unwrap_or_default()
}

#[cfg(test)]
mod tests;
