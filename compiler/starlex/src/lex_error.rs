//! Lexer diagnostics.
//!
//! Per §7: a flat `{ location, message }` pair, not `ori_lexer::lex_error`'s
//! structured `LexErrorKind`/`LexErrorContext`/`LexSuggestion` WHERE+WHAT+WHY+HOW
//! system. That design earns its keep when a later diagnostic-rendering pass
//! (`ori_diagnostic`/`ariadne`) builds display text from the structured
//! kind; here §6 requires the message *text itself* to be a bit-exact
//! contract, so a structured-kind-plus-separate-renderer layer would only
//! add indirection. What carries over is the factory-function idiom: one
//! `#[cold]` constructor per distinct message template, keeping the text
//! centralized and the hot (non-error) path free of string-formatting
//! cost.

use crate::file_locations::Location;

/// A single non-fatal lexer diagnostic.
///
/// Pushed to the caller-owned `errors` list (§5/§6); the lexer always
/// continues producing a plausible next token after recording one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub location: Location,
    pub message: String,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl std::error::Error for LexError {}

impl LexError {
    fn new(location: Location, message: String) -> Self {
        Self { location, message }
    }

    /// §4.C: a tab byte was counted toward an indentation measurement.
    #[cold]
    pub(crate) fn tab_in_indentation(location: Location) -> Self {
        Self::new(
            location,
            "Tab characters are not allowed for indentation. Use spaces instead.".to_owned(),
        )
    }

    /// §4.C: a DEDENT that does not land on a previously recorded level, or
    /// a closing bracket with `open_paren_depth` already zero.
    #[cold]
    pub(crate) fn indentation_error(location: Location) -> Self {
        Self::new(location, "indentation error".to_owned())
    }

    /// §4.D: literal ended at EOF or (single-quoted) at a raw newline
    /// without a closing delimiter. `kind` is `"string"` or `"byte"`.
    #[cold]
    pub(crate) fn unclosed(location: Location, kind: &str) -> Self {
        Self::new(location, format!("unclosed {kind} literal"))
    }

    /// §4.D: `\ddd` octal escape value exceeds `0xFF` (three octal digits
    /// can encode up to `0o777`, wider than a byte).
    #[cold]
    pub(crate) fn octal_escape_out_of_range(location: Location) -> Self {
        Self::new(
            location,
            "octal escape sequence out of range (maximum is \\377)".to_owned(),
        )
    }

    /// §4.D: a STRING-kind octal/hex byte escape decoded to a value above
    /// ASCII (`> 127`) — STRING must stay valid UTF-8, so a raw non-ASCII
    /// byte escape is rejected with a pointer toward the Unicode escapes.
    #[cold]
    pub(crate) fn non_ascii_byte_escape_in_string(location: Location, value: u8) -> Self {
        Self::new(
            location,
            format!(
                "non-ASCII byte escape \\{value:#04x} in string literal, use \\u{{{value:04X}}} for UTF-8 characters instead"
            ),
        )
    }

    /// §4.D: `\xHH` with fewer than 2 hex digits, or a non-hex digit where
    /// one was expected. `tail` is the remaining escape text, included
    /// verbatim per §4.D's "full remaining tail in the message".
    #[cold]
    pub(crate) fn invalid_hex_escape(location: Location, tail: &str) -> Self {
        Self::new(location, format!("invalid hex escape sequence \\x{tail}"))
    }

    /// §4.D: `\uHHHH`/`\UHHHHHHHH` with fewer digits than the escape
    /// requires, or a non-hex digit where one was expected. `escape_char` is
    /// `'u'` or `'U'`; `tail` is the remaining escape text.
    #[cold]
    pub(crate) fn invalid_unicode_escape(location: Location, escape_char: char, tail: &str) -> Self {
        Self::new(
            location,
            format!("invalid unicode escape sequence \\{escape_char}{tail}"),
        )
    }

    /// §4.D: `\u`/`\U` escape whose code point is `> 0x10FFFF`.
    #[cold]
    pub(crate) fn code_point_too_large(location: Location) -> Self {
        Self::new(
            location,
            "unicode escape value out of range (maximum is \\U0010FFFF)".to_owned(),
        )
    }

    /// §4.D: `\u`/`\U` escape whose code point falls in the UTF-16
    /// surrogate range `[0xD800, 0xDFFF]`.
    #[cold]
    pub(crate) fn surrogate_code_point(location: Location) -> Self {
        Self::new(
            location,
            "unicode escape value is a surrogate code point, not a valid Unicode scalar value"
                .to_owned(),
        )
    }

    /// §4.D: `\N` — reserved for a future named-escape feature, never
    /// implemented by this grammar.
    #[cold]
    pub(crate) fn reserved_escape_n(location: Location) -> Self {
        Self::new(location, "invalid escape sequence: \\N".to_owned())
    }

    /// §4.D: any other `\X` not covered by the fixed escape table, reported
    /// only when `LexerOptions::restrict_string_escapes` is set (the
    /// default); the two characters are still appended literally either way.
    #[cold]
    pub(crate) fn invalid_escape_sequence(location: Location, c: char) -> Self {
        Self::new(
            location,
            format!(
                "invalid escape sequence: \\{c}, set restrict_string_escapes to false to silence this warning"
            ),
        )
    }

    /// §4.E: `0x`/`0X` prefix with zero valid hex digits following.
    #[cold]
    pub(crate) fn invalid_hex_literal(location: Location) -> Self {
        Self::new(location, "invalid hex literal".to_owned())
    }

    /// §4.E: `0b`/`0B` prefix with zero valid binary digits following.
    #[cold]
    pub(crate) fn invalid_binary_literal(location: Location) -> Self {
        Self::new(location, "invalid binary literal".to_owned())
    }

    /// §4.E: a syntactically well-formed float whose value parses to `inf`.
    #[cold]
    pub(crate) fn float_too_large(location: Location) -> Self {
        Self::new(location, "floating-point literal too large".to_owned())
    }

    /// §4.E: a float literal that failed to parse at all.
    #[cold]
    pub(crate) fn invalid_float_literal(location: Location) -> Self {
        Self::new(location, "invalid float literal".to_owned())
    }

    /// §4.H: a byte that does not begin any recognized token.
    #[cold]
    pub(crate) fn invalid_character(location: Location, c: char) -> Self {
        Self::new(location, format!("invalid character: '{c}'"))
    }

    /// Ambient diagnostic (not part of the fixed error catalog in §7):
    /// a byte-order mark or interior null detected by `SourceBuffer` at
    /// construction time.
    #[cold]
    pub(crate) fn encoding_issue(location: Location, message: impl Into<String>) -> Self {
        Self::new(location, message.into())
    }
}
