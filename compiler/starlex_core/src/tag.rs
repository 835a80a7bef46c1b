//! Raw token tag and token type for the low-level tokenizer.
//!
//! `RawTag` is the byte-classification-only token kind produced by the raw
//! scanner. It carries no keyword resolution, no decoded literal values, and
//! no indentation state — those live one layer up, in `starlex`'s cooking
//! layer, which maps `RawTag` to the closed `TokenKind` enumeration during
//! the "cooking" phase.
//!
//! # Discriminant Layout
//!
//! Variants are organized into semantic ranges with gaps for future expansion:
//!
//! | Range   | Category                |
//! |---------|--------------------------|
//! | 0-15    | Identifiers & literals  |
//! | 16-23   | Trivia                  |
//! | 32-95   | Operators & punctuation |
//! | 224-239 | Errors                  |
//! | 255     | EOF                     |

/// Raw token kind produced by the low-level tokenizer.
///
/// The integration layer (`starlex`) maps `RawTag` to `TokenKind` during the
/// cooking phase, attaching spans, decoded values, and keyword resolution.
///
/// # Stability
///
/// This enum is `#[non_exhaustive]` — new variants may be added in future
/// versions without breaking downstream code. Match arms should include a
/// wildcard (`_`) to handle unknown variants.
///
/// # Representation
///
/// `#[repr(u8)]` ensures each variant is a single byte, enabling compact
/// storage and efficient tag-based dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals (0-15) ===
    /// Identifier (not yet classified as keyword — resolution happens in cooking layer).
    Ident = 0,
    /// Decimal integer literal.
    Int = 1,
    /// Float literal (has a fractional part and/or exponent).
    Float = 2,
    /// Hexadecimal integer literal (`0x...`/`0X...`).
    HexInt = 3,
    /// Octal integer literal (`0o...`/`0O...`).
    OctInt = 4,
    /// Binary integer literal (`0b...`/`0B...`).
    BinInt = 5,
    /// String literal: single- or triple-quoted, with or without a `r` prefix.
    ///
    /// The raw scanner does not distinguish raw-ness at the tag level — the
    /// cooking layer re-examines the first 1-2 bytes of the span to detect
    /// the `r` prefix and triple-quote form before decoding escapes.
    String = 6,
    /// Byte-string literal: single- or triple-quoted, `b` or `rb` prefixed.
    Byte = 7,

    // === Trivia (16-23) ===
    /// Horizontal whitespace: spaces, tabs, and lone carriage returns between tokens.
    Whitespace = 16,
    /// Line feed, or CRLF collapsed to one token.
    Newline = 17,
    /// Line comment (`#` to end of line, exclusive).
    LineComment = 18,
    /// Backslash immediately followed by a line ending: explicit line continuation.
    LineContinuation = 19,

    // === Operators & punctuation (32-95) ===
    /// `(`
    LParen = 32,
    /// `)`
    RParen = 33,
    /// `[`
    LBracket = 34,
    /// `]`
    RBracket = 35,
    /// `{`
    LBrace = 36,
    /// `}`
    RBrace = 37,
    /// `:`
    Colon = 38,
    /// `,`
    Comma = 39,
    /// `;`
    Semicolon = 40,
    /// `.`
    Dot = 41,
    /// `+`
    Plus = 48,
    /// `-`
    Minus = 49,
    /// `*`
    Star = 50,
    /// `/`
    Slash = 51,
    /// `%`
    Percent = 52,
    /// `~`
    Tilde = 53,
    /// `&`
    Amp = 54,
    /// `^`
    Caret = 55,
    /// `|`
    Pipe = 56,
    /// `=`
    Equals = 57,
    /// `<`
    Less = 58,
    /// `>`
    Greater = 59,
    /// `**`
    StarStar = 64,
    /// `==`
    EqEq = 65,
    /// `!=`
    NotEq = 66,
    /// `>=`
    GreaterEq = 67,
    /// `<=`
    LessEq = 68,
    /// `+=`
    PlusEq = 69,
    /// `-=`
    MinusEq = 70,
    /// `*=`
    StarEq = 71,
    /// `/=`
    SlashEq = 72,
    /// `%=`
    PercentEq = 73,
    /// `^=`
    CaretEq = 74,
    /// `&=`
    AmpEq = 75,
    /// `|=`
    PipeEq = 76,
    /// `>>`
    GreaterGreater = 77,
    /// `<<`
    LessLess = 78,
    /// `//`
    SlashSlash = 79,
    /// `>>=`
    GreaterGreaterEq = 80,
    /// `<<=`
    LessLessEq = 81,
    /// `//=`
    SlashSlashEq = 82,

    // === Errors (224-239) ===
    /// Invalid byte (not a recognized start of any token, including stray `!`).
    InvalidByte = 224,
    /// Unterminated string literal (missing closing delimiter).
    UnterminatedString = 225,
    /// Unterminated byte-string literal (missing closing delimiter).
    UnterminatedByte = 226,
    /// Interior null byte (U+0000) in source content.
    ///
    /// Emitted by the scanner when it encounters a `0x00` byte that is NOT
    /// the sentinel (i.e., `pos < source_len`). The integration layer skips
    /// these tokens because `SourceBuffer` already detected interior nulls
    /// via `encoding_issues()` and reported them with more specific diagnostics.
    InteriorNull = 227,

    // === Control (255) ===
    /// End of file (sentinel reached).
    Eof = 255,
}

impl RawTag {
    /// Returns the fixed lexeme for this tag, if it has one.
    ///
    /// Operators and delimiters have fixed lexemes. Identifiers, literals,
    /// and error tokens return `None` (their text varies).
    #[must_use]
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LBracket => Some("["),
            Self::RBracket => Some("]"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            Self::Colon => Some(":"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::Dot => Some("."),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Percent => Some("%"),
            Self::Tilde => Some("~"),
            Self::Amp => Some("&"),
            Self::Caret => Some("^"),
            Self::Pipe => Some("|"),
            Self::Equals => Some("="),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::StarStar => Some("**"),
            Self::EqEq => Some("=="),
            Self::NotEq => Some("!="),
            Self::GreaterEq => Some(">="),
            Self::LessEq => Some("<="),
            Self::PlusEq => Some("+="),
            Self::MinusEq => Some("-="),
            Self::StarEq => Some("*="),
            Self::SlashEq => Some("/="),
            Self::PercentEq => Some("%="),
            Self::CaretEq => Some("^="),
            Self::AmpEq => Some("&="),
            Self::PipeEq => Some("|="),
            Self::GreaterGreater => Some(">>"),
            Self::LessLess => Some("<<"),
            Self::SlashSlash => Some("//"),
            Self::GreaterGreaterEq => Some(">>="),
            Self::LessLessEq => Some("<<="),
            Self::SlashSlashEq => Some("//="),
            _ => None,
        }
    }

    /// Returns a human-readable name for this tag.
    ///
    /// Used in diagnostic messages and debugging output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer literal",
            Self::Float => "float literal",
            Self::HexInt => "hex integer literal",
            Self::OctInt => "octal integer literal",
            Self::BinInt => "binary integer literal",
            Self::String => "string literal",
            Self::Byte => "byte string literal",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "line comment",
            Self::LineContinuation => "line continuation",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::LBrace => "`{`",
            Self::RBrace => "`}`",
            Self::Colon => "`:`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::Dot => "`.`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Percent => "`%`",
            Self::Tilde => "`~`",
            Self::Amp => "`&`",
            Self::Caret => "`^`",
            Self::Pipe => "`|`",
            Self::Equals => "`=`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::StarStar => "`**`",
            Self::EqEq => "`==`",
            Self::NotEq => "`!=`",
            Self::GreaterEq => "`>=`",
            Self::LessEq => "`<=`",
            Self::PlusEq => "`+=`",
            Self::MinusEq => "`-=`",
            Self::StarEq => "`*=`",
            Self::SlashEq => "`/=`",
            Self::PercentEq => "`%=`",
            Self::CaretEq => "`^=`",
            Self::AmpEq => "`&=`",
            Self::PipeEq => "`|=`",
            Self::GreaterGreater => "`>>`",
            Self::LessLess => "`<<`",
            Self::SlashSlash => "`//`",
            Self::GreaterGreaterEq => "`>>=`",
            Self::LessLessEq => "`<<=`",
            Self::SlashSlashEq => "`//=`",
            Self::InvalidByte => "invalid byte",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedByte => "unterminated byte string",
            Self::InteriorNull => "interior null byte",
            Self::Eof => "end of file",
        }
    }

    /// Returns `true` if this tag represents trivia the driver may skip
    /// between tokens (whitespace, line comments).
    ///
    /// `Newline` is NOT trivia: it is significant for statement separation
    /// and indentation measurement outside bracketed expressions.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment)
    }
}

/// Raw token produced by the low-level tokenizer.
///
/// A lightweight pair of tag and byte length. The integration layer
/// (`starlex`) uses the length to compute spans and extract source slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// What kind of token this is.
    pub tag: RawTag,
    /// Length of the token in bytes.
    pub len: u32,
}

/// Size assertions: `RawTag` is 1 byte, `RawToken` is 8 bytes.
const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
