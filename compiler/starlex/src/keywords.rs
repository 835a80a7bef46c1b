//! Keyword resolution for the cooking layer.
//!
//! A single reserved-keyword table, length-bucketed exactly as
//! `ori_lexer::keywords::lookup` is structured (length pre-filter, then a
//! `match` per length bucket), but populated with this dialect's 33
//! keywords (§6) instead of Ori's. There is no soft-keyword /
//! context-sensitive-lookahead concept here — that's an Ori-specific
//! feature for pattern keywords like `cache(...)`; this grammar has no
//! keyword that doubles as an identifier, so only the length-bucketed
//! single-table shape is carried over.

use crate::token::TokenKind;

/// Look up a reserved keyword by its ASCII text.
///
/// Returns `None` for anything that is not one of the 33 keywords, meaning
/// the caller should emit `TokenKind::Identifier` instead.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // All keywords are 2-8 ASCII-lowercase-alpha characters.
    if !(2..=8).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "def" => Some(TokenKind::Def),
            "del" => Some(TokenKind::Del),
            "for" => Some(TokenKind::For),
            "not" => Some(TokenKind::Not),
            "try" => Some(TokenKind::Try),
            _ => None,
        },
        4 => match text {
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "from" => Some(TokenKind::From),
            "load" => Some(TokenKind::Load),
            "pass" => Some(TokenKind::Pass),
            "with" => Some(TokenKind::With),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "class" => Some(TokenKind::Class),
            "raise" => Some(TokenKind::Raise),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match text {
            "assert" => Some(TokenKind::Assert),
            "except" => Some(TokenKind::Except),
            "global" => Some(TokenKind::Global),
            "import" => Some(TokenKind::Import),
            "lambda" => Some(TokenKind::Lambda),
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        7 => match text {
            "finally" => Some(TokenKind::Finally),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "nonlocal" => Some(TokenKind::Nonlocal),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
