use super::*;

const ALL_KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("as", TokenKind::As),
    ("assert", TokenKind::Assert),
    ("break", TokenKind::Break),
    ("class", TokenKind::Class),
    ("continue", TokenKind::Continue),
    ("def", TokenKind::Def),
    ("del", TokenKind::Del),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("except", TokenKind::Except),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("from", TokenKind::From),
    ("global", TokenKind::Global),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("is", TokenKind::Is),
    ("lambda", TokenKind::Lambda),
    ("load", TokenKind::Load),
    ("nonlocal", TokenKind::Nonlocal),
    ("not", TokenKind::Not),
    ("or", TokenKind::Or),
    ("pass", TokenKind::Pass),
    ("raise", TokenKind::Raise),
    ("return", TokenKind::Return),
    ("try", TokenKind::Try),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("yield", TokenKind::Yield),
];

#[test]
fn all_keywords_resolve() {
    for (text, kind) in ALL_KEYWORDS {
        assert_eq!(lookup(text), Some(*kind), "keyword {text} did not resolve");
    }
}

#[test]
fn non_keyword_identifiers_return_none() {
    for text in ["x", "foo", "bar_baz", "classify", "formula", "fortune", "ifdef"] {
        assert_eq!(lookup(text), None, "{text} should not be a keyword");
    }
}

#[test]
fn length_out_of_range_rejected_fast() {
    assert_eq!(lookup("a"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("a_very_long_identifier_name"), None);
}

#[test]
fn prefix_of_keyword_is_not_a_keyword() {
    // "classify" starts with "class" but is its own identifier.
    assert_eq!(lookup("classify"), None);
    assert_eq!(lookup("els"), None);
}
