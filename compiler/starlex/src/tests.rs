//! End-to-end driver tests: the ten concrete scenarios and the quantified
//! invariants from §8, exercised through the public `Lexer` API
//! rather than any single cooking module in isolation.

use super::*;
use crate::interner;
use proptest::prelude::*;

fn lex_all(src: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut errors = Vec::new();
    let mut lexer = Lexer::new(src.as_bytes(), "test.star", LexerOptions::default(), &mut errors);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if done {
            break;
        }
    }
    (tokens, errors)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

// === Concrete scenarios (spec §8) ===

#[test]
fn scenario_simple_assignment() {
    let (tokens, errors) = lex_all("a = 1\n");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Int,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn scenario_if_block_indent_dedent() {
    let (tokens, errors) = lex_all("if x:\n    y\n");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Outdent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn scenario_bracket_suppresses_newlines() {
    let (tokens, errors) = lex_all("(\n1,\n2\n)");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::Comma,
            TokenKind::Int,
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn scenario_hex_escape_in_string() {
    let (tokens, errors) = lex_all("\"a\\x41b\"\n");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::String, TokenKind::Newline, TokenKind::Eof]
    );
    assert_eq!(tokens[0].value, Some(TokenValue::Str("aAb".to_owned())));
}

#[test]
fn scenario_raw_string_keeps_backslash() {
    let (tokens, errors) = lex_all("r\"a\\nb\"\n");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::String, TokenKind::Newline, TokenKind::Eof]
    );
    assert_eq!(tokens[0].value, Some(TokenValue::Str("a\\nb".to_owned())));
}

#[test]
fn scenario_radix_literals() {
    let (tokens, errors) = lex_all("0xff + 0b10 + 0o17\n");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Int,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
    let values: Vec<_> = tokens[..5].iter().filter_map(|t| t.value.clone()).collect();
    assert_eq!(
        values,
        vec![
            TokenValue::Int(IntValue::Small(255)),
            TokenValue::Int(IntValue::Small(2)),
            TokenValue::Int(IntValue::Small(15)),
        ]
    );
}

#[test]
fn scenario_octal_escape_out_of_range() {
    let (tokens, errors) = lex_all("\"\\400\"\n");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("octal escape"));
    assert_eq!(tokens[0].kind, TokenKind::String);
}

#[test]
fn scenario_tab_indentation_error_still_yields_identifier() {
    let (tokens, errors) = lex_all("\tx\n");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Tab characters"));
    let ident = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Identifier)
        .expect("identifier still produced despite the tab diagnostic");
    assert_eq!(
        ident.value,
        Some(TokenValue::Ident(interner::global().intern("x")))
    );
}

#[test]
fn scenario_float_with_exponent() {
    let (tokens, errors) = lex_all("1.5e2\n");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Float, TokenKind::Newline, TokenKind::Eof]
    );
    assert_eq!(tokens[0].value, Some(TokenValue::Float(150.0)));
}

#[test]
fn scenario_unterminated_string_at_eof() {
    let (tokens, errors) = lex_all("\"abc");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unclosed string literal"));
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::String, TokenKind::Newline, TokenKind::Eof]
    );
    assert_eq!(tokens[0].value, Some(TokenValue::Str("abc".to_owned())));
}

// === Driver behavior not covered by the ten numbered scenarios ===

#[test]
fn leading_comment_line_is_collected_and_produces_no_token() {
    let mut errors = Vec::new();
    let src = "# hello\nx\n";
    let mut lexer = Lexer::new(src.as_bytes(), "test.star", LexerOptions::default(), &mut errors);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if done {
            break;
        }
    }
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Newline, TokenKind::Eof]
    );
    assert_eq!(lexer.comments().len(), 1);
    assert_eq!(lexer.comments()[0].text, "# hello");
}

#[test]
fn trailing_comment_after_token_is_collected() {
    let mut errors = Vec::new();
    let src = "x # trailing\n";
    let mut lexer = Lexer::new(src.as_bytes(), "test.star", LexerOptions::default(), &mut errors);
    loop {
        if lexer.next_token().kind == TokenKind::Eof {
            break;
        }
    }
    assert_eq!(lexer.comments().len(), 1);
    assert_eq!(lexer.comments()[0].text, "# trailing");
}

#[test]
fn multi_byte_invalid_character_consolidates_to_one_illegal_token() {
    let (tokens, errors) = lex_all("\u{a7}\n");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("invalid character"));
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Illegal, TokenKind::Newline, TokenKind::Eof]
    );
    assert_eq!(tokens[0].span, Span::new(0, 2));
}

#[test]
fn raw_span_covers_full_literal_text_not_decoded_value() {
    let src = "\"a\\x41b\"\n";
    let (tokens, _errors) = lex_all(src);
    assert_eq!(tokens[0].kind, TokenKind::String);
    let raw = &src.as_bytes()[tokens[0].span.start as usize..tokens[0].span.end as usize];
    assert_eq!(raw, br#""a\x41b""#);
}

#[test]
fn utf8_roundtrip_unicode_escapes_only() {
    let code_points = ['A', '\u{e9}', '\u{4e2d}', '\u{1f600}'];
    let mut literal = String::from('"');
    for c in code_points {
        literal.push_str(&format!("\\U{:08X}", c as u32));
    }
    literal.push('"');
    let src = format!("{literal}\n");
    let (tokens, errors) = lex_all(&src);
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    let expected: String = code_points.iter().collect();
    assert_eq!(tokens[0].value, Some(TokenValue::Str(expected)));
}

#[test]
fn bracket_region_fixed_case_has_no_newline_tokens() {
    let (tokens, errors) = lex_all("(\n1\n)\n");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

// === Quantified invariants (spec §8), exercised with proptest ===

fn arb_word() -> impl Strategy<Value = String> {
    // `v`-prefixed identifiers can never collide with a fixed keyword; plain
    // digit runs cover the INT case. Either way the word is a single token.
    "(v[a-zA-Z0-9_]{0,6}|[0-9]{1,6})"
}

proptest! {
    #[test]
    fn prop_token_offsets_are_monotonic(words in proptest::collection::vec(arb_word(), 1..8)) {
        let src = format!("{}\n", words.join(" "));
        let (tokens, _errors) = lex_all(&src);
        let mut prev_start = 0u32;
        for tok in &tokens {
            prop_assert!(tok.span.start >= prev_start);
            prev_start = tok.span.start;
        }
        prop_assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn prop_raw_span_matches_source_for_words(words in proptest::collection::vec(arb_word(), 1..8)) {
        let src = format!("{}\n", words.join(" "));
        let (tokens, errors) = lex_all(&src);
        prop_assert!(errors.is_empty());
        let real: Vec<_> = tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Identifier | TokenKind::Int))
            .collect();
        prop_assert_eq!(real.len(), words.len());
        for (tok, word) in real.iter().zip(words.iter()) {
            let slice = &src.as_bytes()[tok.span.start as usize..tok.span.end as usize];
            prop_assert_eq!(std::str::from_utf8(slice).unwrap(), word.as_str());
        }
    }

    #[test]
    fn prop_utf8_roundtrip_unicode_escapes(cps in proptest::collection::vec(valid_scalar_codepoint(), 1..5)) {
        let mut literal = String::from('"');
        for cp in &cps {
            literal.push_str(&format!("\\U{cp:08X}"));
        }
        literal.push('"');
        let src = format!("{literal}\n");
        let (tokens, errors) = lex_all(&src);
        prop_assert!(errors.is_empty());
        let expected: String = cps.iter().map(|&cp| char::from_u32(cp).unwrap()).collect();
        prop_assert_eq!(tokens[0].value.clone(), Some(TokenValue::Str(expected)));
    }

    #[test]
    fn prop_raw_string_idempotent_without_line_endings(body in "[a-zA-Z0-9 ]{0,20}") {
        let src = format!("r\"{body}\"\n");
        let (tokens, errors) = lex_all(&src);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(tokens[0].value.clone(), Some(TokenValue::Str(body.clone())));
    }

    #[test]
    fn prop_bracket_region_has_no_newline_tokens(n in 1usize..6) {
        let mut src = String::from("(\n");
        for i in 0..n {
            src.push_str(&format!("{i}\n"));
        }
        src.push_str(")\n");
        let (tokens, errors) = lex_all(&src);
        prop_assert!(errors.is_empty());
        let inside: Vec<_> = tokens
            .iter()
            .skip(1)
            .take_while(|t| t.kind != TokenKind::RParen)
            .collect();
        prop_assert!(inside.iter().all(|t| t.kind != TokenKind::Newline));
        prop_assert_eq!(inside.iter().filter(|t| t.kind == TokenKind::Int).count(), n);
    }
}

fn valid_scalar_codepoint() -> impl Strategy<Value = u32> {
    (0u32..=0x0010_FFFF).prop_filter("exclude surrogate range", |&cp| !(0xD800..=0xDFFF).contains(&cp))
}
