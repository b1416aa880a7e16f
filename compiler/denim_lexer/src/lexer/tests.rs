use denim_diagnostic::DiagnosticQueue;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::test_support::{config, kinds, lex_text, single};

use denim_ir::TokenKind as K;

fn sink() -> Vec<Diagnostic> {
    Vec::new()
}

fn spans(text: &str) -> Vec<(TokenKind, Span)> {
    lex_text(text)
        .tokens
        .iter()
        .map(|token| (token.kind, token.span()))
        .collect()
}

// === End of Input ===

#[test]
fn empty_source_is_just_end() {
    assert_eq!(spans(""), vec![(K::End, Span::point(0))]);
}

#[test]
fn whitespace_only_source() {
    assert_eq!(spans(" \t\r\n\u{3000}"), vec![(K::End, Span::point(7))]);
}

#[test]
fn end_is_returned_forever() {
    let source = Source::from_text("x");
    let mut lexer = Lexer::with_config(&source, sink(), config());
    assert_eq!(lexer.next_token().map(|t| t.kind), Ok(K::Identifier));
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Ok(Token::new(K::End, 1, 0)));
    }
    assert!(lexer.is_finished());
}

#[test]
fn iterator_stops_before_end() {
    let source = Source::from_text("a + b");
    let lexer = Lexer::new(&source, sink());
    let kinds: Vec<_> = lexer.map(|token| token.map(|t| t.kind)).collect();
    assert_eq!(kinds, vec![Ok(K::Identifier), Ok(K::Plus), Ok(K::Identifier)]);
}

#[test]
fn iterator_yields_fatal_error_once() {
    let source = Source::from_text("a \"open");
    let lexer = Lexer::new(&source, sink());
    let items: Vec<_> = lexer.collect();
    assert_eq!(items.len(), 2);
    assert!(items[1].is_err());
}

#[test]
fn malformed_utf8_ends_the_input() {
    let source = Source::new("bad.dnm", vec![b'a', b' ', 0xFF, b'b'], 0);
    let mut lexer = Lexer::new(&source, sink());
    assert_eq!(lexer.next_token().map(|t| t.kind), Ok(K::Identifier));
    assert_eq!(lexer.next_token(), Ok(Token::new(K::End, 2, 0)));
    assert_eq!(lexer.next_token(), Ok(Token::new(K::End, 2, 0)));
}

// === Newlines ===

#[test]
fn newline_before_is_set_on_the_next_token() {
    let tokens = lex_text("a\nb c").tokens;
    assert!(!tokens[0].has_newline_before());
    assert!(tokens[1].has_newline_before());
    assert!(!tokens[2].has_newline_before());
}

#[test]
fn every_line_terminator_counts() {
    for text in ["a\rb", "a\r\nb", "a\u{2028}b", "a\u{2029}b"] {
        let tokens = lex_text(text).tokens;
        assert!(tokens[1].has_newline_before(), "{text:?}");
    }
}

#[test]
fn newline_before_end() {
    let tokens = lex_text("a\n").tokens;
    assert_eq!(tokens[1].kind, K::End);
    assert!(tokens[1].has_newline_before());
}

#[test]
fn unicode_whitespace_is_skipped() {
    assert_eq!(
        kinds("a\u{00A0}b\u{FEFF}c\u{2003}d"),
        vec![K::Identifier, K::Identifier, K::Identifier, K::Identifier, K::End]
    );
}

// === Hashbang ===

#[test]
fn hashbang_on_first_line() {
    assert_eq!(
        spans("#!/usr/bin/env denim\nlet"),
        vec![
            (K::Hashbang, Span::new(0, 20)),
            (K::Let, Span::new(21, 24)),
            (K::End, Span::point(24)),
        ]
    );
}

#[test]
fn hash_elsewhere_is_a_syntax_error() {
    let lexed = lex_text(" #!x");
    assert_eq!(lexed.kinds(), vec![K::SyntaxError, K::Exclamation, K::Identifier, K::End]);
    assert_eq!(lexed.diagnostics[0].message, "Syntax error \"#\"");
}

// === Punctuation ===

#[test]
fn punctuation_maximal_munch() {
    let cases = [
        ("&", K::Ampersand),
        ("&&", K::AmpersandAmpersand),
        ("*", K::Asterisk),
        ("**", K::AsteriskAsterisk),
        ("@", K::At),
        ("|", K::Bar),
        ("||", K::BarBar),
        ("}", K::CloseBrace),
        ("]", K::CloseBracket),
        (")", K::CloseParen),
        (":", K::Colon),
        (",", K::Comma),
        (".", K::Dot),
        ("..", K::DotDot),
        ("...", K::DotDotDot),
        ("=", K::Equals),
        ("==", K::EqualsEquals),
        ("=>", K::EqualsGreaterThan),
        ("!", K::Exclamation),
        ("!=", K::ExclamationEquals),
        (">", K::GreaterThan),
        (">=", K::GreaterThanEquals),
        ("<", K::LessThan),
        ("<=", K::LessThanEquals),
        ("-", K::Minus),
        ("->", K::MinusGreaterThan),
        ("{", K::OpenBrace),
        ("[", K::OpenBracket),
        ("(", K::OpenParen),
        ("%", K::Percent),
        ("+", K::Plus),
        ("?", K::Question),
        ("?.", K::QuestionDot),
        ("??", K::QuestionQuestion),
        (";", K::Semicolon),
        ("/", K::Slash),
        ("~/", K::TildeSlash),
    ];
    for (text, kind) in cases {
        let token = single(text);
        assert_eq!(token.kind, kind, "{text:?}");
        assert_eq!(token.span(), Span::new(0, u32::try_from(text.len()).unwrap_or(0)));
    }
}

#[test]
fn longest_operator_wins_in_runs() {
    assert_eq!(kinds("...."), vec![K::DotDotDot, K::Dot, K::End]);
    assert_eq!(kinds("&&&"), vec![K::AmpersandAmpersand, K::Ampersand, K::End]);
    assert_eq!(kinds("===>"), vec![K::EqualsEquals, K::EqualsGreaterThan, K::End]);
    assert_eq!(kinds("???"), vec![K::QuestionQuestion, K::Question, K::End]);
}

#[test]
fn question_dot_before_digit_is_a_conditional() {
    let lexed = lex_text("?.5");
    assert_eq!(lexed.kinds(), vec![K::Question, K::FloatLiteral, K::End]);
    assert_eq!(lexed.tokens[1].span(), Span::new(1, 3));
    assert_eq!(lexed.tokens[1].value.as_ref().and_then(|v| v.as_f64()), Some(0.5));
}

#[test]
fn question_dot_before_name_is_optional_chaining() {
    assert_eq!(
        kinds("a?.b"),
        vec![K::Identifier, K::QuestionDot, K::Identifier, K::End]
    );
}

#[test]
fn range_between_integers() {
    assert_eq!(
        spans("1..2"),
        vec![
            (K::IntLiteral, Span::new(0, 1)),
            (K::DotDot, Span::new(1, 3)),
            (K::IntLiteral, Span::new(3, 4)),
            (K::End, Span::point(4)),
        ]
    );
}

#[test]
fn lone_tilde_is_a_syntax_error() {
    assert_eq!(kinds("~x"), vec![K::SyntaxError, K::Identifier, K::End]);
}

// === Identifiers & Keywords ===

#[test]
fn ascii_identifiers() {
    for text in ["x", "_", "_private", "camelCase", "snake_case_2", "r", "raw"] {
        assert_eq!(single(text).kind, K::Identifier, "{text:?}");
    }
}

#[test]
fn unicode_identifiers() {
    let token = single("café_名前");
    assert_eq!(token.kind, K::Identifier);
    assert_eq!(token.len, u32::try_from("café_名前".len()).unwrap_or(0));
}

#[test]
fn identifier_ends_at_non_continue_code_point() {
    assert_eq!(
        spans("héllo+x"),
        vec![
            (K::Identifier, Span::new(0, 6)),
            (K::Plus, Span::new(6, 7)),
            (K::Identifier, Span::new(7, 8)),
            (K::End, Span::point(8)),
        ]
    );
}

#[test]
fn keywords_get_their_own_kind() {
    assert_eq!(
        kinds("let fn if Self self while"),
        vec![K::Let, K::Fn, K::If, K::SelfType, K::SelfValue, K::While, K::End]
    );
}

#[test]
fn keyword_prefixes_are_identifiers() {
    assert_eq!(kinds("lets iff Let"), vec![K::Identifier, K::Identifier, K::Identifier, K::End]);
}

#[test]
fn escaped_keywords() {
    let lexed = lex_text("r#fn r#foo");
    assert_eq!(
        lexed
            .tokens
            .iter()
            .map(|t| (t.kind, t.span()))
            .collect::<Vec<_>>(),
        vec![
            (K::EscapedKeyword, Span::new(0, 4)),
            (K::Identifier, Span::new(5, 10)),
            (K::End, Span::point(10)),
        ]
    );
}

// === Syntax Errors ===

#[test]
fn unknown_character_is_recoverable() {
    let lexed = lex_text("a $ b");
    assert_eq!(lexed.kinds(), vec![K::Identifier, K::SyntaxError, K::Identifier, K::End]);
    assert_eq!(lexed.fatal, None);
    assert_eq!(lexed.diagnostics.len(), 1);
    let diagnostic = &lexed.diagnostics[0];
    assert_eq!(diagnostic.code, ErrorCode::E0002);
    assert_eq!(diagnostic.span, Span::new(2, 3));
    assert_eq!(diagnostic.message, "Syntax error \"$\"");
}

#[test]
fn syntax_error_messages_escape_unprintable_code_points() {
    assert_eq!(syntax_error_message('\u{1}'), "Syntax error \"\\x01\"");
    assert_eq!(syntax_error_message('\0'), "Syntax error \"\\x00\"");
    assert_eq!(syntax_error_message('€'), "Syntax error \"\\u{20ac}\"");
    assert_eq!(syntax_error_message('\\'), "Syntax error \"\\\"");
}

#[test]
fn interior_nul_is_a_syntax_error() {
    let lexed = lex_text("a\0b");
    assert_eq!(lexed.kinds(), vec![K::Identifier, K::SyntaxError, K::Identifier, K::End]);
    assert_eq!(lexed.diagnostics[0].message, "Syntax error \"\\x00\"");
}

#[test]
fn non_identifier_unicode_spans_the_whole_code_point() {
    let lexed = lex_text("€");
    assert_eq!(lexed.tokens[0].kind, K::SyntaxError);
    assert_eq!(lexed.tokens[0].span(), Span::new(0, 3));
}

#[test]
fn diagnostics_carry_locations() {
    let lexed = lex_text("let x\n  $");
    let location = lexed.diagnostics[0].location.clone();
    let location = location.map(|l| (l.line, l.column, l.line_text));
    assert_eq!(location, Some((2, 2, "  $".to_owned())));
}

#[test]
fn duplicate_offsets_are_reported_once() {
    let source = Source::from_text("abc");
    let mut lexer = Lexer::new(&source, DiagnosticQueue::new());
    lexer.report(Diagnostic::error(ErrorCode::E0002, Span::new(1, 2)).with_message("first"));
    lexer.report(Diagnostic::error(ErrorCode::E0003, Span::new(1, 3)).with_message("second"));
    lexer.report(Diagnostic::error(ErrorCode::E0002, Span::new(2, 3)).with_message("third"));
    let messages: Vec<_> = lexer
        .into_sink()
        .flush()
        .into_iter()
        .map(|d| d.message)
        .collect();
    assert_eq!(messages, vec!["first", "third"]);
}

#[test]
fn fatal_error_stops_the_scan() {
    let source = Source::from_text("a /* open");
    let mut lexer = Lexer::with_config(&source, sink(), config());
    assert_eq!(lexer.next_token().map(|t| t.kind), Ok(K::Identifier));
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.next_token(), Ok(Token::new(K::End, 9, 0)));
    assert_eq!(lexer.into_sink().len(), 1);
}

// === Strict Mode ===

#[test]
#[should_panic(expected = "expected '#'")]
fn strict_mode_asserts_scanner_preconditions() {
    let source = Source::from_text("x");
    let lexer = Lexer::with_config(&source, sink(), config());
    lexer.expect_current('#');
}

#[test]
fn lenient_mode_skips_assertions() {
    let source = Source::from_text("x");
    let lexer = Lexer::new(&source, sink());
    lexer.expect_current('#');
}

// === Pragmas ===

#[test]
fn pragmas_are_collected_from_comments() {
    let source = Source::from_text("//# sourceMappingURL=out.map\n/* @edition 2024 */\nlet");
    let mut lexer = Lexer::new(&source, sink());
    while !lexer.is_finished() {
        let _ = lexer.next_token();
    }
    assert_eq!(lexer.source_mapping_url().map(|p| p.text.as_str()), Some("out.map"));
    assert_eq!(lexer.source_mapping_url().map(|p| p.span), Some(Span::new(21, 28)));
    assert_eq!(lexer.edition().map(|p| p.text.as_str()), Some("2024"));
}

#[test]
fn block_comment_pragmas_stop_before_the_closer() {
    let source = Source::from_text("/*# sourceMappingURL=a.map*/\n/* @edition 2024*/\nlet");
    let mut lexer = Lexer::new(&source, sink());
    while !lexer.is_finished() {
        let _ = lexer.next_token();
    }
    let url = lexer.source_mapping_url().map(|p| (p.text.as_str(), p.span));
    assert_eq!(url, Some(("a.map", Span::new(21, 26))));
    let edition = lexer.edition().map(|p| (p.text.as_str(), p.span));
    assert_eq!(edition, Some(("2024", Span::new(41, 45))));
}

// === Properties ===

fn token_soup() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("let"),
            Just("x"),
            Just("héllo"),
            Just("42"),
            Just("1.5"),
            Just("0x1F"),
            Just("\"str\""),
            Just("`t{a}b`"),
            Just("'c'"),
            Just("?."),
            Just("?.5"),
            Just("..."),
            Just("=>"),
            Just("// c\n"),
            Just("/* b */"),
            Just("$"),
            Just(" "),
            Just("\n"),
            Just("\u{3000}"),
            Just("+"),
            Just("{"),
            Just("}"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn spans_tile_the_source(text in token_soup()) {
        let lexed = lex_text(&text);
        let mut cursor = 0u32;
        for token in &lexed.tokens {
            prop_assert!(token.offset >= cursor, "overlap at {token:?}");
            let gap = &text[cursor as usize..token.offset as usize];
            prop_assert!(
                gap.chars().all(denim_lexer_core::chars::is_whitespace),
                "non-whitespace gap {gap:?}"
            );
            cursor = token.end();
        }
        if lexed.fatal.is_none() {
            prop_assert_eq!(cursor as usize, text.len());
            prop_assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(K::End));
        }
    }

    #[test]
    fn newline_flag_matches_gap_contents(text in token_soup()) {
        let lexed = lex_text(&text);
        let mut cursor = 0u32;
        for token in &lexed.tokens {
            let gap = &text[cursor as usize..token.offset as usize];
            let has_newline = gap.chars().any(denim_lexer_core::chars::is_line_terminator);
            prop_assert_eq!(token.flags.contains(TokenFlags::NEWLINE_BEFORE), has_newline);
            cursor = token.end();
        }
    }
}
