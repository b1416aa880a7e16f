use denim_diagnostic::DiagnosticConfig;
use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::config;

#[test]
fn lex_collects_tokens_and_diagnostics() {
    let source = Source::new("main.dnm", "let x = $;".as_bytes().to_vec(), 3);
    let lexed = lex(&source, &config());
    assert_eq!(lexed.ordinal, 3);
    assert_eq!(
        lexed.kinds(),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::SyntaxError,
            TokenKind::Semicolon,
            TokenKind::End,
        ]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.has_errors());
    assert_eq!(
        lexed.diagnostics[0].location.as_ref().map(ToString::to_string),
        Some("main.dnm:1:9".to_owned())
    );
}

#[test]
fn errors_past_the_limit_are_counted() {
    let config = config().with_diagnostics(DiagnosticConfig { error_limit: 2 });
    let lexed = lex(&Source::from_text("$ $ $ $ $"), &config);
    assert_eq!(lexed.kinds().len(), 6);
    assert_eq!(lexed.diagnostics.len(), 2);
    assert_eq!(lexed.dropped_errors, 3);
}

#[test]
fn lex_reports_fatal_errors() {
    let lexed = lex(&Source::from_text("x \"open"), &config());
    assert_eq!(lexed.kinds(), vec![TokenKind::Identifier]);
    assert!(lexed.fatal.is_some());
    assert!(lexed.has_errors());
}

#[test]
fn clean_file_has_no_errors() {
    let lexed = lex(&Source::from_text("fn main() {}"), &config());
    assert!(!lexed.has_errors());
    assert_eq!(lexed.dropped_errors, 0);
    assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(TokenKind::End));
}

#[test]
fn lex_many_keeps_source_order() {
    let sources: Vec<_> = (0..32u32)
        .map(|i| Source::new(format!("f{i}.dnm"), "x".repeat(i as usize + 1).into_bytes(), i))
        .collect();
    let lexed = lex_many(&sources, &config());
    assert_eq!(lexed.len(), sources.len());
    for (i, file) in lexed.iter().enumerate() {
        assert_eq!(file.ordinal as usize, i);
        assert_eq!(file.tokens[0].len as usize, i + 1);
    }
}

#[test]
fn lex_many_isolates_failures() {
    let sources = vec![
        Source::from_text("/* open"),
        Source::from_text("ok"),
    ];
    let lexed = lex_many(&sources, &config());
    assert!(lexed[0].fatal.is_some());
    assert!(lexed[1].fatal.is_none());
    assert_eq!(lexed[1].kinds(), vec![TokenKind::Identifier, TokenKind::End]);
}

#[test]
fn pragmas_are_carried_into_the_result() {
    let lexed = lex(&Source::from_text("// @edition 2025\n"), &config());
    assert_eq!(lexed.edition.map(|p| p.text), Some("2025".to_owned()));
    assert_eq!(lexed.source_mapping_url, None);
}
