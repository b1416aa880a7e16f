//! Helpers shared by the unit tests.

use denim_diagnostic::DiagnosticConfig;
use denim_ir::{Source, Token, TokenKind};

use crate::{lex, LexedFile, LexerConfig};

pub(crate) fn config() -> LexerConfig {
    LexerConfig::strict().with_diagnostics(DiagnosticConfig::unlimited())
}

pub(crate) fn lex_text(text: &str) -> LexedFile {
    lex(&Source::from_text(text), &config())
}

pub(crate) fn kinds(text: &str) -> Vec<TokenKind> {
    lex_text(text).kinds()
}

/// The only token before `End`.
pub(crate) fn single(text: &str) -> Token {
    let lexed = lex_text(text);
    assert_eq!(lexed.fatal, None, "unexpected fatal error lexing {text:?}");
    assert_eq!(lexed.tokens.len(), 2, "expected one token in {text:?}: {:?}", lexed.tokens);
    assert_eq!(lexed.tokens[1].kind, TokenKind::End);
    lexed.tokens[0].clone()
}
