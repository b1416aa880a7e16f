//! Lexing whole files, one at a time or in parallel.
//!
//! Each file gets its own [`Lexer`] and [`DiagnosticQueue`]; nothing is
//! shared between files, so the batch is embarrassingly parallel.

use denim_diagnostic::{Diagnostic, DiagnosticQueue};
use denim_ir::{Source, Token, TokenKind};
use rayon::prelude::*;
use tracing::debug;

use crate::pragma::PragmaArg;
use crate::{LexError, Lexer, LexerConfig};

/// Everything produced by lexing one file.
#[derive(Clone, PartialEq)]
pub struct LexedFile {
    /// Ordinal of the source this came from.
    pub ordinal: u32,
    /// Tokens in source order, ending with `End` unless `fatal` is set.
    pub tokens: Vec<Token>,
    /// Diagnostics sorted by position.
    pub diagnostics: Vec<Diagnostic>,
    /// Errors discarded past the configured error limit.
    pub dropped_errors: usize,
    /// The error that aborted the scan, if any.
    pub fatal: Option<LexError>,
    pub source_mapping_url: Option<PragmaArg>,
    pub edition: Option<PragmaArg>,
}

impl std::fmt::Debug for LexedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexedFile")
            .field("ordinal", &self.ordinal)
            .field("tokens", &self.tokens.len())
            .field("diagnostics", &self.diagnostics.len())
            .field("dropped_errors", &self.dropped_errors)
            .field("fatal", &self.fatal)
            .finish_non_exhaustive()
    }
}

impl LexedFile {
    /// Whether any error diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        self.fatal.is_some() || self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Token kinds, handy for quick assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

/// Lex a whole file, collecting diagnostics in a [`DiagnosticQueue`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(path = source.path(), bytes = source.len())
)]
pub fn lex(source: &Source, config: &LexerConfig) -> LexedFile {
    let queue = DiagnosticQueue::with_config(config.diagnostics.clone());
    let mut lexer = Lexer::with_config(source, queue, config.clone());
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    let mut fatal = None;

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let done = token.kind == TokenKind::End;
                tokens.push(token);
                if done {
                    break;
                }
            }
            Err(error) => {
                fatal = Some(error);
                break;
            }
        }
    }

    let source_mapping_url = lexer.source_mapping_url().cloned();
    let edition = lexer.edition().cloned();
    let mut queue = lexer.into_sink();
    let dropped_errors = queue.dropped();
    debug!(
        tokens = tokens.len(),
        diagnostics = queue.len(),
        dropped = dropped_errors,
        "lexed file"
    );
    LexedFile {
        ordinal: source.ordinal(),
        tokens,
        diagnostics: queue.flush(),
        dropped_errors,
        fatal,
        source_mapping_url,
        edition,
    }
}

/// Lex many files in parallel; results keep the order of `sources`.
#[tracing::instrument(level = "debug", skip_all, fields(files = sources.len()))]
pub fn lex_many(sources: &[Source], config: &LexerConfig) -> Vec<LexedFile> {
    sources.par_iter().map(|source| lex(source, config)).collect()
}

#[cfg(test)]
mod tests;
