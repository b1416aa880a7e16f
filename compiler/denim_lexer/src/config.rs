//! Lexer configuration.

use denim_diagnostic::DiagnosticConfig;
use denim_lexer_core::Cursor;

/// Knobs for a single lexer instance.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    /// Assert internal invariants and panic on violation.
    pub strict: bool,
    /// Lookahead distance served from the peek cache.
    pub peek_capacity: usize,
    /// Emit comment tokens. When off, comments are skipped like whitespace.
    pub keep_comments: bool,
    /// Limits for the per-file diagnostic queue used by [`lex`](crate::lex).
    pub diagnostics: DiagnosticConfig,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            strict: false,
            peek_capacity: Cursor::DEFAULT_PEEK_CAPACITY,
            keep_comments: true,
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

impl LexerConfig {
    /// Default configuration with invariant assertions enabled.
    pub fn strict() -> Self {
        LexerConfig {
            strict: true,
            ..Self::default()
        }
    }

    /// Set the peek cache capacity; values below 1 are raised to 1.
    #[must_use]
    pub fn with_peek_capacity(mut self, capacity: usize) -> Self {
        self.peek_capacity = capacity.max(1);
        self
    }

    #[must_use]
    pub fn with_keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
