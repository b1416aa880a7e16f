//! Diagnostic queue with an error limit.
//!
//! The lexer already suppresses repeats at an identical offset; the queue
//! adds the policy layer on top: cap the number of errors kept and hand
//! them back in source order.

use crate::{Diagnostic, DiagnosticSink};

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited). Warnings and notes
    /// are never dropped.
    pub error_limit: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig { error_limit: 10 }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig { error_limit: 0 }
    }
}

/// Collects diagnostics for one file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    /// Errors rejected because the limit was reached.
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Whether the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics in arrival order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take every diagnostic, sorted by position (stable for ties).
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| (d.span.start, d.span.end));
        self.error_count = 0;
        self.dropped = 0;
        out
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            if self.limit_reached() {
                self.dropped += 1;
                tracing::trace!(code = diagnostic.code.as_str(), "error limit reached, dropping");
                return;
            }
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }
}
