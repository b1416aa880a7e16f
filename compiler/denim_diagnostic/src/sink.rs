//! Destinations for emitted diagnostics.

use crate::{Diagnostic, Severity};

/// Receives diagnostics as they are raised.
///
/// Whether a sink buffers or streams is its own business; the lexer only
/// calls [`emit`](DiagnosticSink::emit).
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Streams diagnostics to `tracing` instead of storing them.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let code = diagnostic.code.as_str();
        match diagnostic.severity {
            Severity::Error => tracing::error!(code, "{diagnostic}"),
            Severity::Warning => tracing::warn!(code, "{diagnostic}"),
            Severity::Note => tracing::info!(code, "{diagnostic}"),
        }
    }
}
