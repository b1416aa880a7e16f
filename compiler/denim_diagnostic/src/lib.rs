//! Diagnostics for the denim front end.
//!
//! The lexer never formats output. It raises structured [`Diagnostic`]s
//! (code, severity, span, message, notes) and hands them to a
//! [`DiagnosticSink`]. Before emission, each span is resolved to a
//! [`MsgLocation`] by a [`LineColumnTracker`], which walks forward or
//! backward from its previous position instead of re-scanning the file.
//!
//! Sinks provided here:
//! - `Vec<Diagnostic>`: collect everything
//! - [`DiagnosticQueue`]: collect with an error limit, flush sorted
//! - [`TracingSink`]: stream to `tracing` events

mod diagnostic;
mod error_code;
mod location;
mod queue;
mod sink;

pub use diagnostic::{Diagnostic, MsgLocation, Note, Severity};
pub use error_code::ErrorCode;
pub use location::{LineColumn, LineColumnTracker};
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::{DiagnosticSink, TracingSink};
