//! Structured, positioned messages.

use std::fmt;

use denim_ir::Span;
use smallvec::SmallVec;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A span resolved to human-readable coordinates.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MsgLocation {
    /// Display path of the file.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column, in code points from the start of the line.
    ///
    /// Not a byte offset: index `line_text` with `chars().nth(column)`.
    pub column: u32,
    /// Length of the highlighted range in bytes.
    pub length: u32,
    /// Full text of the line containing the range, terminator excluded.
    pub line_text: String,
}

impl fmt::Display for MsgLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns are printed 1-based, matching editors.
        write!(f, "{}:{}:{}", self.file, self.line, self.column + 1)
    }
}

/// Secondary message attached to a diagnostic, e.g. "comment started here".
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Note {
    pub span: Option<Span>,
    pub message: String,
    pub location: Option<MsgLocation>,
}

impl Note {
    pub fn new(message: impl Into<String>) -> Self {
        Note {
            span: None,
            message: message.into(),
            location: None,
        }
    }

    pub fn at(span: Span, message: impl Into<String>) -> Self {
        Note {
            span: Some(span),
            message: message.into(),
            location: None,
        }
    }
}

/// A positioned message for the user.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be emitted, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    /// Offending byte range.
    pub span: Span,
    pub message: String,
    /// Almost always zero or one note.
    pub notes: SmallVec<[Note; 1]>,
    /// Filled in from the span before emission when a tracker is available.
    pub location: Option<MsgLocation>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity, span: Span) -> Self {
        Diagnostic {
            code,
            severity,
            span,
            message: String::new(),
            notes: SmallVec::new(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode, span: Span) -> Self {
        Self::new_with_severity(code, Severity::Error, span)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode, span: Span) -> Self {
        Self::new_with_severity(code, Severity::Warning, span)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_location(mut self, location: MsgLocation) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for note in &self.notes {
            write!(f, "\n  ")?;
            if let Some(location) = &note.location {
                write!(f, "{location}: ")?;
            }
            write!(f, "note: {}", note.message)?;
        }
        Ok(())
    }
}
