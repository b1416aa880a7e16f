//! Immutable source files handed to the lexer.

use std::fmt;
use std::sync::Arc;

/// One file's worth of source bytes.
///
/// The buffer is shared (`Arc`) so sources can be cloned into parallel jobs
/// without copying. Nothing in the front end ever mutates it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Source {
    /// Path shown to users in diagnostics.
    path: Arc<str>,
    contents: Arc<[u8]>,
    /// Position of this file within the current compilation.
    ordinal: u32,
}

impl Source {
    pub fn new(path: impl Into<Arc<str>>, contents: impl Into<Arc<[u8]>>, ordinal: u32) -> Self {
        Source {
            path: path.into(),
            contents: contents.into(),
            ordinal,
        }
    }

    /// Create an anonymous source from text, mostly for tests and tooling.
    pub fn from_text(text: &str) -> Self {
        Source::new("<input>", text.as_bytes(), 0)
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.contents
    }

    #[inline]
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("path", &self.path)
            .field("ordinal", &self.ordinal)
            .field("len", &self.contents.len())
            .finish()
    }
}
