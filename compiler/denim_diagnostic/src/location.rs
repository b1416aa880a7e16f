//! Incremental byte offset to line/column translation.
//!
//! Diagnostics usually arrive in source order and most files have none or
//! one, so building a full line table up front is wasted work. Instead the
//! tracker remembers where its last query landed and walks forward or
//! backward from there. Line start and line end are recomputed lazily and
//! independently: crossing a terminator forward invalidates the line end,
//! crossing one backward invalidates the line start.
//!
//! Line terminators are `\n`, `\r`, U+2028, and U+2029. `\r\n` is one break.

use std::borrow::Cow;

use denim_ir::Span;
use memchr::memchr3;

use crate::MsgLocation;

/// UTF-8 encodings of U+2028 / U+2029 are `E2 80 A8` / `E2 80 A9`.
#[inline]
fn is_separator_at(bytes: &[u8], i: usize) -> bool {
    matches!(bytes.get(i..i + 3), Some([0xE2, 0x80, 0xA8 | 0xA9]))
}

/// Resolved coordinates of one byte offset.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LineColumn {
    /// 1-based line number.
    pub line: u32,
    /// 0-based column, in code points. `offset - line_start` is the byte
    /// column.
    pub column: u32,
    /// Byte offset where the line begins.
    pub line_start: u32,
    /// Byte offset of the line's terminator, or the end of the source.
    pub line_end: u32,
}

/// Bookmark-style cursor over one source for resolving diagnostic positions.
#[derive(Clone, Debug)]
pub struct LineColumnTracker<'a> {
    contents: &'a [u8],
    path: &'a str,
    /// Last visited byte offset.
    offset: usize,
    /// 0-based line valid at `offset`.
    line: u32,
    line_start: usize,
    line_end: usize,
    has_line_start: bool,
    has_line_end: bool,
}

impl<'a> LineColumnTracker<'a> {
    pub fn new(path: &'a str, contents: &'a [u8]) -> Self {
        LineColumnTracker {
            contents,
            path,
            offset: 0,
            line: 0,
            line_start: 0,
            line_end: 0,
            has_line_start: true,
            has_line_end: false,
        }
    }

    /// Resolve `offset` (clamped to the source length).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "diagnostic offsets come from u32 spans"
    )]
    pub fn locate(&mut self, offset: u32) -> LineColumn {
        let offset = (offset as usize).min(self.contents.len());
        self.scan_to(offset);

        if !self.has_line_start {
            self.line_start = self.find_line_start();
            self.has_line_start = true;
        }
        if !self.has_line_end {
            self.line_end = self.find_line_end();
            self.has_line_end = true;
        }

        let prefix = self
            .contents
            .get(self.line_start..offset)
            .unwrap_or_default();
        // Every byte that is not a UTF-8 continuation byte starts a code point.
        let column = prefix.iter().filter(|&&b| b & 0xC0 != 0x80).count();

        LineColumn {
            line: self.line + 1,
            column: column as u32,
            line_start: self.line_start as u32,
            line_end: self.line_end as u32,
        }
    }

    /// Text of the line described by `at`, terminator excluded.
    pub fn line_text(&self, at: &LineColumn) -> Cow<'a, str> {
        let range = at.line_start as usize..at.line_end as usize;
        String::from_utf8_lossy(self.contents.get(range).unwrap_or_default())
    }

    /// Resolve a span into a [`MsgLocation`] ready to attach to a diagnostic.
    pub fn msg_location(&mut self, span: Span) -> MsgLocation {
        let at = self.locate(span.start);
        MsgLocation {
            file: self.path.to_owned(),
            line: at.line,
            column: at.column,
            length: span.len(),
            line_text: self.line_text(&at).into_owned(),
        }
    }

    fn scan_to(&mut self, target: usize) {
        let bytes = self.contents;
        let mut i = self.offset;

        // Forward: every code point starting before `target` is consumed.
        while i < target {
            match bytes[i] {
                b'\n' => {
                    i += 1;
                    self.enter_line(i);
                    if i < 2 || bytes[i - 2] != b'\r' {
                        self.line += 1;
                    }
                }
                b'\r' => {
                    i += 1;
                    self.enter_line(i);
                    self.line += 1;
                }
                0xE2 if is_separator_at(bytes, i) => {
                    i += 3;
                    self.enter_line(i);
                    self.line += 1;
                }
                _ => i += 1,
            }
        }

        // Backward: every code point starting at or after `target` is undone.
        while i > target {
            if i >= 3 && is_separator_at(bytes, i - 3) {
                i -= 3;
                self.leave_line(i);
                self.line = self.line.saturating_sub(1);
                continue;
            }
            i -= 1;
            match bytes[i] {
                b'\n' => {
                    self.leave_line(i);
                    if i == 0 || bytes[i - 1] != b'\r' {
                        self.line = self.line.saturating_sub(1);
                    }
                }
                b'\r' => {
                    self.leave_line(i);
                    self.line = self.line.saturating_sub(1);
                }
                _ => {}
            }
        }

        self.offset = i;
    }

    /// Crossed a terminator going forward; a new line begins at `start`.
    #[inline]
    fn enter_line(&mut self, start: usize) {
        self.has_line_start = true;
        self.has_line_end = false;
        self.line_start = start;
    }

    /// Crossed a terminator going backward; the previous line ends at `end`.
    #[inline]
    fn leave_line(&mut self, end: usize) {
        self.has_line_start = false;
        self.has_line_end = true;
        self.line_end = end;
    }

    fn find_line_start(&self) -> usize {
        let bytes = self.contents;
        let mut i = self.offset;
        while i > 0 {
            if matches!(bytes[i - 1], b'\n' | b'\r') || (i >= 3 && is_separator_at(bytes, i - 3)) {
                break;
            }
            i -= 1;
        }
        i
    }

    fn find_line_end(&self) -> usize {
        let bytes = self.contents;
        let mut i = self.offset;
        while let Some(found) = memchr3(b'\n', b'\r', 0xE2, &bytes[i..]) {
            let at = i + found;
            if bytes[at] != 0xE2 || is_separator_at(bytes, at) {
                return at;
            }
            i = at + 1;
        }
        bytes.len()
    }
}
