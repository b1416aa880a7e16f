//! Code-point cursor with cached lookahead.
//!
//! The cursor starts *before* the first code point; the first
//! [`advance`](Cursor::advance) decodes it. Once the current code point is
//! [`CodePoint::END`] it stays there. Lookahead never moves the confirmed
//! position, but it does fill the [`PeekCache`] so that the following
//! advances skip decoding.
//!
//! Invariant: `index <= next_offset <= source_len`.

use memchr::memchr3;

use crate::chars::is_line_terminator;
use crate::{decode_at, CodePoint, PeekCache};

/// Iterates Unicode code points over an immutable byte buffer.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    current: CodePoint,
    /// Byte offset of `current`.
    index: u32,
    /// Byte offset immediately after `current`.
    next_offset: u32,
    /// Ordinal of `current` among decoded code points; `0` before start.
    position: u64,
    /// `'\n'` code points advanced over so far.
    newlines: u32,
    cache: PeekCache,
}

impl<'a> Cursor<'a> {
    /// Lookahead distance cached by default.
    pub const DEFAULT_PEEK_CAPACITY: usize = 4;

    /// Create a cursor over `bytes`.
    ///
    /// Offsets are `u32`; anything beyond `u32::MAX` bytes is treated as
    /// truncated, the same way malformed input is.
    pub fn new(bytes: &'a [u8], peek_capacity: usize) -> Self {
        let limit = u32::MAX as usize;
        let bytes = bytes.get(..limit).unwrap_or(bytes);
        Cursor {
            bytes,
            current: CodePoint::BEFORE_START,
            index: 0,
            next_offset: 0,
            position: 0,
            newlines: 0,
            cache: PeekCache::new(peek_capacity),
        }
    }

    #[inline]
    pub fn current(&self) -> CodePoint {
        self.current
    }

    /// Byte offset of the current code point.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Byte offset immediately after the current code point.
    #[inline]
    pub fn next_offset(&self) -> u32 {
        self.next_offset
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_end()
    }

    /// Number of `'\n'` code points seen so far. A sizing hint only.
    #[inline]
    pub fn newline_count(&self) -> u32 {
        self.newlines
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "buffer is capped at u32::MAX bytes in Cursor::new"
    )]
    pub fn source_len(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// Bytes in `[start, end)`, or empty when out of range.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        self.bytes
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Code point at `ordinal`, whose encoding starts at byte `offset`.
    #[inline]
    fn decode(&self, ordinal: u64, offset: u32) -> (CodePoint, u32) {
        if let Some(hit) = self.cache.get(ordinal) {
            return hit;
        }
        let (code_point, width) = decode_at(self.bytes, offset);
        (code_point, offset + width)
    }

    /// Move one code point forward and return the new current code point.
    ///
    /// Returns [`CodePoint::END`] (and stays put) at end of input or on a
    /// malformed sequence.
    #[inline]
    pub fn advance(&mut self) -> CodePoint {
        if self.current.is_end() {
            return CodePoint::END;
        }
        let ordinal = self.position + 1;
        let (code_point, next_offset) = self.decode(ordinal, self.next_offset);
        self.index = self.next_offset;
        self.next_offset = next_offset;
        self.position = ordinal;
        self.current = code_point;
        if code_point.is('\n') {
            self.newlines += 1;
        }
        code_point
    }

    /// Code point `n` positions ahead; `peek(0)` is the current one.
    ///
    /// Distances within the cache capacity are cached, so re-peeking is
    /// cheap. Longer distances are decoded on demand and not cached.
    pub fn peek(&mut self, n: usize) -> CodePoint {
        if n == 0 || self.current.is_end() {
            return self.current;
        }
        let target = self.position + n as u64;
        if let Some((code_point, _)) = self.cache.get(target) {
            return code_point;
        }

        let capacity = self.cache.capacity() as u64;
        let mut offset = self.next_offset;
        let mut code_point = self.current;
        for ordinal in self.position + 1..=target {
            let (decoded, next_offset) = self.decode(ordinal, offset);
            if ordinal - self.position <= capacity {
                self.cache.put(ordinal, decoded, next_offset);
            }
            code_point = decoded;
            offset = next_offset;
            if decoded.is_end() {
                break;
            }
        }
        code_point
    }

    /// Advance while the current code point satisfies `pred`.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.current.is_genuine() && pred(self.current.ch()) {
            self.advance();
        }
    }

    /// Byte-level fast path of [`eat_while`](Self::eat_while) for ASCII runs.
    ///
    /// Stops at the first byte that is non-ASCII or fails `pred`, leaving it
    /// as the current code point for the slow path to inspect.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "runs are bounded by the u32-capped buffer"
    )]
    pub fn eat_ascii_while(&mut self, pred: impl Fn(u8) -> bool) {
        if !self.current.is_genuine() {
            return;
        }
        let start = self.index as usize;
        let rest = self.bytes.get(start..).unwrap_or_default();
        let run = rest.iter().take_while(|&&b| b < 0x80 && pred(b)).count();
        if run == 0 {
            return;
        }
        // The current byte was counted when it was advanced onto.
        let skipped = &rest[1..run];
        self.newlines += memchr::memchr_iter(b'\n', skipped).count() as u32;

        let last = start + run - 1;
        self.position += run as u64 - 1;
        self.index = last as u32;
        self.next_offset = self.index + 1;
        self.current = CodePoint::from_char(char::from(rest[run - 1]));
        self.advance();
    }

    /// Advance until the current code point is a line terminator or the end.
    ///
    /// Uses `memchr` to skip runs that cannot contain a terminator. The skipped
    /// bytes are validated as UTF-8; a malformed sequence ends the input there.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the u32-capped buffer"
    )]
    pub fn eat_until_line_terminator(&mut self) {
        loop {
            if !self.current.is_genuine() || is_line_terminator(self.current.ch()) {
                return;
            }
            let start = self.next_offset as usize;
            let rest = self.bytes.get(start..).unwrap_or_default();
            // U+2028 and U+2029 both begin with 0xE2.
            let stop = memchr3(b'\n', b'\r', 0xE2, rest).unwrap_or(rest.len());
            let valid = match std::str::from_utf8(&rest[..stop]) {
                Ok(_) => stop,
                Err(err) => err.valid_up_to(),
            };

            // Ordinals only key the cache; after clearing it any monotonic
            // renumbering is consistent.
            self.cache.clear();
            self.position += valid as u64 + 1;
            self.jump_to((start + valid) as u32);
        }
    }

    fn jump_to(&mut self, offset: u32) {
        let (code_point, width) = decode_at(self.bytes, offset);
        self.index = offset;
        self.next_offset = offset + width;
        self.current = code_point;
        if code_point.is('\n') {
            self.newlines += 1;
        }
    }
}
