//! Fixed-capacity lookahead cache.
//!
//! A sliding window keyed by code point ordinal. Slot `ordinal % capacity`
//! holds the most recent entry for that ordinal class; a lookup only hits
//! when the stored ordinal matches exactly, so stale entries left behind
//! as the cursor advances are simply overwritten later.

use crate::CodePoint;

#[derive(Copy, Clone, Debug)]
struct Slot {
    ordinal: u64,
    code_point: CodePoint,
    /// Byte offset immediately after `code_point`.
    next_offset: u32,
}

impl Slot {
    const EMPTY: Slot = Slot {
        ordinal: u64::MAX,
        code_point: CodePoint::END,
        next_offset: 0,
    };
}

/// Ring buffer of decoded lookahead code points.
#[derive(Clone, Debug)]
pub struct PeekCache {
    slots: Box<[Slot]>,
}

impl PeekCache {
    /// Create a cache holding up to `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        PeekCache {
            slots: vec![Slot::EMPTY; capacity.max(1)].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remainder is below capacity, which is a usize"
    )]
    fn slot_index(&self, ordinal: u64) -> usize {
        (ordinal % self.slots.len() as u64) as usize
    }

    /// Cached `(code point, next offset)` for `ordinal`, if present.
    #[inline]
    pub fn get(&self, ordinal: u64) -> Option<(CodePoint, u32)> {
        let slot = self.slots[self.slot_index(ordinal)];
        (slot.ordinal == ordinal).then_some((slot.code_point, slot.next_offset))
    }

    /// Record the code point at `ordinal`, evicting whatever shared its slot.
    #[inline]
    pub fn put(&mut self, ordinal: u64, code_point: CodePoint, next_offset: u32) {
        let index = self.slot_index(ordinal);
        self.slots[index] = Slot {
            ordinal,
            code_point,
            next_offset,
        };
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::EMPTY);
    }
}
