//! Single code point UTF-8 decoding.

use crate::CodePoint;

/// Width of a UTF-8 sequence from its leading byte; zero when the byte
/// cannot start a sequence.
#[inline]
const fn utf8_sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode the code point starting at byte `offset` of `bytes`.
///
/// Returns the code point and its width in bytes. End of input and malformed
/// sequences both decode to [`CodePoint::END`] with width zero, so a scan
/// stops at the first invalid byte.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "UTF-8 sequences are at most 4 bytes"
)]
pub fn decode_at(bytes: &[u8], offset: u32) -> (CodePoint, u32) {
    let offset = offset as usize;
    let Some(&lead) = bytes.get(offset) else {
        return (CodePoint::END, 0);
    };
    if lead < 0x80 {
        return (CodePoint::from_char(lead as char), 1);
    }
    let width = utf8_sequence_width(lead);
    let Some(seq) = bytes.get(offset..offset + width) else {
        return (CodePoint::END, 0);
    };
    // std's validator rejects overlong forms and surrogates for us.
    match std::str::from_utf8(seq).ok().and_then(|s| s.chars().next()) {
        Some(c) if width > 0 => (CodePoint::from_char(c), width as u32),
        _ => (CodePoint::END, 0),
    }
}
