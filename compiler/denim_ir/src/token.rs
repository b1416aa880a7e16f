//! Lexer output: one [`Token`] per call to the lexer.

mod flags;
mod kind;

use std::borrow::Cow;

pub use flags::TokenFlags;
pub use kind::TokenKind;

use crate::Span;

/// Decoded value attached to literal tokens.
///
/// Floats are stored as `u64` bits so the enum can be `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralValue {
    Int(u64),
    /// `f64` bit pattern. Use [`LiteralValue::float`] and [`LiteralValue::as_f64`].
    Float(u64),
    /// Fully decoded text of a quoted literal, delimiters excluded.
    Text(Box<str>),
}

impl LiteralValue {
    #[inline]
    pub fn float(value: f64) -> Self {
        LiteralValue::Float(value.to_bits())
    }

    /// Numeric value as `f64`, for either numeric variant.
    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "integer literals above 2^53 lose precision exactly like a float parse would"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LiteralValue::Int(v) => Some(*v as f64),
            LiteralValue::Float(bits) => Some(f64::from_bits(*bits)),
            LiteralValue::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LiteralValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A classified slice of source.
///
/// Immutable once returned. The lexeme itself is not stored; use
/// [`Token::text`] with the originating source bytes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first byte of the lexeme.
    pub offset: u32,
    /// Length of the lexeme in bytes.
    pub len: u32,
    /// Decoded literal value. `None` for non-literals and for quoted
    /// literals flagged [`TokenFlags::NEEDS_SLOW_DECODE`].
    pub value: Option<LiteralValue>,
    pub flags: TokenFlags,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, offset: u32, len: u32) -> Self {
        Token {
            kind,
            offset,
            len,
            value: None,
            flags: TokenFlags::empty(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: LiteralValue) -> Self {
        self.value = Some(value);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[inline]
    pub const fn span(&self) -> Span {
        Span::at(self.offset, self.len)
    }

    /// Offset one past the last byte of the lexeme.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset + self.len
    }

    /// Raw lexeme text. Invalid UTF-8 never reaches a token, so this only
    /// allocates when handed the wrong buffer.
    pub fn text<'s>(&self, source: &'s [u8]) -> Cow<'s, str> {
        let range = self.span().to_range();
        String::from_utf8_lossy(source.get(range).unwrap_or_default())
    }

    #[inline]
    pub fn has_newline_before(&self) -> bool {
        self.flags.contains(TokenFlags::NEWLINE_BEFORE)
    }

    #[inline]
    pub fn is_doc_comment(&self) -> bool {
        self.flags.contains(TokenFlags::DOC_COMMENT)
    }

    #[inline]
    pub fn needs_slow_decode(&self) -> bool {
        self.flags.contains(TokenFlags::NEEDS_SLOW_DECODE)
    }
}
