use std::fmt;

/// A decoded Unicode scalar value, or a sentinel.
///
/// Negative values are reserved: [`CodePoint::BEFORE_START`] before the first
/// advance and [`CodePoint::END`] once input is exhausted (or malformed).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct CodePoint(i32);

impl CodePoint {
    /// The cursor has not advanced yet.
    pub const BEFORE_START: CodePoint = CodePoint(-1);
    /// No more input.
    pub const END: CodePoint = CodePoint(-2);

    #[inline]
    pub const fn from_char(c: char) -> Self {
        CodePoint(c as i32)
    }

    /// `true` for a real scalar value, `false` for either sentinel.
    #[inline]
    pub const fn is_genuine(self) -> bool {
        self.0 >= 0
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        self.0 == CodePoint::END.0
    }

    #[inline]
    #[allow(
        clippy::cast_sign_loss,
        reason = "guarded by the non-negative check"
    )]
    pub fn to_char(self) -> Option<char> {
        if self.0 < 0 {
            None
        } else {
            char::from_u32(self.0 as u32)
        }
    }

    /// The scalar value, with sentinels mapped to `'\0'`.
    ///
    /// Convenient for `match`; callers that care must check [`is_end`]
    /// before treating `'\0'` as a real NUL.
    ///
    /// [`is_end`]: CodePoint::is_end
    #[inline]
    pub fn ch(self) -> char {
        self.to_char().unwrap_or('\0')
    }

    #[inline]
    pub const fn is(self, c: char) -> bool {
        self.0 == c as i32
    }

    #[inline]
    pub const fn is_ascii_digit(self) -> bool {
        self.0 >= '0' as i32 && self.0 <= '9' as i32
    }

    /// Width of this code point when encoded as UTF-8; zero for sentinels.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    pub fn len_utf8(self) -> u32 {
        self.to_char().map_or(0, |c| c.len_utf8() as u32)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint::from_char(c)
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CodePoint::BEFORE_START => f.write_str("BEFORE_START"),
            CodePoint::END => f.write_str("END"),
            cp => write!(f, "{:?}", cp.ch()),
        }
    }
}
