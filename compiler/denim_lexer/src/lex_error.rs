//! Fatal lexer errors.
//!
//! A [`LexError`] ends the scan of the current file. It is reported to the
//! diagnostic sink and also returned from `next_token`, so control flow is
//! visible in signatures. Recoverable problems never become a `LexError`;
//! they produce a `SyntaxError` token instead.

use denim_diagnostic::ErrorCode;
use denim_ir::Span;
use thiserror::Error;

/// A fatal lexer error: WHERE (`span`) and WHAT (`kind`).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Quoted Literals ===
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated character literal")]
    UnterminatedChar,
    #[error("Unterminated template literal")]
    UnterminatedTemplate,
    #[error("Unterminated raw string literal")]
    UnterminatedRawString,
    /// `r#` not followed by more `#` or a `"`.
    #[error("Expected '\"' to start raw string literal")]
    InvalidRawStringStart,

    // === Comments ===
    #[error("Expected \"*/\" to terminate block comment")]
    UnterminatedBlockComment,

    // === Numeric Literals ===
    /// `07`: legacy octal.
    #[error("Leading zero in number literal; use \"0o\" for octal")]
    LeadingZero,
    /// `0x` with no digits after the prefix.
    #[error("Expected digits after \"{prefix}\"")]
    MissingDigits { prefix: &'static str },
    #[error("Invalid digit {digit:?} in base-{radix} literal")]
    InvalidDigit { digit: char, radix: u32 },
    /// `1e+` with no digits.
    #[error("Expected digits in exponent")]
    MissingExponentDigits,
    /// `0x_1`: a digit group may not start with `_`.
    #[error("Number literal digit group cannot start with \"_\"")]
    LeadingUnderscore,
    /// `1__000`
    #[error("Number literal cannot contain consecutive \"_\"")]
    ConsecutiveUnderscores,
    /// `100_`
    #[error("Number literal cannot end with \"_\"")]
    TrailingUnderscore,
    #[error("Malformed number literal")]
    MalformedNumber,
}

impl LexErrorKind {
    /// Diagnostic code reported for this kind.
    pub const fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedChar => ErrorCode::E0004,
            LexErrorKind::UnterminatedTemplate => ErrorCode::E0006,
            LexErrorKind::UnterminatedRawString | LexErrorKind::InvalidRawStringStart => {
                ErrorCode::E0010
            }
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0007,
            LexErrorKind::LeadingUnderscore
            | LexErrorKind::ConsecutiveUnderscores
            | LexErrorKind::TrailingUnderscore => ErrorCode::E0008,
            LexErrorKind::LeadingZero
            | LexErrorKind::MissingDigits { .. }
            | LexErrorKind::InvalidDigit { .. }
            | LexErrorKind::MissingExponentDigits
            | LexErrorKind::MalformedNumber => ErrorCode::E0003,
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    #[cold]
    pub fn unterminated_block_comment(at: u32) -> Self {
        Self::new(LexErrorKind::UnterminatedBlockComment, Span::point(at))
    }

    #[cold]
    pub fn leading_zero(span: Span) -> Self {
        Self::new(LexErrorKind::LeadingZero, span)
    }

    #[cold]
    pub fn missing_digits(prefix: &'static str, at: u32) -> Self {
        Self::new(LexErrorKind::MissingDigits { prefix }, Span::point(at))
    }

    #[cold]
    pub fn invalid_digit(digit: char, radix: u32, span: Span) -> Self {
        Self::new(LexErrorKind::InvalidDigit { digit, radix }, span)
    }

    #[cold]
    pub fn missing_exponent_digits(at: u32) -> Self {
        Self::new(LexErrorKind::MissingExponentDigits, Span::point(at))
    }

    #[cold]
    pub fn leading_underscore(at: u32) -> Self {
        Self::new(LexErrorKind::LeadingUnderscore, Span::at(at, 1))
    }

    #[cold]
    pub fn consecutive_underscores(at: u32) -> Self {
        Self::new(LexErrorKind::ConsecutiveUnderscores, Span::at(at, 1))
    }

    #[cold]
    pub fn trailing_underscore(at: u32) -> Self {
        Self::new(LexErrorKind::TrailingUnderscore, Span::at(at, 1))
    }

    #[cold]
    pub fn malformed_number(span: Span) -> Self {
        Self::new(LexErrorKind::MalformedNumber, span)
    }
}

/// Error from decoding a quoted literal's escapes on demand.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct EscapeError {
    pub span: Span,
    pub kind: EscapeErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum EscapeErrorKind {
    #[error("Invalid escape sequence \"\\{0}\"")]
    InvalidEscape(char),
    /// `\x` must be followed by two hex digits no greater than `7F`.
    #[error("Invalid hex escape; expected \"\\x00\" through \"\\x7F\"")]
    InvalidHexEscape,
    #[error("Invalid unicode escape; expected \"\\u{{...}}\" with 1 to 6 hex digits")]
    InvalidUnicodeEscape,
    #[error("Character literal must contain exactly one character, found {0}")]
    CharLength(usize),
    #[error("Source text is not valid UTF-8")]
    InvalidUtf8,
    #[error("{0} has no text to decode")]
    NotQuoted(&'static str),
}

impl EscapeError {
    #[cold]
    pub fn new(kind: EscapeErrorKind, span: Span) -> Self {
        EscapeError { span, kind }
    }
}
