//! Error codes for lexer diagnostics.
//!
//! Each code is a stable identifier (`E0001`) suitable for documentation
//! lookups. The first digit is the compiler phase; `E0xxx` is the lexer.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Malformed number literal
    E0003,
    /// Unterminated character literal
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Unterminated template literal
    E0006,
    /// Unterminated block comment
    E0007,
    /// Misplaced digit separator
    E0008,
    /// Identifier directly after a number literal
    E0009,
    /// Unterminated raw string literal
    E0010,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
        }
    }

    /// One-line summary, used by `--explain`-style tooling.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "malformed number literal",
            ErrorCode::E0004 => "unterminated character literal",
            ErrorCode::E0005 => "invalid escape sequence",
            ErrorCode::E0006 => "unterminated template literal",
            ErrorCode::E0007 => "unterminated block comment",
            ErrorCode::E0008 => "misplaced digit separator",
            ErrorCode::E0009 => "identifier directly after number literal",
            ErrorCode::E0010 => "unterminated raw string literal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
