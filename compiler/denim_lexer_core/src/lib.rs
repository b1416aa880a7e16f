//! Low-level scanning primitives for denim.
//!
//! - [`Cursor`]: walks a byte buffer one Unicode code point at a time, with
//!   bounded lookahead backed by a [`PeekCache`] ring buffer.
//! - [`CodePoint`]: a scalar value or one of two sentinels (before start,
//!   end of input).
//! - [`chars`]: whitespace, line-terminator, and identifier classification.
//!
//! Nothing here knows about tokens; that lives in `denim_lexer`.

pub mod chars;
mod code_point;
mod cursor;
mod decode;
mod peek_cache;

pub use code_point::CodePoint;
pub use cursor::Cursor;
pub use decode::decode_at;
pub use peek_cache::PeekCache;
