//! denim IR - types shared by every stage of the denim front end.
//!
//! This crate is intentionally small:
//! - [`Span`] for byte ranges within a source file
//! - [`Source`] for the immutable buffer being compiled
//! - [`Token`], [`TokenKind`], [`TokenFlags`], and [`LiteralValue`] for lexer output
//!
//! Every type is cheap to clone and carries `Eq + Hash`. Types that hold
//! floats store them as `u64` bits so equality stays total.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod source;
mod span;
mod token;

pub use source::Source;
pub use span::Span;
pub use token::{LiteralValue, Token, TokenFlags, TokenKind};
