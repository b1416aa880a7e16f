//! Lexer for the denim language.
//!
//! [`Lexer`] is a pull-based state machine: the parser calls
//! [`Lexer::next_token`] and gets one [`Token`](denim_ir::Token) back.
//! Recoverable problems (an unknown character, an identifier glued to a
//! number) become `SyntaxError` tokens; fatal ones (unterminated literals and
//! comments, malformed numbers) are reported and returned as [`LexError`],
//! after which the lexer only produces `End`.
//!
//! Quoted literals are decoded lazily: tokens flagged `NEEDS_SLOW_DECODE`
//! are turned into text with [`decode_literal`].
//!
//! [`lex`] and [`lex_many`] drive a lexer over whole files.

mod batch;
mod comments;
mod config;
mod escape;
mod keywords;
mod lex_error;
mod lexer;
mod numeric;
mod pragma;
mod quoted;

#[cfg(test)]
mod test_support;

pub use batch::{lex, lex_many, LexedFile};
pub use config::LexerConfig;
pub use escape::decode_literal;
pub use lex_error::{EscapeError, EscapeErrorKind, LexError, LexErrorKind};
pub use lexer::Lexer;
pub use numeric::FAST_PATH_DIGITS;
pub use pragma::{scan_for_pragma_arg, PragmaArg, PragmaMode};
