//! On-demand decoding of quoted literals.
//!
//! The lexer only records `NEEDS_SLOW_DECODE` for bodies with escapes or
//! non-ASCII text. [`decode_literal`] does the real work when a value is
//! actually requested.
//!
//! Escapes: `\n` `\t` `\r` `\0` `\\` `\"` `\'` `` \` `` `\{` `\}`,
//! `\xHH` (at most `7F`), `\u{H..}` (1 to 6 hex digits), and a backslash
//! before a line terminator, which removes both.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::CharIndices;

use denim_ir::{Span, Token, TokenFlags, TokenKind};

use crate::lex_error::{EscapeError, EscapeErrorKind};

/// Decode the text of a quoted literal token.
///
/// Borrows from `source` when no escape needs rewriting. A `CharLiteral`
/// must decode to exactly one code point.
pub fn decode_literal<'s>(source: &'s [u8], token: &Token) -> Result<Cow<'s, str>, EscapeError> {
    if !token.kind.is_quoted() {
        return Err(EscapeError::new(
            EscapeErrorKind::NotQuoted(token.kind.display_name()),
            token.span(),
        ));
    }
    let content = content_span(source, token);
    let text = source
        .get(content.to_range())
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .ok_or_else(|| EscapeError::new(EscapeErrorKind::InvalidUtf8, token.span()))?;

    let decoded = if token.flags.contains(TokenFlags::RAW) || !text.contains('\\') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(unescape(text, content.start)?)
    };

    if token.kind == TokenKind::CharLiteral {
        let count = decoded.chars().count();
        if count != 1 {
            return Err(EscapeError::new(EscapeErrorKind::CharLength(count), token.span()));
        }
    }
    Ok(decoded)
}

/// Span of a literal's body, without its delimiters.
#[allow(
    clippy::cast_possible_truncation,
    reason = "delimiter runs are bounded by the u32-capped token length"
)]
fn content_span(source: &[u8], token: &Token) -> Span {
    let start = token.offset as usize;
    let (open, close) = if token.flags.contains(TokenFlags::RAW) {
        let hashes = source
            .get(start + 1..)
            .unwrap_or_default()
            .iter()
            .take_while(|&&b| b == b'#')
            .count() as u32;
        // r###" ... "###
        (hashes + 2, hashes + 1)
    } else if token.flags.contains(TokenFlags::MULTI_LINE) && source.get(start) == Some(&b'"') {
        (3, 3)
    } else {
        (1, 1)
    };
    let content_start = (token.offset + open).min(token.end());
    let content_end = token.end().saturating_sub(close).max(content_start);
    Span::new(content_start, content_end)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "literal bodies are bounded by the u32-capped source"
)]
fn unescape(text: &str, base: u32) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escape_start = base + i as u32;
        let Some((j, escaped)) = chars.next() else {
            return Err(EscapeError::new(
                EscapeErrorKind::InvalidEscape('\\'),
                Span::at(escape_start, 1),
            ));
        };
        let simple_end = base + (j + escaped.len_utf8()) as u32;
        let resolved = match escaped {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' | '"' | '\'' | '`' | '{' | '}' => escaped,
            '\r' => {
                chars.next_if(|&(_, c)| c == '\n');
                continue;
            }
            '\n' | '\u{2028}' | '\u{2029}' => continue,
            'x' => hex_escape(&mut chars, escape_start, base)?,
            'u' => unicode_escape(&mut chars, escape_start, base)?,
            other => {
                return Err(EscapeError::new(
                    EscapeErrorKind::InvalidEscape(other),
                    Span::new(escape_start, simple_end),
                ));
            }
        };
        out.push(resolved);
    }
    Ok(out)
}

/// `\xHH` after the `x`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "literal bodies are bounded by the u32-capped source"
)]
fn hex_escape(
    chars: &mut Peekable<CharIndices<'_>>,
    escape_start: u32,
    base: u32,
) -> Result<char, EscapeError> {
    let mut value: u8 = 0;
    let mut end = escape_start + 2;
    for _ in 0..2 {
        let digit = chars.next_if(|&(_, c)| c.is_ascii_hexdigit());
        let Some((k, c)) = digit else {
            return Err(EscapeError::new(
                EscapeErrorKind::InvalidHexEscape,
                Span::new(escape_start, end),
            ));
        };
        value = value * 16 + c.to_digit(16).unwrap_or_default() as u8;
        end = base + k as u32 + 1;
    }
    if value > 0x7F {
        return Err(EscapeError::new(
            EscapeErrorKind::InvalidHexEscape,
            Span::new(escape_start, end),
        ));
    }
    Ok(char::from(value))
}

/// `\u{H..}` after the `u`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "literal bodies are bounded by the u32-capped source"
)]
fn unicode_escape(
    chars: &mut Peekable<CharIndices<'_>>,
    escape_start: u32,
    base: u32,
) -> Result<char, EscapeError> {
    let invalid = |end: u32| {
        EscapeError::new(EscapeErrorKind::InvalidUnicodeEscape, Span::new(escape_start, end))
    };
    let mut end = escape_start + 2;
    if chars.next_if(|&(_, c)| c == '{').is_none() {
        return Err(invalid(end));
    }
    end += 1;

    let mut value = 0u32;
    let mut digits = 0;
    while let Some((k, c)) = chars.next_if(|&(_, c)| c.is_ascii_hexdigit()) {
        digits += 1;
        end = base + k as u32 + 1;
        if digits > 6 {
            return Err(invalid(end));
        }
        value = value * 16 + c.to_digit(16).unwrap_or_default();
    }
    match chars.next_if(|&(_, c)| c == '}') {
        Some((k, _)) if digits > 0 => {
            end = base + k as u32 + 1;
            char::from_u32(value).ok_or_else(|| invalid(end))
        }
        _ => Err(invalid(end)),
    }
}
