//! Reserved keyword table.
//!
//! Length-bucketed lookup: identifiers whose length falls outside the 2-8
//! range are rejected without any comparison, then only the keywords of the
//! matching length are compared. Matching is exact and case-sensitive.

use denim_ir::TokenKind;

/// Look up a reserved keyword by its raw bytes.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    if !(2..=8).contains(&text.len()) || !text[0].is_ascii_alphabetic() {
        return None;
    }

    match text.len() {
        2 => match text {
            b"as" => Some(TokenKind::As),
            b"fn" => Some(TokenKind::Fn),
            b"if" => Some(TokenKind::If),
            b"in" => Some(TokenKind::In),
            b"is" => Some(TokenKind::Is),
            _ => None,
        },
        3 => match text {
            b"for" => Some(TokenKind::For),
            b"let" => Some(TokenKind::Let),
            b"mod" => Some(TokenKind::Mod),
            b"pub" => Some(TokenKind::Pub),
            b"try" => Some(TokenKind::Try),
            b"use" => Some(TokenKind::Use),
            _ => None,
        },
        4 => match text {
            b"Self" => Some(TokenKind::SelfType),
            b"else" => Some(TokenKind::Else),
            b"enum" => Some(TokenKind::Enum),
            b"fork" => Some(TokenKind::Fork),
            b"from" => Some(TokenKind::From),
            b"impl" => Some(TokenKind::Impl),
            b"loop" => Some(TokenKind::Loop),
            b"self" => Some(TokenKind::SelfValue),
            b"show" => Some(TokenKind::Show),
            b"true" => Some(TokenKind::True),
            b"type" => Some(TokenKind::Type),
            b"void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match text {
            b"async" => Some(TokenKind::Async),
            b"await" => Some(TokenKind::Await),
            b"break" => Some(TokenKind::Break),
            b"false" => Some(TokenKind::False),
            b"match" => Some(TokenKind::Match),
            b"trait" => Some(TokenKind::Trait),
            b"where" => Some(TokenKind::Where),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            b"extern" => Some(TokenKind::Extern),
            b"return" => Some(TokenKind::Return),
            b"struct" => Some(TokenKind::Struct),
            b"tandem" => Some(TokenKind::Tandem),
            _ => None,
        },
        7 => match text {
            b"unknown" => Some(TokenKind::Unknown),
            _ => None,
        },
        8 => match text {
            b"continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
