//! Character classes shared by the lexer and tooling.
//!
//! ASCII lookups go through static tables; everything else defers to
//! `unicode-ident` (UAX #31 `XID_Start` / `XID_Continue`).

static IS_IDENT_START_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0u8;
    while i < 128 {
        table[i as usize] = matches!(i, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

static IS_IDENT_CONTINUE_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0u8;
    while i < 128 {
        table[i as usize] = matches!(i, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

/// ASCII byte that may start an identifier.
#[inline]
pub fn is_ascii_ident_start(b: u8) -> bool {
    b < 128 && IS_IDENT_START_TABLE[b as usize]
}

/// ASCII byte that may continue an identifier.
#[inline]
pub fn is_ascii_ident_continue(b: u8) -> bool {
    b < 128 && IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// `_`, ASCII letters, or any `XID_Start` code point.
#[inline]
#[allow(clippy::cast_possible_truncation, reason = "ASCII checked first")]
pub fn is_ident_start(c: char) -> bool {
    if c.is_ascii() {
        is_ascii_ident_start(c as u8)
    } else {
        unicode_ident::is_xid_start(c)
    }
}

/// `_`, ASCII alphanumerics, or any `XID_Continue` code point.
#[inline]
#[allow(clippy::cast_possible_truncation, reason = "ASCII checked first")]
pub fn is_ident_continue(c: char) -> bool {
    if c.is_ascii() {
        is_ascii_ident_continue(c as u8)
    } else {
        unicode_ident::is_xid_continue(c)
    }
}

/// Code points that end a line.
///
/// `\r\n` is two line terminators here; callers that count lines treat
/// the pair as one break.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whitespace skipped between tokens, line terminators included.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}' // line tabulation
            | '\u{000C}' // form feed
            | '\r'
            | ' '
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // en quad through hair space
            | '\u{2028}' // line separator
            | '\u{2029}' // paragraph separator
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // zero width no-break space (BOM)
    )
}

#[cfg(test)]
mod tests;
