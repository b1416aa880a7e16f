use pretty_assertions::assert_eq;

use super::*;

#[test]
fn ascii_identifier_classes() {
    assert!(is_ident_start('a'));
    assert!(is_ident_start('Z'));
    assert!(is_ident_start('_'));
    assert!(!is_ident_start('7'));
    assert!(is_ident_continue('7'));
    assert!(!is_ident_continue('-'));
    assert!(!is_ident_start('$'));
}

#[test]
fn unicode_identifier_classes() {
    assert!(is_ident_start('é'));
    assert!(is_ident_start('变'));
    assert!(is_ident_continue('\u{0301}')); // combining acute accent
    assert!(!is_ident_start('\u{0301}'));
    assert!(!is_ident_start('😀'));
}

#[test]
fn byte_tables_match_char_tables() {
    for b in 0u8..128 {
        assert_eq!(is_ascii_ident_start(b), is_ident_start(b as char), "{b}");
        assert_eq!(is_ascii_ident_continue(b), is_ident_continue(b as char), "{b}");
    }
    assert!(!is_ascii_ident_start(0xC3));
    assert!(!is_ascii_ident_continue(0xC3));
}

#[test]
fn line_terminators_are_whitespace() {
    for c in ['\n', '\r', '\u{2028}', '\u{2029}'] {
        assert!(is_line_terminator(c));
        assert!(is_whitespace(c));
    }
    assert!(!is_line_terminator(' '));
}

#[test]
fn unicode_space_separators() {
    assert!(is_whitespace('\u{3000}'));
    assert!(is_whitespace('\u{2005}'));
    assert!(is_whitespace('\u{FEFF}'));
    assert!(!is_whitespace('\u{200B}')); // zero width space is not Space_Separator
    assert!(!is_whitespace('a'));
}
