use super::*;

#[test]
fn every_keyword_resolves() {
    let cases = [
        ("as", TokenKind::As),
        ("async", TokenKind::Async),
        ("await", TokenKind::Await),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("else", TokenKind::Else),
        ("enum", TokenKind::Enum),
        ("extern", TokenKind::Extern),
        ("false", TokenKind::False),
        ("fn", TokenKind::Fn),
        ("for", TokenKind::For),
        ("fork", TokenKind::Fork),
        ("from", TokenKind::From),
        ("if", TokenKind::If),
        ("impl", TokenKind::Impl),
        ("in", TokenKind::In),
        ("is", TokenKind::Is),
        ("let", TokenKind::Let),
        ("loop", TokenKind::Loop),
        ("match", TokenKind::Match),
        ("mod", TokenKind::Mod),
        ("pub", TokenKind::Pub),
        ("return", TokenKind::Return),
        ("self", TokenKind::SelfValue),
        ("Self", TokenKind::SelfType),
        ("show", TokenKind::Show),
        ("struct", TokenKind::Struct),
        ("tandem", TokenKind::Tandem),
        ("trait", TokenKind::Trait),
        ("true", TokenKind::True),
        ("try", TokenKind::Try),
        ("type", TokenKind::Type),
        ("unknown", TokenKind::Unknown),
        ("use", TokenKind::Use),
        ("void", TokenKind::Void),
        ("where", TokenKind::Where),
        ("while", TokenKind::While),
    ];
    for (text, kind) in cases {
        assert_eq!(lookup(text.as_bytes()), Some(kind), "{text}");
        assert!(kind.is_keyword(), "{kind:?}");
    }
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(lookup(b"Let"), None);
    assert_eq!(lookup(b"SELF"), None);
    assert_eq!(lookup(b"sElf"), None);
}

#[test]
fn non_keywords_are_rejected() {
    for text in ["", "x", "lets", "fnord", "continues", "_if", "iff", "structs"] {
        assert_eq!(lookup(text.as_bytes()), None, "{text}");
    }
}
