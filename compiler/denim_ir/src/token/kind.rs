//! The closed set of token categories.

use std::fmt;

/// Every kind of token the lexer can produce.
///
/// Keywords get one variant each so the parser can match on them directly
/// without re-inspecting identifier text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // ─── Control ───
    /// End of input. Returned forever once reached.
    End,
    /// Unrecognized input; a diagnostic has already been reported.
    SyntaxError,
    /// `#!...` on the first line of a file.
    Hashbang,

    // ─── Comments ───
    /// `// ...`
    LineComment,
    /// `/* ... */`, possibly nested.
    BlockComment,

    // ─── Literals ───
    IntLiteral,
    FloatLiteral,
    /// `'c'`
    CharLiteral,
    /// `"..."`, `"""..."""`, `r#"..."#`, or a template without interpolation.
    StringLiteral,
    /// `` `text{ ``
    TemplateHead,
    /// `}text{`
    TemplateMiddle,
    /// `` }text` ``
    TemplateTail,

    // ─── Punctuation ───
    Ampersand,
    AmpersandAmpersand,
    Asterisk,
    AsteriskAsterisk,
    At,
    Bar,
    BarBar,
    CloseBrace,
    CloseBracket,
    CloseParen,
    Colon,
    Comma,
    Dot,
    DotDot,
    DotDotDot,
    Equals,
    EqualsEquals,
    EqualsGreaterThan,
    Exclamation,
    ExclamationEquals,
    GreaterThan,
    GreaterThanEquals,
    LessThan,
    LessThanEquals,
    Minus,
    MinusGreaterThan,
    OpenBrace,
    OpenBracket,
    OpenParen,
    Percent,
    Plus,
    Question,
    QuestionDot,
    QuestionQuestion,
    Semicolon,
    Slash,
    TildeSlash,

    // ─── Names ───
    Identifier,
    /// `r#fn`: a keyword spelled so it can be used as an identifier.
    EscapedKeyword,

    // ─── Keywords ───
    As,
    Async,
    Await,
    Break,
    Continue,
    Else,
    Enum,
    Extern,
    False,
    Fn,
    For,
    Fork,
    From,
    If,
    Impl,
    In,
    Is,
    Let,
    Loop,
    Match,
    Mod,
    Pub,
    Return,
    /// `self`
    SelfValue,
    /// `Self`
    SelfType,
    Show,
    Struct,
    Tandem,
    Trait,
    True,
    Try,
    Type,
    Unknown,
    Use,
    Void,
    Where,
    While,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::End => "end of file",
            TokenKind::SyntaxError => "syntax error",
            TokenKind::Hashbang => "hashbang",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::TemplateHead => "template head",
            TokenKind::TemplateMiddle => "template middle",
            TokenKind::TemplateTail => "template tail",
            TokenKind::Ampersand => "`&`",
            TokenKind::AmpersandAmpersand => "`&&`",
            TokenKind::Asterisk => "`*`",
            TokenKind::AsteriskAsterisk => "`**`",
            TokenKind::At => "`@`",
            TokenKind::Bar => "`|`",
            TokenKind::BarBar => "`||`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::DotDot => "`..`",
            TokenKind::DotDotDot => "`...`",
            TokenKind::Equals => "`=`",
            TokenKind::EqualsEquals => "`==`",
            TokenKind::EqualsGreaterThan => "`=>`",
            TokenKind::Exclamation => "`!`",
            TokenKind::ExclamationEquals => "`!=`",
            TokenKind::GreaterThan => "`>`",
            TokenKind::GreaterThanEquals => "`>=`",
            TokenKind::LessThan => "`<`",
            TokenKind::LessThanEquals => "`<=`",
            TokenKind::Minus => "`-`",
            TokenKind::MinusGreaterThan => "`->`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::OpenParen => "`(`",
            TokenKind::Percent => "`%`",
            TokenKind::Plus => "`+`",
            TokenKind::Question => "`?`",
            TokenKind::QuestionDot => "`?.`",
            TokenKind::QuestionQuestion => "`??`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Slash => "`/`",
            TokenKind::TildeSlash => "`~/`",
            TokenKind::Identifier => "identifier",
            TokenKind::EscapedKeyword => "escaped keyword",
            TokenKind::As => "`as`",
            TokenKind::Async => "`async`",
            TokenKind::Await => "`await`",
            TokenKind::Break => "`break`",
            TokenKind::Continue => "`continue`",
            TokenKind::Else => "`else`",
            TokenKind::Enum => "`enum`",
            TokenKind::Extern => "`extern`",
            TokenKind::False => "`false`",
            TokenKind::Fn => "`fn`",
            TokenKind::For => "`for`",
            TokenKind::Fork => "`fork`",
            TokenKind::From => "`from`",
            TokenKind::If => "`if`",
            TokenKind::Impl => "`impl`",
            TokenKind::In => "`in`",
            TokenKind::Is => "`is`",
            TokenKind::Let => "`let`",
            TokenKind::Loop => "`loop`",
            TokenKind::Match => "`match`",
            TokenKind::Mod => "`mod`",
            TokenKind::Pub => "`pub`",
            TokenKind::Return => "`return`",
            TokenKind::SelfValue => "`self`",
            TokenKind::SelfType => "`Self`",
            TokenKind::Show => "`show`",
            TokenKind::Struct => "`struct`",
            TokenKind::Tandem => "`tandem`",
            TokenKind::Trait => "`trait`",
            TokenKind::True => "`true`",
            TokenKind::Try => "`try`",
            TokenKind::Type => "`type`",
            TokenKind::Unknown => "`unknown`",
            TokenKind::Use => "`use`",
            TokenKind::Void => "`void`",
            TokenKind::Where => "`where`",
            TokenKind::While => "`while`",
        }
    }

    /// Check if this is a reserved keyword.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::As as u8)
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Check if this token carries a [`LiteralValue`](crate::LiteralValue).
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::TemplateHead
                | TokenKind::TemplateMiddle
                | TokenKind::TemplateTail
        )
    }

    /// Check if this token is a quoted literal whose text may need decoding.
    #[inline]
    pub const fn is_quoted(self) -> bool {
        self.is_literal() && !matches!(self, TokenKind::IntLiteral | TokenKind::FloatLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
