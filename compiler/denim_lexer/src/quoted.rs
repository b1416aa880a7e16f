//! Quoted literals: strings, characters, raw strings, and templates.
//!
//! A body without escapes or non-ASCII text is decoded on the spot into the
//! token's value. Anything else only records `NEEDS_SLOW_DECODE`; the text
//! is decoded later with [`decode_literal`](crate::decode_literal).

use denim_diagnostic::DiagnosticSink;
use denim_ir::{LiteralValue, Span, Token, TokenFlags, TokenKind};
use denim_lexer_core::chars::is_line_terminator;

use crate::lex_error::LexErrorKind;
use crate::lexer::Lexer;
use crate::LexError;

/// What ends a quoted body.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Closer {
    Quote(char),
    /// `"""`
    TripleQuote,
    /// `` ` `` ends the template; `{` opens an interpolation.
    Template,
    /// `"` followed by this many `#`.
    Raw(u32),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Ending {
    Closed,
    Interpolation,
}

/// Shape of a scanned body.
struct Body {
    content: Span,
    ending: Ending,
    has_escape: bool,
    non_ascii: bool,
}

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// `"..."` or `"""..."""`.
    pub(crate) fn scan_string(&mut self, start: u32) -> Result<Token, LexError> {
        self.expect_current('"');
        if self.cursor.peek(1).is('"') && self.cursor.peek(2).is('"') {
            self.advance_n(3);
            let body =
                self.scan_body(start, Closer::TripleQuote, LexErrorKind::UnterminatedString)?;
            let flags = TokenFlags::MULTI_LINE;
            return Ok(self.quoted_token(TokenKind::StringLiteral, start, &body, flags));
        }
        self.cursor.advance();
        let body = self.scan_body(start, Closer::Quote('"'), LexErrorKind::UnterminatedString)?;
        Ok(self.quoted_token(TokenKind::StringLiteral, start, &body, TokenFlags::empty()))
    }

    /// `'c'`. The single-character rule is checked when decoding.
    pub(crate) fn scan_char(&mut self, start: u32) -> Result<Token, LexError> {
        self.expect_current('\'');
        self.cursor.advance();
        let body = self.scan_body(start, Closer::Quote('\''), LexErrorKind::UnterminatedChar)?;
        Ok(self.quoted_token(TokenKind::CharLiteral, start, &body, TokenFlags::empty()))
    }

    /// `r"..."` or `r#"..."#` with any number of `#`.
    pub(crate) fn scan_raw_string(&mut self, start: u32) -> Result<Token, LexError> {
        self.expect_current('r');
        self.cursor.advance();
        let mut hashes = 0;
        while self.cursor.current().is('#') {
            hashes += 1;
            self.cursor.advance();
        }
        if !self.cursor.current().is('"') {
            let at = self.cursor.index();
            return Err(self.fail(LexError::new(
                LexErrorKind::InvalidRawStringStart,
                Span::new(start, at),
            )));
        }
        self.cursor.advance();
        let body =
            self.scan_body(start, Closer::Raw(hashes), LexErrorKind::UnterminatedRawString)?;
        Ok(self.quoted_token(TokenKind::StringLiteral, start, &body, TokenFlags::RAW))
    }

    /// `` `...` `` or the head of an interpolated template, `` `...{ ``.
    pub(crate) fn scan_template(&mut self, start: u32) -> Result<Token, LexError> {
        self.expect_current('`');
        self.cursor.advance();
        let body = self.scan_body(start, Closer::Template, LexErrorKind::UnterminatedTemplate)?;
        let kind = match body.ending {
            Ending::Closed => TokenKind::StringLiteral,
            Ending::Interpolation => TokenKind::TemplateHead,
        };
        Ok(self.quoted_token(kind, start, &body, TokenFlags::MULTI_LINE))
    }

    /// Continue a template after the `}` that closes an interpolation.
    ///
    /// The parser calls this with the `CloseBrace` it just received, before
    /// asking for another token. Yields `TemplateMiddle` (ends in `{`) or
    /// `TemplateTail` (ends in `` ` ``); the token starts at the brace.
    pub fn rescan_close_brace_as_template(
        &mut self,
        close_brace: &Token,
    ) -> Result<Token, LexError> {
        if self.is_finished() {
            return self.next_token();
        }
        if self.is_strict() {
            assert_eq!(close_brace.kind, TokenKind::CloseBrace, "rescan of a non-brace token");
            assert_eq!(
                close_brace.end(),
                self.cursor.index(),
                "rescan of a brace that is not the last token"
            );
        }
        let start = close_brace.offset;
        let body = self.scan_body(start, Closer::Template, LexErrorKind::UnterminatedTemplate)?;
        let kind = match body.ending {
            Ending::Closed => TokenKind::TemplateTail,
            Ending::Interpolation => TokenKind::TemplateMiddle,
        };
        let flags = TokenFlags::MULTI_LINE | (close_brace.flags & TokenFlags::NEWLINE_BEFORE);
        Ok(self.quoted_token(kind, start, &body, flags))
    }

    // ─── Bodies ───

    /// Scan from just past the opening delimiter through the closing one.
    ///
    /// A backslash escapes exactly the next code point, which is consumed
    /// verbatim (raw strings have no escapes). End of input, or a line
    /// terminator in a single-line style, is fatal.
    fn scan_body(
        &mut self,
        start: u32,
        closer: Closer,
        unterminated: LexErrorKind,
    ) -> Result<Body, LexError> {
        let single_line = matches!(closer, Closer::Quote(_));
        let content_start = self.cursor.index();
        let mut has_escape = false;
        let mut non_ascii = false;

        loop {
            let current = self.cursor.current();
            if current.is_end() || (single_line && is_line_terminator(current.ch())) {
                let at = self.cursor.index();
                return Err(self.fail(LexError::new(unterminated, Span::new(start, at))));
            }
            let c = current.ch();
            let content_end = self.cursor.index();

            let closed = match closer {
                Closer::Quote(quote) => (c == quote).then_some((1, Ending::Closed)),
                Closer::TripleQuote => (c == '"'
                    && self.cursor.peek(1).is('"')
                    && self.cursor.peek(2).is('"'))
                .then_some((3, Ending::Closed)),
                Closer::Template => match c {
                    '`' => Some((1, Ending::Closed)),
                    '{' => Some((1, Ending::Interpolation)),
                    _ => None,
                },
                Closer::Raw(hashes) => (c == '"' && self.raw_hashes_follow(hashes))
                    .then_some((hashes as usize + 1, Ending::Closed)),
            };
            if let Some((width, ending)) = closed {
                self.advance_n(width);
                return Ok(Body {
                    content: Span::new(content_start, content_end),
                    ending,
                    has_escape,
                    non_ascii,
                });
            }

            if c == '\\' && !matches!(closer, Closer::Raw(_)) {
                has_escape = true;
                let escaped = self.cursor.advance();
                // `\r\n` is one line break.
                if escaped.is('\r') && self.cursor.peek(1).is('\n') {
                    self.cursor.advance();
                }
                if escaped.is_genuine() {
                    self.cursor.advance();
                }
                continue;
            }
            non_ascii |= !c.is_ascii();
            self.cursor.advance();
        }
    }

    /// The `n` code points after the current `"` are all `#`.
    fn raw_hashes_follow(&mut self, n: u32) -> bool {
        (1..=n as usize).all(|i| self.cursor.peek(i).is('#'))
    }

    fn quoted_token(&self, kind: TokenKind, start: u32, body: &Body, flags: TokenFlags) -> Token {
        let token = self.token(kind, start);
        let fast = if body.has_escape || body.non_ascii {
            None
        } else {
            std::str::from_utf8(self.cursor.slice(body.content.start, body.content.end))
                .ok()
                .filter(|text| kind != TokenKind::CharLiteral || text.len() == 1)
        };
        match fast {
            Some(text) => token.with_flags(flags).with_value(LiteralValue::Text(text.into())),
            None => token.with_flags(flags | TokenFlags::NEEDS_SLOW_DECODE),
        }
    }
}
