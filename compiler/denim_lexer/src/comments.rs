//! Line and block comments.

use denim_diagnostic::{DiagnosticSink, Note};
use denim_ir::{Span, Token, TokenFlags, TokenKind};
use denim_lexer_core::chars::is_line_terminator;
use memchr::memchr2;

use crate::lexer::Lexer;
use crate::{pragma, LexError};

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// `// ...` up to (not including) the line terminator.
    ///
    /// Exactly three slashes make a doc comment; `////` is an ordinary one.
    pub(crate) fn scan_line_comment(&mut self, start: u32) -> Token {
        self.expect_current('/');
        let doc = self.cursor.peek(2).is('/') && !self.cursor.peek(3).is('/');
        self.advance_n(2);
        self.cursor.eat_until_line_terminator();

        self.scan_pragmas(start, self.cursor.index());
        let token = self.token(TokenKind::LineComment, start);
        if doc {
            token.with_flags(TokenFlags::DOC_COMMENT)
        } else {
            token
        }
    }

    /// `/* ... */`, nesting allowed. `/*!` marks a legal comment.
    ///
    /// Also returns whether the comment contains a line terminator.
    pub(crate) fn scan_block_comment(&mut self, start: u32) -> Result<(Token, bool), LexError> {
        self.expect_current('/');
        self.advance_n(2);
        let legal = self.cursor.current().is('!');
        let mut depth = 1u32;
        let mut crossed_line = false;

        loop {
            let current = self.cursor.current();
            if current.is_end() {
                let at = self.cursor.index();
                let note = Note::at(Span::at(start, 2), "The block comment starts here");
                let error = LexError::unterminated_block_comment(at);
                return Err(self.fail_with_note(error, Some(note)));
            }
            match current.ch() {
                '/' if self.cursor.peek(1).is('*') => {
                    depth += 1;
                    self.advance_n(2);
                }
                '*' if self.cursor.peek(1).is('/') => {
                    depth -= 1;
                    self.advance_n(2);
                    if depth == 0 {
                        break;
                    }
                }
                c => {
                    crossed_line |= is_line_terminator(c);
                    self.cursor.advance();
                }
            }
        }

        // Pragmas are read from the body, without the closing `*/`.
        self.scan_pragmas(start, self.cursor.index() - 2);
        let token = self.token(TokenKind::BlockComment, start);
        let token = if legal {
            token.with_flags(TokenFlags::LEGAL_COMMENT)
        } else {
            token
        };
        Ok((token, crossed_line))
    }

    /// Record any pragmas in the comment text `[start, end)`.
    fn scan_pragmas(&mut self, start: u32, end: u32) {
        let bytes = self.cursor.slice(start, end);
        if memchr2(b'#', b'@', bytes).is_some() {
            if let Ok(text) = std::str::from_utf8(bytes) {
                let found = pragma::scan_comment(text, start);
                self.record_pragmas(found);
            }
        }
    }
}
