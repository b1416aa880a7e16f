//! The token recognizer.
//!
//! Pull-based: each [`Lexer::next_token`] call skips whitespace, classifies
//! the first significant code point, and dispatches to a focused scanner.
//! The cursor's current code point is always the first code point of the
//! next token (or whitespace before it); a token's end is the cursor index
//! after recognition.
//!
//! Numeric, quoted, and comment scanners live in sibling modules as further
//! `impl` blocks on [`Lexer`].

use denim_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, LineColumnTracker, Note};
use denim_ir::{Source, Span, Token, TokenFlags, TokenKind};
use denim_lexer_core::chars::{
    is_ascii_ident_continue, is_ident_continue, is_ident_start, is_line_terminator,
    is_whitespace,
};
use denim_lexer_core::Cursor;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::keywords;
use crate::pragma::{CommentPragmas, PragmaArg};
use crate::{LexError, LexerConfig};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum ScanState {
    /// Nothing scanned yet; a hashbang is still possible.
    Start,
    Scanning,
    /// `End` was produced or a fatal error aborted the scan.
    Finished,
}

/// Lexer for one source file.
///
/// Generic over the diagnostic sink so callers choose between buffering
/// ([`DiagnosticQueue`](denim_diagnostic::DiagnosticQueue), `Vec`) and
/// streaming ([`TracingSink`](denim_diagnostic::TracingSink)).
pub struct Lexer<'src, S: DiagnosticSink> {
    source: &'src Source,
    config: LexerConfig,

    // Cursor and its lookahead cache.
    pub(crate) cursor: Cursor<'src>,

    // Per-token output.
    state: ScanState,
    pub(crate) newline_before: bool,

    // Diagnostics.
    tracker: LineColumnTracker<'src>,
    sink: S,
    reported: FxHashSet<u32>,

    pragmas: CommentPragmas,
}

impl<'src, S: DiagnosticSink> Lexer<'src, S> {
    pub fn new(source: &'src Source, sink: S) -> Self {
        Self::with_config(source, sink, LexerConfig::default())
    }

    pub fn with_config(source: &'src Source, sink: S, config: LexerConfig) -> Self {
        if u32::try_from(source.len()).is_err() {
            tracing::warn!(
                path = source.path(),
                bytes = source.len(),
                "source exceeds 4 GiB; only the first 4 GiB are lexed"
            );
        }
        let mut cursor = Cursor::new(source.bytes(), config.peek_capacity);
        cursor.advance();
        Lexer {
            source,
            config,
            cursor,
            state: ScanState::Start,
            newline_before: false,
            tracker: LineColumnTracker::new(source.path(), source.bytes()),
            sink,
            reported: FxHashSet::default(),
            pragmas: CommentPragmas::default(),
        }
    }

    #[inline]
    pub fn source(&self) -> &'src Source {
        self.source
    }

    #[inline]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Argument of the `# sourceMappingURL=` pragma seen so far, if any.
    pub fn source_mapping_url(&self) -> Option<&PragmaArg> {
        self.pragmas.source_mapping_url.as_ref()
    }

    /// Argument of the `@edition` pragma seen so far, if any.
    pub fn edition(&self) -> Option<&PragmaArg> {
        self.pragmas.edition.as_ref()
    }

    /// Line feeds passed so far. Useful as a sizing hint.
    #[inline]
    pub fn newline_count(&self) -> u32 {
        self.cursor.newline_count()
    }

    /// `true` once `End` was produced or a fatal error aborted the scan.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == ScanState::Finished
    }

    /// Produce the next token.
    ///
    /// After `End` (or after a fatal error) every call returns `End` at the
    /// end of the input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.state {
            ScanState::Finished => return Ok(self.end_token()),
            ScanState::Start => {
                self.state = ScanState::Scanning;
                if self.cursor.current().is('#') && self.cursor.peek(1).is('!') {
                    return Ok(self.scan_hashbang());
                }
            }
            ScanState::Scanning => {}
        }
        let token = self.scan_token()?;
        if token.kind == TokenKind::End {
            self.state = ScanState::Finished;
            debug!(
                path = self.source.path(),
                newlines = self.cursor.newline_count(),
                diagnostics = self.reported.len(),
                "reached end of input"
            );
        }
        Ok(token)
    }

    // ─── Dispatch ───

    fn scan_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_whitespace();
            let start = self.cursor.index();
            let current = self.cursor.current();
            if current.is_end() {
                if start < self.cursor.source_len() {
                    debug!(at = start, "malformed UTF-8 ends the input");
                }
                return Ok(self.finish(Token::new(TokenKind::End, start, 0)));
            }

            let token = match current.ch() {
                '/' => match self.cursor.peek(1).ch() {
                    '/' => {
                        let token = self.scan_line_comment(start);
                        if !self.config.keep_comments {
                            continue;
                        }
                        token
                    }
                    '*' => {
                        let (token, crossed_line) = self.scan_block_comment(start)?;
                        if !self.config.keep_comments {
                            self.newline_before |= crossed_line;
                            continue;
                        }
                        token
                    }
                    _ => self.bump(TokenKind::Slash, start, 1),
                },
                '"' => self.scan_string(start)?,
                '\'' => self.scan_char(start)?,
                '`' => self.scan_template(start)?,
                '0'..='9' => self.scan_number(start)?,
                '.' => self.scan_dot(start)?,
                'r' => self.scan_r_prefixed(start)?,
                c if c.is_ascii() => self.scan_punctuation(c, start),
                c if is_ident_start(c) => self.scan_identifier(start),
                _ => self.scan_unexpected(start),
            };
            return Ok(self.finish(token));
        }
    }

    /// Stamp per-token output onto a finished token.
    fn finish(&mut self, token: Token) -> Token {
        let token = if std::mem::take(&mut self.newline_before) {
            let flags = token.flags | TokenFlags::NEWLINE_BEFORE;
            token.with_flags(flags)
        } else {
            token
        };
        trace!(kind = ?token.kind, span = %token.span(), "token");
        token
    }

    /// `End` at the point input stopped: the end of the buffer, or the
    /// first malformed UTF-8 sequence.
    fn end_token(&self) -> Token {
        let offset = if self.cursor.is_end() {
            self.cursor.index()
        } else {
            self.cursor.source_len()
        };
        Token::new(TokenKind::End, offset, 0)
    }

    /// Token of `kind` from `start` to the cursor.
    #[inline]
    pub(crate) fn token(&self, kind: TokenKind, start: u32) -> Token {
        Token::new(kind, start, self.cursor.index() - start)
    }

    /// Advance over `n` ASCII code points and produce a token of `kind`.
    #[inline]
    fn bump(&mut self, kind: TokenKind, start: u32, n: usize) -> Token {
        self.advance_n(n);
        self.token(kind, start)
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.cursor.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            let current = self.cursor.current();
            if !current.is_genuine() {
                return;
            }
            match current.ch() {
                ' ' | '\t' => self.cursor.eat_ascii_while(|b| b == b' ' || b == b'\t'),
                c if is_whitespace(c) => {
                    if is_line_terminator(c) {
                        self.newline_before = true;
                    }
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn scan_hashbang(&mut self) -> Token {
        self.expect_current('#');
        let start = self.cursor.index();
        self.cursor.advance();
        self.cursor.eat_until_line_terminator();
        let token = self.token(TokenKind::Hashbang, start);
        self.finish(token)
    }

    // ─── Punctuation ───

    fn scan_punctuation(&mut self, c: char, start: u32) -> Token {
        use TokenKind as K;

        let next = self.cursor.peek(1).ch();
        match c {
            '&' if next == '&' => self.bump(K::AmpersandAmpersand, start, 2),
            '&' => self.bump(K::Ampersand, start, 1),
            '*' if next == '*' => self.bump(K::AsteriskAsterisk, start, 2),
            '*' => self.bump(K::Asterisk, start, 1),
            '@' => self.bump(K::At, start, 1),
            '|' if next == '|' => self.bump(K::BarBar, start, 2),
            '|' => self.bump(K::Bar, start, 1),
            '{' => self.bump(K::OpenBrace, start, 1),
            '}' => self.bump(K::CloseBrace, start, 1),
            '[' => self.bump(K::OpenBracket, start, 1),
            ']' => self.bump(K::CloseBracket, start, 1),
            '(' => self.bump(K::OpenParen, start, 1),
            ')' => self.bump(K::CloseParen, start, 1),
            ':' => self.bump(K::Colon, start, 1),
            ',' => self.bump(K::Comma, start, 1),
            ';' => self.bump(K::Semicolon, start, 1),
            '%' => self.bump(K::Percent, start, 1),
            '+' => self.bump(K::Plus, start, 1),
            '=' if next == '=' => self.bump(K::EqualsEquals, start, 2),
            '=' if next == '>' => self.bump(K::EqualsGreaterThan, start, 2),
            '=' => self.bump(K::Equals, start, 1),
            '!' if next == '=' => self.bump(K::ExclamationEquals, start, 2),
            '!' => self.bump(K::Exclamation, start, 1),
            '>' if next == '=' => self.bump(K::GreaterThanEquals, start, 2),
            '>' => self.bump(K::GreaterThan, start, 1),
            '<' if next == '=' => self.bump(K::LessThanEquals, start, 2),
            '<' => self.bump(K::LessThan, start, 1),
            '-' if next == '>' => self.bump(K::MinusGreaterThan, start, 2),
            '-' => self.bump(K::Minus, start, 1),
            '?' if next == '?' => self.bump(K::QuestionQuestion, start, 2),
            // `a?.5:b` is a conditional over `.5`, not optional chaining.
            '?' if next == '.' && !self.cursor.peek(2).is_ascii_digit() => {
                self.bump(K::QuestionDot, start, 2)
            }
            '?' => self.bump(K::Question, start, 1),
            '~' if next == '/' => self.bump(K::TildeSlash, start, 2),
            c if is_ident_start(c) => self.scan_identifier(start),
            _ => self.scan_unexpected(start),
        }
    }

    /// `.`, `..`, `...`, or a number like `.5`.
    fn scan_dot(&mut self, start: u32) -> Result<Token, LexError> {
        if self.cursor.peek(1).is_ascii_digit() {
            return self.scan_number(start);
        }
        let token = if self.cursor.peek(1).is('.') {
            if self.cursor.peek(2).is('.') {
                self.bump(TokenKind::DotDotDot, start, 3)
            } else {
                self.bump(TokenKind::DotDot, start, 2)
            }
        } else {
            self.bump(TokenKind::Dot, start, 1)
        };
        Ok(token)
    }

    // ─── Identifiers ───

    /// `r"..."`, `r#"..."#`, `r#ident`, or an identifier starting with `r`.
    fn scan_r_prefixed(&mut self, start: u32) -> Result<Token, LexError> {
        let next = self.cursor.peek(1);
        if next.is('"') {
            return self.scan_raw_string(start);
        }
        if next.is('#') {
            let after = self.cursor.peek(2);
            if after.is('"') || after.is('#') {
                return self.scan_raw_string(start);
            }
            if after.is_genuine() && is_ident_start(after.ch()) {
                return Ok(self.scan_escaped_keyword(start));
            }
        }
        Ok(self.scan_identifier(start))
    }

    /// Identifier or keyword. The current code point is a valid start.
    pub(crate) fn scan_identifier(&mut self, start: u32) -> Token {
        self.cursor.advance();
        self.eat_identifier_continue();
        let text = self.cursor.slice(start, self.cursor.index());
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.token(kind, start)
    }

    /// `r#name`: the `r#` prefix lets a keyword be used as a name.
    fn scan_escaped_keyword(&mut self, start: u32) -> Token {
        self.expect_current('r');
        self.cursor.advance();
        self.cursor.advance();
        let name_start = self.cursor.index();
        self.cursor.advance();
        self.eat_identifier_continue();
        let name = self.cursor.slice(name_start, self.cursor.index());
        let kind = if keywords::lookup(name).is_some() {
            TokenKind::EscapedKeyword
        } else {
            TokenKind::Identifier
        };
        self.token(kind, start)
    }

    /// ASCII fast path, then code point by code point once non-ASCII shows up.
    pub(crate) fn eat_identifier_continue(&mut self) {
        self.cursor.eat_ascii_while(is_ascii_ident_continue);
        let current = self.cursor.current();
        if current.is_genuine() && !current.ch().is_ascii() {
            self.cursor.eat_while(is_ident_continue);
        }
    }

    // ─── Errors ───

    /// Recoverable: one unrecognized code point becomes a `SyntaxError` token.
    fn scan_unexpected(&mut self, start: u32) -> Token {
        let c = self.cursor.current().ch();
        self.cursor.advance();
        let span = Span::new(start, self.cursor.index());
        let message = syntax_error_message(c);
        self.report(Diagnostic::error(ErrorCode::E0002, span).with_message(message));
        self.token(TokenKind::SyntaxError, start)
    }

    /// Forward a diagnostic unless one was already reported at its offset.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        if !self.reported.insert(diagnostic.span.start) {
            trace!(
                at = diagnostic.span.start,
                code = diagnostic.code.as_str(),
                "duplicate diagnostic suppressed"
            );
            return;
        }
        let location = self.tracker.msg_location(diagnostic.span);
        let mut diagnostic = diagnostic.with_location(location);
        for note in &mut diagnostic.notes {
            if let Some(span) = note.span {
                note.location = Some(self.tracker.msg_location(span));
            }
        }
        self.sink.emit(diagnostic);
    }

    /// Report a fatal error and stop scanning.
    #[cold]
    pub(crate) fn fail(&mut self, error: LexError) -> LexError {
        self.fail_with_note(error, None)
    }

    #[cold]
    pub(crate) fn fail_with_note(&mut self, error: LexError, note: Option<Note>) -> LexError {
        debug!(
            path = self.source.path(),
            kind = ?error.kind,
            span = %error.span,
            "fatal lex error; aborting scan"
        );
        let mut diagnostic =
            Diagnostic::error(error.code(), error.span).with_message(error.to_string());
        if let Some(note) = note {
            diagnostic = diagnostic.with_note(note);
        }
        self.report(diagnostic);
        self.state = ScanState::Finished;
        error
    }

    /// Strict mode: the current code point must be `expected`.
    #[inline]
    pub(crate) fn expect_current(&self, expected: char) {
        if self.config.strict {
            let found = self.cursor.current();
            assert!(
                found.is(expected),
                "expected {expected:?} at byte {}, found {found:?}",
                self.cursor.index()
            );
        }
    }

    #[inline]
    pub(crate) fn is_strict(&self) -> bool {
        self.config.strict
    }

    pub(crate) fn record_pragmas(&mut self, found: CommentPragmas) {
        if found.source_mapping_url.is_some() {
            self.pragmas.source_mapping_url = found.source_mapping_url;
        }
        if found.edition.is_some() {
            self.pragmas.edition = found.edition;
        }
    }
}

/// Tokens until `End`; a fatal error is yielded once and ends iteration.
impl<S: DiagnosticSink> Iterator for Lexer<'_, S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::End => None,
            result => Some(result),
        }
    }
}

fn syntax_error_message(c: char) -> String {
    let code = u32::from(c);
    if code < 0x20 {
        format!("Syntax error \"\\x{code:02X}\"")
    } else if code >= 0x80 {
        format!("Syntax error \"\\u{{{code:x}}}\"")
    } else {
        format!("Syntax error \"{c}\"")
    }
}

#[cfg(test)]
mod tests;
