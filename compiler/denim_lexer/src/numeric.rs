//! Numeric literals.
//!
//! Decimal: `123`, `1_000`, `1.5`, `.5`, `1e10`, `2.5E-3`.
//! Based: `0b1010`, `0o17`, `0xFF`.
//!
//! Underscores separate digits but may not start a digit group, end one, or
//! appear twice in a row. A `.` is part of the number only when a digit
//! follows it, so `1..2` is a range. An identifier glued to a number (`3px`)
//! is a recoverable error; everything else malformed is fatal.

use denim_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use denim_ir::{LiteralValue, Span, Token, TokenKind};
use denim_lexer_core::chars::{is_ident_continue, is_ident_start};

use crate::lexer::Lexer;
use crate::LexError;

/// Decimal integers with fewer digits than this take the exact `u64` path.
pub const FAST_PATH_DIGITS: u32 = 19;

/// Running state across the digit groups of one literal.
#[derive(Default)]
struct DigitRun {
    digits: u32,
    underscores: u32,
    /// Offset just past the most recent `_`.
    last_underscore_end: Option<u32>,
}

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// The current code point is a digit, or a `.` followed by a digit.
    pub(crate) fn scan_number(&mut self, start: u32) -> Result<Token, LexError> {
        if self.cursor.current().is('0') {
            let next = self.cursor.peek(1);
            match next.ch() {
                'b' | 'B' => return self.scan_radix_integer(start, 2, "0b"),
                'o' | 'O' => return self.scan_radix_integer(start, 8, "0o"),
                'x' | 'X' => return self.scan_radix_integer(start, 16, "0x"),
                _ if next.is_ascii_digit() || next.is('_') => {
                    let at = self.cursor.next_offset();
                    return Err(self.fail(LexError::leading_zero(Span::at(at, 1))));
                }
                _ => {}
            }
        }

        let mut run = DigitRun::default();
        let mut is_float = false;
        if self.cursor.current().is_ascii_digit() {
            self.eat_digits(10, &mut run)?;
        }
        if self.cursor.current().is('.') && self.cursor.peek(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            self.eat_digits(10, &mut run)?;
        }
        if matches!(self.cursor.current().ch(), 'e' | 'E') {
            is_float |= self.scan_exponent(&mut run)?;
        }

        let end = self.cursor.index();
        let text = self.cursor.slice(start, end);
        let token = if is_float || run.digits >= FAST_PATH_DIGITS {
            let Some(value) = parse_float_skip_underscores(text, run.underscores) else {
                return Err(self.fail(LexError::malformed_number(Span::new(start, end))));
            };
            self.token(TokenKind::FloatLiteral, start)
                .with_value(LiteralValue::float(value))
        } else {
            self.token(TokenKind::IntLiteral, start)
                .with_value(LiteralValue::Int(accumulate_decimal(text)))
        };
        Ok(self.reject_trailing_identifier(start, token))
    }

    /// `0b`, `0o`, or `0x` followed by digits of that base.
    ///
    /// A value past `u64::MAX` is kept as an approximate `FloatLiteral`.
    fn scan_radix_integer(
        &mut self,
        start: u32,
        radix: u32,
        prefix: &'static str,
    ) -> Result<Token, LexError> {
        self.expect_current('0');
        self.advance_n(2);
        let digits_start = self.cursor.index();
        let mut run = DigitRun::default();
        self.eat_digits(radix, &mut run)?;
        if run.digits == 0 {
            return Err(self.fail(LexError::missing_digits(prefix, digits_start)));
        }

        let digits = self.cursor.slice(digits_start, self.cursor.index());
        let token = match parse_int_skip_underscores(digits, radix) {
            Some(value) => self
                .token(TokenKind::IntLiteral, start)
                .with_value(LiteralValue::Int(value)),
            None => self
                .token(TokenKind::FloatLiteral, start)
                .with_value(LiteralValue::float(parse_radix_float(digits, radix))),
        };
        Ok(self.reject_trailing_identifier(start, token))
    }

    /// Consume digits of `radix` and `_` separators.
    fn eat_digits(&mut self, radix: u32, run: &mut DigitRun) -> Result<(), LexError> {
        let mut group_has_digit = false;
        loop {
            let at = self.cursor.index();
            let current = self.cursor.current();
            let c = current.ch();
            if !current.is_genuine() {
                break;
            }
            if c == '_' {
                if run.last_underscore_end == Some(at) {
                    return Err(self.fail(LexError::consecutive_underscores(at)));
                }
                if !group_has_digit {
                    return Err(self.fail(LexError::leading_underscore(at)));
                }
                run.underscores += 1;
                run.last_underscore_end = Some(at + 1);
            } else if c.is_digit(radix) {
                group_has_digit = true;
                run.digits += 1;
            } else if radix != 10 && c.is_ascii_hexdigit() {
                let error = LexError::invalid_digit(c, radix, Span::at(at, 1));
                return Err(self.fail(error));
            } else {
                break;
            }
            self.cursor.advance();
        }

        let end = self.cursor.index();
        if run.last_underscore_end == Some(end) {
            return Err(self.fail(LexError::trailing_underscore(end - 1)));
        }
        Ok(())
    }

    /// Consume an exponent if one starts at the current `e`/`E`.
    ///
    /// `e` followed by a digit, or by a sign and a digit, starts one. A sign
    /// without digits is fatal. Otherwise the `e` is left for the glued
    /// identifier check.
    fn scan_exponent(&mut self, run: &mut DigitRun) -> Result<bool, LexError> {
        let after = self.cursor.peek(1);
        let signed = after.is('+') || after.is('-');
        let first = if signed { self.cursor.peek(2) } else { after };
        let first_at = self.cursor.index() + 1 + u32::from(signed);

        if first.is_ascii_digit() {
            self.advance_n(if signed { 2 } else { 1 });
            self.eat_digits(10, run)?;
            return Ok(true);
        }
        if first.is('_') {
            return Err(self.fail(LexError::leading_underscore(first_at)));
        }
        if signed {
            return Err(self.fail(LexError::missing_exponent_digits(first_at)));
        }
        Ok(false)
    }

    /// `3px`: report the identifier and turn the whole run into a
    /// `SyntaxError` token so scanning resumes after it.
    fn reject_trailing_identifier(&mut self, start: u32, token: Token) -> Token {
        let current = self.cursor.current();
        if !current.is_genuine() || !is_ident_start(current.ch()) {
            return token;
        }
        let ident_start = self.cursor.index();
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        let span = Span::new(ident_start, self.cursor.index());
        let ident = String::from_utf8_lossy(self.cursor.slice(span.start, span.end));
        let message = format!("Unexpected {ident:?} after number literal");
        self.report(Diagnostic::error(ErrorCode::E0009, span).with_message(message));
        self.token(TokenKind::SyntaxError, start)
    }
}

/// Exact value of a decimal integer with fewer than [`FAST_PATH_DIGITS`]
/// digits; `_` separators are skipped.
fn accumulate_decimal(text: &[u8]) -> u64 {
    text.iter()
        .filter(|b| b.is_ascii_digit())
        .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
}

/// Parse an integer in `radix`, skipping `_`. `None` on overflow.
fn parse_int_skip_underscores(digits: &[u8], radix: u32) -> Option<u64> {
    digits
        .iter()
        .filter(|&&b| b != b'_')
        .try_fold(0u64, |acc, &b| {
            let digit = char::from(b).to_digit(radix)?;
            acc.checked_mul(u64::from(radix))?.checked_add(u64::from(digit))
        })
}

/// Approximate value of a based integer too large for `u64`.
fn parse_radix_float(digits: &[u8], radix: u32) -> f64 {
    digits
        .iter()
        .filter_map(|&b| char::from(b).to_digit(radix))
        .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit))
}

/// Parse decimal float text, skipping `_`.
fn parse_float_skip_underscores(text: &[u8], underscores: u32) -> Option<f64> {
    let text = std::str::from_utf8(text).ok()?;
    if underscores == 0 {
        text.parse().ok()
    } else {
        text.replace('_', "").parse().ok()
    }
}
