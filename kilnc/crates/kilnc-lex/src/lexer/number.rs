//! Number literal lexing.
//!
//! Numbers are written in base 10, or in base 16 / base 2 after a `0x` /
//! `0b` prefix. The digit run takes every ASCII letter and digit; those not
//! valid in the base are reported and still accumulated, so the value is a
//! best effort whenever diagnostics were queued.

use crate::error::LexError;
use crate::radix::Radix;
use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal starting at the cursor.
    pub(crate) fn lex_number(&mut self) {
        let mut radix = Radix::DECIMAL;

        if self.cursor.current() == '0' {
            if let Some(prefixed) = Radix::from_prefix(self.cursor.peek(1)) {
                self.cursor.advance();
                self.cursor.advance();
                radix = prefixed;
            }
        }

        let value = self.lex_integer_digits(radix);

        if self.cursor.match_char('.') {
            let value = self.lex_fraction_digits(radix, value as f64);
            let token = self
                .make_token(TokenKind::Float)
                .with_value(TokenValue::Float(value));
            self.push(token);
        } else {
            let token = self
                .make_token(TokenKind::Int)
                .with_value(TokenValue::Int(value));
            self.push(token);
        }
    }

    /// Accumulates the integer part.
    ///
    /// Overflow is reported once per literal and the value wraps.
    fn lex_integer_digits(&mut self, radix: Radix) -> u64 {
        let base = u64::from(radix.base());
        let mut value: u64 = 0;
        let mut overflowed = false;

        while let Some(digit) = radix.digit_value(self.cursor.current()) {
            self.check_digit(radix, digit);

            let digit = u64::from(digit);
            match value.checked_mul(base).and_then(|v| v.checked_add(digit)) {
                Some(next) => value = next,
                None => {
                    if !overflowed {
                        overflowed = true;
                        self.report_at_cursor(LexError::IntegerOverflow);
                    }
                    value = value.wrapping_mul(base).wrapping_add(digit);
                },
            }

            self.cursor.advance();
        }

        value
    }

    /// Accumulates fractional digits onto `value`, the k-th digit adding
    /// `digit / base^k`.
    fn lex_fraction_digits(&mut self, radix: Radix, mut value: f64) -> f64 {
        let base = f64::from(radix.base());
        let mut divisor = 1.0;

        while let Some(digit) = radix.digit_value(self.cursor.current()) {
            self.check_digit(radix, digit);

            divisor *= base;
            value += f64::from(digit) / divisor;

            self.cursor.advance();
        }

        value
    }

    /// Reports the digit under the cursor if it is too large for `radix`.
    fn check_digit(&mut self, radix: Radix, digit: u32) {
        if !radix.accepts(digit) {
            let error = LexError::DigitExceedsBase {
                digit: self.cursor.current(),
                base: radix.base(),
            };
            self.report_at_cursor(error);
        }
    }
}
