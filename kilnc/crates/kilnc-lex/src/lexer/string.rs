//! String literal lexing.

use crate::error::LexError;
use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// The token's value is the decoded contents. Diagnostics for unknown
    /// escapes and for a missing closing quote are queued ahead of it.
    pub(crate) fn lex_string(&mut self) {
        let (quote, quote_line, quote_column) =
            (self.cursor.position(), self.cursor.line(), self.cursor.column());
        self.cursor.advance();

        let mut value = String::new();

        loop {
            if self.cursor.is_at_end() {
                self.report_at(quote, 1, quote_line, quote_column, LexError::UnclosedString);
                break;
            }

            match self.cursor.advance() {
                '"' => break,
                '\\' => {
                    if let Some(c) = self.lex_escape() {
                        value.push(c);
                    }
                },
                c => value.push(c),
            }
        }

        let token = self
            .make_token(TokenKind::String)
            .with_value(TokenValue::Str(value));
        self.push(token);
    }

    /// Decodes the character after a backslash.
    ///
    /// Returns `None` only when the backslash ended the input. An unknown
    /// escape is reported and yields the escaped character itself.
    fn lex_escape(&mut self) -> Option<char> {
        if self.cursor.is_at_end() {
            return None;
        }

        let c = self.cursor.current();
        let decoded = match c {
            '0' => '\0',
            'n' | 'N' => '\n',
            'r' | 'R' => '\r',
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            other => {
                self.report_at_cursor(LexError::UnknownEscape(other));
                other
            },
        };

        self.cursor.advance();
        Some(decoded)
    }
}
