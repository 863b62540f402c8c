//! Whitespace lexing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of whitespace into one Whitespace token.
    pub(crate) fn lex_whitespace(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current().is_whitespace() {
            self.cursor.advance();
        }
        let token = self.make_token(TokenKind::Whitespace);
        self.push(token);
    }
}
