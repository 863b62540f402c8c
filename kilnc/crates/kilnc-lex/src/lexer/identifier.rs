//! Identifier lexing.
//!
//! Identifiers may be split across lines with a `\` continuation: the
//! backslash and any whitespace or comments after it belong to the token's
//! text but not to its name.

use tracing::trace;

use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier starting at the cursor.
    pub(crate) fn lex_identifier(&mut self) {
        let mut name = String::new();

        loop {
            let c = self.cursor.current();
            if c == '\\' {
                self.cursor.advance();
                let skipped = self.skip_whitespace_and_comments();
                trace!(skipped, "identifier continuation");
            } else if c.is_alphanumeric() || c == '_' {
                name.push(self.cursor.advance());
            } else {
                break;
            }
        }

        let token = self
            .make_token(TokenKind::Identifier)
            .with_value(TokenValue::Str(name));
        self.push(token);
    }
}
