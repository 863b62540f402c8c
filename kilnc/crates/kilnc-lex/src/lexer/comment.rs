//! Comment lexing.
//!
//! This module handles skipping line and block comments. Comments produce no
//! tokens unless a block comment runs off the end of the input.

use crate::error::LexError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a line comment, leaving the terminating newline in place.
    pub(crate) fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips a block comment starting at the cursor.
    ///
    /// Block comments do not nest. Returns false if the input ended before
    /// the closing `*/`.
    fn skip_block_comment(&mut self) -> bool {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.current() == '*' && self.cursor.peek(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return true;
            }
            self.cursor.advance();
        }
        false
    }

    /// Lexes a block comment at the top level.
    ///
    /// An unclosed comment becomes an Invalid token spanning from `/*` to
    /// the end of the input.
    pub(crate) fn lex_block_comment(&mut self) {
        if !self.skip_block_comment() {
            self.push_error(LexError::UnclosedBlockComment {
                continuation: false,
            });
        }
    }

    /// Skips whitespace and comments, returning the number of bytes skipped.
    ///
    /// Used after a line continuation. An unclosed block comment met here is
    /// reported against its `/*` and the text stays with the caller's token.
    pub fn skip_whitespace_and_comments(&mut self) -> usize {
        let start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                break;
            }

            match self.cursor.current() {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek(1) == '/' => self.skip_line_comment(),
                '/' if self.cursor.peek(1) == '*' => {
                    let (position, line, column) =
                        (self.cursor.position(), self.cursor.line(), self.cursor.column());
                    if !self.skip_block_comment() {
                        let error = LexError::UnclosedBlockComment { continuation: true };
                        self.report_at(position, 2, line, column, error);
                    }
                },
                _ => break,
            }
        }

        self.cursor.position() - start
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, TokenKind};

    #[test]
    fn test_line_comment_produces_no_token() {
        let mut lexer = Lexer::new("// note\nx");
        let ws = lexer.next_token();
        assert_eq!(ws.kind, TokenKind::Whitespace);
        assert_eq!(ws.text(), "\n");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_line_comment_at_eof() {
        let mut lexer = Lexer::new("x // trailing");
        lexer.next_token();
        lexer.next_token();
        let eof = lexer.next_token();
        assert_eq!(eof.kind, TokenKind::EndOfFile);
        assert_eq!(eof.position, 13);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let mut lexer = Lexer::new("/* a\n * b */y");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!((token.line, token.column), (2, 8));
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let mut lexer = Lexer::new("/* /* */ */");
        let kinds: Vec<_> = lexer.tokens_until_eof().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Whitespace,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::EndOfFile
            ]
        );
    }

    #[test]
    fn test_unclosed_block_comment() {
        let mut lexer = Lexer::new("a /* never closed");
        lexer.next_token();
        lexer.next_token();
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Invalid);
        assert_eq!(token.text(), "/* never closed");
        assert_eq!(token.error(), Some(&LexError::UnclosedBlockComment { continuation: false }));
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_lone_block_opener() {
        let mut lexer = Lexer::new("/*");
        let token = lexer.next_token();
        assert_eq!(token.error(), Some(&LexError::UnclosedBlockComment { continuation: false }));
        assert_eq!(token.length, 2);
    }

    #[test]
    fn test_skip_whitespace_and_comments_counts_bytes() {
        let mut lexer = Lexer::new("  // c\n /* d */ z");
        assert_eq!(lexer.skip_whitespace_and_comments(), 16);
        assert_eq!(lexer.position(), 16);
        assert_eq!(lexer.next_token().text(), "z");
    }

    #[test]
    fn test_skip_whitespace_and_comments_stops_at_slash() {
        let mut lexer = Lexer::new(" / ");
        assert_eq!(lexer.skip_whitespace_and_comments(), 1);
        assert_eq!(lexer.next_token().kind, TokenKind::Slash);
    }
}
