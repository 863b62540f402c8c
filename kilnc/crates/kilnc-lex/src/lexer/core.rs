//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch on the current
//! character, and the queue that hands tokens out one at a time.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind, TokenValue};

/// Lexer for the Kiln programming language.
///
/// The lexer turns source text into a stream of tokens. Every character of
/// the input ends up in some token (comments excepted), errors included:
/// they come out as [`TokenKind::Invalid`] tokens and scanning carries on.
/// Once the input is exhausted the lexer yields EndOfFile tokens forever.
///
/// # Example
///
/// ```
/// use kilnc_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("a -> b")
///     .tokens_until_eof()
///     .map(|token| token.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::Whitespace,
///         TokenKind::RightArrow,
///         TokenKind::Whitespace,
///         TokenKind::Identifier,
///         TokenKind::EndOfFile,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens already scanned but not yet handed out.
    pending: VecDeque<Token<'a>>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether end of input has been logged.
    eof_reached: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            pending: VecDeque::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            eof_reached: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Diagnostics a scanner attaches to a token are returned first, in the
    /// order they were found, followed by the token itself.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }
            self.scan();
        }
    }

    /// Runs one scanner, queueing whatever tokens it produces.
    ///
    /// Comments produce nothing, every other branch queues at least one
    /// token.
    fn scan(&mut self) {
        self.start_token();

        if self.cursor.is_at_end() {
            self.end_of_file();
            return;
        }

        match self.cursor.current() {
            c if c.is_whitespace() => self.lex_whitespace(),
            '/' if self.cursor.peek(1) == '/' => self.skip_line_comment(),
            '/' if self.cursor.peek(1) == '*' => self.lex_block_comment(),
            c if c.is_alphabetic() || c == '_' => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            '.' if self.cursor.peek(1).is_ascii_digit() => self.lex_number(),
            '"' => self.lex_string(),
            _ => self.lex_punctuation(),
        }
    }

    fn end_of_file(&mut self) {
        if !self.eof_reached {
            self.eof_reached = true;
            debug!(
                position = self.cursor.position(),
                line = self.cursor.line(),
                "reached end of input"
            );
        }
        let token = self.make_token(TokenKind::EndOfFile);
        self.push(token);
    }

    /// Marks the current cursor position as the start of a token.
    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token of `kind` from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.cursor.source(),
            self.token_start,
            self.cursor.position() - self.token_start,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Queues a token.
    pub(crate) fn push(&mut self, token: Token<'a>) {
        self.pending.push_back(token);
    }

    /// Queues an Invalid token covering the text scanned since the token
    /// start.
    pub(crate) fn push_error(&mut self, error: LexError) {
        let token = self.make_token(TokenKind::Invalid);
        self.push_invalid(token, error);
    }

    /// Queues an Invalid token for the character under the cursor, without
    /// consuming it.
    pub(crate) fn report_at_cursor(&mut self, error: LexError) {
        let length = self.cursor.current().len_utf8();
        self.report_at(
            self.cursor.position(),
            length,
            self.cursor.line(),
            self.cursor.column(),
            error,
        );
    }

    /// Queues an Invalid token at an explicit location.
    pub(crate) fn report_at(
        &mut self,
        position: usize,
        length: usize,
        line: u32,
        column: u32,
        error: LexError,
    ) {
        let token = Token::new(
            TokenKind::Invalid,
            self.cursor.source(),
            position,
            length,
            line,
            column,
        );
        self.push_invalid(token, error);
    }

    fn push_invalid(&mut self, token: Token<'a>, error: LexError) {
        trace!(
            line = token.line,
            column = token.column,
            %error,
            "lexical error"
        );
        self.push(token.with_value(TokenValue::Error(error)));
    }

    /// Returns the current line number (1-based).
    ///
    /// # Returns
    /// The line number of the next character to be scanned.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    ///
    /// # Returns
    /// The column number of the next character to be scanned.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    ///
    /// # Returns
    /// The byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source the lexer scans.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Borrows the lexer as an iterator that stops after the first
    /// EndOfFile token.
    pub fn tokens_until_eof(&mut self) -> TokensUntilEof<'_, 'a> {
        TokensUntilEof {
            lexer: self,
            done: false,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Never returns `None`; the stream ends in EndOfFile tokens forever.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Iterator returned by [`Lexer::tokens_until_eof`].
pub struct TokensUntilEof<'l, 'a> {
    lexer: &'l mut Lexer<'a>,
    done: bool,
}

impl<'a> Iterator for TokensUntilEof<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.lexer.next_token();
        self.done = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for TokensUntilEof<'_, '_> {}
