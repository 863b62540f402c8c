//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, delimiters, and punctuation
//! through two fixed tables. Matching is greedy: a two-character operator
//! wins over its one-character prefix.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

/// Two-character operators.
pub static TWO_CHAR_PUNCTUATION: [([char; 2], TokenKind); 11] = [
    (['+', '='], TokenKind::PlusEquals),
    (['-', '='], TokenKind::MinusEquals),
    (['*', '='], TokenKind::AsteriskEquals),
    (['/', '='], TokenKind::SlashEquals),
    (['%', '='], TokenKind::PercentEquals),
    (['=', '='], TokenKind::EqualsEquals),
    (['!', '='], TokenKind::ExclamationMarkEquals),
    (['<', '='], TokenKind::LessThanEquals),
    (['>', '='], TokenKind::GreaterThanEquals),
    (['.', '.'], TokenKind::PeriodPeriod),
    (['-', '>'], TokenKind::RightArrow),
];

/// Single-character punctuation.
pub static ONE_CHAR_PUNCTUATION: [(char, TokenKind); 21] = [
    ('.', TokenKind::Period),
    (',', TokenKind::Comma),
    ('#', TokenKind::Hash),
    ('^', TokenKind::Caret),
    (':', TokenKind::Colon),
    (';', TokenKind::Semicolon),
    ('(', TokenKind::OpenParentheses),
    (')', TokenKind::CloseParentheses),
    ('[', TokenKind::OpenSquareBracket),
    (']', TokenKind::CloseSquareBracket),
    ('{', TokenKind::OpenBracket),
    ('}', TokenKind::CloseBracket),
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Asterisk),
    ('/', TokenKind::Slash),
    ('%', TokenKind::Percent),
    ('=', TokenKind::Equals),
    ('!', TokenKind::ExclamationMark),
    ('<', TokenKind::LessThan),
    ('>', TokenKind::GreaterThan),
];

fn two_char_kind(first: char, second: char) -> Option<TokenKind> {
    TWO_CHAR_PUNCTUATION
        .iter()
        .find(|(chars, _)| *chars == [first, second])
        .map(|&(_, kind)| kind)
}

fn one_char_kind(c: char) -> Option<TokenKind> {
    ONE_CHAR_PUNCTUATION
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|&(_, kind)| kind)
}

impl<'a> Lexer<'a> {
    /// Lexes punctuation, or an Invalid token for a character that starts
    /// nothing.
    ///
    /// Handles everything the dispatch has not claimed, so this always
    /// consumes at least one character.
    pub(crate) fn lex_punctuation(&mut self) {
        let first = self.cursor.advance();

        let token = if let Some(kind) = two_char_kind(first, self.cursor.current()) {
            self.cursor.advance();
            self.make_token(kind)
        } else if let Some(kind) = one_char_kind(first) {
            self.make_token(kind)
        } else {
            self.push_error(LexError::UnknownCharacter(first));
            return;
        };

        self.push(token);
    }
}
