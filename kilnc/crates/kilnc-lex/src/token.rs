//! Token definitions.
//!
//! A [`Token`] borrows the source it was scanned from and records where its
//! text lies, so `text()` always returns the exact lexeme.

use std::fmt;

use kilnc_util::Span;

use crate::error::LexError;

/// The category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input; repeated forever once reached
    EndOfFile,
    /// A lexical error, carrying a [`LexError`]
    Invalid,
    /// A maximal run of whitespace
    Whitespace,
    /// A name
    Identifier,
    /// An integer literal
    Int,
    /// A floating-point literal
    Float,
    /// A string literal
    String,

    // Punctuation
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `#`
    Hash,
    /// `^`
    Caret,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `->`
    RightArrow,
    /// `..`
    PeriodPeriod,
    /// `(`
    OpenParentheses,
    /// `)`
    CloseParentheses,
    /// `[`
    OpenSquareBracket,
    /// `]`
    CloseSquareBracket,
    /// `{`
    OpenBracket,
    /// `}`
    CloseBracket,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Equals,
    /// `!`
    ExclamationMark,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `+=`
    PlusEquals,
    /// `-=`
    MinusEquals,
    /// `*=`
    AsteriskEquals,
    /// `/=`
    SlashEquals,
    /// `%=`
    PercentEquals,
    /// `==`
    EqualsEquals,
    /// `!=`
    ExclamationMarkEquals,
    /// `<=`
    LessThanEquals,
    /// `>=`
    GreaterThanEquals,
}

impl TokenKind {
    /// Returns the name of the kind as written in listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Invalid => "Invalid",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Identifier => "Identifier",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::Period => "Period",
            TokenKind::Comma => "Comma",
            TokenKind::Hash => "Hash",
            TokenKind::Caret => "Caret",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::RightArrow => "RightArrow",
            TokenKind::PeriodPeriod => "PeriodPeriod",
            TokenKind::OpenParentheses => "OpenParentheses",
            TokenKind::CloseParentheses => "CloseParentheses",
            TokenKind::OpenSquareBracket => "OpenSquareBracket",
            TokenKind::CloseSquareBracket => "CloseSquareBracket",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::CloseBracket => "CloseBracket",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::Slash => "Slash",
            TokenKind::Percent => "Percent",
            TokenKind::Equals => "Equals",
            TokenKind::ExclamationMark => "ExclamationMark",
            TokenKind::LessThan => "LessThan",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::PlusEquals => "PlusEquals",
            TokenKind::MinusEquals => "MinusEquals",
            TokenKind::AsteriskEquals => "AsteriskEquals",
            TokenKind::SlashEquals => "SlashEquals",
            TokenKind::PercentEquals => "PercentEquals",
            TokenKind::EqualsEquals => "EqualsEquals",
            TokenKind::ExclamationMarkEquals => "ExclamationMarkEquals",
            TokenKind::LessThanEquals => "LessThanEquals",
            TokenKind::GreaterThanEquals => "GreaterThanEquals",
        }
    }

}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded payload of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Value of an integer literal
    Int(u64),
    /// Value of a floating-point literal
    Float(f64),
    /// Name of an identifier, or decoded contents of a string literal
    Str(String),
    /// The error an Invalid token reports
    Error(LexError),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::Str(value) => write!(f, "{}", value),
            TokenValue::Error(err) => write!(f, "{}", err),
        }
    }
}

/// A classified slice of source text.
///
/// # Example
///
/// ```
/// use kilnc_lex::{Lexer, TokenKind, TokenValue};
///
/// let mut lexer = Lexer::new("0xFF");
/// let token = lexer.next_token();
///
/// assert_eq!(token.kind, TokenKind::Int);
/// assert_eq!(token.text(), "0xFF");
/// assert_eq!(token.value, Some(TokenValue::Int(255)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// Category of the token
    pub kind: TokenKind,
    /// The whole buffer the token was scanned from
    pub source: &'src str,
    /// Byte offset of the first character
    pub position: usize,
    /// Length of the text in bytes
    pub length: usize,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Column of the first character (1-based, in characters)
    pub column: u32,
    /// Decoded payload, absent for punctuation and whitespace
    pub value: Option<TokenValue>,
}

impl<'src> Token<'src> {
    /// Creates a token without a value.
    pub fn new(
        kind: TokenKind,
        source: &'src str,
        position: usize,
        length: usize,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            source,
            position,
            length,
            line,
            column,
            value: None,
        }
    }

    /// Attaches a decoded value.
    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    /// The exact source text of the token.
    pub fn text(&self) -> &'src str {
        &self.source[self.position..self.position + self.length]
    }

    /// Location of the token as a [`Span`].
    pub fn span(&self) -> Span {
        Span::new(
            self.position,
            self.position + self.length,
            self.line,
            self.column,
        )
    }

    /// The error carried by an Invalid token.
    pub fn error(&self) -> Option<&LexError> {
        match &self.value {
            Some(TokenValue::Error(err)) => Some(err),
            _ => None,
        }
    }

    /// Diagnostic message of an Invalid token.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Returns true for EndOfFile tokens.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Returns true for Invalid tokens whose text belongs to the next token.
    ///
    /// These are left out when the stream is read as a partition of the
    /// source.
    pub fn is_attached(&self) -> bool {
        self.error().is_some_and(|err| !err.consumes_input())
    }

    /// Integer value, if this is an Int token.
    pub fn as_int(&self) -> Option<u64> {
        match self.value {
            Some(TokenValue::Int(value)) => Some(value),
            _ => None,
        }
    }

    /// Float value, if this is a Float token.
    pub fn as_float(&self) -> Option<f64> {
        match self.value {
            Some(TokenValue::Float(value)) => Some(value),
            _ => None,
        }
    }

    /// Identifier name or decoded string contents.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Str(value)) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_display() {
        let token = Token::new(TokenKind::RightArrow, "a -> b", 2, 2, 1, 3);
        assert_eq!(token.text(), "->");
        assert_eq!(token.to_string(), "->");
    }

    #[test]
    fn test_span() {
        let token = Token::new(TokenKind::Identifier, "x\nfoo", 2, 3, 2, 1);
        assert_eq!(token.span(), Span::new(2, 5, 2, 1));
    }

    #[test]
    fn test_error_accessors() {
        let token = Token::new(TokenKind::Invalid, "@", 0, 1, 1, 1)
            .with_value(TokenValue::Error(LexError::UnknownCharacter('@')));
        assert_eq!(token.message().as_deref(), Some("unknown character '@'"));
        assert!(!token.is_attached());

        let attached = Token::new(TokenKind::Invalid, "\"ab", 0, 1, 1, 1)
            .with_value(TokenValue::Error(LexError::UnclosedString));
        assert!(attached.is_attached());
    }

    #[test]
    fn test_value_accessors() {
        let int = Token::new(TokenKind::Int, "7", 0, 1, 1, 1).with_value(TokenValue::Int(7));
        assert_eq!(int.as_int(), Some(7));
        assert_eq!(int.as_float(), None);
        assert_eq!(int.message(), None);

        let ident =
            Token::new(TokenKind::Identifier, "ab", 0, 2, 1, 1).with_value(TokenValue::Str("ab".into()));
        assert_eq!(ident.as_str(), Some("ab"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(TokenValue::Int(5).to_string(), "5");
        assert_eq!(TokenValue::Float(1.5).to_string(), "1.5");
        assert_eq!(TokenValue::Float(2.0).to_string(), "2.0");
        assert_eq!(TokenValue::Str("hi".into()).to_string(), "hi");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::ExclamationMarkEquals.to_string(), "ExclamationMarkEquals");
    }
}
