//! Lexical error kinds.
//!
//! A lexical error never stops the scan. Each one travels inside an
//! [`Invalid`](crate::TokenKind::Invalid) token whose message is the
//! `Display` rendering of the error.

use kilnc_util::DiagnosticCode;
use thiserror::Error;

use crate::radix::Radix;

/// Error found while scanning source text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token
    #[error("unknown character '{0}'")]
    UnknownCharacter(char),

    /// `/*` without a matching `*/`
    #[error("block comment is unclosed at end of file")]
    UnclosedBlockComment {
        /// Whether the comment follows a line continuation, whose
        /// identifier token owns the comment text
        continuation: bool,
    },

    /// A digit whose value is not below the literal's base
    #[error("digit '{digit}' exceeds base {base}")]
    DigitExceedsBase {
        /// The offending digit
        digit: char,
        /// The base of the literal
        base: u32,
    },

    /// An integer literal that does not fit in 64 bits
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,

    /// A backslash followed by a character with no escape meaning
    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),

    /// End of input inside a string literal
    #[error("string literal is unclosed at end of file")]
    UnclosedString,

    /// A numeric base outside `2..=36`
    #[error("unsupported base {0}, bases must lie in 2..={max}", max = Radix::MAX)]
    UnsupportedBase(u32),
}

impl LexError {
    /// Returns true if the error token stands for input of its own.
    ///
    /// Such tokens take part in the source-order token stream. Every other
    /// error is attached to the token that follows it, which owns the text.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::LexError;
    ///
    /// assert!(LexError::UnknownCharacter('@').consumes_input());
    /// assert!(!LexError::UnclosedString.consumes_input());
    /// ```
    pub fn consumes_input(&self) -> bool {
        match self {
            LexError::UnknownCharacter(_) => true,
            LexError::UnclosedBlockComment { continuation } => !continuation,
            _ => false,
        }
    }

    /// Returns the diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnknownCharacter(_) => DiagnosticCode::E_LEXER_UNKNOWN_CHAR,
            LexError::UnclosedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::DigitExceedsBase { .. } => DiagnosticCode::E_LEXER_INVALID_DIGIT,
            LexError::IntegerOverflow => DiagnosticCode::E_LEXER_INTEGER_OVERFLOW,
            LexError::UnknownEscape(_) => DiagnosticCode::E_LEXER_UNKNOWN_ESCAPE,
            LexError::UnclosedBlockComment { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexError::UnsupportedBase(_) => DiagnosticCode::E_LEXER_UNSUPPORTED_BASE,
        }
    }

    /// A short suggestion shown under the rendered diagnostic, if any.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnclosedBlockComment { .. } => Some("close the comment with `*/`"),
            LexError::UnclosedString => Some("close the string with `\"`"),
            LexError::UnknownEscape(_) => {
                Some("valid escapes are \\0, \\n, \\r, \\\\, \\\" and \\'")
            }
            _ => None,
        }
    }
}
