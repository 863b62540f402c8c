//! kilnc-lex - Lexical Analyzer for the Kiln Programming Language
//!
//! This crate turns Kiln source text into a stream of classified tokens.
//! Each token borrows the source and knows its byte range, line and column,
//! so the exact lexeme is always available through [`Token::text`].
//!
//! # Example Usage
//!
//! ```
//! use kilnc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("x = 0b101");
//!
//! let names: Vec<String> = lexer
//!     .tokens_until_eof()
//!     .filter(|token| token.kind != TokenKind::Whitespace)
//!     .map(|token| format!("{}:{}", token.kind, token))
//!     .collect();
//!
//! assert_eq!(names, ["Identifier:x", "Equals:=", "Int:0b101", "EndOfFile:"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, TokenKind and TokenValue
//! - [`lexer`] - Main lexer implementation and its sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`radix`] - Numeric bases and the digit mapping
//! - [`error`] - Lexical error kinds
//!
//! # Token Categories
//!
//! - **Whitespace**: maximal runs, kept as tokens so the stream covers the
//!   source
//! - **Identifiers**: `[alpha_][alnum_]*`, Unicode-aware, with `\` line
//!   continuations
//! - **Integers**: `42`, `0xFF`, `0b1010`
//! - **Floats**: `1.5`, `.25`, `0x1.8`
//! - **Strings**: `"hello\n"` with escapes `\0 \n \r \\ \" \'`
//! - **Punctuation**: `. , # ^ : ; ( ) [ ] { } + - * / % = ! < >` and
//!   `+= -= *= /= %= == != <= >= .. ->`
//! - **Invalid**: lexical errors, see [`LexError`]
//! - **EndOfFile**: repeated forever after the input ends
//!
//! Comments (`// ...` and `/* ... */`) produce no tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod radix;
pub mod token;

#[cfg(test)]
mod edge_cases;

use kilnc_util::{Diagnostic, DiagnosticBuilder};

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{Lexer, TokensUntilEof};
pub use radix::Radix;
pub use token::{Token, TokenKind, TokenValue};

/// Lexes `source` up to and including the first EndOfFile token.
///
/// # Example
///
/// ```
/// use kilnc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("@");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Invalid);
/// assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).tokens_until_eof().collect()
}

/// Converts an Invalid token into a diagnostic.
///
/// Returns `None` for any other token.
///
/// # Example
///
/// ```
/// use kilnc_lex::{diagnostic_for, Lexer};
/// use kilnc_util::{DiagnosticCode, Level};
///
/// let token = Lexer::new("$").next_token();
/// let diag = diagnostic_for(&token).unwrap();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNKNOWN_CHAR));
/// assert_eq!(diag.message, "unknown character '$'");
/// assert_eq!(diag.span, token.span());
/// ```
pub fn diagnostic_for(token: &Token<'_>) -> Option<Diagnostic> {
    let error = token.error()?;

    let mut builder = DiagnosticBuilder::error(error.to_string())
        .code(error.code())
        .span(token.span());
    if let Some(help) = error.help() {
        builder = builder.help(help);
    }
    Some(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilnc_util::{DiagnosticCode, Handler};

    #[test]
    fn test_tokenize_stops_after_eof() {
        let tokens = tokenize("a b");
        assert_eq!(tokens.len(), 4);
        assert!(tokens[3].is_eof());
    }

    #[test]
    fn test_diagnostic_for_plain_token_is_none() {
        let token = Lexer::new("x").next_token();
        assert!(diagnostic_for(&token).is_none());
    }

    #[test]
    fn test_diagnostic_for_unclosed_string_has_help() {
        let tokens = tokenize("\"abc");
        let diag = diagnostic_for(&tokens[0]).unwrap();
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diag.helps.len(), 1);
        assert_eq!(diag.span.len(), 1);
    }

    #[test]
    fn test_diagnostics_collected_by_handler() {
        let handler = Handler::new();
        for token in tokenize("0b2 @ \"x\\q\"") {
            if let Some(diag) = diagnostic_for(&token) {
                handler.emit_diagnostic(diag);
            }
        }
        assert_eq!(handler.error_count(), 3);

        let codes: Vec<_> = handler
            .diagnostics()
            .iter()
            .filter_map(|d| d.code)
            .collect();
        assert_eq!(
            codes,
            [
                DiagnosticCode::E_LEXER_INVALID_DIGIT,
                DiagnosticCode::E_LEXER_UNKNOWN_CHAR,
                DiagnosticCode::E_LEXER_UNKNOWN_ESCAPE,
            ]
        );
    }

    #[test]
    fn test_small_program() {
        let source = "main :: proc() {\n    x : int = 0x10 + 2;\n    s := \"hi\\n\";\n}\n";
        let tokens: Vec<_> = tokenize(source)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .collect();

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::OpenParentheses,
                TokenKind::CloseParentheses,
                TokenKind::OpenBracket,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Int,
                TokenKind::Plus,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Equals,
                TokenKind::String,
                TokenKind::Semicolon,
                TokenKind::CloseBracket,
                TokenKind::EndOfFile,
            ]
        );
        assert_eq!(tokens[11].as_int(), Some(16));
        assert_eq!(tokens[18].as_str(), Some("hi\n"));
        assert_eq!((tokens[7].line, tokens[7].column), (2, 5));
    }
}
