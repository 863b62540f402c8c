//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the token queue
//! - `whitespace` - Whitespace runs
//! - `comment` - Line and block comments, and the continuation skipper
//! - `identifier` - Identifiers and line continuations
//! - `number` - Integer and float literals in bases 2, 10 and 16
//! - `string` - String literals and escapes
//! - `operator` - Punctuation tables and unknown characters

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod whitespace;

pub use self::core::{Lexer, TokensUntilEof};
pub use self::operator::{ONE_CHAR_PUNCTUATION, TWO_CHAR_PUNCTUATION};
