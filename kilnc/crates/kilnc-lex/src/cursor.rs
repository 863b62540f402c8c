//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor maintains the current byte position in the source string and
/// the 1-based line and column of the character at that position. Columns
/// count characters, not bytes.
///
/// # Example
///
/// ```
/// use kilnc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x := 42");
///
/// assert_eq!(cursor.current(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current(), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character `offset` characters after the current one.
    ///
    /// Returns '\0' (null character) when that lies past the end of the
    /// source.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aé!");
    /// assert_eq!(cursor.peek(0), 'a');
    /// assert_eq!(cursor.peek(1), 'é');
    /// assert_eq!(cursor.peek(2), '!');
    /// assert_eq!(cursor.peek(3), '\0');
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Returns the current character, or '\0' at the end of the source.
    #[inline]
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Consumes and returns the current character.
    ///
    /// A newline moves to column 1 of the next line; any other character
    /// moves one column right. At the end of the source this returns '\0'
    /// and leaves the cursor where it is.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.advance(), 'a');
    /// assert_eq!(cursor.advance(), '\n');
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// assert_eq!(cursor.advance(), 'b');
    /// assert_eq!(cursor.advance(), '\0');
    /// assert_eq!(cursor.position(), 3);
    /// ```
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("*/");
    /// assert!(cursor.match_char('*'));
    /// assert!(!cursor.match_char('*'));
    /// assert_eq!(cursor.current(), '/');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// for _ in 0..3 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
