//! Loaded source files and line lookups.
//!
//! [`SourceFile`] owns the text of one input file together with the byte
//! offsets at which its lines start, so diagnostics can quote the offending
//! line without rescanning the buffer.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use kilnc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.kln", "x = 1\ny = 2");
/// assert_eq!(file.name(), "main.kln");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("y = 2"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];

        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let line_content = &self.content[start..end];
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Like [`SourceFile::line_at`], but reports an out-of-range line as an error
    pub fn try_line_at(&self, line: usize) -> SourceMapResult<&str> {
        self.line_at(line).ok_or(SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }

    /// Extract the text covered by `span` with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use kilnc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.kln", "x -> y");
    /// assert_eq!(file.span_text(Span::new(2, 4, 1, 3)).unwrap(), "->");
    /// ```
    pub fn span_text(&self, span: Span) -> SourceMapResult<&str> {
        let (start, end) = (span.start, span.end);
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { start, end });
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
