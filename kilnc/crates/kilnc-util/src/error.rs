//! Core error types for kilnc-util crate

use thiserror::Error;

/// Error type for source file lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Byte offset where the span starts
        start: usize,
        /// Byte offset where the span ends
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Byte offset where the span starts
        span_start: usize,
        /// Byte offset where the span ends
        span_end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// The requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },

    /// Range does not fall on UTF-8 character boundaries
    #[error("Range {start}..{end} is not on character boundaries")]
    NotCharBoundary {
        /// Byte offset where the range starts
        start: usize,
        /// Byte offset where the range ends
        end: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
