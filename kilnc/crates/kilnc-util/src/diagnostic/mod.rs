//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are built with [`DiagnosticBuilder`], collected by a
//! [`Handler`] and rendered against the [`SourceFile`] they point into.
//!
//! # Examples
//!
//! ```
//! use kilnc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("digit '2' exceeds base 2")
//!         .code(DiagnosticCode::E_LEXER_INVALID_DIGIT)
//!         .span(Span::new(3, 4, 1, 4))
//!         .build(),
//! );
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use crate::span::Span;

use crate::span::SourceFile;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use kilnc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that makes the input invalid
    Error,
    /// A warning that doesn't invalidate the input
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic against the file it was reported in
    ///
    /// The span's first line is quoted and the part of the span on that
    /// line is underlined.
    ///
    /// # Examples
    ///
    /// ```
    /// use kilnc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
    /// use kilnc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.kln", "x = @");
    /// let diag = DiagnosticBuilder::error("unknown character '@'")
    ///     .code(DiagnosticCode::E_LEXER_UNKNOWN_CHAR)
    ///     .span(Span::new(4, 5, 1, 5))
    ///     .build();
    ///
    /// assert_eq!(
    ///     diag.render(&file),
    ///     "error[E1001]: unknown character '@'\n  --> main.kln:1:5\n  1 | x = @\n    |     ^\n"
    /// );
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        if self.span.line == 0 {
            out.push_str(&format!("  --> {}\n", file.name()));
        } else {
            out.push_str(&format!(
                "  --> {}:{}:{}\n",
                file.name(),
                self.span.line,
                self.span.column
            ));
        }

        if let Some(snippet) = self.snippet(file) {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for help in &self.helps {
            out.push_str(&format!("    = help: {}\n", help));
        }

        out
    }

    fn snippet(&self, file: &SourceFile) -> Option<SourceSnippet> {
        let line_number = self.span.line as usize;
        let line = file.line_at(line_number)?;
        let width = file
            .span_text(self.span)
            .map(|text| text.chars().take_while(|&c| c != '\n' && c != '\r').count())
            .unwrap_or(0);
        let start_column = self.span.column as usize;

        Some(SourceSnippet {
            line: line.to_string(),
            line_number,
            start_column,
            end_column: start_column + width,
        })
    }
}

/// Collects diagnostics in emission order
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_render_underlines_whole_span_on_first_line() {
        let file = SourceFile::new("a.kln", "a\n/* never\nclosed");
        let diag = DiagnosticBuilder::error("block comment is unclosed")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
            .span(Span::new(2, 17, 2, 1))
            .build();

        let rendered = diag.render(&file);
        assert_eq!(
            rendered,
            "error[E1007]: block comment is unclosed\n  --> a.kln:2:1\n  2 | /* never\n    | ^^^^^^^^\n"
        );
    }

    #[test]
    fn test_render_without_code_and_with_help() {
        let file = SourceFile::new("a.kln", "x");
        let diag = DiagnosticBuilder::new(Level::Warning, "odd")
            .span(Span::new(0, 1, 1, 1))
            .help("a help")
            .build();

        let rendered = diag.render(&file);
        assert!(rendered.starts_with("warning: odd\n  --> a.kln:1:1\n"));
        assert!(rendered.ends_with("    = help: a help\n"));
    }

    #[test]
    fn test_render_dummy_span_has_no_snippet() {
        let file = SourceFile::new("a.kln", "x");
        let rendered = DiagnosticBuilder::error("oops").build().render(&file);
        assert_eq!(rendered, "error: oops\n  --> a.kln\n");
    }

    #[test]
    fn test_handler_counts_only_errors() {
        let handler = Handler::default();
        assert_eq!(handler.error_count(), 0);

        handler.emit_diagnostic(DiagnosticBuilder::error("e").build());
        handler.emit_diagnostic(DiagnosticBuilder::new(Level::Warning, "w").build());

        assert_eq!(handler.error_count(), 1);
        let messages: Vec<_> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, ["e", "w"]);
    }
}
