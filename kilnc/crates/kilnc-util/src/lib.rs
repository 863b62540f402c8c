//! kilnc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Kiln front end:
//!
//! - [`span`] - byte/line/column source locations and loaded source files
//! - [`diagnostic`] - diagnostics, their codes, and the [`Handler`]
//!   that collects them
//! - [`error`] - error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use kilnc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("unknown character '@'")
//!         .code(DiagnosticCode::E_LEXER_UNKNOWN_CHAR)
//!         .span(Span::new(4, 5, 1, 5))
//!         .build(),
//! );
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
