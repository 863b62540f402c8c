//! kilnc-drv - Kiln Front-End Driver
//!
//! Reads a source file, runs the lexer over it and either lists the tokens
//! or reports the lexical errors as rendered diagnostics. The `kilnc`
//! binary is a thin clap wrapper around [`Session`].
//!
//! # Example
//!
//! ```
//! use kilnc_drv::{OutputConfig, Session};
//! use kilnc_util::SourceFile;
//!
//! let session = Session::new(SourceFile::new("demo.kln", "x = 1"), OutputConfig::default());
//! let listing = session.render_tokens().unwrap();
//!
//! assert!(listing.starts_with("Token(kind = Identifier, position = 0"));
//! assert!(!session.check().has_errors());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use kilnc_lex::{diagnostic_for, tokenize, Token, TokenKind, TokenValue};
use kilnc_util::{Handler, SourceFile};
use serde::Serialize;
use tracing::{debug, info};

pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{DriverError, Result};

/// Line printed before an echoed source.
pub const BEGIN_OF_SOURCE: &str = "-------------- BEGIN_OF_SOURCE --------------";
/// Line printed after an echoed source.
pub const END_OF_SOURCE: &str = "-------------- END_OF_SOURCE --------------";

/// One source file and the options it is processed with.
pub struct Session {
    file: SourceFile,
    output: OutputConfig,
}

impl Session {
    /// Creates a session over an already loaded file.
    pub fn new(file: SourceFile, output: OutputConfig) -> Self {
        Self { file, output }
    }

    /// Reads `path` and creates a session over its contents.
    pub fn open(path: &Path, output: OutputConfig) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DriverError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read source file");

        Ok(Self::new(
            SourceFile::new(path.display().to_string(), content),
            output,
        ))
    }

    /// The file being processed.
    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    /// Listing options in effect.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Tokens up to the first EndOfFile, filtered by the listing options.
    pub fn tokens(&self) -> Vec<Token<'_>> {
        let tokens: Vec<_> = tokenize(self.file.content())
            .into_iter()
            .filter(|token| self.output.show_whitespace || token.kind != TokenKind::Whitespace)
            .filter(|token| self.output.show_eof || !token.is_eof())
            .collect();
        info!(file = self.file.name(), tokens = tokens.len(), "lexed source");
        tokens
    }

    /// Listing records for [`Session::tokens`].
    pub fn records(&self) -> Vec<TokenRecord<'_>> {
        self.tokens().iter().map(TokenRecord::from).collect()
    }

    /// Renders the token listing in the configured format.
    ///
    /// The source banner is only printed for text listings, so JSON output
    /// stays a single document.
    pub fn render_tokens(&self) -> Result<String> {
        let records = self.records();

        match self.output.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&records)? + "\n"),
            OutputFormat::Text => {
                let mut out = String::new();
                if self.output.echo_source {
                    out.push_str(BEGIN_OF_SOURCE);
                    out.push('\n');
                    out.push_str(self.file.content());
                    if !self.file.content().ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str(END_OF_SOURCE);
                    out.push('\n');
                }
                for record in &records {
                    out.push_str(&record.to_string());
                    out.push('\n');
                }
                Ok(out)
            },
        }
    }

    /// Collects a diagnostic for every Invalid token.
    pub fn check(&self) -> CheckReport {
        let handler = Handler::new();
        for token in tokenize(self.file.content()) {
            if let Some(diagnostic) = diagnostic_for(&token) {
                handler.emit_diagnostic(diagnostic);
            }
        }

        let rendered = handler
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.render(&self.file))
            .collect();
        let report = CheckReport {
            file_name: self.file.name().to_string(),
            rendered,
            error_count: handler.error_count(),
        };
        info!(file = self.file.name(), errors = report.error_count, "checked source");
        report
    }
}

/// Outcome of [`Session::check`].
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Name of the checked file
    pub file_name: String,
    /// Rendered diagnostics, in source order
    pub rendered: Vec<String>,
    /// Number of error diagnostics
    pub error_count: usize,
}

impl CheckReport {
    /// Returns true if any error was reported.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// One-line summary for the end of the report.
    pub fn summary(&self) -> String {
        match self.error_count {
            0 => format!("no errors found in {}", self.file_name),
            1 => format!("1 error found in {}", self.file_name),
            n => format!("{} errors found in {}", n, self.file_name),
        }
    }
}

/// Value column of a listing record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// Integer literal value
    Int(u64),
    /// Float literal value
    Float(f64),
    /// Identifier name, string contents or error message
    Str(String),
}

impl From<&TokenValue> for RecordValue {
    fn from(value: &TokenValue) -> Self {
        match value {
            TokenValue::Int(value) => RecordValue::Int(*value),
            TokenValue::Float(value) => RecordValue::Float(*value),
            TokenValue::Str(value) => RecordValue::Str(value.clone()),
            TokenValue::Error(err) => RecordValue::Str(err.to_string()),
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Int(value) => write!(f, "{}", value),
            RecordValue::Float(value) => write!(f, "{:?}", value),
            RecordValue::Str(value) => f.write_str(&escape_control(value)),
        }
    }
}

/// A token as printed by `kilnc tokens`.
///
/// The text form is one line:
/// `Token(kind = K, position = P, line = L, column = C, length = N, value = V), text = T`,
/// with control characters in `V` and `T` escaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord<'src> {
    /// Token kind name
    pub kind: &'static str,
    /// Byte offset
    pub position: usize,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
    /// Length in bytes
    pub length: usize,
    /// Decoded value, if any
    pub value: Option<RecordValue>,
    /// Exact source text
    pub text: &'src str,
}

impl<'src> From<&Token<'src>> for TokenRecord<'src> {
    fn from(token: &Token<'src>) -> Self {
        Self {
            kind: token.kind.name(),
            position: token.position,
            line: token.line,
            column: token.column,
            length: token.length,
            value: token.value.as_ref().map(RecordValue::from),
            text: token.text(),
        }
    }
}

impl fmt::Display for TokenRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(kind = {}, position = {}, line = {}, column = {}, length = {}, value = ",
            self.kind, self.position, self.line, self.column, self.length
        )?;
        match &self.value {
            Some(value) => write!(f, "{}", value)?,
            None => f.write_str("None")?,
        }
        write!(f, "), text = {}", escape_control(self.text))
    }
}

/// Escapes control characters so a record stays on one line.
fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
