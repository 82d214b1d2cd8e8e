use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

/// What went wrong while converting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertErrorKind {
    /// A `!` line whose name is not one of the known directives.
    UnknownBangForm(String),
    /// A fixed-arity directive with the wrong number of body lines.
    MalformedBangForm {
        name: String,
        expected: usize,
        found: usize,
    },
    /// The input ended before the `!` line closing a directive's body.
    UnterminatedBangForm(String),
}

impl fmt::Display for ConvertErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertErrorKind::UnknownBangForm(name) => {
                write!(f, "unrecognized bang form: {}", name)
            }
            ConvertErrorKind::MalformedBangForm {
                name,
                expected,
                found,
            } => write!(
                f,
                "malformed bang form: {} takes {} body line{}, found {}",
                name,
                expected,
                if *expected == 1 { "" } else { "s" },
                found
            ),
            ConvertErrorKind::UnterminatedBangForm(name) => {
                write!(f, "unterminated bang form: {}", name)
            }
        }
    }
}

/// A fatal conversion error, located at the directive line that caused it.
#[derive(Debug, Clone)]
pub struct ConvertError {
    pub kind: ConvertErrorKind,
    /// 0-based index of the offending line in the document.
    pub line_index: usize,
    /// Byte span of that line, for diagnostics.
    pub span: Range<usize>,
    pub file_id: usize,
    pub notes: Vec<String>,
}

impl ConvertError {
    pub fn new(
        kind: ConvertErrorKind,
        line_index: usize,
        span: Range<usize>,
        file_id: usize,
    ) -> Self {
        ConvertError {
            kind,
            line_index,
            span,
            file_id,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 1-based line number, as shown to users.
    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::new(Severity::Error)
            .with_message(self.kind.to_string())
            .with_labels(vec![Label::primary(self.file_id, self.span.clone())])
            .with_notes(self.notes.clone())
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.kind, self.line_number())
    }
}

impl std::error::Error for ConvertError {}
