use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

/// A lexing failure: what went wrong plus the span it covers. The span's
/// start marks where the offending lexeme began; the end is the cursor at
/// the moment the scan aborted.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, start: Position, end: Position) -> Self {
        Error {
            internal_error: error_impl,
            span: Span { start, end },
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "Illegal Character",
            ErrorImpl::UnterminatedString { .. } => "Unterminated String",
            ErrorImpl::NumberParse { .. } => "Number Parse Error",
        }
    }

    pub fn details(&self) -> String {
        self.internal_error.to_string()
    }
}

impl Display for Error {
    // Two-line diagnostic; the displayed line number is 1-based while the
    // internal counter is 0-based.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {}", self.get_error_name(), self.internal_error)?;
        write!(
            f,
            "File {}, line {}",
            self.span.start.file,
            self.span.start.line + 1
        )
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("'{character}'")]
    IllegalCharacter { character: char },
    #[error("no closing quote for {text:?}")]
    UnterminatedString { text: String },
    #[error("error parsing number: {text:?}")]
    NumberParse { text: String },
}
