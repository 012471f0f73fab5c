//! Parse error types
//!
//! Each error carries:
//! - Its kind and categorized error code
//! - Source location (byte range into the parsed text)
//! - The field being parsed, when known
//! - An optional hint

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;
use crate::dialect::FieldName;

/// The three ways a parse can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text not in the active dialect's vocabulary
    LexicalError,
    /// A field (or an operand) requires a term but none was found
    RequiredTermMissing,
    /// Tokens remain after the field grammar fully matched
    UnconsumedInput,
}

impl ErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            Self::LexicalError => ErrorCode::E0101,
            Self::RequiredTermMissing => ErrorCode::E0201,
            Self::UnconsumedInput => ErrorCode::E0202,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LexicalError => "LexicalError",
            Self::RequiredTermMissing => "RequiredTermMissing",
            Self::UnconsumedInput => "UnconsumedInput",
        }
    }
}

/// A parse error with location and context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .kind.code())]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Field being parsed, `None` for standalone field parsing
    pub field: Option<FieldName>,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, range: TextRange) -> Self {
        Self {
            kind,
            message: message.into(),
            range,
            field: None,
            hint: None,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(kind: ErrorKind, message: impl Into<String>, offset: TextSize) -> Self {
        Self::new(kind, message, TextRange::empty(offset))
    }

    /// Create an error using the code's default message
    pub fn with_default_message(kind: ErrorKind, range: TextRange) -> Self {
        Self::new(kind, kind.code().default_message(), range)
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Attach the field this error belongs to
    pub fn in_field(mut self, field: FieldName) -> Self {
        self.field = Some(field);
        self
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::LexicalError
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = match self.field {
            Some(field) => format!("{}: {} (in {} field)", self.code(), self.message, field),
            None => format!("{}: {}", self.code(), self.message),
        };
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}
