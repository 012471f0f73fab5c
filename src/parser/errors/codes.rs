//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (tokens outside the active vocabulary)
//! - E02xx: Grammar errors (missing terms, leftover input)

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Text not recognized by the active dialect
    E0101,

    // =========================================================================
    // E02xx: Grammar errors
    // =========================================================================
    /// A field or operand requires at least one term but none was found
    E0201,
    /// Tokens remain after a field was fully matched
    E0202,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "lexical error",
            Self::E0201 | Self::E0202 => "grammar error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unrecognized token",
            Self::E0201 => "expected at least one term",
            Self::E0202 => "unexpected trailing input",
        }
    }

    /// Check if this is a lexical error
    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::E0101)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
