//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Field-aware error messages
//! - Hints for tokens that belong to another dialect

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ErrorKind, ParseError};

#[cfg(test)]
mod tests;
