//! Rowan-based parser for cron fields
//!
//! ## Architecture
//!
//! ```text
//! Field Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind, filtered by the dialect Vocabulary
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! Builder → CronNode value (see crate::syntax)
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod errors;
pub mod grammar;
mod lexer;
mod syntax_kind;

pub use errors::{ErrorCode, ErrorKind, ParseError};
pub use lexer::{Lexed, Lexer, Token, Vocabulary, lex, tokenize};
pub use parser::{Parse, parse_field};
pub use syntax_kind::{CronLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
