//! Grammar for a single cron field
//!
//! ```text
//! field  := term (',' term)*
//! term   := atomic ('-' value)? ('/' INTEGER)?
//! atomic := '*' | '?' | value | special
//! ```
//!
//! Which atomics a field admits comes from its [`FieldRules`]. The rules are
//! generic over [`FieldParser`] so they can run against any parser that
//! provides the infrastructure below.
//!
//! [`FieldRules`]: crate::dialect::FieldRules

mod field;

pub(super) use crate::parser::errors::ErrorKind;
pub(super) use crate::parser::syntax_kind::SyntaxKind;

pub use self::field::parse_field;

/// Trait for field parsing operations
pub trait FieldParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn current_text(&self) -> &str;
    fn at(&self, kind: SyntaxKind) -> bool;
    fn at_eof(&self) -> bool;
    /// Current token may start a term in this field
    fn at_atom(&self) -> bool;
    /// Current token may close a range in this field
    fn at_range_end(&self) -> bool;
    fn has_errors(&self) -> bool;

    // Token consumption
    fn bump(&mut self);
    fn bump_rest(&mut self);

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn start_node_at(&mut self, checkpoint: rowan::Checkpoint, kind: SyntaxKind);
    fn checkpoint(&self) -> rowan::Checkpoint;
    fn finish_node(&mut self);

    /// Record an error at the current token (or at end of field)
    fn error(&mut self, kind: ErrorKind, message: String);
}
