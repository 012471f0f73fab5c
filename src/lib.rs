//! # cronix
//!
//! Dialect-aware parser for cron schedule expressions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cron      → CronParser entry points, records, options
//!   ↓
//! syntax    → CronNode tree, Expression, CST → tree builder
//!   ↓
//! dialect   → Cron / Quartz / Jenkins profiles and lookup tables
//!   ↓
//! parser    → Logos lexer, recursive-descent field grammar, rowan CST
//! ```

/// Parser: Logos lexer, recursive-descent field grammar, diagnostics
pub mod parser;

/// Dialect profiles: field layout, record defaults, token gating
pub mod dialect;

/// Syntax: CronNode tree and assembled Expression
pub mod syntax;

/// Entry points: CronParser, CronRecord, ParserOptions
pub mod cron;

pub use cron::{CronInput, CronParser, CronRecord, ParseFailure, ParserOptions};
pub use dialect::{ConfigError, CronMode, FieldName};
pub use parser::{ErrorCode, ErrorKind, ParseError};
pub use syntax::{CronNode, Expression, SpecialAlias, SpecialKind};
