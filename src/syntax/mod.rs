//! Syntax: the immutable tree a parse produces
//!
//! - [`CronNode`] - one field's tree, with canonical `value()`
//! - [`Expression`] - all fields of a dialect, keyed by [`FieldName`]
//! - [`builder`] - translation from the rowan CST
//!
//! [`FieldName`]: crate::dialect::FieldName

pub mod builder;
mod expression;
mod node;

pub use expression::Expression;
pub use node::{CronNode, SpecialAlias, SpecialKind};
