//! Assembled cron expression

use std::fmt;

use indexmap::IndexMap;

use super::node::CronNode;
use crate::dialect::{CronMode, FieldName};

/// A parsed expression: one node per field of the dialect, in profile order
///
/// Fields outside the dialect (e.g. `second` in cron mode) are absent, not
/// wildcards: [`Expression::get`] returns `None` for them and they never
/// appear in [`Expression::fields`] or [`Expression::value`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Expression {
    mode: CronMode,
    fields: IndexMap<FieldName, CronNode>,
}

impl Expression {
    /// Callers must pass exactly the profile's fields, in profile order.
    pub(crate) fn new(mode: CronMode, fields: IndexMap<FieldName, CronNode>) -> Self {
        debug_assert!(fields.keys().copied().eq(mode.profile().field_names()));
        Self { mode, fields }
    }

    pub fn mode(&self) -> CronMode {
        self.mode
    }

    pub fn get(&self, name: FieldName) -> Option<&CronNode> {
        self.fields.get(&name)
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.fields.contains_key(&name)
    }

    /// Fields in profile order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &CronNode)> + '_ {
        self.fields.iter().map(|(name, node)| (*name, node))
    }

    /// Present in quartz mode only
    pub fn second(&self) -> Option<&CronNode> {
        self.get(FieldName::Second)
    }

    pub fn minute(&self) -> Option<&CronNode> {
        self.get(FieldName::Minute)
    }

    pub fn hour(&self) -> Option<&CronNode> {
        self.get(FieldName::Hour)
    }

    pub fn day_of_month(&self) -> Option<&CronNode> {
        self.get(FieldName::DayOfMonth)
    }

    pub fn month(&self) -> Option<&CronNode> {
        self.get(FieldName::Month)
    }

    pub fn day_of_week(&self) -> Option<&CronNode> {
        self.get(FieldName::DayOfWeek)
    }

    /// Present in quartz mode only
    pub fn year(&self) -> Option<&CronNode> {
        self.get(FieldName::Year)
    }

    /// Canonical text: every field's value, single-space separated
    pub fn value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.fields.values().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
