//! Parser options

use crate::dialect::{ConfigError, CronMode};

/// Options fixed at parser construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ParserOptions {
    /// Dialect the parser accepts
    pub mode: CronMode,
}

impl ParserOptions {
    pub fn new(mode: CronMode) -> Self {
        Self { mode }
    }

    /// Options from a mode name such as `"quartz"`
    pub fn from_mode_name(name: &str) -> Result<Self, ConfigError> {
        name.parse().map(Self::new)
    }
}
