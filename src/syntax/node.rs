//! Immutable syntax tree of one cron field

use std::fmt;

use smol_str::SmolStr;

/// Dialect-specific alias tokens, kept verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    /// Jenkins `H`: a hashed, stable pseudo-random value
    Hash,
    /// Jenkins `H(a-b)`: a hashed value within a range
    HashRange,
    /// Quartz `L`: last day of the month or week
    Last,
    /// Quartz `LW`: last weekday of the month
    LastWeekday,
    /// Quartz `15W`: weekday nearest to the given day
    NearestWeekday,
    /// Quartz `5L` / `FRIL`: last given weekday of the month
    LastOfWeekday,
    /// Quartz `MON#4`: nth given weekday of the month
    NthWeekday,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecialAlias {
    pub kind: SpecialKind,
    pub text: SmolStr,
}

/// One node of a parsed field
///
/// `value()` renders canonical text; parsing that text again under the same
/// dialect yields an equal node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CronNode {
    /// `*`
    Wildcard,
    /// `?`
    NoSpecificValue,
    /// A number or a month/day name
    Atomic(SmolStr),
    Special(SpecialAlias),
    /// `lhs-rhs`
    Range { lhs: Box<CronNode>, rhs: Box<CronNode> },
    /// `base/step`, where base is an atomic, a wildcard, a special or a range
    Interval { base: Box<CronNode>, step: Box<CronNode> },
    /// Two or more comma-separated terms, none of them a union
    Union(Vec<CronNode>),
}

impl CronNode {
    pub fn atomic(text: impl Into<SmolStr>) -> Self {
        Self::Atomic(text.into())
    }

    pub fn special(kind: SpecialKind, text: impl Into<SmolStr>) -> Self {
        Self::Special(SpecialAlias { kind, text: text.into() })
    }

    pub fn range(lhs: CronNode, rhs: CronNode) -> Self {
        Self::Range { lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn interval(base: CronNode, step: CronNode) -> Self {
        Self::Interval { base: Box::new(base), step: Box::new(step) }
    }

    /// Canonical text of this node
    pub fn value(&self) -> String {
        self.to_string()
    }

    /// Terms of a union, or the node itself
    pub fn terms(&self) -> &[CronNode] {
        match self {
            Self::Union(parts) => parts,
            other => std::slice::from_ref(other),
        }
    }
}

impl fmt::Display for CronNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::NoSpecificValue => f.write_str("?"),
            Self::Atomic(text) => f.write_str(text),
            Self::Special(alias) => f.write_str(&alias.text),
            Self::Range { lhs, rhs } => write!(f, "{}-{}", lhs, rhs),
            Self::Interval { base, step } => write!(f, "{}/{}", base, step),
            Self::Union(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CronNode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
