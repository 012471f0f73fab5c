//! Dialect profiles
//!
//! A [`DialectProfile`] is plain static data: the ordered field list of a
//! dialect, the record default of each field, and the special tokens each
//! field admits. [`DialectTables`] turns a profile into the lookup sets the
//! lexer and grammar consult; a parser builds them once at construction.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::parser::{SyntaxKind, Vocabulary};

/// Schedule fields across all dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FieldName {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::DayOfMonth,
        Self::Month,
        Self::DayOfWeek,
        Self::Year,
    ];

    /// Record key for this field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "dayOfMonth",
            Self::Month => "month",
            Self::DayOfWeek => "dayOfWeek",
            Self::Year => "year",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DayOfMonth => "day of month",
            Self::DayOfWeek => "day of week",
            other => other.as_str(),
        }
    }

    /// Name tokens a field accepts regardless of dialect
    fn name_kinds(self) -> &'static [SyntaxKind] {
        match self {
            Self::Month => &[SyntaxKind::MONTH_NAME],
            Self::DayOfWeek => &[SyntaxKind::DAY_NAME],
            _ => &[],
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Parser mode selecting the dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CronMode {
    /// Classic five-field cron
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "base"))]
    Cron,
    /// Quartz scheduler: seconds, years, `?` and the `L`/`W`/`#` specials
    #[cfg_attr(feature = "serde", serde(alias = "extended"))]
    Quartz,
    /// Jenkins build triggers: five fields plus the `H` alias
    #[cfg_attr(feature = "serde", serde(alias = "third_party"))]
    Jenkins,
}

impl CronMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cron => "cron",
            Self::Quartz => "quartz",
            Self::Jenkins => "jenkins",
        }
    }

    pub fn profile(self) -> &'static DialectProfile {
        match self {
            Self::Cron => &CRON,
            Self::Quartz => &QUARTZ,
            Self::Jenkins => &JENKINS,
        }
    }
}

impl fmt::Display for CronMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a mode name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown cron mode '{0}' (expected cron, quartz or jenkins)")]
    UnknownMode(String),
}

impl FromStr for CronMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cron" | "base" => Ok(Self::Cron),
            "quartz" | "extended" => Ok(Self::Quartz),
            "jenkins" | "third_party" | "third-party" => Ok(Self::Jenkins),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// One field of a dialect profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    /// Text substituted when a record omits this field; `None` means required
    pub record_default: Option<&'static str>,
    /// Special tokens admitted by this field in this dialect
    pub specials: &'static [SyntaxKind],
    /// Positional text may stop before this field (trailing fields only)
    pub trailing_optional: bool,
}

impl FieldSpec {
    const fn required(name: FieldName, specials: &'static [SyntaxKind]) -> Self {
        Self { name, record_default: None, specials, trailing_optional: false }
    }

    const fn defaulted(name: FieldName, default: &'static str, specials: &'static [SyntaxKind]) -> Self {
        Self { name, record_default: Some(default), specials, trailing_optional: false }
    }

    const fn trailing(self) -> Self {
        Self { trailing_optional: true, ..self }
    }

    pub fn is_optional(&self) -> bool {
        self.record_default.is_some()
    }
}

/// Static description of one dialect
#[derive(Debug, PartialEq, Eq)]
pub struct DialectProfile {
    pub mode: CronMode,
    pub fields: &'static [FieldSpec],
}

impl DialectProfile {
    pub fn field(&self, name: FieldName) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }

    /// Fewest positional groups free text may supply
    pub fn min_positional(&self) -> usize {
        let optional = self.fields.iter().rev().take_while(|spec| spec.trailing_optional).count();
        self.fields.len() - optional
    }
}

const NONE: &[SyntaxKind] = &[];

const QUARTZ_DAY_OF_MONTH: &[SyntaxKind] = &[
    SyntaxKind::QUESTION,
    SyntaxKind::LAST,
    SyntaxKind::LAST_WEEKDAY,
    SyntaxKind::NEAREST_WEEKDAY,
];

const QUARTZ_DAY_OF_WEEK: &[SyntaxKind] = &[
    SyntaxKind::QUESTION,
    SyntaxKind::LAST,
    SyntaxKind::LAST_OF_WEEKDAY,
    SyntaxKind::NTH_WEEKDAY,
];

const JENKINS_ANY: &[SyntaxKind] = &[SyntaxKind::HASH, SyntaxKind::HASH_RANGE];

static CRON: DialectProfile = DialectProfile {
    mode: CronMode::Cron,
    fields: &[
        FieldSpec::required(FieldName::Minute, NONE),
        FieldSpec::required(FieldName::Hour, NONE),
        FieldSpec::defaulted(FieldName::DayOfMonth, "*", NONE),
        FieldSpec::defaulted(FieldName::Month, "*", NONE),
        FieldSpec::defaulted(FieldName::DayOfWeek, "*", NONE),
    ],
};

static QUARTZ: DialectProfile = DialectProfile {
    mode: CronMode::Quartz,
    fields: &[
        FieldSpec::defaulted(FieldName::Second, "0", NONE),
        FieldSpec::required(FieldName::Minute, NONE),
        FieldSpec::required(FieldName::Hour, NONE),
        FieldSpec::defaulted(FieldName::DayOfMonth, "*", QUARTZ_DAY_OF_MONTH),
        FieldSpec::defaulted(FieldName::Month, "*", NONE),
        FieldSpec::defaulted(FieldName::DayOfWeek, "*", QUARTZ_DAY_OF_WEEK),
        FieldSpec::defaulted(FieldName::Year, "*", NONE).trailing(),
    ],
};

static JENKINS: DialectProfile = DialectProfile {
    mode: CronMode::Jenkins,
    fields: &[
        FieldSpec::required(FieldName::Minute, JENKINS_ANY),
        FieldSpec::required(FieldName::Hour, JENKINS_ANY),
        FieldSpec::defaulted(FieldName::DayOfMonth, "*", JENKINS_ANY),
        FieldSpec::defaulted(FieldName::Month, "*", JENKINS_ANY),
        FieldSpec::defaulted(FieldName::DayOfWeek, "*", JENKINS_ANY),
    ],
};

/// Token kinds every dialect recognizes
const COMMON_VOCABULARY: &[SyntaxKind] = &[
    SyntaxKind::INTEGER,
    SyntaxKind::MONTH_NAME,
    SyntaxKind::DAY_NAME,
    SyntaxKind::COMMA,
    SyntaxKind::MINUS,
    SyntaxKind::SLASH,
    SyntaxKind::STAR,
];

/// Token kinds that may start a term in one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    atoms: FxHashSet<SyntaxKind>,
}

impl FieldRules {
    fn for_field(spec: &FieldSpec) -> Self {
        let mut atoms: FxHashSet<SyntaxKind> = [SyntaxKind::STAR, SyntaxKind::INTEGER].into_iter().collect();
        atoms.extend(spec.name.name_kinds().iter().copied());
        atoms.extend(spec.specials.iter().copied());
        Self { atoms }
    }

    fn merge(&mut self, other: &FieldRules) {
        self.atoms.extend(other.atoms.iter().copied());
    }

    /// Can a token of this kind start a term
    pub fn admits_atom(&self, kind: SyntaxKind) -> bool {
        kind.is_atomic() && self.atoms.contains(&kind)
    }

    /// Can a token of this kind close a range
    pub fn admits_range_end(&self, kind: SyntaxKind) -> bool {
        kind.is_value() && self.atoms.contains(&kind)
    }
}

/// Lookup tables derived from a profile
#[derive(Debug, Clone)]
pub struct DialectTables {
    pub profile: &'static DialectProfile,
    pub vocabulary: Vocabulary,
    fields: Vec<(FieldName, FieldRules)>,
    any_field: FieldRules,
}

impl DialectTables {
    pub fn build(profile: &'static DialectProfile) -> Self {
        let fields: Vec<_> = profile
            .fields
            .iter()
            .map(|spec| (spec.name, FieldRules::for_field(spec)))
            .collect();

        let mut any_field = FieldRules::default();
        for (_, rules) in &fields {
            any_field.merge(rules);
        }

        let specials = profile.fields.iter().flat_map(|spec| spec.specials.iter().copied());
        let vocabulary = Vocabulary::new(
            profile.mode.as_str(),
            COMMON_VOCABULARY.iter().copied().chain(specials),
        );

        Self { profile, vocabulary, fields, any_field }
    }

    /// Rules for one field of the profile
    pub fn rules(&self, name: FieldName) -> Option<&FieldRules> {
        self.fields.iter().find(|(field, _)| *field == name).map(|(_, rules)| rules)
    }

    /// Rules admitting everything any field of the dialect admits
    pub fn any_field(&self) -> &FieldRules {
        &self.any_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_field_order() {
        let names: Vec<_> = CronMode::Quartz.profile().field_names().collect();
        assert_eq!(names, FieldName::ALL.to_vec());

        let names: Vec<_> = CronMode::Cron.profile().field_names().collect();
        assert_eq!(
            names,
            vec![
                FieldName::Minute,
                FieldName::Hour,
                FieldName::DayOfMonth,
                FieldName::Month,
                FieldName::DayOfWeek,
            ]
        );
    }

    #[test]
    fn test_quartz_defaults() {
        let profile = CronMode::Quartz.profile();
        assert_eq!(profile.field(FieldName::Second).and_then(|f| f.record_default), Some("0"));
        assert_eq!(profile.field(FieldName::Year).and_then(|f| f.record_default), Some("*"));
        assert!(!profile.field(FieldName::Minute).is_some_and(FieldSpec::is_optional));
        assert_eq!(profile.min_positional(), 6);
        assert_eq!(CronMode::Cron.profile().min_positional(), 5);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("QUARTZ".parse::<CronMode>(), Ok(CronMode::Quartz));
        assert_eq!("base".parse::<CronMode>(), Ok(CronMode::Cron));
        assert_eq!("third_party".parse::<CronMode>(), Ok(CronMode::Jenkins));
        assert_eq!(
            "spring".parse::<CronMode>(),
            Err(ConfigError::UnknownMode("spring".to_string()))
        );
    }

    #[test]
    fn test_vocabulary_gating() {
        let cron = DialectTables::build(CronMode::Cron.profile());
        let quartz = DialectTables::build(CronMode::Quartz.profile());
        let jenkins = DialectTables::build(CronMode::Jenkins.profile());

        assert!(!cron.vocabulary.contains(SyntaxKind::HASH));
        assert!(!cron.vocabulary.contains(SyntaxKind::NTH_WEEKDAY));
        assert!(quartz.vocabulary.contains(SyntaxKind::NTH_WEEKDAY));
        assert!(quartz.vocabulary.contains(SyntaxKind::QUESTION));
        assert!(!quartz.vocabulary.contains(SyntaxKind::HASH));
        assert!(jenkins.vocabulary.contains(SyntaxKind::HASH_RANGE));
        assert!(!jenkins.vocabulary.contains(SyntaxKind::QUESTION));
    }

    #[test]
    fn test_field_rules() {
        let quartz = DialectTables::build(CronMode::Quartz.profile());
        let minute = quartz.rules(FieldName::Minute).unwrap();
        let dow = quartz.rules(FieldName::DayOfWeek).unwrap();

        assert!(!minute.admits_atom(SyntaxKind::QUESTION));
        assert!(dow.admits_atom(SyntaxKind::QUESTION));
        assert!(dow.admits_atom(SyntaxKind::NTH_WEEKDAY));
        assert!(!minute.admits_range_end(SyntaxKind::DAY_NAME));
        assert!(dow.admits_range_end(SyntaxKind::DAY_NAME));
        assert!(quartz.any_field().admits_atom(SyntaxKind::NTH_WEEKDAY));
        assert!(quartz.rules(FieldName::Year).is_some());

        let cron = DialectTables::build(CronMode::Cron.profile());
        assert!(cron.rules(FieldName::Second).is_none());
    }
}
