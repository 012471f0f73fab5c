//! Parser input: positional text or a record of named fields

use crate::dialect::FieldName;

/// Field texts keyed by name
///
/// Key presence matters: an absent field takes the dialect's default, or
/// fails if the field has none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct CronRecord {
    pub second: Option<String>,
    pub minute: Option<String>,
    pub hour: Option<String>,
    pub day_of_month: Option<String>,
    pub month: Option<String>,
    pub day_of_week: Option<String>,
    pub year: Option<String>,
}

impl CronRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field, builder style
    pub fn with(mut self, name: FieldName, text: impl Into<String>) -> Self {
        *self.slot(name) = Some(text.into());
        self
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        match name {
            FieldName::Second => self.second.as_deref(),
            FieldName::Minute => self.minute.as_deref(),
            FieldName::Hour => self.hour.as_deref(),
            FieldName::DayOfMonth => self.day_of_month.as_deref(),
            FieldName::Month => self.month.as_deref(),
            FieldName::DayOfWeek => self.day_of_week.as_deref(),
            FieldName::Year => self.year.as_deref(),
        }
    }

    fn slot(&mut self, name: FieldName) -> &mut Option<String> {
        match name {
            FieldName::Second => &mut self.second,
            FieldName::Minute => &mut self.minute,
            FieldName::Hour => &mut self.hour,
            FieldName::DayOfMonth => &mut self.day_of_month,
            FieldName::Month => &mut self.month,
            FieldName::DayOfWeek => &mut self.day_of_week,
            FieldName::Year => &mut self.year,
        }
    }

    /// Read a record from JSON such as `{"minute": "5", "dayOfWeek": "?"}`
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// What [`CronParser::parse`](super::CronParser::parse) accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CronInput<'a> {
    /// Whitespace-separated positional fields
    Text(&'a str),
    Record(&'a CronRecord),
}

impl<'a> From<&'a str> for CronInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for CronInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a CronRecord> for CronInput<'a> {
    fn from(record: &'a CronRecord) -> Self {
        Self::Record(record)
    }
}
