//! Record input: named fields with dialect defaults

use cronix::{CronMode, CronNode, CronParser, CronRecord, ErrorKind, FieldName};
use rstest::rstest;

fn hour_and_minute() -> CronRecord {
    CronRecord::new()
        .with(FieldName::Minute, "5")
        .with(FieldName::Hour, "4")
}

#[test]
fn test_quartz_record_defaults() {
    let mut parser = CronParser::with_mode(CronMode::Quartz);
    let parsed = parser.parse(&hour_and_minute()).unwrap();

    assert_eq!(parsed.second(), Some(&CronNode::atomic("0")));
    assert_eq!(parsed.year(), Some(&CronNode::Wildcard));
    assert_eq!(parsed.day_of_week(), Some(&CronNode::Wildcard));
    assert_eq!(parsed.month(), Some(&CronNode::Wildcard));
    assert_eq!(parsed.day_of_month(), Some(&CronNode::Wildcard));
    assert_eq!(parsed.value(), "0 5 4 * * * *");
}

#[rstest]
#[case(CronMode::Cron)]
#[case(CronMode::Jenkins)]
fn test_five_field_dialects_leave_second_and_year_absent(#[case] mode: CronMode) {
    let mut parser = CronParser::with_mode(mode);
    let parsed = parser.parse(&hour_and_minute()).unwrap();

    assert!(parsed.second().is_none());
    assert!(parsed.year().is_none());
    assert!(!parsed.contains(FieldName::Second));
    assert_eq!(parsed.value(), "5 4 * * *");
}

#[test]
fn test_full_quartz_record() {
    let record = CronRecord::new()
        .with(FieldName::Second, "30")
        .with(FieldName::Minute, "5")
        .with(FieldName::Hour, "4")
        .with(FieldName::DayOfMonth, "*/3")
        .with(FieldName::Month, "*/2")
        .with(FieldName::DayOfWeek, "?")
        .with(FieldName::Year, "2030");
    let mut parser = CronParser::with_mode(CronMode::Quartz);
    let parsed = parser.parse(&record).unwrap();

    assert_eq!(parsed.day_of_week(), Some(&CronNode::NoSpecificValue));
    assert_eq!(
        parsed.day_of_month(),
        Some(&CronNode::interval(CronNode::Wildcard, CronNode::atomic("3")))
    );
    assert_eq!(parsed.value(), "30 5 4 */3 */2 ? 2030");
}

#[test]
fn test_foreign_fields_are_ignored() {
    let record = hour_and_minute()
        .with(FieldName::Second, "not a field here")
        .with(FieldName::Year, "2030");
    let mut parser = CronParser::default();
    let parsed = parser.parse(&record).unwrap();

    assert!(parsed.second().is_none());
    assert!(parsed.year().is_none());
    assert!(parser.errors().is_empty());
}

#[rstest]
#[case(CronMode::Cron)]
#[case(CronMode::Quartz)]
#[case(CronMode::Jenkins)]
fn test_minute_and_hour_are_required(#[case] mode: CronMode) {
    let record = CronRecord::new().with(FieldName::DayOfMonth, "1");
    let mut parser = CronParser::with_mode(mode);
    assert!(parser.parse(&record).is_none());

    let missing: Vec<_> = parser.errors().iter().map(|e| (e.kind, e.field)).collect();
    assert_eq!(
        missing,
        vec![
            (ErrorKind::RequiredTermMissing, Some(FieldName::Minute)),
            (ErrorKind::RequiredTermMissing, Some(FieldName::Hour)),
        ]
    );
}

#[test]
fn test_record_errors_carry_field() {
    let record = hour_and_minute()
        .with(FieldName::Month, "4-")
        .with(FieldName::DayOfWeek, "ABC");
    let mut parser = CronParser::default();
    assert!(parser.parse(&record).is_none());

    let errors: Vec<_> = parser.errors().iter().map(|e| (e.kind, e.field)).collect();
    assert_eq!(
        errors,
        vec![
            (ErrorKind::LexicalError, Some(FieldName::DayOfWeek)),
            (ErrorKind::RequiredTermMissing, Some(FieldName::Month)),
            (ErrorKind::RequiredTermMissing, Some(FieldName::DayOfWeek)),
        ]
    );
}

#[test]
fn test_empty_record_field_is_not_defaulted() {
    let record = hour_and_minute().with(FieldName::DayOfWeek, "");
    let mut parser = CronParser::default();
    assert!(parser.parse(&record).is_none());
    assert_eq!(parser.errors()[0].field, Some(FieldName::DayOfWeek));
}

#[test]
fn test_record_fields_use_their_own_rules() {
    let record = hour_and_minute().with(FieldName::DayOfMonth, "MON#2");
    let mut parser = CronParser::with_mode(CronMode::Quartz);
    assert!(parser.parse(&record).is_none());

    let record = hour_and_minute().with(FieldName::DayOfWeek, "MON#2");
    let parsed = parser.parse(&record).unwrap();
    assert_eq!(parsed.day_of_week().map(CronNode::value).as_deref(), Some("MON#2"));
}

#[cfg(feature = "serde")]
#[test]
fn test_record_from_json() {
    let record = CronRecord::from_json(r#"{"minute":"0","hour":"12","dayOfWeek":"MON-FRI"}"#).unwrap();
    let mut parser = CronParser::with_mode(CronMode::Quartz);
    let parsed = parser.parse(&record).unwrap();
    assert_eq!(parsed.value(), "0 0 12 * * MON-FRI *");

    let json = serde_json::to_string(&parsed).unwrap();
    assert!(json.contains(r#""dayOfWeek":"MON-FRI""#), "{}", json);
}
