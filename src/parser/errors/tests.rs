//! Integration tests for the errors module

use super::*;
use crate::dialect::FieldName;
use text_size::{TextRange, TextSize};

#[test]
fn test_error_module_exports() {
    let _code = ErrorCode::E0201;
    let _kind = ErrorKind::UnconsumedInput;

    let _err = ParseError::new(
        ErrorKind::LexicalError,
        "test error",
        TextRange::empty(TextSize::new(0)),
    );
}

#[test]
fn test_kind_code_mapping() {
    assert_eq!(ErrorKind::LexicalError.code(), ErrorCode::E0101);
    assert_eq!(ErrorKind::RequiredTermMissing.code(), ErrorCode::E0201);
    assert_eq!(ErrorKind::UnconsumedInput.code(), ErrorCode::E0202);
    assert_eq!(ErrorKind::RequiredTermMissing.as_str(), "RequiredTermMissing");
}

#[test]
fn test_error_code_exhaustiveness() {
    let codes = [ErrorCode::E0101, ErrorCode::E0201, ErrorCode::E0202];

    for code in codes {
        assert!(!code.default_message().is_empty(), "code {:?} has empty default_message()", code);
        assert!(
            !code.category_description().is_empty(),
            "code {:?} has empty category_description()",
            code
        );

        // String representation should match pattern E####
        let s = code.as_str();
        assert!(s.starts_with('E'), "code {:?} doesn't start with E", code);
        assert_eq!(s.len(), 5, "code {:?} should be 5 chars", code);
    }
}

#[test]
fn test_complete_error_workflow() {
    let err = ParseError::at_offset(
        ErrorKind::RequiredTermMissing,
        "expected a term for the day of week field",
        TextSize::new(9),
    )
    .in_field(FieldName::DayOfWeek)
    .with_hint("quartz expressions need seven fields");

    assert_eq!(err.code(), ErrorCode::E0201);
    assert_eq!(err.field, Some(FieldName::DayOfWeek));
    assert!(err.has_hint());
    assert_eq!(err.range.start(), TextSize::new(9));
    assert_eq!(err.range.end(), TextSize::new(9)); // Empty range
}
