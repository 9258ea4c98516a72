use std::error::Error as _;

use super::*;

#[test]
fn test_error_code_strings() {
    assert_eq!(ErrorCode::ExpectedFileBody.as_str(), "M0001");
    assert_eq!(ErrorCode::ExpectedMultiLineComment.as_str(), "M0004");
    assert_eq!(ErrorCode::Io.as_str(), "M0007");
    assert_eq!(
        ErrorCode::NotSingleLineComment.to_string(),
        "expected single line comment"
    );
}

#[test]
fn test_recoverable_codes() {
    assert!(ErrorCode::NotSingleLineComment.is_recoverable());
    assert!(ErrorCode::NotMultiLineComment.is_recoverable());
    assert!(ErrorCode::NotWhitespace.is_recoverable());
    assert!(!ErrorCode::ExpectedMultiLineComment.is_recoverable());
    assert!(!ErrorCode::ExpectedFileBody.is_recoverable());
    assert!(!ErrorCode::UnexpectedInput.is_recoverable());
    assert!(!ErrorCode::Io.is_recoverable());
}

#[test]
fn test_error_display_uses_description() {
    let err = ParseError::new(ErrorCode::ExpectedFileBody);
    assert_eq!(err.to_string(), "expected file body");
    assert!(err.span.is_none());
    assert!(err.source().is_none());
}

#[test]
fn test_error_at_records_span() {
    let err = ParseError::at(ErrorCode::ExpectedMultiLineComment, 3..12);
    assert_eq!(err.span, Some(Span::new(3, 12)));
    assert!(!err.is_recoverable());
}

#[test]
fn test_error_at_out_of_range_is_unlocated() {
    let large = u32::MAX as usize + 1;
    let err = ParseError::at(ErrorCode::UnexpectedInput, 0..large);
    assert_eq!(err.span, None);
}

#[test]
fn test_io_error_wrapped_as_source() {
    let err = ParseError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
    assert_eq!(err.code, ErrorCode::Io);
    assert_eq!(err.to_string(), "pipe closed");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("pipe closed"));
}
