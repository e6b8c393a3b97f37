//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::rc::Rc;

fn position_at(idx: isize, line: usize) -> Position {
    let mut pos = Position::new(
        Rc::new(String::from("test.toy")),
        Rc::new(String::from("@")),
    );
    pos.idx = idx;
    pos.line = line;
    pos.col = idx;
    pos
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '@' },
        position_at(0, 0),
        position_at(1, 0),
    );

    assert_eq!(error.get_error_name(), "Illegal Character");
    assert_eq!(error.details(), "'@'");
}

#[test]
fn test_error_display_format() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '@' },
        position_at(0, 0),
        position_at(1, 0),
    );

    let rendered = error.to_string();
    assert_eq!(rendered, "Illegal Character: '@'\nFile test.toy, line 1");
}

#[test]
fn test_error_display_line_is_one_based() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '$' },
        position_at(4, 2),
        position_at(5, 2),
    );

    assert!(error.to_string().ends_with("File test.toy, line 3"));
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedString {
            text: String::from("\"abc"),
        },
        position_at(0, 0),
        position_at(4, 0),
    );

    assert_eq!(error.get_error_name(), "Unterminated String");
    assert!(error.details().contains("\\\"abc"));
}

#[test]
fn test_error_span() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '@' },
        position_at(3, 0),
        position_at(5, 0),
    );

    assert_eq!(error.get_span().start.idx, 3);
    assert_eq!(error.get_span().end.idx, 5);
}
