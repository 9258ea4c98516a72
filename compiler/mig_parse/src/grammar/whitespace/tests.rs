use mig_ir::{Node, Whitespace};
use pretty_assertions::assert_eq;

use super::BlankSpace;
use crate::{ErrorCode, ParseOutcome, Parser, Production};

fn ws(s: &str) -> Option<Whitespace> {
    Whitespace::from_run(s.as_bytes())
}

#[test]
fn test_spaces_or_tabs_stop_at_newline() {
    let mut parser = Parser::new(b" \t \nx");
    assert_eq!(parser.parse_spaces_or_tabs(), ws(" \t "));
    assert_eq!(parser.position(), 3);
    assert_eq!(parser.parse_spaces_or_tabs(), None);
    assert_eq!(parser.position(), 3);
}

#[test]
fn test_newline_accepts_any_mix() {
    let mut parser = Parser::new(b"\n\r\r\n x");
    assert_eq!(parser.parse_newline(), ws("\n\r\r\n"));
    assert_eq!(parser.parse_newline(), None);
    assert_eq!(parser.position(), 4);
}

#[test]
fn test_trailing_whitespace_is_one_fragment() {
    let mut parser = Parser::new(b"  \r\n\n  next");
    assert_eq!(parser.parse_trailing_whitespace(), ws("  \r\n\n"));
    // Indentation of the next line is left for the next construct.
    assert_eq!(parser.position(), 5);
}

#[test]
fn test_trailing_whitespace_nothing_to_consume() {
    let mut parser = Parser::new(b"x");
    assert_eq!(parser.parse_trailing_whitespace(), None);
    assert_eq!(parser.position(), 0);
}

#[test]
fn test_blank_space_spans_lines() {
    let mut parser = Parser::new(b"\n\n\t \n// x");
    assert_eq!(parser.parse_blank_space().ok(), ws("\n\n\t \n"));
    assert_eq!(parser.position(), 5);
}

#[test]
fn test_blank_space_no_match() {
    let mut parser = Parser::new(b"// x");
    assert!(matches!(
        parser.parse_blank_space(),
        ParseOutcome::NoMatch {
            expected: ErrorCode::NotWhitespace,
            position: 0
        }
    ));
    assert_eq!(parser.position(), 0);
}

#[test]
fn test_production_wraps_node() {
    let mut parser = Parser::new(b"\n");
    assert!(matches!(
        BlankSpace.parse(&mut parser),
        ParseOutcome::Matched {
            value: Node::Whitespace(_)
        }
    ));
    assert_eq!(BlankSpace.name(), "whitespace");
}
