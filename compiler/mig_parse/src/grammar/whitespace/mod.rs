//! Whitespace fragments and standalone whitespace.

use mig_ir::{Node, Whitespace};
use mig_lexer_core::{scan, ByteClass};

use super::Production;
use crate::{ErrorCode, ParseOutcome, Parser};

/// Production for whitespace no comment claims, such as leading blank
/// lines. Only part of the grammar under
/// [`standalone_whitespace`](crate::ParseOptions::standalone_whitespace).
#[derive(Clone, Copy, Debug, Default)]
pub struct BlankSpace;

impl Production for BlankSpace {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn parse(&self, parser: &mut Parser<'_>) -> ParseOutcome<Node> {
        parser.parse_blank_space().map(Node::from)
    }
}

impl Parser<'_> {
    /// Consume spaces and tabs.
    pub fn parse_spaces_or_tabs(&mut self) -> Option<Whitespace> {
        Whitespace::from_run(scan::spaces_or_tabs(&mut self.cursor))
    }

    /// Consume a run of `\r`/`\n`.
    pub fn parse_newline(&mut self) -> Option<Whitespace> {
        Whitespace::from_run(scan::newline(&mut self.cursor))
    }

    /// Consume spaces and tabs, then a newline run, as one fragment.
    pub fn parse_trailing_whitespace(&mut self) -> Option<Whitespace> {
        scan::trailing_whitespace(&mut self.cursor).and_then(Whitespace::from_run)
    }

    /// Consume any mix of whitespace as one standalone fragment.
    pub fn parse_blank_space(&mut self) -> ParseOutcome<Whitespace> {
        let start = self.position();
        match Whitespace::from_run(scan::scan_run(&mut self.cursor, ByteClass::WHITESPACE)) {
            Some(whitespace) => ParseOutcome::matched(whitespace),
            None => ParseOutcome::no_match(ErrorCode::NotWhitespace, start),
        }
    }
}

#[cfg(test)]
mod tests;
