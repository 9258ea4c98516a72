//! Grammar productions.
//!
//! A [`Grammar`] is an ordered list of [`Production`]s. At every position
//! the driver tries them first to last; the first one that matches wins.
//! New top-level constructs register as productions without touching the
//! driver.
//!
//! # Production Contract
//!
//! - `Matched`: the cursor is past the construct and has advanced.
//! - `NoMatch`: the cursor is exactly where the attempt started.
//! - `Fatal`: the parse is over; cursor position is irrelevant.

mod line_comment;
mod multi_comment;
mod whitespace;

use std::fmt;

use mig_ir::Node;

use crate::{ParseOptions, ParseOutcome, Parser};

pub use line_comment::LineComment;
pub use multi_comment::BlockComment;
pub use whitespace::BlankSpace;

/// One alternative the driver can try at the cursor.
pub trait Production: fmt::Debug + Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Attempt the construct at the parser's cursor.
    fn parse(&self, parser: &mut Parser<'_>) -> ParseOutcome<Node>;
}

/// Productions in priority order.
#[derive(Debug, Default)]
pub struct Grammar {
    productions: Vec<Box<dyn Production>>,
}

impl Grammar {
    /// A grammar with no productions.
    pub fn new() -> Self {
        Grammar::default()
    }

    /// Single-line comments, then multi-line comments.
    pub fn comments() -> Self {
        Grammar::new().with(LineComment).with(BlockComment)
    }

    /// The comment grammar plus whatever `options` enables.
    pub fn for_options(options: &ParseOptions) -> Self {
        let grammar = Grammar::comments();
        if options.standalone_whitespace {
            grammar.with(BlankSpace)
        } else {
            grammar
        }
    }

    /// Append a production with the lowest priority so far.
    #[must_use]
    pub fn with(mut self, production: impl Production + 'static) -> Self {
        self.push(Box::new(production));
        self
    }

    pub fn push(&mut self, production: Box<dyn Production>) {
        self.productions.push(production);
    }

    pub fn productions(&self) -> impl Iterator<Item = &dyn Production> + '_ {
        self.productions.iter().map(Box::as_ref)
    }

    /// Production names, highest priority first.
    pub fn names(&self) -> Vec<&'static str> {
        self.productions().map(Production::name).collect()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}
