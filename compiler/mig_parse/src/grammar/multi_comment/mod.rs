//! Multi-line (`/* */`) comments.
//!
//! ```text
//! comment   = pre_open? "/*" body "*/" post_body?
//! pre_open  = [ \t]+
//! post_body = [ \t]* [\r\n]*
//! ```
//!
//! The body ends at the first `*/`; comments do not nest. A `/*` with no
//! closing marker anywhere after it is fatal.

use mig_ir::{MultiLineComment, Node};
use mig_lexer_core::EndOfInput;
use tracing::{debug, trace};

use super::Production;
use crate::{ErrorCode, ParseError, ParseOutcome, Parser};

/// Production for `/* */` comments.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockComment;

impl Production for BlockComment {
    fn name(&self) -> &'static str {
        "multi-line comment"
    }

    fn parse(&self, parser: &mut Parser<'_>) -> ParseOutcome<Node> {
        parser.parse_multi_line_comment().map(Node::from)
    }
}

impl Parser<'_> {
    /// Parse one `/* */` comment at the cursor.
    ///
    /// Returns `NoMatch` with the cursor untouched when the next non-blank
    /// bytes are not `/*`, and `Fatal` with
    /// [`ExpectedMultiLineComment`](ErrorCode::ExpectedMultiLineComment)
    /// spanning from the opener to end of input when `*/` never follows.
    pub fn parse_multi_line_comment(&mut self) -> ParseOutcome<MultiLineComment> {
        let start = self.checkpoint();
        let pre_open = self.parse_spaces_or_tabs();

        let opener = self.position();
        match self.cursor.consume(MultiLineComment::OPEN.len()) {
            Ok(marker) if marker == MultiLineComment::OPEN => {}
            _ => {
                self.restore(start);
                return ParseOutcome::no_match(ErrorCode::NotMultiLineComment, start.pos());
            }
        }

        let body_start = self.position();
        let body_end = loop {
            if self.cursor.eat_until(b'*').is_err() {
                return self.unterminated(opener);
            }
            match self.cursor.peek(MultiLineComment::CLOSE.len()) {
                Ok(marker) if marker == MultiLineComment::CLOSE => {
                    let end = self.position();
                    self.cursor.advance(MultiLineComment::CLOSE.len());
                    break end;
                }
                // A `*` not followed by `/` is body text.
                Ok(_) => self.cursor.advance(1),
                Err(EndOfInput) => return self.unterminated(opener),
            }
        };

        let comment = MultiLineComment {
            pre_open,
            body: self.cursor.slice(body_start, body_end).to_vec(),
            post_body: self.parse_trailing_whitespace(),
        };
        trace!(
            start = start.pos(),
            end = self.position(),
            body_len = comment.body.len(),
            "multi-line comment"
        );
        ParseOutcome::matched(comment)
    }

    #[cold]
    fn unterminated<T>(&self, opener: usize) -> ParseOutcome<T> {
        let end = self.cursor.source_len();
        debug!(opener, end, "unterminated multi-line comment");
        ParseOutcome::fatal(ParseError::at(
            ErrorCode::ExpectedMultiLineComment,
            opener..end,
        ))
    }
}
