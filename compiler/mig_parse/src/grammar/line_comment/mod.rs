//! Single-line (`//`) comments.
//!
//! ```text
//! comment   = pre_open? "//" post_open? body post_body?
//! pre_open  = [ \t]+
//! post_open = [ \t]+
//! post_body = [ \t]* [\r\n]+ | [ \t]+ EOF
//! ```
//!
//! The body runs up to the first whitespace run that ends the line. Spaces
//! between words stay in the body.

use mig_ir::{Node, SingleLineComment, Whitespace};
use mig_lexer_core::scan;
use tracing::trace;

use super::Production;
use crate::{ErrorCode, ParseOutcome, Parser};

/// Production for `//` comments.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineComment;

impl Production for LineComment {
    fn name(&self) -> &'static str {
        "single-line comment"
    }

    fn parse(&self, parser: &mut Parser<'_>) -> ParseOutcome<Node> {
        parser.parse_single_line_comment().map(Node::from)
    }
}

impl Parser<'_> {
    /// Parse one `//` comment at the cursor.
    ///
    /// Returns `NoMatch` with the cursor untouched when the next non-blank
    /// bytes are not `//`. Never fails fatally: an unfinished line simply
    /// ends at end of input.
    pub fn parse_single_line_comment(&mut self) -> ParseOutcome<SingleLineComment> {
        let start = self.checkpoint();
        let pre_open = self.parse_spaces_or_tabs();

        match self.cursor.consume(SingleLineComment::OPEN.len()) {
            Ok(marker) if marker == SingleLineComment::OPEN => {}
            _ => {
                self.restore(start);
                return ParseOutcome::no_match(ErrorCode::NotSingleLineComment, start.pos());
            }
        }

        let post_open = self.parse_spaces_or_tabs();

        let body_start = self.position();
        let (body_end, post_body) = loop {
            let body_end = self.position();
            if let Some(run) = scan::trailing_whitespace(&mut self.cursor) {
                if scan::ends_with_newline(run) || self.cursor.is_eof() {
                    break (body_end, Whitespace::from_run(run));
                }
                // Interior spaces; the next byte is more body.
                continue;
            }
            if self.cursor.consume_byte().is_err() {
                break (body_end, None);
            }
        };

        let comment = SingleLineComment {
            pre_open,
            post_open,
            body: self.cursor.slice(body_start, body_end).to_vec(),
            post_body,
        };
        trace!(
            start = start.pos(),
            end = self.position(),
            body_len = comment.body.len(),
            "single-line comment"
        );
        ParseOutcome::matched(comment)
    }
}
