//! Lossless comment parser for mig.
//!
//! Turns a byte buffer of `//` and `/* */` comments into a [`File`] whose
//! nodes keep every byte they consumed. Writing the nodes back with
//! [`ToSource`](mig_ir::ToSource) reproduces the consumed prefix of the
//! input exactly.
//!
//! # Entry Points
//!
//! - [`parse`]: base grammar, appends the file to a [`Module`]
//! - [`parse_with_options`]: same, with [`ParseOptions`]
//! - [`parse_reader`]: reads the source from any [`Read`] first
//! - [`Parser`]: drive a custom [`Grammar`] directly
//!
//! # Logging
//!
//! Productions log at `trace`, file-level results at `debug`. Call
//! [`init_tracing`] to install a subscriber controlled by `RUST_LOG`.

mod error;
mod grammar;
mod options;
mod outcome;

#[cfg(test)]
mod tests;

pub use error::{ErrorCode, ParseError};
pub use grammar::{BlankSpace, BlockComment, Grammar, LineComment, Production};
pub use options::ParseOptions;
pub use outcome::ParseOutcome;

use std::io::Read;
use std::sync::Once;

use mig_ir::{File, Module, Node};
use mig_lexer_core::{Checkpoint, Cursor};
use tracing::{debug, trace};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Parser state: a cursor over the source and the active options.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser with default options.
    pub fn new(buf: &'a [u8]) -> Self {
        Parser::with_options(buf, ParseOptions::default())
    }

    pub fn with_options(buf: &'a [u8], options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(buf),
            options,
        }
    }

    // --- Cursor access, for productions outside this crate ---

    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    #[inline]
    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        self.cursor.checkpoint()
    }

    #[inline]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.restore(checkpoint);
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the whole buffer with the grammar the options select.
    pub fn parse_file(self, name: &str) -> Result<File, ParseError> {
        let grammar = Grammar::for_options(&self.options);
        self.parse_file_with(name, &grammar)
    }

    /// Parse the whole buffer with `grammar`.
    ///
    /// Repeats the grammar until no production matches, then checks that
    /// at least one non-whitespace node was found. Any fatal outcome ends
    /// the parse immediately.
    pub fn parse_file_with(mut self, name: &str, grammar: &Grammar) -> Result<File, ParseError> {
        let mut children = Vec::new();
        let mut found_body = false;

        while let Some(node) = self.parse_node(grammar)? {
            found_body |= !node.is_whitespace();
            children.push(node);
        }

        let stop = self.position();
        if !found_body {
            debug!(file = name, pos = stop, "no file body");
            return Err(ParseError::at(ErrorCode::ExpectedFileBody, stop..stop));
        }

        if self.options.reject_trailing_input && !self.cursor.is_eof() {
            let len = self.cursor.source_len();
            debug!(file = name, pos = stop, len, "input left after file body");
            return Err(ParseError::at(ErrorCode::UnexpectedInput, stop..len));
        }

        debug!(
            file = name,
            children = children.len(),
            consumed = stop,
            len = self.cursor.source_len(),
            "parsed file"
        );
        Ok(File::new(name, children))
    }

    /// Try each production at the cursor in priority order.
    ///
    /// Returns `Ok(None)` when nothing matches, or when a production claims
    /// a match without consuming input.
    fn parse_node(&mut self, grammar: &Grammar) -> Result<Option<Node>, ParseError> {
        let start = self.checkpoint();
        for production in grammar.productions() {
            match production.parse(self) {
                ParseOutcome::Matched { value } => {
                    if self.position() == start.pos() {
                        debug!(
                            production = production.name(),
                            pos = start.pos(),
                            "empty match, stopping"
                        );
                        return Ok(None);
                    }
                    trace!(
                        production = production.name(),
                        start = start.pos(),
                        end = self.position(),
                        "matched"
                    );
                    return Ok(Some(value));
                }
                ParseOutcome::NoMatch { expected, position } => {
                    trace!(production = production.name(), %expected, position, "no match");
                    self.restore(start);
                }
                ParseOutcome::Fatal { error } => {
                    debug!(
                        production = production.name(),
                        code = error.code.as_str(),
                        "fatal parse error"
                    );
                    return Err(error);
                }
            }
        }
        Ok(None)
    }
}

/// Parse `buf` as file `filename` and append it to `module`.
///
/// On error `module` is left unchanged.
pub fn parse(module: &mut Module, filename: &str, buf: &[u8]) -> Result<(), ParseError> {
    parse_with_options(module, filename, buf, &ParseOptions::default())
}

/// [`parse`] with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(file = filename, len = buf.len()))]
pub fn parse_with_options(
    module: &mut Module,
    filename: &str,
    buf: &[u8],
    options: &ParseOptions,
) -> Result<(), ParseError> {
    let file = Parser::with_options(buf, options.clone()).parse_file(filename)?;
    module.files.push(file);
    Ok(())
}

/// Read all of `reader`, then [`parse`] it.
///
/// Read failures are reported as [`ErrorCode::Io`] with the underlying
/// error as the source.
pub fn parse_reader<R: Read>(
    module: &mut Module,
    filename: &str,
    mut reader: R,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse(module, filename, &buf)
}
