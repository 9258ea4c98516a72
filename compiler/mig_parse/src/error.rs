//! Parse error types.
//!
//! Errors fall into three groups:
//! - **Recoverable**: `NotSingleLineComment`, `NotMultiLineComment`,
//!   `NotWhitespace`. A production did not start at the cursor. These only
//!   travel inside [`ParseOutcome::NoMatch`](crate::ParseOutcome) and never
//!   reach callers of [`parse`](crate::parse).
//! - **Fatal**: `ExpectedMultiLineComment`, `UnexpectedInput`, `Io`. The
//!   parse stops and the error is returned unchanged.
//! - **Aggregate**: `ExpectedFileBody`, reported once the driver finds
//!   nothing but whitespace.

use std::fmt;
use std::io;
use std::ops::Range;

use mig_ir::Span;
use thiserror::Error;

/// Error codes for parser diagnostics.
///
/// Format: `M####`. Codes are stable and searchable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// File contains no comment (empty, or whitespace only)
    ExpectedFileBody,
    /// No `//` at the cursor
    NotSingleLineComment,
    /// No `/*` at the cursor
    NotMultiLineComment,
    /// `/*` without a closing `*/`
    ExpectedMultiLineComment,
    /// No standalone whitespace at the cursor
    NotWhitespace,
    /// Bytes left over after the last recognized construct
    UnexpectedInput,
    /// Reading the source failed
    Io,
}

impl ErrorCode {
    /// Stable code string, e.g. `M0004`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ExpectedFileBody => "M0001",
            ErrorCode::NotSingleLineComment => "M0002",
            ErrorCode::NotMultiLineComment => "M0003",
            ErrorCode::ExpectedMultiLineComment => "M0004",
            ErrorCode::NotWhitespace => "M0005",
            ErrorCode::UnexpectedInput => "M0006",
            ErrorCode::Io => "M0007",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::ExpectedFileBody => "expected file body",
            ErrorCode::NotSingleLineComment => "expected single line comment",
            ErrorCode::NotMultiLineComment => "expected multi-line comment",
            ErrorCode::ExpectedMultiLineComment => "unterminated multi-line comment",
            ErrorCode::NotWhitespace => "expected whitespace",
            ErrorCode::UnexpectedInput => "unexpected input after file body",
            ErrorCode::Io => "failed to read source",
        }
    }

    /// Returns `true` for "not this construct" codes, which let the driver
    /// try the next production.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            ErrorCode::NotSingleLineComment | ErrorCode::NotMultiLineComment | ErrorCode::NotWhitespace
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A failed parse.
///
/// Displays as the code's description, or as the underlying I/O error when
/// one is wrapped.
#[derive(Debug, Error)]
#[error("{}", render(.code, .io))]
pub struct ParseError {
    pub code: ErrorCode,
    /// Byte range the error applies to, when it can be located.
    pub span: Option<Span>,
    /// Lower-level read failure, for sources that are not already in memory.
    #[source]
    pub io: Option<io::Error>,
}

fn render(code: &ErrorCode, io: &Option<io::Error>) -> String {
    match io {
        Some(err) => err.to_string(),
        None => code.description().to_owned(),
    }
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        ParseError {
            code,
            span: None,
            io: None,
        }
    }

    /// Error located at a byte range of the input.
    ///
    /// Ranges beyond the reach of [`Span`] leave the error unlocated.
    #[cold]
    pub fn at(code: ErrorCode, range: Range<usize>) -> Self {
        ParseError {
            code,
            span: Span::try_from_range(range).ok(),
            io: None,
        }
    }

    /// Wrap a read failure.
    #[cold]
    pub fn io(err: io::Error) -> Self {
        ParseError {
            code: ErrorCode::Io,
            span: None,
            io: Some(err),
        }
    }

    #[inline]
    pub fn is_recoverable(&self) -> bool {
        self.code.is_recoverable()
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::io(err)
    }
}

#[cfg(test)]
mod tests;
