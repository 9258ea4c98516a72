//! Three-way parse outcome for ordered alternatives.
//!
//! Every production reports one of:
//!
//! | Variant | Cursor | Meaning |
//! |---------|--------|---------|
//! | `Matched` | advanced past the construct | Construct parsed |
//! | `NoMatch` | at its pre-attempt position | Not this construct; try the next one |
//! | `Fatal` | unspecified | Construct started but is malformed; abort |
//!
//! A fatal error is a different variant from a mismatch, not a mismatch
//! with a special code, so a driver matching on the outcome cannot retry
//! past a malformed construct by accident.

use crate::{ErrorCode, ParseError};

/// Result of attempting one production at the cursor.
#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// The construct was recognized and consumed.
    Matched {
        /// The parsed value.
        value: T,
    },

    /// The construct does not start here. No input was consumed.
    NoMatch {
        /// Recoverable code naming the construct that was expected.
        expected: ErrorCode,
        /// Cursor position of the attempt.
        position: usize,
    },

    /// The construct started but could not be completed.
    Fatal {
        /// The error to report.
        error: ParseError,
    },
}

impl<T> ParseOutcome<T> {
    // === Constructors ===

    #[inline]
    pub fn matched(value: T) -> Self {
        Self::Matched { value }
    }

    #[inline]
    pub fn no_match(expected: ErrorCode, position: usize) -> Self {
        debug_assert!(
            expected.is_recoverable(),
            "no_match requires a recoverable code, got {expected:?}"
        );
        Self::NoMatch { expected, position }
    }

    #[inline]
    pub fn fatal(error: ParseError) -> Self {
        Self::Fatal { error }
    }

    // === Predicates ===

    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Returns `true` if the next alternative should be tried.
    #[inline]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }

    // === Transformations ===

    /// Map the matched value, preserving the variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseOutcome<U> {
        match self {
            Self::Matched { value } => ParseOutcome::Matched { value: f(value) },
            Self::NoMatch { expected, position } => ParseOutcome::NoMatch { expected, position },
            Self::Fatal { error } => ParseOutcome::Fatal { error },
        }
    }

    /// Try an alternative if this did not match.
    ///
    /// `Matched` and `Fatal` are returned as is; only `NoMatch` runs `f`.
    #[must_use]
    pub fn or_else<F: FnOnce() -> ParseOutcome<T>>(self, f: F) -> ParseOutcome<T> {
        match self {
            Self::Matched { .. } | Self::Fatal { .. } => self,
            Self::NoMatch { .. } => f(),
        }
    }

    /// Convert to `Option`, discarding mismatches and errors.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Matched { value } => Some(value),
            Self::NoMatch { .. } | Self::Fatal { .. } => None,
        }
    }

    /// Convert to `Result`, turning a mismatch into a located `ParseError`.
    pub fn into_result(self) -> Result<T, ParseError> {
        match self {
            Self::Matched { value } => Ok(value),
            Self::NoMatch { expected, position } => {
                Err(ParseError::at(expected, position..position))
            }
            Self::Fatal { error } => Err(error),
        }
    }
}

impl<T> From<ParseOutcome<T>> for Result<T, ParseError> {
    fn from(outcome: ParseOutcome<T>) -> Self {
        outcome.into_result()
    }
}
