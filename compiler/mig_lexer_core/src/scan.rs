//! Character-class scanners.
//!
//! Each scanner consumes a maximal run of bytes from a fixed set and never
//! fails: finding nothing is an empty run. Runs are returned as slices of
//! the cursor's buffer so callers can keep them verbatim.

use crate::cursor::Cursor;

/// A fixed set of bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteClass {
    bytes: &'static [u8],
}

impl ByteClass {
    /// Horizontal whitespace: space and tab.
    pub const SPACES_OR_TABS: ByteClass = ByteClass::new(b" \t");
    /// Line endings: carriage return and line feed, in any combination.
    pub const NEWLINE: ByteClass = ByteClass::new(b"\r\n");
    /// Any whitespace a fragment may hold.
    pub const WHITESPACE: ByteClass = ByteClass::new(b" \t\r\n");

    pub const fn new(bytes: &'static [u8]) -> Self {
        ByteClass { bytes }
    }

    #[inline]
    pub fn contains(self, byte: u8) -> bool {
        self.bytes.contains(&byte)
    }
}

/// Consume the longest run of bytes in `class`.
///
/// Stops without consuming at the first byte outside the class, or at end
/// of input.
#[inline]
pub fn scan_run<'a>(cursor: &mut Cursor<'a>, class: ByteClass) -> &'a [u8] {
    cursor.eat_while(|b| class.contains(b))
}

/// Consume a run of spaces and tabs.
#[inline]
pub fn spaces_or_tabs<'a>(cursor: &mut Cursor<'a>) -> &'a [u8] {
    scan_run(cursor, ByteClass::SPACES_OR_TABS)
}

/// Consume a run of `\r` and `\n` bytes.
///
/// CRLF pairing is not enforced: `\n\r\r` is one run.
#[inline]
pub fn newline<'a>(cursor: &mut Cursor<'a>) -> &'a [u8] {
    scan_run(cursor, ByteClass::NEWLINE)
}

/// Spaces/tabs followed by a newline run, as one fragment.
///
/// Returns `None` only when neither run consumed anything. This is the
/// "rest of the line" after a comment body.
pub fn trailing_whitespace<'a>(cursor: &mut Cursor<'a>) -> Option<&'a [u8]> {
    let start = cursor.checkpoint();
    spaces_or_tabs(cursor);
    newline(cursor);
    let run = cursor.since(start);
    (!run.is_empty()).then_some(run)
}

/// Returns `true` if `run` finishes with a line ending.
#[inline]
pub fn ends_with_newline(run: &[u8]) -> bool {
    run.last().is_some_and(|&b| ByteClass::NEWLINE.contains(b))
}
