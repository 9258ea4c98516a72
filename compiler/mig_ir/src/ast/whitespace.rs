use std::fmt;

use crate::ToSource;

/// Returns `true` for the bytes a whitespace fragment may contain.
#[inline]
pub fn is_whitespace_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// One or more spaces, tabs, carriage returns or line feeds, verbatim.
///
/// A fragment is never empty: "no whitespace here" is `Option::None` on the
/// owning field, which reconstructs to nothing, whereas a fragment always
/// reconstructs to at least one byte.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Whitespace {
    body: Vec<u8>,
}

impl Whitespace {
    /// Create a fragment from a non-empty whitespace run.
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        debug_assert!(!body.is_empty(), "whitespace fragment must not be empty");
        debug_assert!(
            body.iter().copied().all(is_whitespace_byte),
            "whitespace fragment contains non-whitespace bytes: {:?}",
            String::from_utf8_lossy(&body)
        );
        Whitespace { body }
    }

    /// Fragment for a scanned run, or `None` when the run is empty.
    pub fn from_run(run: &[u8]) -> Option<Self> {
        if run.is_empty() {
            None
        } else {
            Some(Whitespace::new(run))
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Returns `true` if the fragment contains a CR or LF.
    pub fn has_newline(&self) -> bool {
        self.body.iter().any(|&b| b == b'\r' || b == b'\n')
    }
}

impl fmt::Debug for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.body))
    }
}

impl ToSource for Whitespace {
    fn write_source(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.body);
    }
}
