use std::borrow::Cow;
use std::fmt;

use super::Whitespace;
use crate::ToSource;

/// Renders comment bodies as quoted text in `Debug` output.
struct Lossy<'a>(&'a [u8]);

impl fmt::Debug for Lossy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.0))
    }
}

/// A `// ...` comment running to the end of its line.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleLineComment {
    /// Indentation before the opening `//`.
    pub pre_open: Option<Whitespace>,
    /// Spaces or tabs right after the opening `//`.
    pub post_open: Option<Whitespace>,
    /// The rest of the line, excluding trailing whitespace and the newline.
    pub body: Vec<u8>,
    /// Whitespace after the body, including the newline when there is one.
    pub post_body: Option<Whitespace>,
}

impl SingleLineComment {
    /// Opening marker.
    pub const OPEN: &'static [u8] = b"//";

    /// The body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl fmt::Debug for SingleLineComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleLineComment")
            .field("pre_open", &self.pre_open)
            .field("post_open", &self.post_open)
            .field("body", &Lossy(&self.body))
            .field("post_body", &self.post_body)
            .finish()
    }
}

impl ToSource for SingleLineComment {
    fn write_source(&self, out: &mut Vec<u8>) {
        self.pre_open.write_source(out);
        out.extend_from_slice(Self::OPEN);
        self.post_open.write_source(out);
        out.extend_from_slice(&self.body);
        self.post_body.write_source(out);
    }
}

/// A `/* ... */` comment.
///
/// The body is kept verbatim: whitespace and newlines between the markers
/// are body content and are not split into fragments.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineComment {
    /// Indentation before the opening `/*`.
    pub pre_open: Option<Whitespace>,
    /// Everything between `/*` and the first `*/`.
    pub body: Vec<u8>,
    /// Spaces/tabs and newlines following the closing `*/`.
    pub post_body: Option<Whitespace>,
}

impl MultiLineComment {
    /// Opening marker.
    pub const OPEN: &'static [u8] = b"/*";
    /// Closing marker.
    pub const CLOSE: &'static [u8] = b"*/";

    /// The body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl fmt::Debug for MultiLineComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiLineComment")
            .field("pre_open", &self.pre_open)
            .field("body", &Lossy(&self.body))
            .field("post_body", &self.post_body)
            .finish()
    }
}

impl ToSource for MultiLineComment {
    fn write_source(&self, out: &mut Vec<u8>) {
        self.pre_open.write_source(out);
        out.extend_from_slice(Self::OPEN);
        out.extend_from_slice(&self.body);
        out.extend_from_slice(Self::CLOSE);
        self.post_body.write_source(out);
    }
}
