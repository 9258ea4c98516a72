use super::{MultiLineComment, SingleLineComment, Whitespace};
use crate::ToSource;

/// Any construct that can appear at the top level of a file.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    SingleLineComment(SingleLineComment),
    MultiLineComment(MultiLineComment),
    /// Whitespace not claimed by any neighbouring construct.
    Whitespace(Whitespace),
}

impl Node {
    /// Returns `true` for standalone whitespace, which does not count as file
    /// body.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Whitespace(_))
    }

    /// Human-readable kind name, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::SingleLineComment(_) => "single-line comment",
            Node::MultiLineComment(_) => "multi-line comment",
            Node::Whitespace(_) => "whitespace",
        }
    }
}

impl From<SingleLineComment> for Node {
    fn from(comment: SingleLineComment) -> Self {
        Node::SingleLineComment(comment)
    }
}

impl From<MultiLineComment> for Node {
    fn from(comment: MultiLineComment) -> Self {
        Node::MultiLineComment(comment)
    }
}

impl From<Whitespace> for Node {
    fn from(whitespace: Whitespace) -> Self {
        Node::Whitespace(whitespace)
    }
}

impl ToSource for Node {
    fn write_source(&self, out: &mut Vec<u8>) {
        match self {
            Node::SingleLineComment(c) => c.write_source(out),
            Node::MultiLineComment(c) => c.write_source(out),
            Node::Whitespace(w) => w.write_source(out),
        }
    }
}

/// A single parsed file.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct File {
    /// Filename or path, as given to the parser.
    pub name: String,
    /// Top-level nodes in source order.
    pub children: Vec<Node>,
}

impl File {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        File {
            name: name.into(),
            children,
        }
    }

    /// Returns `true` if the file holds at least one non-whitespace node.
    pub fn has_body(&self) -> bool {
        self.children.iter().any(|node| !node.is_whitespace())
    }
}

impl ToSource for File {
    fn write_source(&self, out: &mut Vec<u8>) {
        self.children.write_source(out);
    }
}

/// A named group of files, appended in parse order.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    /// Module name (typically the directory name).
    pub name: String,
    pub files: Vec<File>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// Look up a file by the name it was parsed under.
    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|file| file.name == name)
    }
}
