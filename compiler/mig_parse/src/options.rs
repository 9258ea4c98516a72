//! Parser configuration.

/// Options controlling which productions run and how the end of a file is
/// checked.
///
/// The default reproduces the base grammar: single-line comments, then
/// multi-line comments, stopping silently at the first unrecognized byte.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit whitespace that no comment claims (blank lines, leading
    /// newlines) as top-level [`Node::Whitespace`](mig_ir::Node) children
    /// instead of stopping at it.
    pub standalone_whitespace: bool,
    /// Fail with `UnexpectedInput` when bytes remain after the last
    /// recognized construct.
    pub reject_trailing_input: bool,
}

impl ParseOptions {
    /// Options that accept any run of comments and whitespace and reject
    /// everything else. Under these options a successful parse always
    /// reconstructs the whole input.
    pub fn lossless() -> Self {
        ParseOptions {
            standalone_whitespace: true,
            reject_trailing_input: true,
        }
    }
}
