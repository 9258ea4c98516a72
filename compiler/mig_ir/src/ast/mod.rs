//! Lossless syntax tree.
//!
//! Nodes keep every byte of their source: indentation, the whitespace
//! around markers, and line endings exactly as written (`\n`, `\r` or
//! `\r\n`). Optional whitespace fields distinguish "absent" (`None`) from
//! present, and a present [`Whitespace`] is never empty.
//!
//! ```text
//! \t // foobar \n
//! ^^ ^^^       ^^^
//! |  | post_open post_body
//! |  marker
//! pre_open
//! ```

mod comment;
mod file;
mod whitespace;

#[cfg(test)]
mod tests;

pub use comment::{MultiLineComment, SingleLineComment};
pub use file::{File, Module, Node};
pub use whitespace::{is_whitespace_byte, Whitespace};
