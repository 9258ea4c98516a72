//! Low-level scanning primitives for mig.
//!
//! A [`Cursor`] over an in-memory byte buffer with bounded lookahead,
//! checkpoint/restore backtracking, and the character-class scanners the
//! comment grammar is built from. This crate has no knowledge of syntax
//! trees; scanners hand back slices of the input and the parser decides
//! what they mean.

mod cursor;
pub mod scan;

pub use cursor::{Checkpoint, Cursor, EndOfInput};
pub use scan::ByteClass;
