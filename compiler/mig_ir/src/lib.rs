//! Mig IR - syntax tree types for the mig parser.
//!
//! This crate contains the data structures produced by `mig_parse`:
//! - [`Span`] for error locations
//! - [`Whitespace`] fragments and the comment nodes that own them
//! - [`File`] and [`Module`] containers
//! - [`ToSource`] for byte-exact reconstruction
//!
//! All types are plain owned data (`Send + Sync`) and are never mutated
//! by the parser after construction.

pub mod ast;
mod source;
mod span;

pub use ast::{File, Module, MultiLineComment, Node, SingleLineComment, Whitespace};
pub use source::ToSource;
pub use span::{Span, SpanError};
