//! Shared foundation types for the `smlfront` tokenizer/parser workspace.
//!
//! This crate holds nothing that depends on lexical or grammatical knowledge
//! of the SML family — just the byte-indexed source model ([`source`]), the
//! single error taxonomy ([`error`]), and a typed-index vector utility
//! ([`index_vec`]) for crates that need a `usize`-indexed collection with a
//! distinct index type.

pub mod error;
pub mod index_vec;
pub mod source;

pub use error::{LineError, LineErrorHeader};
pub use index_vec::{Idx, IndexVec};
pub use source::{FileId, LineCol, Source, SourceFile, SourceMap};
