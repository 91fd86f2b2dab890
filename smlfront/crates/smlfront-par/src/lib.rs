//! Recursive-descent parsing for the SML-family source language (§4.6).
//!
//! [`parser::parse_source`] lexes and parses a complete source file into a
//! [`ast::Cst`] — a concrete syntax tree that records every token it was
//! built from, so an in-order walk recovers the original source text
//! (§4.7). [`infix`] holds the mutable fixity dictionary and the
//! reassembly algorithm that gives infix expressions their final shape
//! (§4.4, §4.5).

pub mod ast;
pub mod infix;
pub mod parser;

pub use ast::Cst;
pub use parser::{parse_source, Parser};
