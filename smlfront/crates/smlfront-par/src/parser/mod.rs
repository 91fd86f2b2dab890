//! The recursive-descent parser driver (§4.6): [`core::Parser`] is the
//! token cursor and threaded infix dictionary; the other modules are its
//! `impl` blocks, one per grammar layer.

pub(crate) mod core;
mod expr;
mod helpers;
mod items;
mod pattern;
mod types;

pub use core::Parser;

use smlfront_lex::{Lexer, Token};
use smlfront_util::{LineError, Source};

use crate::ast::Cst;

/// Tokenizes `source` and parses it as a complete declaration sequence
/// (§4.6's root production).
pub fn parse_source(source: &Source) -> Result<Cst, LineError> {
    let mut tokens = Lexer::new(source).tokens()?;
    tokens.push(Token::eof(source.drop(source.len())));
    Parser::new(tokens).parse_program()
}
