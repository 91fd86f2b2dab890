//! Lexical analysis for the SML-family source language and its companion
//! build-description format (spec §4.2, §4.3).
//!
//! [`lexer::Lexer`] tokenizes ordinary source text: identifiers, reserved
//! words, numeric/string/char constants, and nested comments, all retained
//! as tokens so the sequence is lossless over the original bytes.
//! [`mlb::MlbLexer`] tokenizes the smaller build-description language,
//! delegating comments and strings back to [`lexer::Lexer`].
//!
//! Both sit on [`cursor::Cursor`], a byte-position-tracking character
//! cursor over a borrowed `&str`, and produce [`token::Token`]s addressed
//! by [`smlfront_util::Source`] slices rather than raw byte ranges.

pub mod cursor;
pub mod lexer;
pub mod mlb;
pub mod token;

pub use lexer::Lexer;
pub use mlb::MlbLexer;
pub use token::{ConstClass, MlbReserved, NumberBase, Reserved, Token, TokenClass};
