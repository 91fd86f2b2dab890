//! The parser's token cursor (§4.6). Adapted from the teacher's `position`
//! cursor field and `current_token`/`advance`/`expect` helpers, generalized
//! to thread an [`infix::Dictionary`] and return [`LineError`] instead of
//! collecting diagnostics through a separate handler.

use smlfront_lex::{Token, TokenClass};
use smlfront_util::LineError;

use crate::infix::Dictionary;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    pub(crate) dict: Dictionary,
}

impl Parser {
    /// Builds a parser over a token stream already produced by
    /// `smlfront_lex::Lexer`. Comments are dropped here — the lexer keeps
    /// them in the stream so a caller can recover them, but the grammar
    /// never looks at them (§4.6).
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens: Vec<Token> = tokens.into_iter().filter(|t| !t.is_comment()).collect();
        Self {
            tokens,
            position: 0,
            dict: Dictionary::initial_top_level(),
        }
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek(&self, offset: usize) -> &Token {
        let index = (self.position + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_reserved(&self, reserved: smlfront_lex::Reserved) -> bool {
        self.current().is_reserved(reserved)
    }

    pub(crate) fn expect_reserved(
        &mut self,
        reserved: smlfront_lex::Reserved,
    ) -> Result<Token, LineError> {
        if self.current().is_reserved(reserved) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(format!("'{}'", reserved.text())))
        }
    }

    /// Consumes a value identifier — a plain or long identifier token —
    /// used after `op` and in binding positions where any identifier is
    /// accepted regardless of its current fixity (§4.6 "`op` discipline").
    pub(crate) fn expect_value_identifier(&mut self) -> Result<Token, LineError> {
        if self.current().is_value_identifier() {
            Ok(self.advance())
        } else {
            Err(self.error_expected("an identifier".to_string()))
        }
    }

    pub(crate) fn error_expected(&self, what: impl Into<String>) -> LineError {
        let what = what.into();
        LineError::parse(
            self.current().source().clone(),
            format!("expected {what}"),
        )
        .with_explain(format!("found '{}'", self.current().text()))
    }

    pub(crate) fn not_yet_implemented(&self, what: impl Into<String>) -> LineError {
        LineError::not_yet_implemented(self.current().source().clone(), what)
    }

    /// The textual form an infix operator check should compare against the
    /// dictionary with, or `None` if this token can never be one (§4.6).
    /// `=` and `*` are ordinary reserved punctuation tokens that also name
    /// infix identifiers (`=` for equality, `*` for multiplication) — both
    /// need to be recognised here alongside plain symbolic/alphanumeric
    /// identifiers.
    pub(crate) fn infix_candidate_text<'t>(&self, token: &'t Token) -> Option<&'t str> {
        match token.class() {
            TokenClass::Ident { long: false } => Some(token.text()),
            TokenClass::Reserved(smlfront_lex::Reserved::Eq) => Some(token.text()),
            TokenClass::Reserved(smlfront_lex::Reserved::Star) => Some(token.text()),
            _ => None,
        }
    }

    /// Whether the current token is, right now, an infix operator
    /// continuation rather than the start of a fresh atomic expression —
    /// true only when it names a dictionary-registered identifier (§4.4).
    pub(crate) fn current_is_infix_operator(&self) -> bool {
        self.infix_candidate_text(self.current())
            .is_some_and(|text| self.dict.contains(text))
    }
}
