//! Patterns (§4.6's `Pat` grammar). Only the atomic forms are implemented:
//! `_`, constants, `[op] longvid`, `()`, `(pat)`, tuples, lists. Layered
//! (`x as p`), typed (`p : ty`), and infix-constructor (`x :: xs`) patterns
//! are out of scope (§9) and raise a "not yet implemented" error rather
//! than being silently misparsed.

use smlfront_lex::Reserved;
use smlfront_util::LineError;

use crate::ast::Pat;

use super::core::Parser;

impl Parser {
    pub(crate) fn parse_pat(&mut self) -> Result<Pat, LineError> {
        let pat = self.parse_at_pat()?;
        if self.current_is_infix_operator() {
            return Err(self.not_yet_implemented("infix constructor patterns"));
        }
        Ok(pat)
    }

    fn parse_at_pat(&mut self) -> Result<Pat, LineError> {
        if self.is_reserved(Reserved::Underscore) {
            return Ok(Pat::Wild(self.advance()));
        }
        if matches!(
            self.current().class(),
            smlfront_lex::TokenClass::Const(_)
        ) {
            return Ok(Pat::Const(self.advance()));
        }
        if self.is_reserved(Reserved::Op) {
            let op_kw = self.advance();
            let ident = self.expect_value_identifier()?;
            return Ok(Pat::Ident {
                op_kw: Some(op_kw),
                ident,
            });
        }
        if self.is_reserved(Reserved::LBracket) {
            return self.parse_list_pat();
        }
        if self.is_reserved(Reserved::LParen) {
            return self.parse_paren_pat();
        }
        if self.current().is_value_identifier() {
            let ident = self.advance();
            return Ok(Pat::Ident {
                op_kw: None,
                ident,
            });
        }
        Err(self.error_expected("a pattern"))
    }

    fn parse_paren_pat(&mut self) -> Result<Pat, LineError> {
        let left = self.expect_reserved(Reserved::LParen)?;
        if self.is_reserved(Reserved::RParen) {
            let right = self.advance();
            return Ok(Pat::Unit { left, right });
        }
        let first = self.parse_pat()?;
        if self.is_reserved(Reserved::Comma) {
            let mut elems = vec![first];
            let mut delims = Vec::new();
            while self.is_reserved(Reserved::Comma) {
                delims.push(self.advance());
                elems.push(self.parse_pat()?);
            }
            let right = self.expect_reserved(Reserved::RParen)?;
            return Ok(Pat::Tuple {
                left,
                elems,
                delims,
                right,
            });
        }
        let right = self.expect_reserved(Reserved::RParen)?;
        Ok(Pat::Parens {
            left,
            inner: Box::new(first),
            right,
        })
    }

    fn parse_list_pat(&mut self) -> Result<Pat, LineError> {
        let left = self.expect_reserved(Reserved::LBracket)?;
        if self.is_reserved(Reserved::RBracket) {
            let right = self.advance();
            return Ok(Pat::List {
                left,
                elems: Vec::new(),
                delims: Vec::new(),
                right,
            });
        }
        let (elems, delims) =
            self.parse_one_or_more_delimited_by_reserved(Reserved::Comma, Self::parse_pat)?;
        let right = self.expect_reserved(Reserved::RBracket)?;
        Ok(Pat::List {
            left,
            elems,
            delims,
            right,
        })
    }
}
