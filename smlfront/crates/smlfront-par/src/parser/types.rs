//! Type expressions (§4.6's `Ty` grammar): `'a`, `longtycon` applications
//! at every arity, `ty -> ty`, and `ty * ty * …` tuples.

use smlfront_lex::Reserved;
use smlfront_util::LineError;

use crate::ast::{SyntaxSeq, Ty};

use super::core::Parser;

impl Parser {
    /// `tuple_ty ('->' ty)?` — `->` is right-associative and binds loosest.
    pub(crate) fn parse_ty(&mut self) -> Result<Ty, LineError> {
        let left = self.parse_tuple_ty()?;
        if self.is_reserved(Reserved::Arrow) {
            let arrow = self.advance();
            let right = self.parse_ty()?;
            Ok(Ty::Arrow {
                left: Box::new(left),
                arrow,
                right: Box::new(right),
            })
        } else {
            Ok(left)
        }
    }

    /// `postfix_ty ('*' postfix_ty)*` — arrows are not allowed inside a
    /// tuple component without parens, since `parse_postfix_ty` never
    /// recurses back up to `parse_ty`.
    fn parse_tuple_ty(&mut self) -> Result<Ty, LineError> {
        let first = self.parse_postfix_ty()?;
        if self.current().is_star() {
            let mut elems = vec![first];
            let mut stars = Vec::new();
            while self.current().is_star() {
                stars.push(self.advance());
                elems.push(self.parse_postfix_ty()?);
            }
            Ok(Ty::Tuple { elems, stars })
        } else {
            Ok(first)
        }
    }

    /// `at_ty longtycon*` — each trailing `longtycon` wraps the
    /// accumulated type as its single postfix argument (§3's `SyntaxSeq`),
    /// so `int list list` parses as `(int list) list`.
    fn parse_postfix_ty(&mut self) -> Result<Ty, LineError> {
        let mut ty = self.parse_at_ty()?;
        while self.current().is_maybe_long_tycon() {
            let tycon = self.advance();
            ty = Ty::Con {
                args: SyntaxSeq::One(ty),
                tycon,
            };
        }
        Ok(ty)
    }

    fn parse_at_ty(&mut self) -> Result<Ty, LineError> {
        if self.current().is_tyvar() {
            return Ok(Ty::Var(self.advance()));
        }
        if self.is_reserved(Reserved::LParen) {
            return self.parse_paren_ty_or_seq();
        }
        if self.current().is_maybe_long_tycon() {
            let tycon = self.advance();
            return Ok(Ty::Con {
                args: SyntaxSeq::Empty,
                tycon,
            });
        }
        Err(self.error_expected("a type"))
    }

    /// `(ty)` or `(ty, ty, …) longtycon` — a bare parenthesized comma list
    /// with no trailing type constructor is not a legal type (SML has no
    /// tuple-type syntax using parens; tuples use `*`).
    fn parse_paren_ty_or_seq(&mut self) -> Result<Ty, LineError> {
        let left = self.expect_reserved(Reserved::LParen)?;
        let first = self.parse_ty()?;
        if self.is_reserved(Reserved::Comma) {
            let mut elems = vec![first];
            let mut delims = Vec::new();
            while self.is_reserved(Reserved::Comma) {
                delims.push(self.advance());
                elems.push(self.parse_ty()?);
            }
            let right = self.expect_reserved(Reserved::RParen)?;
            let tycon = self.expect_value_identifier()?;
            return Ok(Ty::Con {
                args: SyntaxSeq::Many {
                    left,
                    elems,
                    delims,
                    right,
                },
                tycon,
            });
        }
        let right = self.expect_reserved(Reserved::RParen)?;
        Ok(Ty::Parens {
            left,
            inner: Box::new(first),
            right,
        })
    }
}
