//! Declarations (§4.6's `Dec` grammar): `val`, `fun`, `type`, `infix`,
//! `infixr`, `nonfix`, and the declaration sequences that chain them.
//! `infix`/`infixr`/`nonfix` mutate the threaded [`crate::infix::Dictionary`]
//! as a side effect of parsing, not in a later pass (§4.4). `and`-chained
//! `val`/`fun` and multi-clause `fun` are out of scope (§9) — each of
//! `Dec::Val`/`Dec::Fun` binds exactly one clause.

use smlfront_lex::{Reserved, Token};
use smlfront_util::LineError;

use crate::ast::{Dec, SyntaxSeq};
use crate::infix::Assoc;

use super::core::Parser;

impl Parser {
    /// The root production: a declaration sequence, terminated by EOF.
    pub fn parse_program(&mut self) -> Result<Dec, LineError> {
        let dec = self.parse_dec()?;
        if !self.is_at_end() {
            return Err(self.error_expected("a declaration"));
        }
        Ok(dec)
    }

    /// `(dec (';')? )*`, collapsing to `Dec::Empty` when nothing is there
    /// and skipping the wrapper when there's exactly one declaration.
    pub(crate) fn parse_dec(&mut self) -> Result<Dec, LineError> {
        let mut decs = Vec::new();
        let mut seps = Vec::new();
        while self.can_start_dec() {
            decs.push(self.parse_one_dec()?);
            if self.is_reserved(Reserved::Semicolon) {
                seps.push(Some(self.advance()));
            } else {
                seps.push(None);
            }
        }
        match decs.len() {
            0 => Ok(Dec::Empty),
            1 if matches!(seps.as_slice(), [None]) => Ok(decs.into_iter().next().unwrap()),
            _ => Ok(Dec::Multiple { decs, seps }),
        }
    }

    fn can_start_dec(&self) -> bool {
        self.is_reserved(Reserved::Val)
            || self.is_reserved(Reserved::Fun)
            || self.is_reserved(Reserved::Type)
            || self.is_reserved(Reserved::Infix)
            || self.is_reserved(Reserved::Infixr)
            || self.is_reserved(Reserved::Nonfix)
    }

    fn parse_one_dec(&mut self) -> Result<Dec, LineError> {
        if self.is_reserved(Reserved::Val) {
            return self.parse_val_dec();
        }
        if self.is_reserved(Reserved::Fun) {
            return self.parse_fun_dec();
        }
        if self.is_reserved(Reserved::Type) {
            return self.parse_type_dec();
        }
        if self.is_reserved(Reserved::Infix) {
            return self.parse_infix_dec();
        }
        if self.is_reserved(Reserved::Infixr) {
            return self.parse_infixr_dec();
        }
        if self.is_reserved(Reserved::Nonfix) {
            return self.parse_nonfix_dec();
        }
        Err(self.error_expected("a declaration"))
    }

    fn parse_tyvarseq(&mut self) -> Result<SyntaxSeq<Token>, LineError> {
        if self.current().is_tyvar() {
            return Ok(SyntaxSeq::One(self.advance()));
        }
        if self.is_reserved(Reserved::LParen) && self.peek(1).is_tyvar() {
            let left = self.advance();
            let (elems, delims) =
                self.parse_one_or_more_delimited_by_reserved(Reserved::Comma, |p| {
                    if p.current().is_tyvar() {
                        Ok(p.advance())
                    } else {
                        Err(p.error_expected("a type variable"))
                    }
                })?;
            let right = self.expect_reserved(Reserved::RParen)?;
            return Ok(SyntaxSeq::Many {
                left,
                elems,
                delims,
                right,
            });
        }
        Ok(SyntaxSeq::Empty)
    }

    /// `val tyvarseq [rec] pat = exp` — exactly one binding, no `and`-chain
    /// (§9).
    fn parse_val_dec(&mut self) -> Result<Dec, LineError> {
        let kw = self.expect_reserved(Reserved::Val)?;
        let tyvarseq = self.parse_tyvarseq()?;
        let rec_kw = if self.is_reserved(Reserved::Rec) {
            Some(self.advance())
        } else {
            None
        };
        let pat = self.parse_pat()?;
        let eq = self.expect_reserved(Reserved::Eq)?;
        let exp = self.parse_exp()?;
        Ok(Dec::Val {
            kw,
            tyvarseq,
            rec_kw,
            pat,
            eq,
            exp,
        })
    }

    /// `fun tyvarseq [op] vid pat+ [: ty] = exp` — a single clause, no
    /// multi-clause `fun` and no `and`-chain (§9).
    fn parse_fun_dec(&mut self) -> Result<Dec, LineError> {
        let kw = self.expect_reserved(Reserved::Fun)?;
        let tyvarseq = self.parse_tyvarseq()?;
        let op_kw = if self.is_reserved(Reserved::Op) {
            Some(self.advance())
        } else {
            None
        };
        let name = self.expect_value_identifier()?;
        let params = self.parse_while(
            |p| !p.is_reserved(Reserved::Colon) && !p.is_reserved(Reserved::Eq),
            Self::parse_pat,
        )?;
        if params.is_empty() {
            return Err(self.error_expected("at least one parameter pattern"));
        }
        let result_ty = if self.is_reserved(Reserved::Colon) {
            let colon = self.advance();
            let ty = self.parse_ty()?;
            Some((colon, ty))
        } else {
            None
        };
        let eq = self.expect_reserved(Reserved::Eq)?;
        let exp = self.parse_exp()?;
        Ok(Dec::Fun {
            kw,
            tyvarseq,
            op_kw,
            name,
            params,
            result_ty,
            eq,
            exp,
        })
    }

    fn parse_type_dec(&mut self) -> Result<Dec, LineError> {
        let kw = self.expect_reserved(Reserved::Type)?;
        let tyvarseq = self.parse_tyvarseq()?;
        let tycon = self.expect_value_identifier()?;
        let eq = self.expect_reserved(Reserved::Eq)?;
        let ty = self.parse_ty()?;
        Ok(Dec::Type {
            kw,
            tyvarseq,
            tycon,
            eq,
            ty,
        })
    }

    fn parse_fixity_precedence(&mut self) -> Option<Token> {
        if matches!(
            self.current().class(),
            smlfront_lex::TokenClass::Const(smlfront_lex::ConstClass::Int { .. })
        ) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn parse_vid_list(&mut self) -> Result<Vec<Token>, LineError> {
        self.parse_while(
            |p| p.current().is_value_identifier(),
            Self::expect_value_identifier,
        )
    }

    fn parse_infix_dec(&mut self) -> Result<Dec, LineError> {
        let kw = self.expect_reserved(Reserved::Infix)?;
        let precedence = self.parse_fixity_precedence();
        let level = parse_precedence_value(precedence.as_ref());
        let vids = self.parse_vid_list()?;
        if vids.is_empty() {
            return Err(self.error_expected("at least one identifier after `infix`"));
        }
        for vid in &vids {
            self.dict.insert(vid.text(), level, Assoc::Left);
        }
        Ok(Dec::Infix {
            kw,
            precedence,
            vids,
        })
    }

    fn parse_infixr_dec(&mut self) -> Result<Dec, LineError> {
        let kw = self.expect_reserved(Reserved::Infixr)?;
        let precedence = self.parse_fixity_precedence();
        let level = parse_precedence_value(precedence.as_ref());
        let vids = self.parse_vid_list()?;
        if vids.is_empty() {
            return Err(self.error_expected("at least one identifier after `infixr`"));
        }
        for vid in &vids {
            self.dict.insert(vid.text(), level, Assoc::Right);
        }
        Ok(Dec::Infixr {
            kw,
            precedence,
            vids,
        })
    }

    fn parse_nonfix_dec(&mut self) -> Result<Dec, LineError> {
        let kw = self.expect_reserved(Reserved::Nonfix)?;
        let vids = self.parse_vid_list()?;
        if vids.is_empty() {
            return Err(self.error_expected("at least one identifier after `nonfix`"));
        }
        for vid in &vids {
            self.dict.remove(vid.text());
        }
        Ok(Dec::Nonfix { kw, vids })
    }
}

/// `infix`/`infixr` default to precedence 0 when no digit is given (§4.4).
fn parse_precedence_value(token: Option<&Token>) -> u32 {
    token
        .and_then(|t| t.text().parse::<u32>().ok())
        .unwrap_or(0)
}
