//! Expressions (§4.6): the restriction ladder `AtExp < AppExp < InfExp <
//! Exp`. `raise`, `case`, and `fn` are closed forms that extend as far
//! right as precedence allows and don't themselves sit inside the ladder
//! — once the parser commits to one of them it owns everything to its
//! right, exactly like the keyword it started with.

use smlfront_lex::{Reserved, TokenClass};
use smlfront_util::LineError;

use crate::ast::{Exp, Match, MatchArm};
use crate::infix::make_infix;

use super::core::Parser;

impl Parser {
    /// The entry point for any expression position. Layers `exp : ty`,
    /// `andalso`, `orelse`, and `handle` above the infix ladder, each with
    /// a fixed relative precedence the grammar hard-codes rather than
    /// looking up in the infix dictionary (only value identifiers have
    /// runtime-declared fixity — these are keywords).
    pub(crate) fn parse_exp(&mut self) -> Result<Exp, LineError> {
        if self.is_reserved(Reserved::Raise) {
            let kw = self.advance();
            let exp = self.parse_exp()?;
            return Ok(Exp::Raise {
                kw,
                exp: Box::new(exp),
            });
        }
        if self.is_reserved(Reserved::Case) {
            return self.parse_case_exp();
        }
        if self.is_reserved(Reserved::Fn) {
            return self.parse_fn_exp();
        }
        if self.is_reserved(Reserved::If) || self.is_reserved(Reserved::While) {
            return Err(self.not_yet_implemented("if/while expressions"));
        }
        self.parse_orelse_exp()
    }

    fn parse_orelse_exp(&mut self) -> Result<Exp, LineError> {
        let mut left = self.parse_andalso_exp()?;
        while self.is_reserved(Reserved::Orelse) {
            let kw = self.advance();
            let right = self.parse_andalso_exp()?;
            left = Exp::Orelse {
                left: Box::new(left),
                kw,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_andalso_exp(&mut self) -> Result<Exp, LineError> {
        let mut left = self.parse_handle_exp()?;
        while self.is_reserved(Reserved::Andalso) {
            let kw = self.advance();
            let right = self.parse_handle_exp()?;
            left = Exp::Andalso {
                left: Box::new(left),
                kw,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_handle_exp(&mut self) -> Result<Exp, LineError> {
        let exp = self.parse_typed_exp()?;
        if self.is_reserved(Reserved::Handle) {
            let kw = self.advance();
            let arms = self.parse_match()?;
            return Ok(Exp::Handle {
                exp: Box::new(exp),
                kw,
                arms,
            });
        }
        Ok(exp)
    }

    fn parse_typed_exp(&mut self) -> Result<Exp, LineError> {
        let exp = self.parse_inf_exp()?;
        if self.is_reserved(Reserved::Colon) {
            let colon = self.advance();
            let ty = self.parse_ty()?;
            return Ok(Exp::Typed {
                exp: Box::new(exp),
                colon,
                ty: Box::new(ty),
            });
        }
        Ok(exp)
    }

    /// `appexp (vid infexp)?` — builds right-leaning, then
    /// [`make_infix`] rebalances for precedence/associativity each time a
    /// level combines (§4.5).
    fn parse_inf_exp(&mut self) -> Result<Exp, LineError> {
        let left = self.parse_app_exp()?;
        if self.current_is_infix_operator() {
            let op = self.advance();
            let right = self.parse_inf_exp()?;
            return make_infix(&self.dict, left, op, right);
        }
        Ok(left)
    }

    /// `atexp+` — left-associative application; stops as soon as the
    /// current token cannot start another `atexp` (end-of-expression
    /// tokens, or an identifier that is, right now, an infix operator).
    fn parse_app_exp(&mut self) -> Result<Exp, LineError> {
        let mut exp = self.parse_at_exp()?;
        while self.can_start_at_exp() {
            let arg = self.parse_at_exp()?;
            exp = Exp::App {
                func: Box::new(exp),
                arg: Box::new(arg),
            };
        }
        Ok(exp)
    }

    fn can_start_at_exp(&self) -> bool {
        if self.current().ends_current_exp() {
            return false;
        }
        if self.current_is_infix_operator() {
            return false;
        }
        if self.is_reserved(Reserved::Raise)
            || self.is_reserved(Reserved::Case)
            || self.is_reserved(Reserved::Fn)
            || self.is_reserved(Reserved::Andalso)
            || self.is_reserved(Reserved::Orelse)
            || self.is_reserved(Reserved::Handle)
            || self.is_reserved(Reserved::If)
            || self.is_reserved(Reserved::While)
        {
            // These sit above the ladder; they can't themselves be an
            // application argument without parentheses.
            return false;
        }
        true
    }

    fn parse_at_exp(&mut self) -> Result<Exp, LineError> {
        if self.is_reserved(Reserved::Op) {
            let op_kw = self.advance();
            let ident = self.expect_value_identifier()?;
            return Ok(Exp::Ident {
                op_kw: Some(op_kw),
                ident,
            });
        }
        if matches!(self.current().class(), TokenClass::Const(_)) {
            return Ok(Exp::Const(self.advance()));
        }
        if self.is_reserved(Reserved::LParen) {
            return self.parse_paren_exp();
        }
        if self.is_reserved(Reserved::LBracket) {
            return self.parse_list_exp();
        }
        if self.is_reserved(Reserved::Let) {
            return self.parse_let_exp();
        }
        if self.current().is_value_identifier() && !self.current_is_infix_operator() {
            let ident = self.advance();
            return Ok(Exp::Ident {
                op_kw: None,
                ident,
            });
        }
        Err(self.error_expected("an expression"))
    }

    /// `()`, `(exp)`, `(exp, …, exp)` (tuple), or `(exp; …; exp)`
    /// (sequence).
    fn parse_paren_exp(&mut self) -> Result<Exp, LineError> {
        let left = self.expect_reserved(Reserved::LParen)?;
        if self.is_reserved(Reserved::RParen) {
            let right = self.advance();
            return Ok(Exp::Unit { left, right });
        }
        let first = self.parse_exp()?;
        if self.is_reserved(Reserved::Comma) {
            let mut elems = vec![first];
            let mut delims = Vec::new();
            while self.is_reserved(Reserved::Comma) {
                delims.push(self.advance());
                elems.push(self.parse_exp()?);
            }
            let right = self.expect_reserved(Reserved::RParen)?;
            return Ok(Exp::Tuple {
                left,
                elems,
                delims,
                right,
            });
        }
        if self.is_reserved(Reserved::Semicolon) {
            let mut elems = vec![first];
            let mut delims = Vec::new();
            while self.is_reserved(Reserved::Semicolon) {
                delims.push(self.advance());
                elems.push(self.parse_exp()?);
            }
            let right = self.expect_reserved(Reserved::RParen)?;
            return Ok(Exp::Sequence {
                left,
                elems,
                delims,
                right,
            });
        }
        let right = self.expect_reserved(Reserved::RParen)?;
        Ok(Exp::Parens {
            left,
            inner: Box::new(first),
            right,
        })
    }

    fn parse_list_exp(&mut self) -> Result<Exp, LineError> {
        let left = self.expect_reserved(Reserved::LBracket)?;
        if self.is_reserved(Reserved::RBracket) {
            let right = self.advance();
            return Ok(Exp::List {
                left,
                elems: Vec::new(),
                delims: Vec::new(),
                right,
            });
        }
        let (elems, delims) =
            self.parse_one_or_more_delimited_by_reserved(Reserved::Comma, Self::parse_exp)?;
        let right = self.expect_reserved(Reserved::RBracket)?;
        Ok(Exp::List {
            left,
            elems,
            delims,
            right,
        })
    }

    fn parse_let_exp(&mut self) -> Result<Exp, LineError> {
        let let_kw = self.expect_reserved(Reserved::Let)?;
        let outer_dict = self.dict.clone();
        let dec = self.parse_dec()?;
        let in_kw = self.expect_reserved(Reserved::In)?;
        let (body, delims) =
            self.parse_one_or_more_delimited_by_reserved(Reserved::Semicolon, Self::parse_exp)?;
        let end_kw = self.expect_reserved(Reserved::End)?;
        // Fixity declared inside the `let` never escapes its body (§5):
        // dropping the clone we parsed with restores whatever was in force
        // before `let`.
        self.dict = outer_dict;
        Ok(Exp::LetInEnd {
            let_kw,
            dec: Box::new(dec),
            in_kw,
            body,
            delims,
            end_kw,
        })
    }

    fn parse_case_exp(&mut self) -> Result<Exp, LineError> {
        let kw = self.expect_reserved(Reserved::Case)?;
        let exp = self.parse_exp()?;
        let of_kw = self.expect_reserved(Reserved::Of)?;
        let arms = self.parse_match()?;
        Ok(Exp::Case {
            kw,
            exp: Box::new(exp),
            of_kw,
            arms,
        })
    }

    fn parse_fn_exp(&mut self) -> Result<Exp, LineError> {
        let kw = self.expect_reserved(Reserved::Fn)?;
        let arms = self.parse_match()?;
        Ok(Exp::Fn { kw, arms })
    }

    /// `pat => exp (| pat => exp)*` (§4.6).
    pub(crate) fn parse_match(&mut self) -> Result<Match, LineError> {
        let (arms, bars) = self.parse_one_or_more_delimited_by_reserved(Reserved::Bar, |p| {
            let pat = p.parse_pat()?;
            let arrow = p.expect_reserved(Reserved::FatArrow)?;
            let exp = p.parse_exp()?;
            Ok(MatchArm { pat, arrow, exp })
        })?;
        Ok(Match { arms, bars })
    }
}

#[cfg(test)]
mod tests {
    use smlfront_lex::Lexer;
    use smlfront_util::{Source, SourceMap};

    use super::*;
    use crate::parser::core::Parser;

    fn parse(text: &str) -> Result<Exp, LineError> {
        let mut map = SourceMap::new();
        let id = map.add_file("t.sml", text.to_string());
        let source = Source::whole_file(&map, id).unwrap();
        let mut tokens = Lexer::new(&source).tokens().unwrap();
        tokens.push(smlfront_lex::Token::eof(source.drop(source.len())));
        let mut parser = Parser::new(tokens);
        parser.parse_exp()
    }

    #[test]
    fn application_is_left_associative() {
        match parse("f x y").unwrap() {
            Exp::App { func, .. } => assert!(matches!(*func, Exp::App { .. })),
            _ => panic!("expected App"),
        }
    }

    #[test]
    fn tighter_operator_nests_on_the_right() {
        // 1 + 2 * 3 parses as 1 + (2 * 3).
        match parse("1 + 2 * 3").unwrap() {
            Exp::Infix { id, right, .. } => {
                assert_eq!(id.text(), "+");
                assert!(matches!(*right, Exp::Infix { .. }));
            }
            _ => panic!("expected Infix"),
        }
    }

    #[test]
    fn same_precedence_left_assoc_rotates_left() {
        // 1 - 2 - 3 parses as (1 - 2) - 3.
        match parse("1 - 2 - 3").unwrap() {
            Exp::Infix { left, id, .. } => {
                assert_eq!(id.text(), "-");
                assert!(matches!(*left, Exp::Infix { .. }));
            }
            _ => panic!("expected Infix"),
        }
    }

    #[test]
    fn op_prefix_uses_the_identifier_as_a_plain_value() {
        match parse("op +").unwrap() {
            Exp::Ident { op_kw: Some(_), ident } => assert_eq!(ident.text(), "+"),
            _ => panic!("expected op-prefixed Ident"),
        }
    }

    #[test]
    fn andalso_binds_tighter_than_orelse() {
        match parse("a andalso b orelse c andalso d").unwrap() {
            Exp::Orelse { left, right, .. } => {
                assert!(matches!(*left, Exp::Andalso { .. }));
                assert!(matches!(*right, Exp::Andalso { .. }));
            }
            _ => panic!("expected Orelse at the top"),
        }
    }

    #[test]
    fn let_scoped_infix_declaration_does_not_leak() {
        let mut map = SourceMap::new();
        let text = "let infix 9 +++ val x = a +++ b in x end ; a +++ b".to_string();
        let id = map.add_file("t.sml", text.clone());
        let source = Source::whole_file(&map, id).unwrap();
        let mut tokens = Lexer::new(&source).tokens().unwrap();
        tokens.push(smlfront_lex::Token::eof(source.drop(source.len())));
        let mut parser = Parser::new(tokens);

        parser.parse_exp().unwrap(); // the `let ... end` expression
        parser.expect_reserved(Reserved::Semicolon).unwrap();
        // Outside the `let`, `+++` is back to being a plain identifier, so
        // `a +++ b` is application of three atoms, not an infix expression.
        match parser.parse_exp().unwrap() {
            Exp::App { .. } => {}
            other => panic!("expected application, got {other:?}"),
        }
    }

    #[test]
    fn raise_extends_as_far_right_as_possible() {
        match parse("raise Fail \"x\" andalso true").unwrap() {
            Exp::Raise { exp, .. } => assert!(matches!(*exp, Exp::Andalso { .. })),
            _ => panic!("expected Raise"),
        }
    }
}
