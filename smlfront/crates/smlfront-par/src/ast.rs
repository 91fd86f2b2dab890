//! The concrete syntax tree (§3, §4.7). Every node records the tokens that
//! produced it — keywords, delimiters, parentheses — alongside its child
//! nodes, so an in-order walk recovers the original token stream.

use smlfront_lex::Token;

/// A uniform container for an optionally-parenthesised, comma-separated
/// sequence: no elements, exactly one unparenthesised element, or a
/// parenthesised list of two or more (§3). `|delims| = |elems| - 1` in the
/// `Many` case.
#[derive(Debug, Clone)]
pub enum SyntaxSeq<T> {
    Empty,
    One(T),
    Many {
        left: Token,
        elems: Vec<T>,
        delims: Vec<Token>,
        right: Token,
    },
}

impl<T> SyntaxSeq<T> {
    pub fn len(&self) -> usize {
        match self {
            SyntaxSeq::Empty => 0,
            SyntaxSeq::One(_) => 1,
            SyntaxSeq::Many { elems, .. } => elems.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SyntaxSeq::Empty)
    }
}

/// An expression (§4.6's `Exp` grammar).
#[derive(Debug, Clone)]
pub enum Exp {
    Const(Token),
    /// `[op] longvid` — `op_kw` is present only when the identifier was
    /// explicitly marked to bypass infix-operator parsing (§4.6 "`op`
    /// discipline").
    Ident {
        op_kw: Option<Token>,
        ident: Token,
    },
    Unit {
        left: Token,
        right: Token,
    },
    Parens {
        left: Token,
        inner: Box<Exp>,
        right: Token,
    },
    Tuple {
        left: Token,
        elems: Vec<Exp>,
        delims: Vec<Token>,
        right: Token,
    },
    Sequence {
        left: Token,
        elems: Vec<Exp>,
        delims: Vec<Token>,
        right: Token,
    },
    List {
        left: Token,
        elems: Vec<Exp>,
        delims: Vec<Token>,
        right: Token,
    },
    LetInEnd {
        let_kw: Token,
        dec: Box<Dec>,
        in_kw: Token,
        body: Vec<Exp>,
        delims: Vec<Token>,
        end_kw: Token,
    },
    App {
        func: Box<Exp>,
        arg: Box<Exp>,
    },
    /// Produced by `makeInfix` (§4.5), already rebalanced for precedence and
    /// associativity — by the time an `Infix` node exists, its shape has
    /// already satisfied the infix well-formedness invariant (§8).
    Infix {
        left: Box<Exp>,
        id: Token,
        right: Box<Exp>,
    },
    Typed {
        exp: Box<Exp>,
        colon: Token,
        ty: Box<Ty>,
    },
    Andalso {
        left: Box<Exp>,
        kw: Token,
        right: Box<Exp>,
    },
    Orelse {
        left: Box<Exp>,
        kw: Token,
        right: Box<Exp>,
    },
    Handle {
        exp: Box<Exp>,
        kw: Token,
        arms: Match,
    },
    Raise {
        kw: Token,
        exp: Box<Exp>,
    },
    Case {
        kw: Token,
        exp: Box<Exp>,
        of_kw: Token,
        arms: Match,
    },
    Fn {
        kw: Token,
        arms: Match,
    },
}

/// `pat => exp (| pat => exp)*` (§4.6).
#[derive(Debug, Clone)]
pub struct MatchArm {
    pub pat: Pat,
    pub arrow: Token,
    pub exp: Exp,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub arms: Vec<MatchArm>,
    pub bars: Vec<Token>,
}

/// A declaration (§4.6's `Dec` grammar). `and`-chains and multi-clause
/// `fun` are out of scope (§9) — `Fun` and `Val` bind exactly one clause.
#[derive(Debug, Clone)]
pub enum Dec {
    Val {
        kw: Token,
        tyvarseq: SyntaxSeq<Token>,
        rec_kw: Option<Token>,
        pat: Pat,
        eq: Token,
        exp: Exp,
    },
    Fun {
        kw: Token,
        tyvarseq: SyntaxSeq<Token>,
        op_kw: Option<Token>,
        name: Token,
        params: Vec<Pat>,
        result_ty: Option<(Token, Ty)>,
        eq: Token,
        exp: Exp,
    },
    Type {
        kw: Token,
        tyvarseq: SyntaxSeq<Token>,
        tycon: Token,
        eq: Token,
        ty: Ty,
    },
    /// `infix [d] vid+` — updating the infix dictionary is a side effect of
    /// parsing this node (§4.4), not something a later pass performs.
    Infix {
        kw: Token,
        precedence: Option<Token>,
        vids: Vec<Token>,
    },
    Infixr {
        kw: Token,
        precedence: Option<Token>,
        vids: Vec<Token>,
    },
    Nonfix {
        kw: Token,
        vids: Vec<Token>,
    },
    /// A sequence of declarations, each optionally followed by `;`.
    /// `|seps| = |decs| - 1`.
    Multiple {
        decs: Vec<Dec>,
        seps: Vec<Option<Token>>,
    },
    Empty,
}

/// A pattern (§4.6's `Pat` grammar). Non-atomic forms (layered, typed,
/// infix constructor patterns) are not implemented here — the parser
/// raises the "not yet implemented" error for them rather than guessing
/// (§9 "not yet implemented forms").
#[derive(Debug, Clone)]
pub enum Pat {
    Wild(Token),
    Const(Token),
    Ident {
        op_kw: Option<Token>,
        ident: Token,
    },
    Parens {
        left: Token,
        inner: Box<Pat>,
        right: Token,
    },
    Tuple {
        left: Token,
        elems: Vec<Pat>,
        delims: Vec<Token>,
        right: Token,
    },
    Unit {
        left: Token,
        right: Token,
    },
    List {
        left: Token,
        elems: Vec<Pat>,
        delims: Vec<Token>,
        right: Token,
    },
}

/// A type expression (§4.6's `Ty` grammar).
#[derive(Debug, Clone)]
pub enum Ty {
    Var(Token),
    /// `longtycon` (nullary, `args` is `Empty`), `ty longtycon` (postfix
    /// single argument, `args` is `One`), or `(ty, ty, …) longtycon`
    /// (multi-argument, `args` is `Many`) — all three share this shape per
    /// §3's `SyntaxSeq`.
    Con {
        args: SyntaxSeq<Ty>,
        tycon: Token,
    },
    Arrow {
        left: Box<Ty>,
        arrow: Token,
        right: Box<Ty>,
    },
    Tuple {
        elems: Vec<Ty>,
        stars: Vec<Token>,
    },
    Parens {
        left: Token,
        inner: Box<Ty>,
        right: Token,
    },
}

/// The root of a parsed source file: a possibly-empty declaration sequence.
pub type Cst = Dec;

#[cfg(test)]
mod delimiter_arity_proptests {
    use proptest::prelude::*;
    use smlfront_util::{Source, SourceMap};

    use super::{Dec, SyntaxSeq};
    use crate::parser::parse_source;

    /// Builds `type ('a0, 'a1, ..., 'a{n-1}) t = int`, whose tyvarseq parses
    /// to a `SyntaxSeq::Many` with exactly `n` elements.
    fn type_dec_with_tyvars(n: usize) -> String {
        let vars: Vec<String> = (0..n).map(|i| format!("'a{i}")).collect();
        format!("type ({}) t = int", vars.join(", "))
    }

    proptest! {
        /// `SyntaxSeq::Many { elems, delims, .. }` always has one fewer
        /// delimiter than element (spec §3, "`|delims| = |elems| - 1`").
        #[test]
        fn many_has_one_fewer_delimiter_than_element(n in 2usize..12) {
            let text = type_dec_with_tyvars(n);
            let mut map = SourceMap::new();
            let id = map.add_file("prop.sml", text);
            let source = Source::whole_file(&map, id).unwrap();
            let dec = parse_source(&source).unwrap();
            let tyvarseq = match dec {
                Dec::Type { tyvarseq, .. } => tyvarseq,
                other => panic!("expected Dec::Type, got {other:?}"),
            };
            match tyvarseq {
                SyntaxSeq::Many { elems, delims, .. } => {
                    prop_assert_eq!(delims.len(), elems.len() - 1);
                    prop_assert_eq!(elems.len(), n);
                }
                other => panic!("expected SyntaxSeq::Many, got {other:?}"),
            }
        }
    }
}
