//! The infix-fixity dictionary (§4.4) and the infix reassembly algorithm
//! (§4.5). The dictionary maps an identifier's textual form to a
//! precedence/associativity pair; the parser mutates it as a side effect of
//! parsing `infix`/`infixr`/`nonfix` declarations (§4.6) and threads a
//! clone into `let`-scoped parses so inner fixity changes never escape
//! (§5, §9 "infix dictionary as scoped state").

use rustc_hash::FxHashMap;

use smlfront_lex::Token;
use smlfront_util::LineError;

use crate::ast::Exp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fixity {
    precedence: u32,
    assoc: Assoc,
}

const DEFAULT_FIXITY: Fixity = Fixity {
    precedence: 0,
    assoc: Assoc::Left,
};

/// A mutable `identifier → (precedence, associativity)` mapping (§4.4).
/// Cloning is the scoping mechanism: a `let` body is parsed against a clone
/// that is simply dropped at `end`, per §5's "no nested reset" contract.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: FxHashMap<String, Fixity>,
}

impl Dictionary {
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// A preloaded dictionary for the standard library's infix operators
    /// (§4.4).
    pub fn initial_top_level() -> Self {
        let mut dict = Self::empty();
        for id in ["*", "/", "div", "mod"] {
            dict.insert(id, 7, Assoc::Left);
        }
        for id in ["+", "-"] {
            dict.insert(id, 6, Assoc::Left);
        }
        for id in ["::", "@"] {
            dict.insert(id, 5, Assoc::Right);
        }
        for id in ["=", "<>", ">", ">=", "<", "<="] {
            dict.insert(id, 4, Assoc::Left);
        }
        for id in [":=", "o"] {
            dict.insert(id, 3, Assoc::Left);
        }
        dict.insert("before", 0, Assoc::Left);
        dict
    }

    /// Idempotent replace (§4.4).
    pub fn insert(&mut self, id: &str, precedence: u32, assoc: Assoc) {
        self.entries.insert(id.to_string(), Fixity { precedence, assoc });
    }

    /// Safe if `id` is absent (§4.4) — this is what a `nonfix` declaration
    /// calls for each identifier it names.
    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn fixity(&self, id: &str) -> Fixity {
        self.entries.get(id).copied().unwrap_or(DEFAULT_FIXITY)
    }

    pub fn precedence(&self, id: &str) -> u32 {
        self.fixity(id).precedence
    }

    pub fn higher_precedence(&self, a: &str, b: &str) -> bool {
        self.precedence(a) > self.precedence(b)
    }

    pub fn same_precedence(&self, a: &str, b: &str) -> bool {
        self.precedence(a) == self.precedence(b)
    }

    pub fn associates_left(&self, id: &str) -> bool {
        self.fixity(id).assoc == Assoc::Left
    }

    pub fn associates_right(&self, id: &str) -> bool {
        self.fixity(id).assoc == Assoc::Right
    }
}

/// Rebalances `Infix{left, op, right}` against the dictionary in force,
/// honouring precedence and associativity (§4.5).
///
/// The parser always builds a right-leaning tree first (`right` may itself
/// be `Infix`); this inspects that shape and either keeps it, rotates it
/// left, or rejects an ambiguous mix of equal-precedence operators with
/// clashing associativity.
pub fn make_infix(dict: &Dictionary, left: Exp, op: Token, right: Exp) -> Result<Exp, LineError> {
    match right {
        Exp::Infix {
            left: r_left,
            id: op2,
            right: r_right,
        } => {
            let op1_text = op.text();
            let op2_text = op2.text();

            if dict.higher_precedence(op2_text, op1_text)
                || (dict.same_precedence(op2_text, op1_text)
                    && dict.associates_right(op1_text)
                    && dict.associates_right(op2_text))
            {
                Ok(Exp::Infix {
                    left: Box::new(left),
                    id: op,
                    right: Box::new(Exp::Infix {
                        left: r_left,
                        id: op2,
                        right: r_right,
                    }),
                })
            } else if dict.higher_precedence(op1_text, op2_text)
                || (dict.same_precedence(op1_text, op2_text)
                    && dict.associates_left(op1_text)
                    && dict.associates_left(op2_text))
            {
                let rotated_left = make_infix(dict, left, op, *r_left)?;
                Ok(Exp::Infix {
                    left: Box::new(rotated_left),
                    id: op2,
                    right: r_right,
                })
            } else {
                Err(LineError::parse(
                    op2.source().clone(),
                    "Ambiguous infix expression.",
                ))
            }
        }
        other => Ok(Exp::Infix {
            left: Box::new(left),
            id: op,
            right: Box::new(other),
        }),
    }
}
