//! Symbolic identifiers and their reserved forms (§4.2): the maximal run of
//! symbol characters is one token, classified as one of the small set of
//! reserved symbolic forms (`=>`, `->`, `*`, `=`, `|`, `:`) or else a plain
//! symbolic identifier (an infix operator name, pending fixity lookup in
//! the parser).

use crate::token::{Reserved, Token, TokenClass};

use super::core::{is_symbol_char, Lexer};

impl<'a> Lexer<'a> {
    /// Called with the cursor on the first symbol character of the run.
    pub(crate) fn lex_operator(&mut self) -> Token {
        while is_symbol_char(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        match Reserved::from_symbolic(text) {
            Some(reserved) => self.make_token(TokenClass::Reserved(reserved)),
            None => self.make_token(TokenClass::Ident { long: false }),
        }
    }
}

#[cfg(test)]
mod tests {
    use smlfront_util::{Source, SourceMap};

    use super::*;

    fn lex_all(text: &str) -> Vec<Token> {
        let mut map = SourceMap::new();
        let id = map.add_file("t.sml", text.to_string());
        let source = Source::whole_file(&map, id).unwrap();
        Lexer::new(&source).tokens().unwrap()
    }

    #[test]
    fn plain_symbolic_identifier() {
        let tokens = lex_all("+");
        assert_eq!(tokens[0].class(), &TokenClass::Ident { long: false });
        assert_eq!(tokens[0].text(), "+");
    }

    #[test]
    fn longest_run_is_one_token() {
        let tokens = lex_all("<=>");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), "<=>");
    }

    #[test]
    fn reserved_symbolic_forms() {
        assert!(lex_all("=>")[0].is_reserved(Reserved::FatArrow));
        assert!(lex_all("->")[0].is_reserved(Reserved::Arrow));
        assert!(lex_all("*")[0].is_star());
        assert!(lex_all("=")[0].is_reserved(Reserved::Eq));
        assert!(lex_all("|")[0].is_reserved(Reserved::Bar));
        assert!(lex_all(":")[0].is_reserved(Reserved::Colon));
    }

    #[test]
    fn star_inside_a_longer_run_is_not_reserved() {
        let tokens = lex_all("**");
        assert_eq!(tokens[0].class(), &TokenClass::Ident { long: false });
    }
}
