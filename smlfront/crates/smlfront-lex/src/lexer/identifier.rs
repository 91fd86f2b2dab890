//! Alphanumeric identifiers, keywords, type variables, and long identifiers
//! (`A.B.c`) (§4.2, §3).

use crate::token::{Reserved, Token, TokenClass};

use super::core::{is_alnum_ident_continue, is_symbol_char, Lexer};

impl<'a> Lexer<'a> {
    /// Called with the cursor on the first letter of an alphanumeric
    /// identifier (an `_`-prefixed identifier has already consumed its
    /// leading `_` by the time this runs).
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.scan_alnum_run();
        let mut long = false;

        while self.cursor.current_char() == '.' && starts_identifier(self.cursor.peek_char(1)) {
            long = true;
            self.cursor.advance(); // '.'
            if self.cursor.current_char().is_ascii_alphabetic() || self.cursor.current_char() == '_'
            {
                self.scan_alnum_run();
            } else {
                self.scan_symbolic_run();
                // A symbolic component can only be the last one: `A.+` is a
                // long identifier naming `+` in structure `A`, but nothing
                // can follow a symbolic run with another `.component`.
                break;
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        if !long {
            if let Some(reserved) = Reserved::from_alpha_keyword(text) {
                return self.make_token(TokenClass::Reserved(reserved));
            }
        }
        self.make_token(TokenClass::Ident { long })
    }

    /// Called with the cursor on the leading `'` of a type variable. Accepts
    /// one extra `'` for the equality-type-variable form (`''a`).
    pub(crate) fn lex_tyvar(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current_char() == '\'' {
            self.cursor.advance();
        }
        self.scan_alnum_run();
        self.make_token(TokenClass::TyVar)
    }

    fn scan_alnum_run(&mut self) {
        while is_alnum_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    fn scan_symbolic_run(&mut self) {
        while is_symbol_char(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }
}

fn starts_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || is_symbol_char(c)
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
    fn simple_identifier() {
        let tokens = lex_all("foo");
        assert_eq!(tokens[0].class(), &TokenClass::Ident { long: false });
        assert_eq!(tokens[0].text(), "foo");
    }

    #[test]
    fn identifier_with_digits_and_primes() {
        let tokens = lex_all("foo_bar'2");
        assert_eq!(tokens[0].text(), "foo_bar'2");
    }

    #[test]
    fn keyword_classifies_as_reserved() {
        let tokens = lex_all("let");
        assert!(tokens[0].is_reserved(Reserved::Let));
    }

    #[test]
    fn long_identifier_joins_components() {
        let tokens = lex_all("A.B.c");
        assert_eq!(tokens[0].class(), &TokenClass::Ident { long: true });
        assert_eq!(tokens[0].text(), "A.B.c");
    }

    #[test]
    fn long_identifier_with_trailing_symbolic_component() {
        let tokens = lex_all("A.+");
        assert_eq!(tokens[0].class(), &TokenClass::Ident { long: true });
        assert_eq!(tokens[0].text(), "A.+");
    }

    #[test]
    fn keyword_inside_a_long_identifier_path_is_still_a_path_component() {
        // `val` here is the structure identifier, not the reserved word —
        // reserved-word classification only fires for a bare, non-long name.
        let tokens = lex_all("val.x");
        assert_eq!(tokens[0].class(), &TokenClass::Ident { long: true });
    }

    #[test]
    fn tyvar_simple() {
        let tokens = lex_all("'a");
        assert!(tokens[0].is_tyvar());
        assert_eq!(tokens[0].text(), "'a");
    }

    #[test]
    fn tyvar_equality_form() {
        let tokens = lex_all("''a");
        assert!(tokens[0].is_tyvar());
        assert_eq!(tokens[0].text(), "''a");
    }
}
