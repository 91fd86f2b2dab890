//! Nested block comments (§4.2), emitted as [`TokenClass::Comment`] tokens
//! rather than skipped — the parser filters them out later, but tooling
//! that wants comments gets the unfiltered stream (§9 "comment retention").

use smlfront_util::LineError;

use crate::token::{Token, TokenClass};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Called with the cursor on the opening `(`. Consumes up to and
    /// including the matching `*)`, tracking nesting depth with an
    /// explicit counter (never recursion — spec §9's caution about
    /// pathological nesting depth).
    pub(crate) fn lex_comment(&mut self) -> Result<Token, LineError> {
        self.cursor.advance(); // '('
        self.cursor.advance(); // '*'
        let mut depth: u32 = 1;

        while depth > 0 {
            if self.cursor.is_at_end() {
                return Err(self.syntax_error("unterminated comment"));
            }
            if self.cursor.current_char() == '(' && self.cursor.peek_char(1) == '*' {
                self.cursor.advance();
                self.cursor.advance();
                depth += 1;
            } else if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == ')' {
                self.cursor.advance();
                self.cursor.advance();
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }

        Ok(self.make_token(TokenClass::Comment))
    }
}
