//! Integer, word, and real constants (§4.2), including the `~` negation
//! sigil (distinct from the infix `-` identifier) and the decimal/hex
//! subvariants spec.md's expansion fixes as `NumberBase::{Decimal, Hex}`.

use smlfront_util::LineError;

use crate::token::{ConstClass, NumberBase, Token, TokenClass};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Called with the cursor on a leading `~` or an ASCII digit.
    pub(crate) fn lex_number(&mut self) -> Result<Token, LineError> {
        let negative = if self.cursor.current_char() == '~' {
            self.cursor.advance();
            true
        } else {
            false
        };

        // Word constant: 0w<digits> or 0wx<hex digits>.
        if self.cursor.current_char() == '0' && self.cursor.peek_char(1) == 'w' {
            self.cursor.advance();
            self.cursor.advance();
            if self.cursor.current_char() == 'x' {
                self.cursor.advance();
                self.consume_digits(16)?;
                return Ok(self.make_token(TokenClass::Const(ConstClass::Word {
                    base: NumberBase::Hex,
                })));
            }
            self.consume_digits(10)?;
            return Ok(self.make_token(TokenClass::Const(ConstClass::Word {
                base: NumberBase::Decimal,
            })));
        }

        // Hex integer: 0x<hex digits>.
        if self.cursor.current_char() == '0' && self.cursor.peek_char(1) == 'x' {
            self.cursor.advance();
            self.cursor.advance();
            self.consume_digits(16)?;
            return Ok(self.make_token(TokenClass::Const(ConstClass::Int {
                base: NumberBase::Hex,
                negative,
            })));
        }

        self.consume_digits(10)?;
        let mut is_real = false;

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_real = true;
            self.cursor.advance();
            self.consume_digits(10)?;
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let snapshot = self.cursor.snapshot();
            self.cursor.advance();
            if self.cursor.current_char() == '~' {
                self.cursor.advance();
            }
            if self.cursor.current_char().is_ascii_digit() {
                is_real = true;
                self.consume_digits(10)?;
            } else {
                self.cursor.restore(snapshot);
            }
        }

        if is_real {
            Ok(self.make_token(TokenClass::Const(ConstClass::Real)))
        } else {
            Ok(self.make_token(TokenClass::Const(ConstClass::Int {
                base: NumberBase::Decimal,
                negative,
            })))
        }
    }

    fn consume_digits(&mut self, base: u32) -> Result<(), LineError> {
        let start = self.cursor.position();
        while is_digit_in_base(self.cursor.current_char(), base) {
            self.cursor.advance();
        }
        if self.cursor.position() == start {
            return Err(self.syntax_error("expected digits in numeric literal"));
        }
        Ok(())
    }
}

fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        16 => c.is_ascii_hexdigit(),
        _ => c.is_ascii_digit(),
    }
}
