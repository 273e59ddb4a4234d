//! Numeric literal lexing.

use ice_util::SyntaxError;

use crate::token::{Literal, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal.
    ///
    /// One or more digits, optionally followed by `.` and one or more
    /// digits. The fractional dot is only taken when the next character is a
    /// digit, so `1.x` lexes as the number `1` followed by `.` and `x`.
    /// Presence of the dot decides the literal kind.
    pub(crate) fn lex_number(&mut self) -> Result<(), SyntaxError> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut is_float = false;
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        if is_float {
            let value: f64 = text
                .parse()
                .map_err(|_| self.error_at_start(format!("Angka desimal tidak valid: {text}")))?;
            self.push_literal(TokenKind::Number, Literal::Float(value));
        } else {
            let value: i64 = text
                .parse()
                .map_err(|_| self.error_at_start(format!("Angka terlalu besar: {text}")))?;
            self.push_literal(TokenKind::Number, Literal::Int(value));
        }
        Ok(())
    }
}
