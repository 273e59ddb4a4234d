//! Identifier and keyword lexing.

use crate::token::{keyword_kind, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword: `[A-Za-z_][A-Za-z0-9_]*`.
    ///
    /// The word is lowercase-folded for keyword lookup only; the emitted
    /// token keeps the original spelling as its lexeme.
    pub(crate) fn lex_identifier(&mut self) {
        loop {
            let c = self.cursor.current_char();
            if c.is_ascii_alphanumeric() || c == '_' {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        match keyword_kind(&text.to_ascii_lowercase()) {
            Some(kind) => self.push(kind),
            None => self.push(TokenKind::Ident),
        }
    }
}
