//! One- and two-character operator lexing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `=`, `!`, `<`, `>` and their `=`-suffixed forms.
    pub(crate) fn lex_operator(&mut self) {
        let c = self.cursor.current_char();
        self.cursor.advance();
        let followed_by_eq = self.cursor.match_char('=');

        let kind = match (c, followed_by_eq) {
            ('=', true) => TokenKind::EqEq,
            ('=', false) => TokenKind::Eq,
            ('!', true) => TokenKind::BangEq,
            ('!', false) => TokenKind::Bang,
            ('<', true) => TokenKind::LtEq,
            ('<', false) => TokenKind::Lt,
            ('>', true) => TokenKind::GtEq,
            _ => TokenKind::Gt,
        };
        self.push(kind);
    }
}
