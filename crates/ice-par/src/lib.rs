//! ice-par - recursive-descent parser for ICE.
//!
//! Consumes the token stream produced by `ice-lex` into the typed AST in
//! [`ast`]. The grammar is split across three `impl Parser` blocks:
//! declarations in `items.rs`, statements in `stmt.rs` and the expression
//! precedence chain in `expr.rs`.
//!
//! The parser stops at the first error; every [`SyntaxError`] carries the
//! line and column of the offending token.

mod ast;
mod edge_cases;
mod expr;
mod items;
mod stmt;

pub use ast::*;

use ice_lex::{Token, TokenKind};
use ice_util::SyntaxError;

/// Parses a token stream into a program.
///
/// The stream must end with an EOF token, as produced by
/// [`ice_lex::Lexer::scan_tokens`].
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, SyntaxError> {
    Parser::new(tokens).parse_program()
}

/// Recursive-descent parser state: the token vector and a read position.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| t.kind),
            Some(TokenKind::Eof)
        ));
        Self { tokens, current: 0 }
    }

    /// Parses declarations until EOF.
    pub fn parse_program(mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.declaration()?);
        }
        Ok(statements)
    }

    // Utilities

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if its kind is any of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consumes a token of the given kind or fails with `message` at the
    /// current token.
    pub(crate) fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<&Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    pub(crate) fn error_at_current(&self, message: &str) -> SyntaxError {
        let token = self.peek();
        SyntaxError::new(message, token.line, token.column)
    }

    pub(crate) fn error_at_previous(&self, message: &str) -> SyntaxError {
        let token = self.previous();
        SyntaxError::new(message, token.line, token.column)
    }
}
