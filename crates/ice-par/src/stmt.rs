//! Statement parsing - blocks, conditionals, loops, return.

use ice_lex::TokenKind;
use ice_util::SyntaxError;

use crate::ast::*;
use crate::Parser;

impl Parser {
    /// Parses a statement.
    pub(crate) fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        if self.match_token(TokenKind::LBrace) {
            let statements = self.block_inner()?;
            return Ok(Stmt::Block(Block { statements }));
        }
        if self.match_token(TokenKind::Jika) {
            return self.if_statement();
        }
        if self.match_token(TokenKind::Selagi) {
            return self.while_statement();
        }
        if self.match_token(TokenKind::Untuk) {
            return self.for_range_statement();
        }
        if self.match_token(TokenKind::Kembalikan) {
            return self.return_statement();
        }

        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Diharapkan ';' setelah ekspresi.")?;
        Ok(Stmt::Expr(expr))
    }

    /// Parses a braced block, including the opening `{`.
    pub(crate) fn block(&mut self) -> Result<Block, SyntaxError> {
        self.consume(TokenKind::LBrace, "Diharapkan '{' untuk memulai blok.")?;
        let statements = self.block_inner()?;
        Ok(Block { statements })
    }

    /// Parses statements up to and including the closing `}`.
    fn block_inner(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }
        self.consume(TokenKind::RBrace, "Diharapkan '}' untuk menutup blok.")?;
        Ok(statements)
    }

    /// Parses `jika (...) {...} (jikalau (...) {...})* (kalau {...})?`.
    fn if_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let mut branches = vec![self.if_branch("jika")?];
        while self.match_token(TokenKind::Jikalau) {
            branches.push(self.if_branch("jikalau")?);
        }
        let else_branch = if self.match_token(TokenKind::Kalau) {
            Some(self.block()?)
        } else {
            None
        };
        Ok(Stmt::If(IfStmt {
            branches,
            else_branch,
        }))
    }

    fn if_branch(&mut self, keyword: &str) -> Result<IfBranch, SyntaxError> {
        self.consume(
            TokenKind::LParen,
            &format!("Diharapkan '(' setelah '{keyword}'."),
        )?;
        let condition = self.expression()?;
        self.consume(TokenKind::RParen, "Diharapkan ')' setelah kondisi.")?;
        let body = self.block()?;
        Ok(IfBranch { condition, body })
    }

    /// Parses `selagi (...) {...}`.
    fn while_statement(&mut self) -> Result<Stmt, SyntaxError> {
        self.consume(TokenKind::LParen, "Diharapkan '(' setelah 'selagi'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RParen, "Diharapkan ')' setelah kondisi.")?;
        let body = self.block()?;
        Ok(Stmt::While(WhileStmt { condition, body }))
    }

    /// Parses `untuk IDENT dalam rentang(args) {...}`.
    ///
    /// Only the `rentang(...)` header form exists; the loop iterates the
    /// integer range those arguments denote.
    fn for_range_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let var = self
            .consume(TokenKind::Ident, "Nama variabel loop diharapkan.")?
            .lexeme
            .clone();
        self.consume(TokenKind::Dalam, "Diharapkan kata 'dalam'.")?;
        self.consume(TokenKind::Rentang, "Diharapkan kata 'rentang'.")?;
        self.consume(TokenKind::LParen, "Diharapkan '(' setelah rentang.")?;
        let args = self.arguments("Diharapkan ')' setelah argumen rentang.")?;
        let body = self.block()?;
        Ok(Stmt::ForRange(ForRangeStmt { var, args, body }))
    }

    /// Parses `kembalikan [expr] ;`.
    fn return_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Diharapkan ';' setelah return.")?;
        Ok(Stmt::Return(value))
    }
}
