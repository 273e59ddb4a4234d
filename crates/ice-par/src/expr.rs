//! Expression parsing.
//!
//! Precedence, low to high: assignment, `atau`, `dan`, equality,
//! comparison, term, factor, unary, call/access, primary. Assignment is
//! right-associative; everything else associates left.

use ice_lex::{Literal, TokenKind};
use ice_util::SyntaxError;

use crate::ast::*;
use crate::Parser;

impl Parser {
    /// Parses a full expression.
    pub(crate) fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.assignment()
    }

    /// Assignment: the target must be a variable or a property access;
    /// anything else is a syntax error at the `=` token.
    fn assignment(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.logic_or()?;

        if self.match_token(TokenKind::Eq) {
            let (eq_line, eq_column) = {
                let eq = self.previous();
                (eq.line, eq.column)
            };
            let value = Box::new(self.assignment()?);

            return match expr {
                Expr::Variable(name) => Ok(Expr::Assign(AssignExpr { name, value })),
                Expr::Get(get) => Ok(Expr::Set(SetExpr {
                    object: get.object,
                    name: get.name,
                    value,
                })),
                _ => Err(SyntaxError::new(
                    "Target penugasan (assignment) tidak valid.",
                    eq_line,
                    eq_column,
                )),
            };
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.logic_and()?;
        while self.match_token(TokenKind::Atau) {
            let right = self.logic_and()?;
            expr = Expr::Logical(LogicalExpr {
                left: Box::new(expr),
                op: LogicalOp::Or,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.equality()?;
        while self.match_token(TokenKind::Dan) {
            let right = self.equality()?;
            expr = Expr::Logical(LogicalExpr {
                left: Box::new(expr),
                op: LogicalOp::And,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.comparison()?;
        while self.match_any(&[TokenKind::BangEq, TokenKind::EqEq]) {
            let op = if self.previous().kind == TokenKind::BangEq {
                BinaryOp::NotEq
            } else {
                BinaryOp::EqEq
            };
            let right = self.comparison()?;
            expr = binary(expr, op, right);
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.term()?;
        while self.match_any(&[
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Lt,
            TokenKind::LtEq,
        ]) {
            let op = match self.previous().kind {
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                TokenKind::Lt => BinaryOp::Lt,
                _ => BinaryOp::LtEq,
            };
            let right = self.term()?;
            expr = binary(expr, op, right);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.factor()?;
        while self.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = if self.previous().kind == TokenKind::Plus {
                BinaryOp::Add
            } else {
                BinaryOp::Sub
            };
            let right = self.factor()?;
            expr = binary(expr, op, right);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.unary()?;
        while self.match_any(&[TokenKind::Star, TokenKind::Slash, TokenKind::Percent]) {
            let op = match self.previous().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => BinaryOp::Rem,
            };
            let right = self.unary()?;
            expr = binary(expr, op, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_any(&[TokenKind::Minus, TokenKind::Bukan, TokenKind::Bang]) {
            let op = if self.previous().kind == TokenKind::Minus {
                UnaryOp::Neg
            } else {
                UnaryOp::Not
            };
            let right = self.unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                op,
                right: Box::new(right),
            }));
        }
        self.call()
    }

    /// Postfix chain: `(args)` calls and `.nama` accesses, left to right.
    fn call(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.primary()?;
        loop {
            if self.match_token(TokenKind::LParen) {
                let args = self.arguments("Diharapkan ')' setelah argumen.")?;
                expr = Expr::Call(CallExpr {
                    callee: Box::new(expr),
                    args,
                });
            } else if self.match_token(TokenKind::Dot) {
                let name = self
                    .consume(
                        TokenKind::Ident,
                        "Nama properti/method diharapkan setelah '.'",
                    )?
                    .lexeme
                    .clone();
                expr = Expr::Get(GetExpr {
                    object: Box::new(expr),
                    name,
                });
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_token(TokenKind::Salah) {
            return Ok(Expr::Literal(LiteralValue::Bool(false)));
        }
        if self.match_token(TokenKind::Benar) {
            return Ok(Expr::Literal(LiteralValue::Bool(true)));
        }
        if self.match_token(TokenKind::Kosong) {
            return Ok(Expr::Literal(LiteralValue::Nil));
        }
        if self.match_token(TokenKind::Number) {
            let token = self.previous();
            let value = match &token.literal {
                Some(Literal::Int(v)) => LiteralValue::Int(*v),
                Some(Literal::Float(v)) => LiteralValue::Float(*v),
                _ => return Err(self.error_at_previous("Ekspresi tidak valid.")),
            };
            return Ok(Expr::Literal(value));
        }
        if self.match_token(TokenKind::Str) {
            let token = self.previous();
            let value = match &token.literal {
                Some(Literal::Str(s)) => LiteralValue::Str(s.clone()),
                _ => return Err(self.error_at_previous("Ekspresi tidak valid.")),
            };
            return Ok(Expr::Literal(value));
        }
        if self.match_token(TokenKind::Ini) {
            return Ok(Expr::This);
        }
        if self.match_token(TokenKind::Super) {
            self.consume(TokenKind::Dot, "Diharapkan '.' setelah 'super'.")?;
            let name = self
                .consume(TokenKind::Ident, "Nama method diharapkan setelah 'super.'")?
                .lexeme
                .clone();
            return Ok(Expr::SuperGet(SuperGetExpr { name }));
        }
        if self.match_token(TokenKind::Baru) {
            let class_name = self
                .consume(TokenKind::Ident, "Nama kelas diharapkan setelah 'baru'.")?
                .lexeme
                .clone();
            self.consume(TokenKind::LParen, "Diharapkan '(' setelah nama kelas.")?;
            let args = self.arguments("Diharapkan ')' setelah argumen.")?;
            return Ok(Expr::New(NewExpr { class_name, args }));
        }
        // Selected keyword lexemes double as identifiers so the builtins
        // they name stay reachable in expression position.
        if self.match_any(&[
            TokenKind::Ident,
            TokenKind::Tampilkan,
            TokenKind::Cetak,
            TokenKind::Rentang,
        ]) {
            return Ok(Expr::Variable(self.previous().lexeme.clone()));
        }
        if self.match_token(TokenKind::LParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RParen, "Diharapkan ')' setelah ekspresi.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(self.error_at_current("Ekspresi tidak valid."))
    }

    /// Parses a comma-separated argument list and the closing `)`.
    ///
    /// Expects the opening `(` to be consumed already.
    pub(crate) fn arguments(&mut self, closing_message: &str) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, closing_message)?;
        Ok(args)
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        op,
        right: Box::new(right),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_util::parse_source;
    use crate::*;

    /// Parses a single expression statement and returns its expression.
    fn parse_expr(source: &str) -> Expr {
        let mut program = parse_source(&format!("{source};")).unwrap();
        match program.remove(0) {
            Stmt::Expr(e) => e,
            other => panic!("bukan ekspresi: {other:?}"),
        }
    }

    fn assert_binary(expr: &Expr, op: BinaryOp) -> (&Expr, &Expr) {
        match expr {
            Expr::Binary(b) => {
                assert_eq!(b.op, op);
                (&b.left, &b.right)
            },
            other => panic!("bukan Binary: {other:?}"),
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_expr("42"), Expr::Literal(LiteralValue::Int(42)));
        assert_eq!(parse_expr("2.5"), Expr::Literal(LiteralValue::Float(2.5)));
        assert_eq!(
            parse_expr("\"abc\""),
            Expr::Literal(LiteralValue::Str("abc".to_string()))
        );
        assert_eq!(parse_expr("benar"), Expr::Literal(LiteralValue::Bool(true)));
        assert_eq!(parse_expr("salah"), Expr::Literal(LiteralValue::Bool(false)));
        assert_eq!(parse_expr("kosong"), Expr::Literal(LiteralValue::Nil));
    }

    #[test]
    fn test_precedence_factor_over_term() {
        // 1 + 2 * 3 parses as 1 + (2 * 3)
        let expr = parse_expr("1 + 2 * 3");
        let (_, right) = assert_binary(&expr, BinaryOp::Add);
        assert_binary(right, BinaryOp::Mul);
    }

    #[test]
    fn test_term_left_associative() {
        // a - b - c parses as (a - b) - c
        let expr = parse_expr("a - b - c");
        let (left, _) = assert_binary(&expr, BinaryOp::Sub);
        assert_binary(left, BinaryOp::Sub);
    }

    #[test]
    fn test_comparison_and_equality() {
        let expr = parse_expr("a < b == c >= d");
        let (left, right) = assert_binary(&expr, BinaryOp::EqEq);
        assert_binary(left, BinaryOp::Lt);
        assert_binary(right, BinaryOp::GtEq);
    }

    #[test]
    fn test_logical_precedence() {
        // a atau b dan c parses as a atau (b dan c)
        let expr = parse_expr("a atau b dan c");
        match expr {
            Expr::Logical(l) => {
                assert_eq!(l.op, LogicalOp::Or);
                assert!(matches!(
                    *l.right,
                    Expr::Logical(LogicalExpr {
                        op: LogicalOp::And,
                        ..
                    })
                ));
            },
            other => panic!("bukan Logical: {other:?}"),
        }
    }

    #[test]
    fn test_unary_forms() {
        assert!(matches!(
            parse_expr("-x"),
            Expr::Unary(UnaryExpr {
                op: UnaryOp::Neg,
                ..
            })
        ));
        assert!(matches!(
            parse_expr("bukan x"),
            Expr::Unary(UnaryExpr {
                op: UnaryOp::Not,
                ..
            })
        ));
        // `!` is the symbol form of `bukan`.
        assert_eq!(parse_expr("!x"), parse_expr("bukan x"));
    }

    #[test]
    fn test_assignment_right_associative() {
        let expr = parse_expr("a = b = 1");
        match expr {
            Expr::Assign(a) => {
                assert_eq!(a.name, "a");
                assert!(matches!(*a.value, Expr::Assign(_)));
            },
            other => panic!("bukan Assign: {other:?}"),
        }
    }

    #[test]
    fn test_property_assignment_becomes_set() {
        let expr = parse_expr("obj.x = 1");
        match expr {
            Expr::Set(s) => assert_eq!(s.name, "x"),
            other => panic!("bukan Set: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_assignment_target() {
        let err = parse_source("1 + 2 = 3;").unwrap_err();
        assert_eq!(err.message, "Target penugasan (assignment) tidak valid.");
        assert_eq!((err.line, err.column), (1, 7));
    }

    #[test]
    fn test_call_and_get_chain() {
        // a.b(1).c parses left-to-right.
        let expr = parse_expr("a.b(1).c");
        match expr {
            Expr::Get(outer) => {
                assert_eq!(outer.name, "c");
                assert!(matches!(*outer.object, Expr::Call(_)));
            },
            other => panic!("bukan Get: {other:?}"),
        }
    }

    #[test]
    fn test_new_expression() {
        let expr = parse_expr("baru Titik(1, 2)");
        match expr {
            Expr::New(n) => {
                assert_eq!(n.class_name, "Titik");
                assert_eq!(n.args.len(), 2);
            },
            other => panic!("bukan New: {other:?}"),
        }
    }

    #[test]
    fn test_super_get() {
        let program = parse_source("kelas B : A { tugas f() { kembalikan super.f; } }").unwrap();
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn test_keyword_lexemes_as_identifiers() {
        assert_eq!(
            parse_expr("tampilkan"),
            Expr::Variable("tampilkan".to_string())
        );
        assert_eq!(parse_expr("cetak"), Expr::Variable("cetak".to_string()));
        assert_eq!(parse_expr("rentang"), Expr::Variable("rentang".to_string()));
    }

    #[test]
    fn test_grouping() {
        let expr = parse_expr("(1 + 2) * 3");
        let (left, _) = assert_binary(&expr, BinaryOp::Mul);
        assert!(matches!(left, Expr::Grouping(_)));
    }

    #[test]
    fn test_ini_and_member_access() {
        let expr = parse_expr("ini.x");
        match expr {
            Expr::Get(g) => {
                assert_eq!(g.name, "x");
                assert!(matches!(*g.object, Expr::This));
            },
            other => panic!("bukan Get: {other:?}"),
        }
    }

    #[test]
    fn test_empty_expression_is_error() {
        let err = parse_source(";").unwrap_err();
        assert_eq!(err.message, "Ekspresi tidak valid.");
    }
}
