//! Edge case tests for ice-par.

#[cfg(test)]
mod tests {
    use crate::test_util::parse_source;
    use crate::*;

    #[test]
    fn test_edge_deeply_nested_grouping() {
        let source = format!("{}1{};", "(".repeat(64), ")".repeat(64));
        assert!(parse_source(&source).is_ok());
    }

    #[test]
    fn test_edge_nested_blocks() {
        let program = parse_source("{ { { bilangan x = 1; } } }").unwrap();
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn test_edge_function_without_params() {
        let program = parse_source("tugas f() { }").unwrap();
        match &program[0] {
            Stmt::Function(f) => assert!(f.params.is_empty()),
            other => panic!("bukan fungsi: {other:?}"),
        }
    }

    #[test]
    fn test_edge_call_without_args() {
        let program = parse_source("f();").unwrap();
        match &program[0] {
            Stmt::Expr(Expr::Call(c)) => assert!(c.args.is_empty()),
            other => panic!("bukan panggilan: {other:?}"),
        }
    }

    #[test]
    fn test_edge_trailing_comma_is_error() {
        assert!(parse_source("f(1,);").is_err());
    }

    #[test]
    fn test_edge_declaration_inside_block() {
        let program = parse_source("{ tugas f() {} kelas K {} bilangan x; }").unwrap();
        match &program[0] {
            Stmt::Block(b) => assert_eq!(b.statements.len(), 3),
            other => panic!("bukan blok: {other:?}"),
        }
    }

    #[test]
    fn test_edge_class_body_statement_is_error() {
        let err = parse_source("kelas K { 1 + 1; }").unwrap_err();
        assert_eq!(
            err.message,
            "Hanya 'tugas' atau 'properti' yang diperbolehkan di dalam kelas."
        );
    }

    #[test]
    fn test_edge_baru_requires_parens() {
        let err = parse_source("baru K;").unwrap_err();
        assert_eq!(err.message, "Diharapkan '(' setelah nama kelas.");
    }

    #[test]
    fn test_edge_super_requires_member() {
        let err = parse_source("super;").unwrap_err();
        assert_eq!(err.message, "Diharapkan '.' setelah 'super'.");
    }

    #[test]
    fn test_edge_setter_without_param() {
        let program =
            parse_source("kelas K { properti n { set() { ini._n = 0; } } }").unwrap();
        match &program[0] {
            Stmt::Class(c) => match &c.members[0] {
                ClassMember::Property(p) => {
                    assert!(p.setter.as_ref().unwrap().param.is_none());
                },
                other => panic!("bukan properti: {other:?}"),
            },
            other => panic!("bukan kelas: {other:?}"),
        }
    }

    #[test]
    fn test_edge_unary_chain() {
        let program = parse_source("bukan bukan !-1;").unwrap();
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn test_edge_error_position_spans_lines() {
        let err = parse_source("bilangan x = 1;\njika (x) {\n").unwrap_err();
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_edge_assignment_to_call_is_error() {
        let err = parse_source("f() = 1;").unwrap_err();
        assert_eq!(err.message, "Target penugasan (assignment) tidak valid.");
    }

    #[test]
    fn test_edge_semicolon_after_block_is_error() {
        // Control structures must not be followed by ';' — it would parse as
        // an empty expression statement.
        assert!(parse_source("jika (1) {};").is_err());
    }
}
