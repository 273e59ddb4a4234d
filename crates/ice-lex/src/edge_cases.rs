//! Edge case tests for ice-lex.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Lexer, Literal, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).scan_tokens().unwrap()
    }

    /// Concatenates all lexemes in stream order (EOF contributes nothing).
    fn joined_lexemes(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_only_trivia() {
        assert_eq!(lex_all(" \t\r\n // x\n /* y */ ").len(), 1);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Ident);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t[0].lexeme, name);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("kelas jika selagi");
        assert_eq!(t[0].kind, TokenKind::Kelas);
        assert_eq!(t[1].kind, TokenKind::Jika);
        assert_eq!(t[2].kind, TokenKind::Selagi);
    }

    #[test]
    fn test_edge_every_reserved_word() {
        let source = "jika jikalau kalau selagi untuk dalam rentang kembalikan bukan dan atau \
                      benar salah kosong tugas fungsi bilangan desimal teks boolean kelas baru \
                      ini super tampilkan cetak properti get set";
        let t = lex_all(source);
        assert!(t[..t.len() - 1].iter().all(|t| t.kind != TokenKind::Ident));
        assert_eq!(t.len(), 30);
    }

    #[test]
    fn test_edge_number_then_method_call() {
        // `1.x` is Number Dot Ident, never a float.
        let t = lex_all("1.x");
        assert_eq!(t[0].literal, Some(Literal::Int(1)));
        assert_eq!(t[1].kind, TokenKind::Dot);
        assert_eq!(t[2].lexeme, "x");
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| x.kind == TokenKind::LParen).count(), 3);
        assert_eq!(t.iter().filter(|x| x.kind == TokenKind::RParen).count(), 3);
    }

    #[test]
    fn test_edge_eof_position_after_newline() {
        let t = lex_all("x;\n");
        let eof = t.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!((eof.line, eof.column), (2, 1));
    }

    #[test]
    fn test_edge_consecutive_operators() {
        let t = lex_all("--x");
        assert_eq!(t[0].kind, TokenKind::Minus);
        assert_eq!(t[1].kind, TokenKind::Minus);
    }

    #[test]
    fn test_edge_round_trip_sample() {
        let source = "bilangan n = 5; // komentar\ntampilkan(n * 2.5); /* blok */\n";
        let stripped: String = source
            .replace("// komentar", "")
            .replace("/* blok */", "")
            .split_whitespace()
            .collect();
        assert_eq!(joined_lexemes(&lex_all(source)), stripped);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unknown_character() {
        let err = Lexer::new("a # b").scan_tokens().unwrap_err();
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn test_err_unterminated_single_quote() {
        let err = Lexer::new("'abc").scan_tokens().unwrap_err();
        assert_eq!(err.message, "String tidak tertutup");
    }

    #[test]
    fn test_err_backslash_at_eof() {
        let err = Lexer::new("\"abc\\").scan_tokens().unwrap_err();
        assert_eq!(err.message, "String tidak tertutup");
    }

    #[test]
    fn test_err_position_on_later_line() {
        let err = Lexer::new("x;\ny;\n  ?").scan_tokens().unwrap_err();
        assert_eq!((err.line, err.column), (3, 3));
    }

    // ==================== PROPERTIES ====================

    proptest! {
        /// Lexeme concatenation reconstructs the source minus whitespace.
        #[test]
        fn prop_round_trip(pieces in prop::collection::vec(
            prop_oneof![
                "v[a-z0-9_]{0,6}",
                (0u32..100_000u32).prop_map(|n| n.to_string()),
                (0u32..1000u32).prop_map(|n| format!("{n}.{}", n % 10)),
                Just("(".to_string()),
                Just(")".to_string()),
                Just(";".to_string()),
                Just("+".to_string()),
                Just("<=".to_string()),
                Just("==".to_string()),
            ],
            1..16,
        )) {
            let source = pieces.join(" ");
            let tokens = Lexer::new(&source).scan_tokens().unwrap();
            prop_assert_eq!(joined_lexemes(&tokens), pieces.concat());
        }

        /// Every token records a position inside the source.
        #[test]
        fn prop_positions_are_one_based(word in "v[a-z0-9_]{0,8}") {
            let tokens = Lexer::new(&word).scan_tokens().unwrap();
            prop_assert!(tokens.iter().all(|t| t.line >= 1 && t.column >= 1));
        }
    }
}
