//! Edge case tests for kilnc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Lexer, Token, TokenKind, TokenValue};
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        tokenize(source)
            .into_iter()
            .filter(|token| !token.is_eof())
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|token| token.kind).collect()
    }

    /// Line and column of byte offset `position`, counted from scratch.
    fn location_of(source: &str, position: usize) -> (u32, u32) {
        let before = &source[..position];
        let line = before.matches('\n').count() as u32 + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() as u32 + 1;
        (line, column)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_only_whitespace() {
        assert_eq!(kinds(" \n\t "), [TokenKind::Whitespace]);
    }

    #[test]
    fn test_edge_only_comments() {
        assert!(lex_all("// a\n").iter().all(|t| t.kind == TokenKind::Whitespace));
        assert!(lex_all("/* a */").is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].as_str(), Some(name.as_str()));
    }

    #[test]
    fn test_edge_number_examples() {
        assert_eq!(lex_all("255")[0].value, Some(TokenValue::Int(255)));
        assert_eq!(lex_all("0xFF")[0].value, Some(TokenValue::Int(255)));
        assert_eq!(lex_all("0b101")[0].value, Some(TokenValue::Int(5)));
        assert_eq!(lex_all("1.5")[0].value, Some(TokenValue::Float(1.5)));
    }

    #[test]
    fn test_edge_unknown_then_eof() {
        let tokens = tokenize("@");
        assert_eq!(tokens[0].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_edge_unclosed_string_example() {
        let tokens = lex_all("\"abc");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            [TokenKind::Invalid, TokenKind::String]
        );
        assert_eq!(tokens[1].as_str(), Some("abc"));
    }

    #[test]
    fn test_edge_identifier_followed_by_number() {
        assert_eq!(kinds("x1 1x"), [
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::Invalid,
            TokenKind::Int,
        ]);
    }

    #[test]
    fn test_edge_period_before_identifier() {
        assert_eq!(
            kinds("a.b"),
            [TokenKind::Identifier, TokenKind::Period, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_number_then_method_like() {
        let tokens = lex_all("1.e");
        assert_eq!(tokens[0].error(), Some(&LexError::DigitExceedsBase { digit: 'e', base: 10 }));
        assert_eq!(tokens[1].kind, TokenKind::Float);
        assert_eq!(tokens[1].text(), "1.e");
    }

    #[test]
    fn test_edge_crlf_line_numbers() {
        let tokens = lex_all("a\r\nb");
        assert_eq!((tokens[2].line, tokens[2].column), (2, 1));
    }

    #[test]
    fn test_edge_columns_count_chars() {
        let tokens = lex_all("\"日本\" x");
        assert_eq!(tokens[2].column, 6);
        assert_eq!(tokens[2].position, 9);
    }

    #[test]
    fn test_edge_eof_after_unclosed_comment() {
        let mut lexer = Lexer::new("/* x\ny");
        let comment = lexer.next_token();
        assert_eq!(comment.text(), "/* x\ny");
        let eof = lexer.next_token();
        assert_eq!((eof.position, eof.line, eof.column), (6, 2, 2));
    }

    #[test]
    fn test_edge_unknown_escape_multibyte() {
        let tokens = lex_all("\"\\é\"");
        assert_eq!(tokens[0].error(), Some(&LexError::UnknownEscape('é')));
        assert_eq!(tokens[0].length, 2);
        assert_eq!(tokens[1].as_str(), Some("é"));
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_no_panic_on_arbitrary_input() {
        proptest!(|(input in any::<String>())| {
            let tokens = tokenize(&input);
            prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
            for token in &tokens {
                prop_assert!(token.position + token.length <= input.len());
            }
        });
    }

    #[test]
    fn test_property_partition_without_comments() {
        proptest!(|(input in "[a-z0-9 \\n\\t._\"\\\\+*/%=<>!@#$(){}-]{0,64}")| {
            prop_assume!(!input.contains("//") && !input.contains("/*"));

            let rebuilt: String = tokenize(&input)
                .iter()
                .filter(|t| !t.is_attached())
                .map(|t| t.text())
                .collect();
            prop_assert_eq!(rebuilt, input);
        });
    }

    #[test]
    fn test_property_monotonic_positions() {
        proptest!(|(input in "[a-z0-9 \\n/*.\"\\\\=-]{0,64}")| {
            let mut end = 0;
            for token in tokenize(&input).iter().filter(|t| !t.is_attached()) {
                prop_assert!(token.position >= end);
                end = token.position + token.length;
            }
        });
    }

    #[test]
    fn test_property_locations_match_offsets() {
        proptest!(|(input in "[a-zé日 \\n\\r\\t\"\\\\0-9.]{0,48}")| {
            for token in tokenize(&input) {
                prop_assert_eq!((token.line, token.column), location_of(&input, token.position));
            }
        });
    }

    #[test]
    fn test_property_eof_is_stable() {
        proptest!(|(input in "\\PC{0,32}")| {
            let mut lexer = Lexer::new(&input);
            let first = lexer
                .by_ref()
                .find(|t| t.is_eof())
                .map(|t| (t.position, t.line, t.column));
            prop_assert_eq!(first.map(|f| f.0), Some(input.len()));

            for token in lexer.take(4) {
                prop_assert!(token.is_eof());
                prop_assert_eq!(token.length, 0);
                prop_assert_eq!(Some((token.position, token.line, token.column)), first);
            }
        });
    }

    #[test]
    fn test_property_decimal_integers() {
        proptest!(|(value in any::<u64>())| {
            let source = value.to_string();
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].as_int(), Some(value));
        });
    }

    #[test]
    fn test_property_hex_integers() {
        proptest!(|(value in any::<u64>())| {
            let source = format!("0x{:X}", value);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].as_int(), Some(value));
        });
    }

    #[test]
    fn test_property_plain_string_literals() {
        proptest!(|(input in "[^\"\\\\]{0,64}")| {
            let source = format!("\"{}\"", input);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].as_str(), Some(input.as_str()));
        });
    }
}
