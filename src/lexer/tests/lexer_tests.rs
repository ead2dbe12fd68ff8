//! Тесты для лексера shardsql

use crate::dialect::{DatabaseType, Dialect};
use crate::lexer::{Assist, Keyword, Lexer, Literal, Symbol, Token, TokenType};

fn tokenize(database_type: DatabaseType, sql: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(sql, Dialect::of(database_type));
    let mut tokens = Vec::new();
    loop {
        lexer.next_token().unwrap();
        let token = lexer.current_token().clone();
        let is_end = token.token_type == TokenType::Assist(Assist::End);
        tokens.push(token);
        if is_end {
            return tokens;
        }
    }
}

fn types(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.token_type).collect()
}

#[test]
fn test_simple_select_for_all_dialects() {
    let expected: Vec<TokenType> = vec![
        Keyword::Select.into(),
        Symbol::Star.into(),
        Keyword::From.into(),
        Literal::Identifier.into(),
        Keyword::Where.into(),
        Literal::Identifier.into(),
        Symbol::Eq.into(),
        Literal::Int.into(),
        Assist::End.into(),
    ];
    for database_type in DatabaseType::all() {
        let tokens = tokenize(*database_type, "SELECT * FROM t_order WHERE id = 1");
        assert_eq!(types(&tokens), expected, "dialect {}", database_type);
        assert_eq!(tokens[3].literals, "t_order");
        assert_eq!(tokens[5].literals, "id");
        assert_eq!(tokens[7].literals, "1");
        assert_eq!(tokens[8].literals, "");
    }
}

#[test]
fn test_token_positions() {
    let tokens = tokenize(DatabaseType::MySQL, "SELECT 'x' FROM t");
    assert_eq!((tokens[0].begin_position, tokens[0].end_position), (0, 6));
    assert_eq!(tokens[1].literals, "x");
    assert_eq!((tokens[1].begin_position, tokens[1].end_position), (7, 10));
    assert_eq!(tokens[4].token_type, Assist::End.into());
    assert_eq!(tokens[4].end_position, 17);
}

#[test]
fn test_doubled_backtick_is_one_identifier() {
    let tokens = tokenize(DatabaseType::MySQL, "`b``c`");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].token_type, Literal::Identifier.into());
    assert_eq!(tokens[0].literals, "`b``c`");
    assert_eq!(tokens[0].end_position, 6);
}

#[test]
fn test_group_is_identifier_without_by() {
    let tokens = tokenize(DatabaseType::MySQL, "SELECT * FROM group");
    assert_eq!(tokens[3].token_type, Literal::Identifier.into());
    assert_eq!(tokens[3].literals, "group");
}

#[test]
fn test_group_by_is_keyword() {
    let tokens = tokenize(DatabaseType::MySQL, "SELECT x FROM t GROUP BY x");
    assert_eq!(tokens[4].token_type, Keyword::Group.into());
    assert_eq!(tokens[5].token_type, Keyword::By.into());

    let tokens = tokenize(DatabaseType::PostgreSQL, "SELECT x FROM t order\n  by x");
    assert_eq!(tokens[4].token_type, Keyword::Order.into());
}

#[test]
fn test_symbol_maximal_munch() {
    let tokens = tokenize(DatabaseType::MySQL, "a<=b");
    assert_eq!(
        types(&tokens),
        vec![
            Literal::Identifier.into(),
            Symbol::LtEq.into(),
            Literal::Identifier.into(),
            Assist::End.into()
        ]
    );

    let tokens = tokenize(DatabaseType::MySQL, ";;");
    assert_eq!(
        types(&tokens),
        vec![Symbol::Semi.into(), Symbol::Semi.into(), Assist::End.into()]
    );
}

#[test]
fn test_negative_float() {
    let tokens = tokenize(DatabaseType::MySQL, "-.2");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].token_type, Literal::Float.into());
    assert_eq!(tokens[0].literals, "-.2");
}

#[test]
fn test_minus_after_identifier_is_operator() {
    let tokens = tokenize(DatabaseType::MySQL, "a-.2");
    assert_eq!(
        types(&tokens),
        vec![
            Literal::Identifier.into(),
            Symbol::Sub.into(),
            Literal::Float.into(),
            Assist::End.into()
        ]
    );
    assert_eq!(tokens[2].literals, ".2");
}

#[test]
fn test_dot_after_identifier_is_property() {
    let tokens = tokenize(DatabaseType::MySQL, "a.2");
    assert_eq!(
        types(&tokens),
        vec![
            Literal::Identifier.into(),
            Symbol::Dot.into(),
            Literal::Int.into(),
            Assist::End.into()
        ]
    );
}

#[test]
fn test_negative_number_after_identifier() {
    let tokens = tokenize(DatabaseType::MySQL, "a-2");
    assert_eq!(tokens[1].token_type, Literal::Int.into());
    assert_eq!(tokens[1].literals, "-2");
}

#[test]
fn test_hex_numbers() {
    let tokens = tokenize(DatabaseType::MySQL, "0x1F 0x-a");
    assert_eq!(tokens[0].token_type, Literal::Hex.into());
    assert_eq!(tokens[0].literals, "0x1F");
    assert_eq!(tokens[1].literals, "0x-a");
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize(
        DatabaseType::MySQL,
        "SELECT -- first\n* /* second */ FROM # third\n t // fourth",
    );
    assert_eq!(
        types(&tokens),
        vec![
            Keyword::Select.into(),
            Symbol::Star.into(),
            Keyword::From.into(),
            Literal::Identifier.into(),
            Assist::End.into()
        ]
    );
}

#[test]
fn test_pound_is_symbol_outside_mysql() {
    let tokens = tokenize(DatabaseType::PostgreSQL, "a # b");
    assert_eq!(tokens[1].token_type, Symbol::Pound.into());
}

#[test]
fn test_mysql_hint_is_skipped() {
    let tokens = tokenize(DatabaseType::MySQL, "/*! SQL_NO_CACHE */ SELECT 1");
    assert_eq!(tokens[0].token_type, Keyword::Select.into());
    assert_eq!(tokens[0].begin_position, 20);
}

#[test]
fn test_unterminated_hint_fails() {
    let mut lexer = Lexer::new("SELECT /*+ INDEX(t) 1", Dialect::of(DatabaseType::Oracle));
    lexer.next_token().unwrap();
    let error = lexer.next_token().unwrap_err();
    assert!(error.is_lexical());
    assert_eq!(error.offset(), Some(7));
}

#[test]
fn test_unterminated_string_fails() {
    let mut lexer = Lexer::new("'abc", Dialect::of(DatabaseType::MySQL));
    let error = lexer.next_token().unwrap_err();
    assert!(error.is_lexical());
    assert_eq!(error.offset(), Some(0));
}

#[test]
fn test_variables() {
    let tokens = tokenize(DatabaseType::MySQL, "SET @@session.autocommit = @v");
    assert_eq!(tokens[1].token_type, Literal::Variable.into());
    assert_eq!(tokens[1].literals, "@@session.autocommit");
    assert_eq!(tokens[3].literals, "@v");

    let mut lexer = Lexer::new("SELECT @x", Dialect::of(DatabaseType::PostgreSQL));
    lexer.next_token().unwrap();
    let error = lexer.next_token().unwrap_err();
    assert!(error.is_lexical());
    assert_eq!(error.offset(), Some(7));
}

#[test]
fn test_sqlserver_quoting() {
    let tokens = tokenize(DatabaseType::SQLServer, "N'abc' [dbo]");
    assert_eq!(tokens[0].token_type, Literal::Chars.into());
    assert_eq!(tokens[0].literals, "abc");
    assert_eq!((tokens[0].begin_position, tokens[0].end_position), (0, 6));
    assert_eq!(tokens[1].token_type, Literal::Identifier.into());
    assert_eq!(tokens[1].literals, "[dbo]");
}

#[test]
fn test_double_quote_depends_on_dialect() {
    let oracle = tokenize(DatabaseType::Oracle, "\"Name\"");
    assert_eq!(oracle[0].token_type, Literal::Identifier.into());
    assert_eq!(oracle[0].literals, "\"Name\"");

    let mysql = tokenize(DatabaseType::MySQL, "\"Name\"");
    assert_eq!(mysql[0].token_type, Literal::Chars.into());
    assert_eq!(mysql[0].literals, "Name");
}

#[test]
fn test_dialect_keywords() {
    let mysql = tokenize(DatabaseType::MySQL, "LIMIT");
    assert_eq!(mysql[0].token_type, Keyword::Limit.into());
    let oracle = tokenize(DatabaseType::Oracle, "LIMIT");
    assert_eq!(oracle[0].token_type, Literal::Identifier.into());
}

#[test]
fn test_peek_does_not_advance() {
    let mut lexer = Lexer::new("SELECT id", Dialect::of(DatabaseType::H2));
    lexer.next_token().unwrap();
    let peeked = lexer.peek_token().unwrap();
    assert_eq!(peeked.literals, "id");
    assert_eq!(lexer.current_token().token_type, Keyword::Select.into());
    lexer.next_token().unwrap();
    assert_eq!(lexer.current_token(), &peeked);
    assert_eq!(lexer.previous_end_position(), 6);
}
