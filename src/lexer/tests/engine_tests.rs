//! Тесты для курсора LexerEngine

use crate::dialect::DatabaseType;
use crate::lexer::{keyword_types, Keyword, LexerEngine, Literal, Symbol, TokenType};

fn engine(sql: &str) -> LexerEngine {
    let mut engine = LexerEngine::for_dialect(DatabaseType::MySQL, sql);
    engine.advance().unwrap();
    engine
}

#[test]
fn test_skip_parentheses_returns_inner_text() {
    let mut engine = engine("(a, (b), c) REST");
    let mut parameters_index = 0;
    let text = engine.skip_parentheses(&mut parameters_index).unwrap();
    assert_eq!(text, "a, (b), c");
    assert_eq!(engine.current_literals(), "REST");
    assert_eq!(parameters_index, 0);
}

#[test]
fn test_skip_parentheses_counts_placeholders() {
    let mut engine = engine("(?, f(?, ?)) x");
    let mut parameters_index = 3;
    engine.skip_parentheses(&mut parameters_index).unwrap();
    assert_eq!(parameters_index, 6);
    assert_eq!(engine.current_literals(), "x");
}

#[test]
fn test_skip_parentheses_without_paren() {
    let mut engine = engine("x (y)");
    let mut parameters_index = 0;
    assert_eq!(engine.skip_parentheses(&mut parameters_index).unwrap(), "");
    assert_eq!(engine.current_literals(), "x");
}

#[test]
fn test_skip_parentheses_stops_at_end() {
    let mut engine = engine("(a, (b");
    let mut parameters_index = 0;
    let text = engine.skip_parentheses(&mut parameters_index).unwrap();
    assert_eq!(text, "a, (b");
    assert!(engine.is_end());
}

#[test]
fn test_expect() {
    let mut engine = engine("SELECT x");
    engine.expect(Keyword::Select).unwrap();
    assert!(engine.matches(Literal::Identifier));

    let error = engine.expect(Keyword::From).unwrap_err();
    assert!(error.is_syntax());
    assert_eq!(error.offset(), Some(7));
    assert!(error.to_string().contains("expected FROM"));
}

#[test]
fn test_skip_helpers() {
    let mut engine = engine("ALL DISTINCT x FROM t");
    assert!(!engine.skip_if(&[Keyword::Select.into()]).unwrap());
    engine
        .skip_all(&keyword_types(&[Keyword::All, Keyword::Distinct]))
        .unwrap();
    assert_eq!(engine.current_literals(), "x");

    engine.skip_until(&[Keyword::From.into()]).unwrap();
    assert!(engine.matches(Keyword::From));
    engine.skip_until(&[Keyword::From.into()]).unwrap();
    assert!(engine.matches(Keyword::From));

    engine.skip_until(&[Keyword::Where.into()]).unwrap();
    assert!(engine.is_end());
}

#[test]
fn test_unsupported_checks() {
    let mut engine = engine("DISTINCT x");
    let error = engine.unsupported_if(&[Keyword::Distinct.into()]).unwrap_err();
    assert!(error.is_unsupported());
    assert_eq!(error.offset(), Some(0));

    engine.unsupported_if_not_skipped(&[Keyword::Distinct.into()]).unwrap();
    let error = engine
        .unsupported_if_not_skipped(&[Symbol::Comma.into()])
        .unwrap_err();
    assert!(error.is_unsupported());
    assert_eq!(error.offset(), Some(9));
}

#[test]
fn test_peek_and_positions() {
    let mut engine = engine("SELECT  id");
    assert_eq!(engine.peek().unwrap().token_type, TokenType::from(Literal::Identifier));
    assert!(engine.matches(Keyword::Select));
    engine.advance().unwrap();
    assert_eq!(engine.previous_end_position(), 6);
    assert_eq!(engine.substring(0, 6), "SELECT");
    assert_eq!(engine.database_type(), DatabaseType::MySQL);
}
