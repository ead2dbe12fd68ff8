use crate::common::utils::NumberValue;
use crate::dialect::DatabaseType;
use crate::lexer::LexerEngine;
use crate::parser::ast::{SqlExpression, SqlToken, SqlType, StatementBase, Table};
use crate::parser::clause::BasicExpressionParser;

fn parse_expression(sql: &str, base: &mut StatementBase) -> (SqlExpression, LexerEngine) {
    let mut engine = LexerEngine::for_dialect(DatabaseType::MySQL, sql);
    engine.advance().unwrap();
    let expression = BasicExpressionParser::new(&mut engine).parse(base).unwrap();
    (expression, engine)
}

fn base_with_order_table() -> StatementBase {
    let mut base = StatementBase::new(SqlType::Dql);
    base.tables.add(Table::new("t_order", None));
    base
}

#[test]
fn test_property_emits_table_token_for_known_owner() {
    let mut base = base_with_order_table();
    let (expression, engine) = parse_expression("t_order.user_id = 1", &mut base);
    assert_eq!(
        expression,
        SqlExpression::Property {
            owner: "t_order".to_string(),
            name: "user_id".to_string()
        }
    );
    assert_eq!(base.sql_tokens, vec![SqlToken::table(0, "t_order")]);
    assert_eq!(engine.current_literals(), "=");
}

#[test]
fn test_property_of_unknown_owner_has_no_token() {
    let mut base = base_with_order_table();
    let (expression, _) = parse_expression("o.user_id", &mut base);
    assert!(matches!(expression, SqlExpression::Property { .. }));
    assert!(base.sql_tokens.is_empty());
}

#[test]
fn test_primary_expressions() {
    let mut base = StatementBase::new(SqlType::Dql);
    assert_eq!(
        parse_expression("?", &mut base).0,
        SqlExpression::Placeholder { index: 0 }
    );
    assert_eq!(
        parse_expression("?", &mut base).0,
        SqlExpression::Placeholder { index: 1 }
    );
    assert_eq!(base.parameters_index, 2);

    assert_eq!(
        parse_expression("'abc'", &mut base).0,
        SqlExpression::Text {
            value: "abc".to_string()
        }
    );
    assert_eq!(
        parse_expression("0x1F", &mut base).0,
        SqlExpression::Number {
            value: NumberValue::Integer(31)
        }
    );
    assert_eq!(
        parse_expression("1.5", &mut base).0,
        SqlExpression::Number {
            value: NumberValue::Decimal(1.5)
        }
    );
    assert_eq!(
        parse_expression("`user_id`", &mut base).0,
        SqlExpression::Identifier {
            name: "user_id".to_string()
        }
    );
    assert_eq!(
        parse_expression("NULL", &mut base).0,
        SqlExpression::Ignore {
            expression: "NULL".to_string()
        }
    );
}

#[test]
fn test_function_call_is_ignored_verbatim() {
    let mut base = StatementBase::new(SqlType::Dql);
    let (expression, engine) = parse_expression("DATE(create_time, ?) + 1 AND x", &mut base);
    assert_eq!(
        expression,
        SqlExpression::Ignore {
            expression: "DATE(create_time, ?) + 1".to_string()
        }
    );
    assert_eq!(base.parameters_index, 1);
    assert_eq!(engine.current_literals(), "AND");
}

#[test]
fn test_composite_property_is_ignored() {
    let mut base = base_with_order_table();
    let (expression, _) = parse_expression("t_order.price * 2", &mut base);
    assert_eq!(
        expression,
        SqlExpression::Ignore {
            expression: "t_order.price * 2".to_string()
        }
    );
    assert!(base.sql_tokens.is_empty());
}

#[test]
fn test_negative_literal_continues_expression() {
    let mut base = StatementBase::new(SqlType::Dql);
    let (expression, engine) = parse_expression("a-2", &mut base);
    assert_eq!(
        expression,
        SqlExpression::Ignore {
            expression: "a-2".to_string()
        }
    );
    assert!(engine.is_end());
}

#[test]
fn test_negative_literal_consumes_single_token() {
    let mut base = StatementBase::new(SqlType::Dql);
    let (expression, engine) = parse_expression("a-2+1", &mut base);
    assert_eq!(
        expression,
        SqlExpression::Ignore {
            expression: "a-2".to_string()
        }
    );
    assert_eq!(engine.current_literals(), "+");
}

#[test]
fn test_parenthesized_group() {
    let mut base = StatementBase::new(SqlType::Dql);
    let (expression, engine) = parse_expression("(a + ?) * 3 = 1", &mut base);
    assert_eq!(
        expression,
        SqlExpression::Ignore {
            expression: "(a + ?) * 3".to_string()
        }
    );
    assert_eq!(base.parameters_index, 1);
    assert_eq!(engine.current_literals(), "=");
}

#[test]
fn test_column_name_and_sharding_value() {
    let identifier = SqlExpression::Identifier {
        name: "`id`".to_string(),
    };
    assert_eq!(identifier.column_name().as_deref(), Some("id"));
    assert!(!identifier.is_sharding_value());
    assert!(SqlExpression::Placeholder { index: 0 }.is_sharding_value());
    assert_eq!(SqlExpression::Placeholder { index: 0 }.column_name(), None);
}
