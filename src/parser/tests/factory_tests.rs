use super::{parse, rule_config};
use crate::dialect::DatabaseType;
use crate::lexer::LexerEngine;
use crate::parser::ast::SqlType;
use crate::parser::SqlParserFactory;
use crate::rule::{StaticShardingRule, StaticTableMetaData};

#[test]
fn test_dispatch_by_leading_keywords() {
    let cases = [
        ("SELECT * FROM t_order", SqlType::Dql),
        ("INSERT INTO t_order (user_id) VALUES (1)", SqlType::Dml),
        ("UPDATE t_order SET status = 1", SqlType::Dml),
        ("DELETE FROM t_order", SqlType::Dml),
        ("CREATE TABLE t_order (id INT)", SqlType::Ddl),
        ("CREATE TEMPORARY TABLE t_tmp (id INT)", SqlType::Ddl),
        ("ALTER TABLE t_order ADD COLUMN note VARCHAR(10)", SqlType::Ddl),
        ("GRANT SELECT ON t_order TO app", SqlType::Dcl),
        ("REVOKE SELECT ON t_order FROM app", SqlType::Dcl),
        ("RENAME USER app TO app2", SqlType::Dcl),
        ("COMMIT", SqlType::Tcl),
        ("SHOW DATABASES", SqlType::Dal),
    ];
    for (sql, sql_type) in cases {
        let statement = parse(DatabaseType::MySQL, sql).unwrap();
        assert_eq!(statement.sql_type(), sql_type, "{}", sql);
    }
}

#[test]
fn test_factory_reports_unsupported_second_keyword() {
    let config = rule_config();
    let rule = StaticShardingRule::new(&config);
    let metadata = StaticTableMetaData::new(&config);
    let mut engine = LexerEngine::for_dialect(DatabaseType::MySQL, "ALTER SESSION SET x = 1");
    engine.advance().unwrap();
    let error = SqlParserFactory::new_instance(&mut engine, &rule, &metadata)
        .err()
        .unwrap();
    assert!(error.is_unsupported());
    assert_eq!(error.offset(), Some(6));
}

#[test]
fn test_empty_input_is_unsupported() {
    let error = parse(DatabaseType::MySQL, "   ").unwrap_err();
    assert!(error.is_unsupported());
}
