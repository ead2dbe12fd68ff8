use super::{parse, table_token_positions};
use crate::dialect::DatabaseType;
use crate::parser::ast::{
    DalKind, DclKind, DclPrincipal, DdlKind, ShardingOperator, SqlExpression, SqlStatement,
    SqlToken, SqlType, TclKind,
};

fn parse_ok(database_type: DatabaseType, sql: &str) -> SqlStatement {
    match parse(database_type, sql) {
        Ok(statement) => statement,
        Err(error) => panic!("{}: {}", sql, error),
    }
}

fn assert_unsupported(database_type: DatabaseType, sql: &str, offset: usize) {
    let error = parse(database_type, sql).unwrap_err();
    assert!(error.is_unsupported(), "{}: {}", sql, error);
    assert_eq!(error.offset(), Some(offset), "{}", sql);
}

#[test]
fn test_update() {
    let statement = parse_ok(
        DatabaseType::MySQL,
        "UPDATE t_order SET t_order.status = ?, order_id = order_id + 1 WHERE user_id = ?",
    );
    assert!(matches!(statement, SqlStatement::Update(_)));
    assert_eq!(statement.sql_type(), SqlType::Dml);
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![7, 19]);
    let conditions: Vec<_> = statement.conditions().iter().collect();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].values, vec![SqlExpression::Placeholder { index: 1 }]);
    assert_eq!(statement.parameters_index(), 2);
}

#[test]
fn test_update_with_modifiers_and_alias() {
    let statement = parse_ok(
        DatabaseType::MySQL,
        "UPDATE LOW_PRIORITY IGNORE t_order o SET o.status = 'x' WHERE o.user_id = 1",
    );
    assert_eq!(statement.tables().table_names(), vec!["t_order"]);
    assert_eq!(statement.conditions().iter().count(), 1);
}

#[test]
fn test_update_multiple_tables_is_unsupported() {
    assert_unsupported(
        DatabaseType::MySQL,
        "UPDATE t_order, t_order_item SET status = 1",
        7,
    );
}

#[test]
fn test_update_postgresql_cast() {
    let statement = parse_ok(
        DatabaseType::PostgreSQL,
        "UPDATE t_order SET status = 'x'::text WHERE user_id = 1",
    );
    assert_eq!(statement.conditions().iter().count(), 1);
}

#[test]
fn test_delete() {
    let statement = parse_ok(
        DatabaseType::MySQL,
        "DELETE FROM t_order WHERE user_id IN (?, ?)",
    );
    assert!(matches!(statement, SqlStatement::Delete(_)));
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![12]);
    let conditions: Vec<_> = statement.conditions().iter().collect();
    assert_eq!(conditions[0].operator, ShardingOperator::In);
    assert_eq!(conditions[0].values.len(), 2);

    let statement = parse_ok(DatabaseType::Oracle, "DELETE t_order WHERE user_id = 1");
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![7]);
}

#[test]
fn test_create_table() {
    let statement = parse_ok(
        DatabaseType::MySQL,
        "CREATE TABLE IF NOT EXISTS t_order (order_id BIGINT, user_id INT)",
    );
    let ddl = statement.as_ddl().unwrap();
    assert_eq!(ddl.kind, DdlKind::CreateTable);
    assert_eq!(statement.sql_type(), SqlType::Ddl);
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![27]);
}

#[test]
fn test_create_index() {
    let statement = parse_ok(
        DatabaseType::MySQL,
        "CREATE UNIQUE INDEX idx_user ON t_order (user_id)",
    );
    assert_eq!(statement.as_ddl().unwrap().kind, DdlKind::CreateIndex);
    assert_eq!(
        statement.sql_tokens(),
        &[
            SqlToken::Index {
                begin_position: 20,
                index_name: "idx_user".to_string(),
                table_name: Some("t_order".to_string()),
            },
            SqlToken::table(32, "t_order"),
        ]
    );
}

#[test]
fn test_drop_index_with_and_without_table() {
    let statement = parse_ok(DatabaseType::MySQL, "DROP INDEX idx_user ON t_order");
    assert_eq!(statement.as_ddl().unwrap().kind, DdlKind::DropIndex);
    assert_eq!(statement.tables().table_names(), vec!["t_order"]);

    let statement = parse_ok(DatabaseType::PostgreSQL, "DROP INDEX idx_user");
    assert_eq!(
        statement.sql_tokens(),
        &[SqlToken::Index {
            begin_position: 11,
            index_name: "idx_user".to_string(),
            table_name: None,
        }]
    );
}

#[test]
fn test_truncate_and_drop_tables() {
    let statement = parse_ok(DatabaseType::MySQL, "TRUNCATE TABLE t_order");
    assert_eq!(statement.as_ddl().unwrap().kind, DdlKind::TruncateTable);

    let statement = parse_ok(DatabaseType::MySQL, "DROP TABLE t_order, t_order_item");
    assert_eq!(statement.as_ddl().unwrap().kind, DdlKind::DropTable);
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![11, 20]);
}

#[test]
fn test_create_view_is_unsupported() {
    assert_unsupported(DatabaseType::MySQL, "CREATE VIEW v AS SELECT 1", 7);
}

#[test]
fn test_grant() {
    let statement = parse_ok(DatabaseType::MySQL, "GRANT SELECT ON t_order TO user1");
    let dcl = statement.as_dcl().unwrap();
    assert_eq!(dcl.kind, DclKind::Grant);
    assert_eq!(dcl.principal, None);
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![16]);

    let statement = parse_ok(DatabaseType::MySQL, "GRANT SELECT ON db.t_order TO user1");
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![19]);

    let statement = parse_ok(DatabaseType::MySQL, "GRANT ALL ON *.* TO admin");
    assert!(statement.tables().is_empty());
}

#[test]
fn test_user_and_role_management() {
    let statement = parse_ok(DatabaseType::MySQL, "CREATE USER app IDENTIFIED BY 'x'");
    let dcl = statement.as_dcl().unwrap();
    assert_eq!(dcl.kind, DclKind::Create);
    assert_eq!(dcl.principal, Some(DclPrincipal::User));

    let statement = parse_ok(DatabaseType::SQLServer, "DROP LOGIN app");
    assert_eq!(statement.as_dcl().unwrap().principal, Some(DclPrincipal::Login));

    let statement = parse_ok(DatabaseType::SQLServer, "DENY SELECT ON t_order TO app");
    assert_eq!(statement.as_dcl().unwrap().kind, DclKind::Deny);
}

#[test]
fn test_tcl() {
    for (sql, kind) in [
        ("COMMIT", TclKind::Commit),
        ("ROLLBACK", TclKind::Rollback),
        ("SET autocommit = 0", TclKind::Set),
        ("SAVEPOINT sp1", TclKind::Savepoint),
        ("BEGIN", TclKind::Begin),
    ] {
        let statement = parse_ok(DatabaseType::MySQL, sql);
        assert_eq!(statement.as_tcl().unwrap().kind, kind, "{}", sql);
        assert_eq!(statement.sql_type(), SqlType::Tcl);
    }
}

#[test]
fn test_dal() {
    let statement = parse_ok(DatabaseType::MySQL, "USE sharding_db");
    assert_eq!(
        statement.as_dal().unwrap().kind,
        DalKind::Use {
            schema: "sharding_db".to_string()
        }
    );

    let statement = parse_ok(DatabaseType::MySQL, "DESC t_order");
    assert_eq!(statement.as_dal().unwrap().kind, DalKind::Describe);
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![5]);

    let statement = parse_ok(DatabaseType::MySQL, "SHOW TABLES FROM `db`");
    assert_eq!(
        statement.as_dal().unwrap().kind,
        DalKind::ShowTables {
            schema: Some("db".to_string())
        }
    );

    let statement = parse_ok(DatabaseType::MySQL, "SHOW CREATE TABLE t_order");
    assert_eq!(statement.as_dal().unwrap().kind, DalKind::ShowCreateTable);
    assert_eq!(table_token_positions(statement.sql_tokens()), vec![18]);

    let statement = parse_ok(DatabaseType::MySQL, "SHOW FULL COLUMNS FROM t_order");
    assert_eq!(statement.as_dal().unwrap().kind, DalKind::ShowColumns);

    let statement = parse_ok(DatabaseType::MySQL, "SHOW INDEX FROM t_order");
    assert_eq!(statement.as_dal().unwrap().kind, DalKind::ShowIndex);

    let statement = parse_ok(DatabaseType::MySQL, "SHOW STATUS");
    assert_eq!(statement.as_dal().unwrap().kind, DalKind::ShowOther);
}

#[test]
fn test_unknown_statements_are_unsupported() {
    assert_unsupported(DatabaseType::PostgreSQL, "SHOW search_path", 0);
    assert_unsupported(DatabaseType::MySQL, "EXPLAIN SELECT 1", 0);
    assert_unsupported(DatabaseType::MySQL, "CALL proc()", 0);
}
