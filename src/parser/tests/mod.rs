pub mod derived_column_tests;
pub mod dml_tests;
pub mod expression_tests;
pub mod factory_tests;

use crate::common::config::{ShardingRuleConfig, TableRuleConfig};
use crate::common::Result;
use crate::dialect::DatabaseType;
use crate::parser::ast::{InsertStatement, SelectStatement, SqlStatement, SqlToken};
use crate::parser::SqlParsingEngine;
use crate::rule::{StaticShardingRule, StaticTableMetaData};

/// `t_order` шардируется по `user_id` и генерирует `order_id`,
/// `t_order_item` шардируется по `order_id`
pub fn rule_config() -> ShardingRuleConfig {
    ShardingRuleConfig::new()
        .table(
            TableRuleConfig::new("t_order")
                .sharding_column("user_id")
                .generate_key_column("order_id")
                .columns(&["order_id", "user_id", "status"]),
        )
        .table(
            TableRuleConfig::new("t_order_item")
                .sharding_column("order_id")
                .columns(&["item_id", "order_id", "user_id"]),
        )
}

pub fn parse(database_type: DatabaseType, sql: &str) -> Result<SqlStatement> {
    let config = rule_config();
    let rule = StaticShardingRule::new(&config);
    let metadata = StaticTableMetaData::new(&config);
    SqlParsingEngine::new(database_type, sql, &rule, &metadata).parse(false)
}

pub fn parse_select(database_type: DatabaseType, sql: &str) -> SelectStatement {
    match parse(database_type, sql).unwrap() {
        SqlStatement::Select(statement) => statement,
        other => panic!("expected SELECT, got {:?}", other),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(DatabaseType::MySQL, sql).unwrap() {
        SqlStatement::Insert(statement) => statement,
        other => panic!("expected INSERT, got {:?}", other),
    }
}

/// Позиции табличных токенов
pub fn table_token_positions(tokens: &[SqlToken]) -> Vec<usize> {
    tokens
        .iter()
        .filter(|token| matches!(token, SqlToken::Table(_)))
        .map(SqlToken::begin_position)
        .collect()
}
