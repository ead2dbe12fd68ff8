use crate::common::config::{ShardingRuleConfig, TableRuleConfig};
use crate::parser::ast::Column;
use crate::rule::{ShardingRule, ShardingTableMetaData, StaticShardingRule, StaticTableMetaData};

fn config() -> ShardingRuleConfig {
    ShardingRuleConfig::new()
        .table(
            TableRuleConfig::new("t_order")
                .sharding_column("user_id")
                .generate_key_column("order_id")
                .columns(&["order_id", "user_id", "status"]),
        )
        .table(TableRuleConfig::new("t_order_item").sharding_column("order_id"))
}

#[test]
fn test_sharding_rule_is_case_insensitive() {
    let rule = StaticShardingRule::new(&config());
    assert!(rule.contains_table("T_ORDER"));
    assert!(!rule.contains_table("t_user"));
    assert!(!rule.has_default_data_source());
    assert_eq!(rule.generate_key_column("t_order"), Some("order_id".to_string()));
    assert_eq!(rule.generate_key_column("t_order_item"), None);
    assert!(rule.is_sharding_column(&Column::new("USER_ID", "t_order")));
    assert!(!rule.is_sharding_column(&Column::new("status", "t_order")));
    assert!(!rule.is_sharding_column(&Column::new("user_id", "t_user")));
    assert_eq!(
        rule.logic_tables().collect::<Vec<_>>(),
        vec!["t_order", "t_order_item"]
    );
}

#[test]
fn test_default_data_source() {
    let rule = StaticShardingRule::new(&config().default_data_source("ds_0"));
    assert!(rule.has_default_data_source());
}

#[test]
fn test_metadata_keeps_column_order() {
    let metadata = StaticTableMetaData::new(&config());
    assert!(metadata.contains_table("t_order"));
    assert!(!metadata.contains_table("t_order_item"));
    assert_eq!(
        metadata.column_names("T_Order"),
        vec!["order_id", "user_id", "status"]
    );
    assert!(metadata.contains_column("t_order", "STATUS"));
    assert!(metadata.column_names("t_user").is_empty());

    let metadata = metadata.with_table("t_user", &["id", "name"]);
    assert!(metadata.contains_column("t_user", "name"));
}
