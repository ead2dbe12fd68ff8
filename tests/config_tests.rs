//! Тесты загрузки и сохранения конфигурации

use shardsql::common::{ShardSqlConfig, ShardingRuleConfig, TableRuleConfig};
use shardsql::dialect::DatabaseType;
use shardsql::parser::ast::Column;
use shardsql::rule::{ShardingRule, ShardingTableMetaData, StaticShardingRule, StaticTableMetaData};
use std::fs;
use tempfile::TempDir;

fn sample_config() -> ShardSqlConfig {
    let mut config = ShardSqlConfig::default();
    config.dialect = DatabaseType::PostgreSQL;
    config.parser.cache_capacity = 128;
    config.logging.level = "debug".to_string();
    config.sharding = ShardingRuleConfig::new()
        .default_data_source("ds_0")
        .table(
            TableRuleConfig::new("t_order")
                .sharding_column("user_id")
                .generate_key_column("order_id")
                .columns(&["order_id", "user_id", "status"]),
        )
        .table(TableRuleConfig::new("t_order_item").sharding_column("order_id"));
    config
}

#[test]
fn test_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shardsql.toml");

    let config = sample_config();
    config.to_file(&path).unwrap();
    let loaded = ShardSqlConfig::from_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.toml");
    fs::write(
        &path,
        r#"
dialect = "oracle"

[[sharding.tables]]
logic_table = "t_order"
sharding_columns = ["user_id"]
"#,
    )
    .unwrap();

    let config = ShardSqlConfig::from_file(&path).unwrap();
    assert_eq!(config.dialect, DatabaseType::Oracle);
    assert_eq!(config.parser, ShardSqlConfig::default().parser);
    assert_eq!(config.sharding.tables.len(), 1);

    let rule = StaticShardingRule::new(&config.sharding);
    assert!(rule.contains_table("T_ORDER"));
    assert!(rule.is_sharding_column(&Column::new("user_id", "t_order")));
    assert!(!rule.has_default_data_source());
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "dialect = [").unwrap();

    let error = ShardSqlConfig::from_file(&path).unwrap_err();
    assert!(matches!(error, shardsql::Error::Configuration { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let error = ShardSqlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(error, shardsql::Error::Io(_)));
}

#[test]
fn test_metadata_built_from_loaded_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shardsql.toml");
    sample_config().to_file(&path).unwrap();

    let config = ShardSqlConfig::from_file(&path).unwrap();
    let metadata = StaticTableMetaData::new(&config.sharding);
    assert!(metadata.contains_table("t_order"));
    assert!(!metadata.contains_table("t_order_item"));
    assert_eq!(
        metadata.column_names("t_order"),
        vec!["order_id", "user_id", "status"]
    );
}
