//! Конфигурация для shardsql
//!
//! Описывает диалект по умолчанию, настройки парсера, логирование и
//! правила шардирования логических таблиц.

use crate::common::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_LOG_LEVEL};
use crate::common::error::{Error, Result};
use crate::dialect::DatabaseType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Основная конфигурация shardsql
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardSqlConfig {
    /// Диалект SQL по умолчанию
    pub dialect: DatabaseType,
    /// Настройки парсера
    pub parser: ParserSettings,
    /// Настройки логирования
    pub logging: LoggingConfig,
    /// Правила шардирования
    pub sharding: ShardingRuleConfig,
}

impl Default for ShardSqlConfig {
    fn default() -> Self {
        Self {
            dialect: DatabaseType::MySQL,
            parser: ParserSettings::default(),
            logging: LoggingConfig::default(),
            sharding: ShardingRuleConfig::default(),
        }
    }
}

/// Настройки парсера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Включить кэширование результатов разбора
    pub enable_caching: bool,
    /// Максимальное количество закэшированных операторов
    pub cache_capacity: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            enable_caching: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования (фильтр env_logger)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Правила шардирования
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardingRuleConfig {
    /// Источник данных по умолчанию для нешардированных таблиц
    pub default_data_source: Option<String>,
    /// Логические таблицы
    pub tables: Vec<TableRuleConfig>,
}

impl ShardingRuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет правило логической таблицы
    pub fn table(mut self, table: TableRuleConfig) -> Self {
        self.tables.push(table);
        self
    }

    /// Задает источник данных по умолчанию
    pub fn default_data_source(mut self, name: impl Into<String>) -> Self {
        self.default_data_source = Some(name.into());
        self
    }
}

/// Правило одной логической таблицы
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRuleConfig {
    /// Имя логической таблицы
    pub logic_table: String,
    /// Колонки шардирования
    pub sharding_columns: Vec<String>,
    /// Колонка автоматически генерируемого ключа
    pub generate_key_column: Option<String>,
    /// Колонки таблицы в порядке объявления
    pub columns: Vec<String>,
}

impl TableRuleConfig {
    pub fn new(logic_table: impl Into<String>) -> Self {
        Self {
            logic_table: logic_table.into(),
            ..Self::default()
        }
    }

    pub fn sharding_column(mut self, column: impl Into<String>) -> Self {
        self.sharding_columns.push(column.into());
        self
    }

    pub fn generate_key_column(mut self, column: impl Into<String>) -> Self {
        self.generate_key_column = Some(column.into());
        self
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }
}

impl ShardSqlConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "cannot parse {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Сериализует конфигурацию в TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = ShardSqlConfig::default();

        if let Ok(dialect) = std::env::var("SHARDSQL_DIALECT") {
            config.dialect = dialect.parse()?;
        }

        if let Ok(level) = std::env::var("SHARDSQL_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(enable) = std::env::var("SHARDSQL_ENABLE_CACHING") {
            config.parser.enable_caching = enable.parse().map_err(|_| {
                Error::configuration(format!("SHARDSQL_ENABLE_CACHING must be a boolean, got '{}'", enable))
            })?;
        }

        if let Ok(capacity) = std::env::var("SHARDSQL_CACHE_CAPACITY") {
            config.parser.cache_capacity = capacity.parse().map_err(|_| {
                Error::configuration(format!("SHARDSQL_CACHE_CAPACITY must be a number, got '{}'", capacity))
            })?;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой: побеждают значения, отличные от умолчаний
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = ShardSqlConfig::default();
        if other.dialect != defaults.dialect {
            self.dialect = other.dialect;
        }
        if other.parser.enable_caching != defaults.parser.enable_caching {
            self.parser.enable_caching = other.parser.enable_caching;
        }
        if other.parser.cache_capacity != defaults.parser.cache_capacity {
            self.parser.cache_capacity = other.parser.cache_capacity;
        }
        if other.logging.level != defaults.logging.level {
            self.logging.level = other.logging.level;
        }
        if other.sharding.default_data_source.is_some() {
            self.sharding.default_data_source = other.sharding.default_data_source;
        }
        if !other.sharding.tables.is_empty() {
            self.sharding.tables = other.sharding.tables;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::configuration("Log level cannot be empty"));
        }

        if self.parser.enable_caching && self.parser.cache_capacity == 0 {
            return Err(Error::configuration(
                "Cache capacity must be greater than 0 when caching is enabled",
            ));
        }

        let mut seen = HashSet::new();
        for table in &self.sharding.tables {
            if table.logic_table.trim().is_empty() {
                return Err(Error::configuration("Logic table name cannot be empty"));
            }
            if !seen.insert(table.logic_table.to_lowercase()) {
                return Err(Error::configuration(format!(
                    "Duplicate logic table '{}'",
                    table.logic_table
                )));
            }
            if let Some(key) = &table.generate_key_column {
                if !table.columns.is_empty()
                    && !table.columns.iter().any(|c| c.eq_ignore_ascii_case(key))
                {
                    return Err(Error::configuration(format!(
                        "Generate key column '{}' is not a column of '{}'",
                        key, table.logic_table
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_table() -> TableRuleConfig {
        TableRuleConfig::new("t_order")
            .sharding_column("user_id")
            .generate_key_column("order_id")
            .columns(&["order_id", "user_id", "status"])
    }

    #[test]
    fn test_default_config() {
        let config = ShardSqlConfig::default();
        assert_eq!(config.dialect, DatabaseType::MySQL);
        assert!(config.parser.enable_caching);
        assert_eq!(config.parser.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert_eq!(config.logging.level, "info");
        assert!(config.sharding.tables.is_empty());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ShardSqlConfig::default();
        assert!(config.validate().is_ok());

        config.logging.level = String::new();
        assert!(config.validate().is_err());

        config = ShardSqlConfig::default();
        config.parser.cache_capacity = 0;
        assert!(config.validate().is_err());
        config.parser.enable_caching = false;
        assert!(config.validate().is_ok());

        config = ShardSqlConfig::default();
        config.sharding = ShardingRuleConfig::new().table(order_table()).table(order_table());
        assert!(config.validate().is_err());

        config.sharding = ShardingRuleConfig::new()
            .table(TableRuleConfig::new("t_item").generate_key_column("item_id").columns(&["id"]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_merge() {
        let base = ShardSqlConfig::default();
        let mut other = ShardSqlConfig::default();
        other.dialect = DatabaseType::PostgreSQL;
        other.logging.level = "debug".to_string();
        other.sharding = ShardingRuleConfig::new().table(order_table());

        let merged = base.merge(other);
        assert_eq!(merged.dialect, DatabaseType::PostgreSQL);
        assert_eq!(merged.logging.level, "debug");
        assert_eq!(merged.sharding.tables.len(), 1);
        assert_eq!(merged.parser.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_toml_roundtrip_keeps_table_rules() {
        let mut config = ShardSqlConfig::default();
        config.dialect = DatabaseType::Oracle;
        config.sharding = ShardingRuleConfig::new().default_data_source("ds_0").table(order_table());

        let text = config.to_toml().unwrap();
        let parsed: ShardSqlConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = r#"
dialect = "postgresql"

[[sharding.tables]]
logic_table = "t_order"
sharding_columns = ["user_id"]
"#;
        let config: ShardSqlConfig = toml::from_str(text).unwrap();
        assert_eq!(config.dialect, DatabaseType::PostgreSQL);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.sharding.tables[0].logic_table, "t_order");
        assert!(config.sharding.tables[0].columns.is_empty());
    }
}
