//! Метаданные таблиц

use crate::common::config::ShardingRuleConfig;
use indexmap::IndexMap;

/// Метаданные таблиц, доступные парсеру
pub trait ShardingTableMetaData: Send + Sync {
    /// Известна ли таблица
    fn contains_table(&self, table: &str) -> bool;

    /// Имена колонок таблицы в порядке объявления
    fn column_names(&self, table: &str) -> Vec<String>;

    fn contains_column(&self, table: &str, column: &str) -> bool {
        self.column_names(table)
            .iter()
            .any(|c| c.eq_ignore_ascii_case(column))
    }
}

/// Метаданные, заданные конфигурацией
#[derive(Debug, Clone, Default)]
pub struct StaticTableMetaData {
    tables: IndexMap<String, Vec<String>>,
}

impl StaticTableMetaData {
    /// Берет таблицы с непустым списком колонок
    pub fn new(config: &ShardingRuleConfig) -> Self {
        let tables = config
            .tables
            .iter()
            .filter(|table| !table.columns.is_empty())
            .map(|table| (table.logic_table.to_lowercase(), table.columns.clone()))
            .collect();
        Self { tables }
    }

    /// Добавляет таблицу с колонками
    pub fn with_table(mut self, table: &str, columns: &[&str]) -> Self {
        self.tables.insert(
            table.to_lowercase(),
            columns.iter().map(|c| c.to_string()).collect(),
        );
        self
    }
}

impl ShardingTableMetaData for StaticTableMetaData {
    fn contains_table(&self, table: &str) -> bool {
        self.tables.contains_key(&table.to_lowercase())
    }

    fn column_names(&self, table: &str) -> Vec<String> {
        self.tables
            .get(&table.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}
