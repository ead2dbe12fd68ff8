//! Правила шардирования

use crate::common::config::ShardingRuleConfig;
use crate::parser::ast::Column;
use indexmap::IndexMap;

/// Сведения о шардировании, которые нужны парсеру
pub trait ShardingRule: Send + Sync {
    /// Является ли таблица логической шардированной таблицей
    fn contains_table(&self, logic_table: &str) -> bool;

    /// Задан ли источник данных по умолчанию для нешардированных таблиц
    fn has_default_data_source(&self) -> bool;

    /// Колонка автоматически генерируемого ключа таблицы
    fn generate_key_column(&self, logic_table: &str) -> Option<String>;

    /// Является ли колонка колонкой шардирования
    fn is_sharding_column(&self, column: &Column) -> bool;
}

#[derive(Debug, Clone)]
struct TableRule {
    sharding_columns: Vec<String>,
    generate_key_column: Option<String>,
}

/// Правила шардирования, заданные конфигурацией
#[derive(Debug, Clone, Default)]
pub struct StaticShardingRule {
    /// Правила по имени таблицы в нижнем регистре
    tables: IndexMap<String, TableRule>,
    default_data_source: Option<String>,
}

impl StaticShardingRule {
    pub fn new(config: &ShardingRuleConfig) -> Self {
        let tables = config
            .tables
            .iter()
            .map(|table| {
                (
                    table.logic_table.to_lowercase(),
                    TableRule {
                        sharding_columns: table.sharding_columns.clone(),
                        generate_key_column: table.generate_key_column.clone(),
                    },
                )
            })
            .collect();
        Self {
            tables,
            default_data_source: config.default_data_source.clone(),
        }
    }

    /// Логические таблицы в порядке объявления
    pub fn logic_tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    fn table_rule(&self, logic_table: &str) -> Option<&TableRule> {
        self.tables.get(&logic_table.to_lowercase())
    }
}

impl ShardingRule for StaticShardingRule {
    fn contains_table(&self, logic_table: &str) -> bool {
        self.table_rule(logic_table).is_some()
    }

    fn has_default_data_source(&self) -> bool {
        self.default_data_source.is_some()
    }

    fn generate_key_column(&self, logic_table: &str) -> Option<String> {
        self.table_rule(logic_table)
            .and_then(|rule| rule.generate_key_column.clone())
    }

    fn is_sharding_column(&self, column: &Column) -> bool {
        self.table_rule(&column.table_name).is_some_and(|rule| {
            rule.sharding_columns
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&column.name))
        })
    }
}
