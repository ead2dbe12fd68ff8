//! Движок разбора SQL

use crate::common::Result;
use crate::dialect::DatabaseType;
use crate::lexer::LexerEngine;
use crate::parser::ast::{SqlStatement, SqlToken};
use crate::parser::cache::ParsingResultCache;
use crate::parser::factory::SqlParserFactory;
use crate::rule::{ShardingRule, ShardingTableMetaData};

/// Разбирает одно SQL выражение заданного диалекта.
///
/// # Пример
///
/// ```
/// use shardsql::dialect::DatabaseType;
/// use shardsql::parser::SqlParsingEngine;
/// use shardsql::rule::{StaticShardingRule, StaticTableMetaData};
///
/// let rule = StaticShardingRule::default();
/// let metadata = StaticTableMetaData::default();
/// let statement = SqlParsingEngine::new(DatabaseType::MySQL, "SELECT 1", &rule, &metadata)
///     .parse(false)
///     .unwrap();
/// assert!(statement.as_select().is_some());
/// ```
pub struct SqlParsingEngine<'a> {
    database_type: DatabaseType,
    sql: &'a str,
    sharding_rule: &'a dyn ShardingRule,
    table_metadata: &'a dyn ShardingTableMetaData,
    cache: Option<&'a ParsingResultCache>,
}

impl<'a> SqlParsingEngine<'a> {
    pub fn new(
        database_type: DatabaseType,
        sql: &'a str,
        sharding_rule: &'a dyn ShardingRule,
        table_metadata: &'a dyn ShardingTableMetaData,
    ) -> Self {
        Self {
            database_type,
            sql,
            sharding_rule,
            table_metadata,
            cache: None,
        }
    }

    /// Подключает кэш результатов
    pub fn with_cache(mut self, cache: &'a ParsingResultCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Разбирает выражение; кэш используется, только если он подключен и
    /// `use_cache` истинно
    pub fn parse(&self, use_cache: bool) -> Result<SqlStatement> {
        let cache = self.cache.filter(|_| use_cache);
        if let Some(statement) = cache.and_then(|cache| cache.get(self.database_type, self.sql)) {
            log::debug!("Parsing cache hit for {} SQL", self.database_type);
            return Ok(statement);
        }
        log::debug!("Parsing {} SQL: {}", self.database_type, self.sql);
        let mut lexer_engine = LexerEngine::for_dialect(self.database_type, self.sql);
        lexer_engine.advance()?;
        let mut statement =
            SqlParserFactory::new_instance(&mut lexer_engine, self.sharding_rule, self.table_metadata)?
                .parse()?;
        statement
            .base_mut()
            .sql_tokens
            .sort_by_key(SqlToken::begin_position);
        log::debug!(
            "Parsed {:?} statement with {} tables and {} rewrite tokens",
            statement.sql_type(),
            statement.tables().len(),
            statement.sql_tokens().len()
        );
        if let Some(cache) = cache {
            cache.put(self.database_type, self.sql, statement.clone());
        }
        Ok(statement)
    }
}
