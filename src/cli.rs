//! CLI интерфейс для shardsql
//!
//! Разбирает SQL выбранного диалекта и показывает результат: выражение в
//! JSON, поток токенов, список диалектов или действующую конфигурацию.

use crate::common::constants::DEFAULT_CONFIG_FILE;
use crate::common::{Error, Result, ShardSqlConfig};
use crate::dialect::DatabaseType;
use crate::lexer::LexerEngine;
use crate::parser::{ParsingResultCache, SqlParsingEngine};
use crate::rule::{StaticShardingRule, StaticTableMetaData};
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;

/// shardsql - разбор SQL для промежуточного слоя шардирования
#[derive(Parser, Debug)]
#[command(name = "shardsql")]
#[command(about = "SQL parsing front end for database sharding middleware")]
#[command(version)]
pub struct Cli {
    /// Диалект SQL (mysql, oracle, postgresql, sqlserver, h2)
    #[arg(short, long, value_name = "DIALECT", global = true)]
    pub dialect: Option<String>,

    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Разобрать SQL и вывести результат в JSON
    Parse {
        /// SQL выражение
        sql: String,
    },

    /// Вывести токены SQL
    Tokens {
        /// SQL выражение
        sql: String,
    },

    /// Показать поддерживаемые диалекты
    Dialects,

    /// Показать действующую конфигурацию
    Config,
}

impl Cli {
    /// Загружает конфигурацию.
    ///
    /// Явно указанный файл обязан существовать, файл по умолчанию читается
    /// только при наличии. Поверх накладываются переменные окружения и
    /// аргументы командной строки.
    pub fn load_config(&self) -> Result<ShardSqlConfig> {
        let mut config = match &self.config {
            Some(path) => ShardSqlConfig::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    ShardSqlConfig::from_file(&default_path)?
                } else {
                    ShardSqlConfig::default()
                }
            }
        };
        config = config.merge(ShardSqlConfig::from_env()?);

        if let Some(dialect) = &self.dialect {
            config.dialect = dialect.parse()?;
        }
        if let Some(log_level) = &self.log_level {
            config.logging.level = log_level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду и возвращает текст для вывода
    pub fn execute(&self, config: &ShardSqlConfig) -> Result<String> {
        match &self.command {
            Commands::Parse { sql } => parse_sql(config, sql),
            Commands::Tokens { sql } => tokenize(config.dialect, sql),
            Commands::Dialects => Ok(list_dialects()),
            Commands::Config => config.to_toml(),
        }
    }
}

fn parse_sql(config: &ShardSqlConfig, sql: &str) -> Result<String> {
    let rule = StaticShardingRule::new(&config.sharding);
    let metadata = StaticTableMetaData::new(&config.sharding);
    let cache = ParsingResultCache::new(config.parser.cache_capacity);
    let statement = SqlParsingEngine::new(config.dialect, sql, &rule, &metadata)
        .with_cache(&cache)
        .parse(config.parser.enable_caching)?;
    Ok(serde_json::to_string_pretty(&statement)?)
}

/// Одна строка на токен, включая завершающий
fn tokenize(database_type: DatabaseType, sql: &str) -> Result<String> {
    let mut engine = LexerEngine::for_dialect(database_type, sql);
    let mut output = String::new();
    loop {
        engine.advance()?;
        writeln!(output, "{}", engine.current_token())
            .map_err(|e| Error::internal(e.to_string()))?;
        if engine.is_end() {
            return Ok(output);
        }
    }
}

fn list_dialects() -> String {
    DatabaseType::all()
        .iter()
        .map(|database_type| format!("{}\n", database_type))
        .collect()
}
