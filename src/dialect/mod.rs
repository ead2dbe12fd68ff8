//! Диалекты SQL для shardsql
//!
//! Вместо иерархии лексеров и парсеров каждый диалект описывается одной
//! неизменяемой записью возможностей [`Dialect`]: правилами лексера,
//! словарем ключевых слов и правилами разбора. Записи строятся лениво,
//! один раз на процесс, и разделяются между всеми разборами.

pub mod keywords;

use crate::common::{Error, Result};
use crate::lexer::dictionary::Dictionary;
use crate::lexer::keyword::Keyword;
use serde::{Deserialize, Serialize};

/// Поддерживаемые СУБД
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    MySQL,
    Oracle,
    PostgreSQL,
    SQLServer,
    H2,
}

impl DatabaseType {
    /// Все поддерживаемые диалекты
    pub fn all() -> &'static [DatabaseType] {
        &[
            DatabaseType::MySQL,
            DatabaseType::Oracle,
            DatabaseType::PostgreSQL,
            DatabaseType::SQLServer,
            DatabaseType::H2,
        ]
    }

    /// Запись возможностей диалекта
    pub fn dialect(self) -> &'static Dialect {
        Dialect::of(self)
    }
}

impl Default for DatabaseType {
    fn default() -> Self {
        DatabaseType::MySQL
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseType::MySQL => write!(f, "mysql"),
            DatabaseType::Oracle => write!(f, "oracle"),
            DatabaseType::PostgreSQL => write!(f, "postgresql"),
            DatabaseType::SQLServer => write!(f, "sqlserver"),
            DatabaseType::H2 => write!(f, "h2"),
        }
    }
}

impl std::str::FromStr for DatabaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::MySQL),
            "oracle" => Ok(DatabaseType::Oracle),
            "postgresql" | "postgres" | "pg" => Ok(DatabaseType::PostgreSQL),
            "sqlserver" | "mssql" => Ok(DatabaseType::SQLServer),
            "h2" => Ok(DatabaseType::H2),
            _ => Err(Error::configuration(format!("Unsupported dialect: {}", s))),
        }
    }
}

/// Лексические особенности диалекта
#[derive(Debug, Clone)]
pub struct LexerRules {
    /// Открывающая последовательность хинта (`/*!` или `/*+`)
    pub hint_begin: Option<&'static str>,
    /// Комментарии, начинающиеся с `#`
    pub pound_comment: bool,
    /// Переменные `@name` и `@@name`
    pub variables: bool,
    /// Строки вида `N'...'`
    pub n_chars: bool,
    /// Символы, открывающие идентификатор в кавычках, помимо `` ` ``
    pub identifier_quotes: &'static [char],
}

/// Способ ограничения числа строк
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// Диалект не разбирает ограничение
    None,
    /// `LIMIT n OFFSET m`; при `comma` также `LIMIT m, n`
    Limit { comma: bool },
    /// `TOP n` сразу после SELECT
    Top,
}

/// Особенности разбора диалекта
#[derive(Debug, Clone)]
pub struct ParserRules {
    pub distinct_synonyms: &'static [Keyword],
    pub select_options: &'static [Keyword],
    pub skipped_before_select_item: &'static [Keyword],
    pub join_keywords: &'static [Keyword],
    pub skipped_after_group_by: &'static [Keyword],
    pub null_order_direction_desc: bool,
    pub limit_style: LimitStyle,
    pub insert_unsupported_before_into: &'static [Keyword],
    pub insert_skipped_between_table_and_values: &'static [Keyword],
    pub insert_values_keywords: &'static [Keyword],
    pub insert_set: bool,
    pub insert_on_duplicate_key: bool,
    pub index_hints: bool,
    pub update_skipped_modifiers: &'static [Keyword],
    pub delete_skipped_modifiers: &'static [Keyword],
    pub set_operations: &'static [Keyword],
    pub order_by_siblings: bool,
}

/// Запись возможностей диалекта
#[derive(Debug)]
pub struct Dialect {
    pub database_type: DatabaseType,
    pub lexer: LexerRules,
    pub keywords: &'static [Keyword],
    pub dictionary: Dictionary,
    pub parser: ParserRules,
}

impl Dialect {
    /// Возвращает запись диалекта, построенную один раз на процесс
    pub fn of(database_type: DatabaseType) -> &'static Dialect {
        match database_type {
            DatabaseType::MySQL => &MYSQL,
            DatabaseType::Oracle => &ORACLE,
            DatabaseType::PostgreSQL => &POSTGRESQL,
            DatabaseType::SQLServer => &SQLSERVER,
            DatabaseType::H2 => &H2,
        }
    }

    fn new(
        database_type: DatabaseType,
        lexer: LexerRules,
        keywords: &'static [Keyword],
        parser: ParserRules,
    ) -> Self {
        log::debug!(
            "Building {} dialect with {} extra keywords",
            database_type,
            keywords.len()
        );
        Self {
            database_type,
            lexer,
            keywords,
            dictionary: Dictionary::new(keywords),
            parser,
        }
    }

    /// Направление сортировки NULL по умолчанию
    pub fn null_order_direction(&self) -> crate::parser::ast::OrderDirection {
        if self.parser.null_order_direction_desc {
            crate::parser::ast::OrderDirection::Desc
        } else {
            crate::parser::ast::OrderDirection::Asc
        }
    }
}

const STANDARD_SET_OPERATIONS: &[Keyword] = &[Keyword::Union, Keyword::Intersect, Keyword::Except];

const BASE_PARSER_RULES: ParserRules = ParserRules {
    distinct_synonyms: &[],
    select_options: &[],
    skipped_before_select_item: &[],
    join_keywords: &[],
    skipped_after_group_by: &[],
    null_order_direction_desc: false,
    limit_style: LimitStyle::None,
    insert_unsupported_before_into: &[],
    insert_skipped_between_table_and_values: &[],
    insert_values_keywords: &[],
    insert_set: false,
    insert_on_duplicate_key: false,
    index_hints: false,
    update_skipped_modifiers: &[],
    delete_skipped_modifiers: &[],
    set_operations: STANDARD_SET_OPERATIONS,
    order_by_siblings: false,
};

const BASE_LEXER_RULES: LexerRules = LexerRules {
    hint_begin: None,
    pound_comment: false,
    variables: false,
    n_chars: false,
    identifier_quotes: &[],
};

lazy_static::lazy_static! {
    static ref MYSQL: Dialect = Dialect::new(
        DatabaseType::MySQL,
        LexerRules {
            hint_begin: Some("/*!"),
            pound_comment: true,
            variables: true,
            ..BASE_LEXER_RULES
        },
        keywords::MYSQL_KEYWORDS,
        ParserRules {
            select_options: &[
                Keyword::HighPriority,
                Keyword::StraightJoin,
                Keyword::SqlSmallResult,
                Keyword::SqlBigResult,
                Keyword::SqlBufferResult,
                Keyword::SqlCache,
                Keyword::SqlNoCache,
                Keyword::SqlCalcFoundRows,
            ],
            join_keywords: &[Keyword::StraightJoin],
            skipped_after_group_by: &[Keyword::With, Keyword::Rollup],
            limit_style: LimitStyle::Limit { comma: true },
            insert_unsupported_before_into: &[
                Keyword::LowPriority,
                Keyword::Delayed,
                Keyword::HighPriority,
                Keyword::Ignore,
            ],
            insert_skipped_between_table_and_values: &[Keyword::Partition],
            insert_values_keywords: &[Keyword::Value],
            insert_set: true,
            insert_on_duplicate_key: true,
            index_hints: true,
            update_skipped_modifiers: &[Keyword::LowPriority, Keyword::Ignore],
            delete_skipped_modifiers: &[
                Keyword::LowPriority,
                Keyword::Quick,
                Keyword::Ignore,
                Keyword::From,
            ],
            ..BASE_PARSER_RULES
        },
    );

    static ref ORACLE: Dialect = Dialect::new(
        DatabaseType::Oracle,
        LexerRules {
            hint_begin: Some("/*+"),
            identifier_quotes: &['"'],
            ..BASE_LEXER_RULES
        },
        keywords::ORACLE_KEYWORDS,
        ParserRules {
            distinct_synonyms: &[Keyword::Unique],
            skipped_before_select_item: &[Keyword::ConnectByRoot],
            null_order_direction_desc: true,
            insert_unsupported_before_into: &[Keyword::All, Keyword::First],
            delete_skipped_modifiers: &[Keyword::From],
            set_operations: &[Keyword::Union, Keyword::Intersect, Keyword::Except, Keyword::Minus],
            order_by_siblings: true,
            ..BASE_PARSER_RULES
        },
    );

    static ref POSTGRESQL: Dialect = Dialect::new(
        DatabaseType::PostgreSQL,
        LexerRules {
            identifier_quotes: &['"'],
            ..BASE_LEXER_RULES
        },
        keywords::POSTGRESQL_KEYWORDS,
        ParserRules {
            null_order_direction_desc: true,
            limit_style: LimitStyle::Limit { comma: false },
            delete_skipped_modifiers: &[Keyword::From],
            ..BASE_PARSER_RULES
        },
    );

    static ref SQLSERVER: Dialect = Dialect::new(
        DatabaseType::SQLServer,
        LexerRules {
            variables: true,
            n_chars: true,
            identifier_quotes: &['['],
            ..BASE_LEXER_RULES
        },
        keywords::SQLSERVER_KEYWORDS,
        ParserRules {
            limit_style: LimitStyle::Top,
            delete_skipped_modifiers: &[Keyword::From],
            ..BASE_PARSER_RULES
        },
    );

    static ref H2: Dialect = Dialect::new(
        DatabaseType::H2,
        BASE_LEXER_RULES,
        keywords::H2_KEYWORDS,
        ParserRules {
            limit_style: LimitStyle::Limit { comma: true },
            delete_skipped_modifiers: &[Keyword::From],
            ..BASE_PARSER_RULES
        },
    );
}
