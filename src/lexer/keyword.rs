//! Ключевые слова SQL
//!
//! Перечисление объединяет ключевые слова всех диалектов. Какие из них
//! распознаются при разборе, определяет словарь конкретного диалекта.

use serde::{Deserialize, Serialize};

macro_rules! define_keywords {
    ($($variant:ident => $literal:literal),* $(,)?) => {
        /// Ключевое слово SQL
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Keyword {
            $($variant),*
        }

        impl Keyword {
            /// Каноническое написание в верхнем регистре
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $literal),*
                }
            }
        }
    };
}

define_keywords! {
    // Объекты схемы
    Schema => "SCHEMA",
    Database => "DATABASE",
    Table => "TABLE",
    Column => "COLUMN",
    View => "VIEW",
    Index => "INDEX",
    Trigger => "TRIGGER",
    Procedure => "PROCEDURE",
    Tablespace => "TABLESPACE",
    Function => "FUNCTION",
    Sequence => "SEQUENCE",
    Cursor => "CURSOR",
    Generated => "GENERATED",
    Primary => "PRIMARY",
    Unique => "UNIQUE",
    Foreign => "FOREIGN",
    Key => "KEY",
    Check => "CHECK",
    References => "REFERENCES",
    Constraint => "CONSTRAINT",
    Temporary => "TEMPORARY",
    Cascade => "CASCADE",
    Restrict => "RESTRICT",
    Add => "ADD",
    Modify => "MODIFY",

    // DML
    Select => "SELECT",
    Delete => "DELETE",
    Insert => "INSERT",
    Update => "UPDATE",
    Values => "VALUES",
    Set => "SET",
    From => "FROM",
    Where => "WHERE",
    Into => "INTO",

    // DDL и DCL
    Create => "CREATE",
    Alter => "ALTER",
    Drop => "DROP",
    Truncate => "TRUNCATE",
    Rename => "RENAME",
    Grant => "GRANT",
    Revoke => "REVOKE",
    Deny => "DENY",
    User => "USER",
    Role => "ROLE",
    Login => "LOGIN",

    // Предикаты и операторы
    As => "AS",
    Distinct => "DISTINCT",
    All => "ALL",
    And => "AND",
    Or => "OR",
    Not => "NOT",
    Null => "NULL",
    Is => "IS",
    In => "IN",
    Between => "BETWEEN",
    Like => "LIKE",
    Exists => "EXISTS",
    Escape => "ESCAPE",
    Any => "ANY",
    Some => "SOME",

    // Соединения
    Join => "JOIN",
    Inner => "INNER",
    Outer => "OUTER",
    Left => "LEFT",
    Right => "RIGHT",
    Full => "FULL",
    Cross => "CROSS",
    Natural => "NATURAL",
    On => "ON",
    Using => "USING",

    // Группировка, сортировка и множества
    Order => "ORDER",
    Group => "GROUP",
    By => "BY",
    Asc => "ASC",
    Desc => "DESC",
    Having => "HAVING",
    Nulls => "NULLS",
    Union => "UNION",
    Intersect => "INTERSECT",
    Except => "EXCEPT",

    Case => "CASE",
    When => "WHEN",
    Then => "THEN",
    Else => "ELSE",
    End => "END",

    // Агрегатные функции
    Avg => "AVG",
    Max => "MAX",
    Min => "MIN",
    Sum => "SUM",
    Count => "COUNT",

    // TCL и DAL
    Commit => "COMMIT",
    Rollback => "ROLLBACK",
    Savepoint => "SAVEPOINT",
    Begin => "BEGIN",
    Transaction => "TRANSACTION",
    Use => "USE",

    True => "TRUE",
    False => "FALSE",
    Default => "DEFAULT",
    If => "IF",
    For => "FOR",
    With => "WITH",
    Cast => "CAST",
    Interval => "INTERVAL",

    // MySQL
    Limit => "LIMIT",
    Offset => "OFFSET",
    Value => "VALUE",
    Show => "SHOW",
    Describe => "DESCRIBE",
    Databases => "DATABASES",
    Tables => "TABLES",
    Columns => "COLUMNS",
    Fields => "FIELDS",
    Indexes => "INDEXES",
    Keys => "KEYS",
    Duplicate => "DUPLICATE",
    LowPriority => "LOW_PRIORITY",
    Delayed => "DELAYED",
    HighPriority => "HIGH_PRIORITY",
    Ignore => "IGNORE",
    Quick => "QUICK",
    Partition => "PARTITION",
    Force => "FORCE",
    Rollup => "ROLLUP",
    Regexp => "REGEXP",
    StraightJoin => "STRAIGHT_JOIN",
    SqlSmallResult => "SQL_SMALL_RESULT",
    SqlBigResult => "SQL_BIG_RESULT",
    SqlBufferResult => "SQL_BUFFER_RESULT",
    SqlCache => "SQL_CACHE",
    SqlNoCache => "SQL_NO_CACHE",
    SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",

    // Oracle
    Siblings => "SIBLINGS",
    Minus => "MINUS",
    ConnectByRoot => "CONNECT_BY_ROOT",
    Rownum => "ROWNUM",
    First => "FIRST",
    Last => "LAST",

    // PostgreSQL
    Only => "ONLY",
    Fetch => "FETCH",
    Returning => "RETURNING",

    // SQLServer
    Top => "TOP",
    Percent => "PERCENT",
    Ties => "TIES",
}

/// Ключевые слова, общие для всех диалектов
pub const DEFAULT_KEYWORDS: &[Keyword] = &[
    Keyword::Schema,
    Keyword::Database,
    Keyword::Table,
    Keyword::Column,
    Keyword::View,
    Keyword::Index,
    Keyword::Trigger,
    Keyword::Procedure,
    Keyword::Tablespace,
    Keyword::Function,
    Keyword::Sequence,
    Keyword::Cursor,
    Keyword::Generated,
    Keyword::Primary,
    Keyword::Unique,
    Keyword::Foreign,
    Keyword::Key,
    Keyword::Check,
    Keyword::References,
    Keyword::Constraint,
    Keyword::Temporary,
    Keyword::Cascade,
    Keyword::Restrict,
    Keyword::Add,
    Keyword::Modify,
    Keyword::Select,
    Keyword::Delete,
    Keyword::Insert,
    Keyword::Update,
    Keyword::Values,
    Keyword::Set,
    Keyword::From,
    Keyword::Where,
    Keyword::Into,
    Keyword::Create,
    Keyword::Alter,
    Keyword::Drop,
    Keyword::Truncate,
    Keyword::Rename,
    Keyword::Grant,
    Keyword::Revoke,
    Keyword::Deny,
    Keyword::User,
    Keyword::Role,
    Keyword::Login,
    Keyword::As,
    Keyword::Distinct,
    Keyword::All,
    Keyword::And,
    Keyword::Or,
    Keyword::Not,
    Keyword::Null,
    Keyword::Is,
    Keyword::In,
    Keyword::Between,
    Keyword::Like,
    Keyword::Exists,
    Keyword::Escape,
    Keyword::Any,
    Keyword::Some,
    Keyword::Join,
    Keyword::Inner,
    Keyword::Outer,
    Keyword::Left,
    Keyword::Right,
    Keyword::Full,
    Keyword::Cross,
    Keyword::Natural,
    Keyword::On,
    Keyword::Using,
    Keyword::Order,
    Keyword::Group,
    Keyword::By,
    Keyword::Asc,
    Keyword::Desc,
    Keyword::Having,
    Keyword::Nulls,
    Keyword::Union,
    Keyword::Intersect,
    Keyword::Except,
    Keyword::Case,
    Keyword::When,
    Keyword::Then,
    Keyword::Else,
    Keyword::End,
    Keyword::Avg,
    Keyword::Max,
    Keyword::Min,
    Keyword::Sum,
    Keyword::Count,
    Keyword::Commit,
    Keyword::Rollback,
    Keyword::Savepoint,
    Keyword::Begin,
    Keyword::Transaction,
    Keyword::Use,
    Keyword::True,
    Keyword::False,
    Keyword::Default,
    Keyword::If,
    Keyword::For,
    Keyword::With,
    Keyword::Cast,
    Keyword::Interval,
];

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
