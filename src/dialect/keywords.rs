//! Ключевые слова, распознаваемые только отдельными диалектами

use crate::lexer::keyword::Keyword;

pub const MYSQL_KEYWORDS: &[Keyword] = &[
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Value,
    Keyword::Show,
    Keyword::Describe,
    Keyword::Databases,
    Keyword::Tables,
    Keyword::Columns,
    Keyword::Fields,
    Keyword::Indexes,
    Keyword::Keys,
    Keyword::Duplicate,
    Keyword::LowPriority,
    Keyword::Delayed,
    Keyword::HighPriority,
    Keyword::Ignore,
    Keyword::Quick,
    Keyword::Partition,
    Keyword::Force,
    Keyword::Rollup,
    Keyword::Regexp,
    Keyword::StraightJoin,
    Keyword::SqlSmallResult,
    Keyword::SqlBigResult,
    Keyword::SqlBufferResult,
    Keyword::SqlCache,
    Keyword::SqlNoCache,
    Keyword::SqlCalcFoundRows,
];

pub const ORACLE_KEYWORDS: &[Keyword] = &[
    Keyword::Siblings,
    Keyword::Minus,
    Keyword::ConnectByRoot,
    Keyword::Rownum,
    Keyword::First,
    Keyword::Last,
];

pub const POSTGRESQL_KEYWORDS: &[Keyword] = &[
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Only,
    Keyword::First,
    Keyword::Last,
    Keyword::Returning,
];

pub const SQLSERVER_KEYWORDS: &[Keyword] = &[
    Keyword::Top,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Percent,
    Keyword::Ties,
];

pub const H2_KEYWORDS: &[Keyword] = &[Keyword::Limit, Keyword::Offset];
