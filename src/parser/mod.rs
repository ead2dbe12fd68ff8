//! Парсер SQL для shardsql
//!
//! Разбор выполняется за один проход без построения полного дерева:
//! извлекаются таблицы, условия шардинга, элементы запроса и инструкции
//! переписывания исходного текста.

pub mod ast;
pub mod cache;
pub mod clause;
pub mod engine;
pub mod factory;
pub mod statement;

#[cfg(test)]
pub mod tests;

pub use cache::{CacheStatistics, ParsingResultCache};
pub use engine::SqlParsingEngine;
pub use factory::SqlParserFactory;
pub use statement::SqlParser;
