//! shardsql - разбор SQL для промежуточного слоя шардирования
//!
//! Этот модуль предоставляет лексер с поддержкой диалектов MySQL, Oracle,
//! PostgreSQL, SQLServer и H2, парсеры выражений и движок разбора, который
//! извлекает из SQL таблицы, условия шардирования и токены для переписывания.

pub mod cli;
pub mod common;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod rule;

pub use common::error::{Error, Result};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
