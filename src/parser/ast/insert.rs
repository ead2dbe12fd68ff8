//! Значения INSERT

use crate::parser::ast::expression::SqlExpression;
use crate::parser::ast::table::Column;
use serde::{Deserialize, Serialize};

/// Форма вставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertValueKind {
    /// `VALUES (...)`
    Values,
    /// `SET col = value`
    Set,
}

/// Одна вставляемая строка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertValue {
    pub kind: InsertValueKind,
    /// Текст строки значений
    pub expression: String,
    /// Число параметров `?` в строке
    pub parameters_count: usize,
}

/// Значение генерируемого ключа, заданное в запросе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedKeyCondition {
    pub column: Column,
    pub value: SqlExpression,
}
