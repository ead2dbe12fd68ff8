//! Скалярные выражения SQL

use crate::common::utils::{exact_value, NumberValue};
use serde::{Deserialize, Serialize};

/// Выражение SQL.
///
/// Сложные выражения (вызовы функций, арифметика) не разбираются, а
/// сохраняются как `Ignore` с исходным текстом.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlExpression {
    /// Идентификатор
    Identifier { name: String },
    /// Свойство `owner.name`
    Property { owner: String, name: String },
    /// Числовой литерал
    Number { value: NumberValue },
    /// Строковый литерал
    Text { value: String },
    /// Параметр `?` с порядковым номером
    Placeholder { index: usize },
    /// Исходный текст выражения, которое не разбирается
    Ignore { expression: String },
}

impl SqlExpression {
    /// Имя колонки, если выражение может обозначать колонку
    pub fn column_name(&self) -> Option<String> {
        match self {
            SqlExpression::Identifier { name } | SqlExpression::Property { name, .. } => {
                Some(exact_value(name))
            }
            SqlExpression::Ignore { expression } => Some(expression.clone()),
            SqlExpression::Number { .. }
            | SqlExpression::Text { .. }
            | SqlExpression::Placeholder { .. } => None,
        }
    }

    /// Значение, пригодное для условия шардирования
    pub fn is_sharding_value(&self) -> bool {
        matches!(
            self,
            SqlExpression::Number { .. } | SqlExpression::Text { .. } | SqlExpression::Placeholder { .. }
        )
    }
}
