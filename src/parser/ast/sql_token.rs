//! Инструкции переписывания SQL
//!
//! Каждый токен привязан к смещению в исходном тексте. Переписчик применяет
//! их по возрастанию смещений, не сдвигая более ранние.

use crate::common::utils::exact_value;
use serde::{Deserialize, Serialize};

/// Вхождение имени таблицы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableToken {
    pub begin_position: usize,
    /// Имя в том виде, как оно записано в SQL
    pub original_literals: String,
}

impl TableToken {
    pub fn table_name(&self) -> String {
        exact_value(&self.original_literals)
    }
}

/// Дополнительные элементы списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsToken {
    pub begin_position: usize,
    pub items: Vec<String>,
    /// Перед первым элементом не нужна запятая
    pub first_of_items_special: bool,
}

impl ItemsToken {
    pub fn new(begin_position: usize) -> Self {
        Self {
            begin_position,
            items: Vec::new(),
            first_of_items_special: false,
        }
    }
}

/// Инструкция переписывания
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlToken {
    Table(TableToken),
    Items(ItemsToken),
    /// `(` или `)` синтезированного списка колонок
    InsertColumn {
        begin_position: usize,
        column_name: String,
    },
    /// Место для `ORDER BY`, повторяющего `GROUP BY`
    OrderBy { begin_position: usize },
    /// Строка значений INSERT
    InsertValues {
        begin_position: usize,
        table_name: String,
    },
    Offset { begin_position: usize, offset: i64 },
    RowCount { begin_position: usize, row_count: i64 },
    /// Имя индекса; таблица известна не всегда
    Index {
        begin_position: usize,
        index_name: String,
        table_name: Option<String>,
    },
}

impl SqlToken {
    pub fn table(begin_position: usize, original_literals: impl Into<String>) -> Self {
        SqlToken::Table(TableToken {
            begin_position,
            original_literals: original_literals.into(),
        })
    }

    pub fn begin_position(&self) -> usize {
        match self {
            SqlToken::Table(token) => token.begin_position,
            SqlToken::Items(token) => token.begin_position,
            SqlToken::InsertColumn { begin_position, .. }
            | SqlToken::OrderBy { begin_position }
            | SqlToken::InsertValues { begin_position, .. }
            | SqlToken::Offset { begin_position, .. }
            | SqlToken::RowCount { begin_position, .. }
            | SqlToken::Index { begin_position, .. } => *begin_position,
        }
    }
}
