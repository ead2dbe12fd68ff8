//! Ограничение числа строк

use serde::{Deserialize, Serialize};

/// Значение смещения или количества строк
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitValue {
    /// Литеральное значение; отсутствует для параметра
    pub value: Option<i64>,
    /// Номер параметра `?`
    pub index: Option<usize>,
    /// Граница не включается (`ROWNUM < n`, `TOP n`)
    pub bound_opened: bool,
}

impl LimitValue {
    pub fn literal(value: i64, bound_opened: bool) -> Self {
        Self {
            value: Some(value),
            index: None,
            bound_opened,
        }
    }

    pub fn placeholder(index: usize, bound_opened: bool) -> Self {
        Self {
            value: None,
            index: Some(index),
            bound_opened,
        }
    }
}

/// Смещение и количество строк
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub offset: Option<LimitValue>,
    pub row_count: Option<LimitValue>,
}

impl Limit {
    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.row_count.is_none()
    }
}
