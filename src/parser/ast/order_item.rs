//! Элементы ORDER BY и GROUP BY

use serde::{Deserialize, Serialize};

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Элемент сортировки или группировки.
///
/// Задано либо имя колонки, либо порядковый номер `index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub owner: Option<String>,
    pub name: Option<String>,
    pub order_direction: OrderDirection,
    pub null_order_direction: OrderDirection,
    pub index: Option<usize>,
    pub alias: Option<String>,
}

impl OrderItem {
    pub fn with_name(
        name: impl Into<String>,
        order_direction: OrderDirection,
        null_order_direction: OrderDirection,
        alias: Option<String>,
    ) -> Self {
        Self {
            owner: None,
            name: Some(name.into()),
            order_direction,
            null_order_direction,
            index: None,
            alias,
        }
    }

    pub fn with_owner(
        owner: impl Into<String>,
        name: impl Into<String>,
        order_direction: OrderDirection,
        null_order_direction: OrderDirection,
        alias: Option<String>,
    ) -> Self {
        Self {
            owner: Some(owner.into()),
            ..Self::with_name(name, order_direction, null_order_direction, alias)
        }
    }

    pub fn with_index(
        index: usize,
        order_direction: OrderDirection,
        null_order_direction: OrderDirection,
    ) -> Self {
        Self {
            owner: None,
            name: None,
            order_direction,
            null_order_direction,
            index: Some(index),
            alias: None,
        }
    }

    /// Псевдоним, иначе имя
    pub fn column_label(&self) -> Option<String> {
        self.alias.clone().or_else(|| self.name.clone())
    }

    /// `owner.name` или просто имя
    pub fn qualified_name(&self) -> Option<String> {
        let name = self.name.as_ref()?;
        Some(match &self.owner {
            Some(owner) => format!("{}.{}", owner, name),
            None => name.clone(),
        })
    }
}

/// Равенство по метке колонки, затем по полному имени, затем по номеру
impl PartialEq for OrderItem {
    fn eq(&self, other: &Self) -> bool {
        if self.order_direction != other.order_direction {
            return false;
        }
        if let (Some(a), Some(b)) = (self.column_label(), other.column_label()) {
            if a.eq_ignore_ascii_case(&b) {
                return true;
            }
        }
        if let (Some(a), Some(b)) = (self.qualified_name(), other.qualified_name()) {
            if a.eq_ignore_ascii_case(&b) {
                return true;
            }
        }
        matches!((self.index, other.index), (Some(a), Some(b)) if a == b)
    }
}
