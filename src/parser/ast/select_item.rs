//! Элементы списка SELECT

use crate::common::utils::exact_expression;
use crate::lexer::keyword::Keyword;
use serde::{Deserialize, Serialize};

/// Агрегатная функция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationType {
    Max,
    Min,
    Sum,
    Count,
    Avg,
}

impl AggregationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationType::Max => "MAX",
            AggregationType::Min => "MIN",
            AggregationType::Sum => "SUM",
            AggregationType::Count => "COUNT",
            AggregationType::Avg => "AVG",
        }
    }

    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Max => Some(AggregationType::Max),
            Keyword::Min => Some(AggregationType::Min),
            Keyword::Sum => Some(AggregationType::Sum),
            Keyword::Count => Some(AggregationType::Count),
            Keyword::Avg => Some(AggregationType::Avg),
            _ => None,
        }
    }
}

/// Агрегатный элемент списка SELECT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationSelectItem {
    pub aggregation_type: AggregationType,
    /// Аргумент вместе со скобками, например `(price)`
    pub inner_expression: String,
    pub alias: Option<String>,
    /// COUNT и SUM, добавленные для AVG
    pub derived_aggregation_items: Vec<AggregationSelectItem>,
}

impl AggregationSelectItem {
    pub fn new(
        aggregation_type: AggregationType,
        inner_expression: impl Into<String>,
        alias: Option<String>,
    ) -> Self {
        Self {
            aggregation_type,
            inner_expression: inner_expression.into(),
            alias,
            derived_aggregation_items: Vec::new(),
        }
    }

    /// Выражение без пробелов, например `COUNT(id)`
    pub fn expression(&self) -> String {
        exact_expression(&format!(
            "{}{}",
            self.aggregation_type.as_str(),
            self.inner_expression
        ))
    }

    /// Имя колонки результата
    pub fn column_label(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.expression())
    }
}

/// Элемент списка SELECT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectItem {
    /// `*` или `owner.*`
    Star { owner: Option<String> },
    /// Выражение, сохраненное как текст
    Common {
        expression: String,
        alias: Option<String>,
    },
    Aggregation(AggregationSelectItem),
}

impl SelectItem {
    pub fn expression(&self) -> String {
        match self {
            SelectItem::Star { owner: Some(owner) } => format!("{}.*", owner),
            SelectItem::Star { owner: None } => "*".to_string(),
            SelectItem::Common { expression, .. } => expression.clone(),
            SelectItem::Aggregation(item) => item.expression(),
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            SelectItem::Star { .. } => None,
            SelectItem::Common { alias, .. } => alias.as_deref(),
            SelectItem::Aggregation(item) => item.alias.as_deref(),
        }
    }
}
