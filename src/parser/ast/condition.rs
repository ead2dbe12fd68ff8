//! Условия шардирования

use crate::parser::ast::expression::SqlExpression;
use crate::parser::ast::table::Column;
use serde::{Deserialize, Serialize};

/// Оператор условия шардирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShardingOperator {
    Equal,
    In,
    Between,
}

/// Условие на колонку шардирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: Column,
    pub operator: ShardingOperator,
    pub values: Vec<SqlExpression>,
}

impl Condition {
    pub fn new(column: Column, operator: ShardingOperator, values: Vec<SqlExpression>) -> Self {
        Self {
            column,
            operator,
            values,
        }
    }
}

/// Условия, объединенные через AND
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AndCondition {
    pub conditions: Vec<Condition>,
}

/// Условия запроса: группы AND, объединенные через OR
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub and_conditions: Vec<AndCondition>,
}

impl Conditions {
    /// Добавляет условие в первую группу AND
    pub fn add(&mut self, condition: Condition) {
        if self.and_conditions.is_empty() {
            self.and_conditions.push(AndCondition::default());
        }
        self.and_conditions[0].conditions.push(condition);
    }

    pub fn push_and_condition(&mut self, and_condition: AndCondition) {
        self.and_conditions.push(and_condition);
    }

    pub fn merge(&mut self, other: Conditions) {
        self.and_conditions.extend(other.and_conditions);
    }

    pub fn is_empty(&self) -> bool {
        self.and_conditions.iter().all(|c| c.conditions.is_empty())
    }

    /// Все условия всех групп
    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.and_conditions.iter().flat_map(|c| c.conditions.iter())
    }
}
