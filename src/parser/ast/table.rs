//! Таблицы и колонки

use serde::{Deserialize, Serialize};

/// Таблица в запросе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Имя таблицы без кавычек
    pub name: String,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }
}

/// Набор таблиц запроса
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tables {
    tables: Vec<Table>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет таблицу, если такой пары имя/псевдоним еще нет
    pub fn add(&mut self, table: Table) {
        let exists = self.tables.iter().any(|t| {
            t.name.eq_ignore_ascii_case(&table.name)
                && match (&t.alias, &table.alias) {
                    (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                    (None, None) => true,
                    _ => false,
                }
        });
        if !exists {
            self.tables.push(table);
        }
    }

    pub fn extend(&mut self, other: Tables) {
        for table in other.tables {
            self.add(table);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    /// Различные имена таблиц в порядке появления
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for table in &self.tables {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&table.name)) {
                names.push(table.name.clone());
            }
        }
        names
    }

    /// Все ссылки указывают на одну таблицу
    pub fn is_single_table(&self) -> bool {
        self.table_names().len() == 1
    }

    pub fn single_table_name(&self) -> Option<&str> {
        if self.is_single_table() {
            self.tables.first().map(|t| t.name.as_str())
        } else {
            None
        }
    }

    pub fn contains_table_name(&self, name: &str) -> bool {
        self.tables.iter().any(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Ищет таблицу по имени, затем по псевдониму
    pub fn find(&self, name_or_alias: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name_or_alias))
            .or_else(|| {
                self.tables.iter().find(|t| {
                    t.alias
                        .as_deref()
                        .is_some_and(|a| a.eq_ignore_ascii_case(name_or_alias))
                })
            })
    }
}

impl<'a> IntoIterator for &'a Tables {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// Колонка таблицы
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub table_name: String,
}

impl Column {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_deduplicate_and_find() {
        let mut tables = Tables::new();
        tables.add(Table::new("t_order", Some("o".to_string())));
        tables.add(Table::new("T_ORDER", Some("O".to_string())));
        tables.add(Table::new("t_order", None));
        assert_eq!(tables.len(), 2);
        assert!(tables.is_single_table());
        assert_eq!(tables.single_table_name(), Some("t_order"));
        assert_eq!(tables.find("o").map(|t| t.name.as_str()), Some("t_order"));
        assert!(tables.find("x").is_none());

        tables.add(Table::new("t_order_item", Some("i".to_string())));
        assert!(!tables.is_single_table());
        assert_eq!(tables.single_table_name(), None);
        assert_eq!(tables.table_names(), vec!["t_order", "t_order_item"]);
    }
}
