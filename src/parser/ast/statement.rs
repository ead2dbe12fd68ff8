//! Разобранные SQL выражения

use crate::common::utils::{exact_expression, exact_value};
use crate::parser::ast::condition::Conditions;
use crate::parser::ast::insert::{GeneratedKeyCondition, InsertValue};
use crate::parser::ast::limit::Limit;
use crate::parser::ast::order_item::OrderItem;
use crate::parser::ast::select_item::SelectItem;
use crate::parser::ast::sql_token::SqlToken;
use crate::parser::ast::table::{Column, Tables};
use serde::{Deserialize, Serialize};

/// Категория SQL выражения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Dql,
    Dml,
    Ddl,
    Tcl,
    Dal,
    Dcl,
}

/// Общая часть всех выражений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementBase {
    pub sql_type: SqlType,
    pub tables: Tables,
    pub conditions: Conditions,
    pub sql_tokens: Vec<SqlToken>,
    /// Число параметров `?`, встреченных до текущей позиции
    pub parameters_index: usize,
}

impl StatementBase {
    pub fn new(sql_type: SqlType) -> Self {
        Self {
            sql_type,
            tables: Tables::new(),
            conditions: Conditions::default(),
            sql_tokens: Vec::new(),
            parameters_index: 0,
        }
    }

    pub fn add_sql_token(&mut self, token: SqlToken) {
        self.sql_tokens.push(token);
    }

    /// Возвращает номер очередного параметра и увеличивает счетчик
    pub fn increase_parameters_index(&mut self) -> usize {
        let index = self.parameters_index;
        self.parameters_index += 1;
        index
    }
}

/// SELECT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub base: StatementBase,
    pub contains_star: bool,
    /// Начало первого токена после списка SELECT
    pub select_list_last_position: usize,
    /// Конец предложения GROUP BY
    pub group_by_last_position: usize,
    pub items: Vec<SelectItem>,
    pub group_by_items: Vec<OrderItem>,
    pub order_by_items: Vec<OrderItem>,
    pub limit: Option<Limit>,
    pub sub_query_statement: Option<Box<SelectStatement>>,
    /// Производные колонки уже добавлены
    pub derived_columns_appended: bool,
}

impl SelectStatement {
    pub fn new() -> Self {
        Self {
            base: StatementBase::new(SqlType::Dql),
            contains_star: false,
            select_list_last_position: 0,
            group_by_last_position: 0,
            items: Vec::new(),
            group_by_items: Vec::new(),
            order_by_items: Vec::new(),
            limit: None,
            sub_query_statement: None,
            derived_columns_appended: false,
        }
    }

    /// Псевдоним элемента списка SELECT для имени из ORDER BY или GROUP BY.
    ///
    /// Совпадение по выражению дает псевдоним элемента, совпадение по
    /// псевдониму дает само имя.
    pub fn alias(&self, name: &str) -> Option<String> {
        if self.contains_star {
            return None;
        }
        let raw_name = exact_value(name);
        let expression = exact_expression(&raw_name);
        for item in &self.items {
            if expression.eq_ignore_ascii_case(&exact_expression(&exact_value(&item.expression()))) {
                return item.alias().map(str::to_string);
            }
            if item
                .alias()
                .is_some_and(|alias| raw_name.eq_ignore_ascii_case(alias))
            {
                return Some(raw_name);
            }
        }
        None
    }

    /// Сводит цепочку подзапросов FROM в одно логическое выражение.
    ///
    /// Результатом становится самый внутренний запрос. Он получает таблицы,
    /// условия и токены всей цепочки, внешний список SELECT (если он не `*`),
    /// внешние ORDER BY и GROUP BY при отсутствии собственных и самые
    /// внутренние из заданных частей LIMIT.
    pub fn merge_sub_query_statement(mut self) -> SelectStatement {
        let Some(sub_query) = self.sub_query_statement.take() else {
            return self;
        };
        let mut result = sub_query.merge_sub_query_statement();

        result.base.tables.extend(self.base.tables);
        result.base.conditions.merge(self.base.conditions);
        result.base.sql_tokens.extend(self.base.sql_tokens);
        result.base.sql_tokens.sort_by_key(SqlToken::begin_position);
        result.base.parameters_index = result.base.parameters_index.max(self.base.parameters_index);

        if !self.contains_star {
            result.items = self.items;
            result.contains_star = false;
            result.select_list_last_position = self.select_list_last_position;
        }
        if result.order_by_items.is_empty() {
            result.order_by_items = self.order_by_items;
        }
        if result.group_by_items.is_empty() {
            result.group_by_items = self.group_by_items;
            result.group_by_last_position = self.group_by_last_position;
        }
        result.limit = match (result.limit, self.limit) {
            (Some(inner), Some(outer)) => Some(Limit {
                offset: inner.offset.or(outer.offset),
                row_count: inner.row_count.or(outer.row_count),
            }),
            (inner, outer) => inner.or(outer),
        };
        result
    }
}

impl Default for SelectStatement {
    fn default() -> Self {
        Self::new()
    }
}

/// INSERT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub base: StatementBase,
    pub columns: Vec<Column>,
    pub generated_key_conditions: Vec<GeneratedKeyCondition>,
    pub insert_values: Vec<InsertValue>,
    /// Конец списка колонок; для синтезированного списка это позиция перед VALUES
    pub columns_list_last_position: usize,
    /// Позиция генерируемого ключа в явном списке колонок
    pub generate_key_column_index: Option<usize>,
}

impl InsertStatement {
    pub fn new() -> Self {
        Self {
            base: StatementBase::new(SqlType::Dml),
            columns: Vec::new(),
            generated_key_conditions: Vec::new(),
            insert_values: Vec::new(),
            columns_list_last_position: 0,
            generate_key_column_index: None,
        }
    }
}

impl Default for InsertStatement {
    fn default() -> Self {
        Self::new()
    }
}

/// UPDATE и DELETE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmlStatement {
    pub base: StatementBase,
}

impl DmlStatement {
    pub fn new() -> Self {
        Self {
            base: StatementBase::new(SqlType::Dml),
        }
    }
}

impl Default for DmlStatement {
    fn default() -> Self {
        Self::new()
    }
}

/// Вид DDL выражения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DdlKind {
    CreateTable,
    AlterTable,
    DropTable,
    TruncateTable,
    CreateIndex,
    AlterIndex,
    DropIndex,
}

/// DDL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DdlStatement {
    pub base: StatementBase,
    pub kind: DdlKind,
}

/// Вид DCL выражения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DclKind {
    Grant,
    Revoke,
    Deny,
    Create,
    Alter,
    Drop,
    Rename,
}

/// Субъект DCL выражения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DclPrincipal {
    User,
    Role,
    Login,
}

/// DCL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DclStatement {
    pub base: StatementBase,
    pub kind: DclKind,
    pub principal: Option<DclPrincipal>,
}

/// Вид TCL выражения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TclKind {
    Set,
    Commit,
    Rollback,
    Savepoint,
    Begin,
}

/// TCL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TclStatement {
    pub base: StatementBase,
    pub kind: TclKind,
}

/// Вид DAL выражения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DalKind {
    Use { schema: String },
    Describe,
    ShowDatabases,
    ShowTables { schema: Option<String> },
    ShowColumns,
    ShowCreateTable,
    ShowIndex,
    ShowOther,
}

/// DAL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DalStatement {
    pub base: StatementBase,
    pub kind: DalKind,
}

/// Результат разбора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlStatement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(DmlStatement),
    Delete(DmlStatement),
    Ddl(DdlStatement),
    Dcl(DclStatement),
    Tcl(TclStatement),
    Dal(DalStatement),
}

impl SqlStatement {
    pub fn base(&self) -> &StatementBase {
        match self {
            SqlStatement::Select(s) => &s.base,
            SqlStatement::Insert(s) => &s.base,
            SqlStatement::Update(s) | SqlStatement::Delete(s) => &s.base,
            SqlStatement::Ddl(s) => &s.base,
            SqlStatement::Dcl(s) => &s.base,
            SqlStatement::Tcl(s) => &s.base,
            SqlStatement::Dal(s) => &s.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut StatementBase {
        match self {
            SqlStatement::Select(s) => &mut s.base,
            SqlStatement::Insert(s) => &mut s.base,
            SqlStatement::Update(s) | SqlStatement::Delete(s) => &mut s.base,
            SqlStatement::Ddl(s) => &mut s.base,
            SqlStatement::Dcl(s) => &mut s.base,
            SqlStatement::Tcl(s) => &mut s.base,
            SqlStatement::Dal(s) => &mut s.base,
        }
    }

    pub fn sql_type(&self) -> SqlType {
        self.base().sql_type
    }

    pub fn tables(&self) -> &Tables {
        &self.base().tables
    }

    pub fn conditions(&self) -> &Conditions {
        &self.base().conditions
    }

    pub fn sql_tokens(&self) -> &[SqlToken] {
        &self.base().sql_tokens
    }

    pub fn parameters_index(&self) -> usize {
        self.base().parameters_index
    }

    pub fn as_select(&self) -> Option<&SelectStatement> {
        match self {
            SqlStatement::Select(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_insert(&self) -> Option<&InsertStatement> {
        match self {
            SqlStatement::Insert(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dml(&self) -> Option<&DmlStatement> {
        match self {
            SqlStatement::Update(s) | SqlStatement::Delete(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ddl(&self) -> Option<&DdlStatement> {
        match self {
            SqlStatement::Ddl(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dcl(&self) -> Option<&DclStatement> {
        match self {
            SqlStatement::Dcl(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tcl(&self) -> Option<&TclStatement> {
        match self {
            SqlStatement::Tcl(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dal(&self) -> Option<&DalStatement> {
        match self {
            SqlStatement::Dal(s) => Some(s),
            _ => None,
        }
    }
}
