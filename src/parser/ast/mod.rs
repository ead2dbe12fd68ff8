//! Результат разбора SQL для shardsql: выражения, элементы запросов,
//! условия шардирования и инструкции переписывания

pub mod condition;
pub mod expression;
pub mod insert;
pub mod limit;
pub mod order_item;
pub mod select_item;
pub mod sql_token;
pub mod statement;
pub mod table;

pub use condition::{AndCondition, Condition, Conditions, ShardingOperator};
pub use expression::SqlExpression;
pub use insert::{GeneratedKeyCondition, InsertValue, InsertValueKind};
pub use limit::{Limit, LimitValue};
pub use order_item::{OrderDirection, OrderItem};
pub use select_item::{AggregationSelectItem, AggregationType, SelectItem};
pub use sql_token::{ItemsToken, SqlToken, TableToken};
pub use statement::{
    DalKind, DalStatement, DclKind, DclPrincipal, DclStatement, DdlKind, DdlStatement,
    DmlStatement, InsertStatement, SelectStatement, SqlStatement, SqlType, StatementBase,
    TclKind, TclStatement,
};
pub use table::{Column, Table, Tables};
