//! Парсеры отдельных предложений SQL
//!
//! Каждый парсер заимствует `LexerEngine` на время разбора и дописывает
//! результат в переданное выражение.

pub mod alias;
pub mod distinct;
pub mod expression;
pub mod group_by;
pub mod insert_columns;
pub mod insert_duplicate_key;
pub mod insert_into;
pub mod insert_set;
pub mod insert_values;
pub mod limit;
pub mod order_by;
pub mod select_list;
pub mod select_rest;
pub mod table_references;
pub mod update_set;
pub mod where_clause;

pub use alias::AliasExpressionParser;
pub use distinct::DistinctClauseParser;
pub use expression::BasicExpressionParser;
pub use group_by::{GroupByClauseParser, HavingClauseParser};
pub use insert_columns::InsertColumnsClauseParser;
pub use insert_duplicate_key::InsertDuplicateKeyUpdateClauseParser;
pub use insert_into::InsertIntoClauseParser;
pub use insert_set::InsertSetClauseParser;
pub use insert_values::InsertValuesClauseParser;
pub use limit::LimitClauseParser;
pub use order_by::OrderByClauseParser;
pub use select_list::SelectListClauseParser;
pub use select_rest::SelectRestClauseParser;
pub use table_references::TableReferencesClauseParser;
pub use update_set::UpdateSetItemsClauseParser;
pub use where_clause::WhereClauseParser;
