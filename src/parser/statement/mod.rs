//! Парсеры SQL выражений

pub mod dal;
pub mod dcl;
pub mod ddl;
pub mod delete;
pub mod derived;
pub mod insert;
pub mod select;
pub mod tcl;
pub mod update;

use crate::common::Result;
use crate::parser::ast::SqlStatement;

pub use dal::DalStatementParser;
pub use dcl::DclStatementParser;
pub use ddl::DdlStatementParser;
pub use delete::DeleteStatementParser;
pub use derived::DerivedColumnInjector;
pub use insert::InsertStatementParser;
pub use select::SelectStatementParser;
pub use tcl::TclStatementParser;
pub use update::UpdateStatementParser;

/// Парсер одного вида SQL выражения
pub trait SqlParser {
    /// Разбирает выражение, начиная с текущего токена
    fn parse(&mut self) -> Result<SqlStatement>;
}
