//! TCL

use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine};
use crate::parser::ast::{SqlStatement, SqlType, StatementBase, TclKind, TclStatement};
use crate::parser::statement::SqlParser;

/// Выражения управления транзакциями записываются только по виду
pub struct TclStatementParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> TclStatementParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }
}

impl SqlParser for TclStatementParser<'_> {
    fn parse(&mut self) -> Result<SqlStatement> {
        let kind = match self.lexer_engine.current_type().keyword() {
            Some(Keyword::Set) => TclKind::Set,
            Some(Keyword::Commit) => TclKind::Commit,
            Some(Keyword::Rollback) => TclKind::Rollback,
            Some(Keyword::Savepoint) => TclKind::Savepoint,
            Some(Keyword::Begin) => TclKind::Begin,
            _ => return Err(self.lexer_engine.unsupported_error()),
        };
        self.lexer_engine.advance()?;
        Ok(SqlStatement::Tcl(TclStatement {
            base: StatementBase::new(SqlType::Tcl),
            kind,
        }))
    }
}
