//! DELETE

use crate::common::Result;
use crate::lexer::{keyword_types, LexerEngine};
use crate::parser::ast::{DmlStatement, SqlStatement};
use crate::parser::clause::{TableReferencesClauseParser, WhereClauseParser};
use crate::parser::statement::SqlParser;
use crate::rule::ShardingRule;

pub struct DeleteStatementParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> DeleteStatementParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }
}

impl SqlParser for DeleteStatementParser<'_> {
    fn parse(&mut self) -> Result<SqlStatement> {
        self.lexer_engine.advance()?;
        let mut statement = DmlStatement::new();
        let modifiers = keyword_types(self.lexer_engine.dialect().parser.delete_skipped_modifiers);
        self.lexer_engine.skip_all(&modifiers)?;
        TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule)
            .parse(&mut statement.base, true)?;
        WhereClauseParser::new(self.lexer_engine, self.sharding_rule).parse(&mut statement.base)?;
        Ok(SqlStatement::Delete(statement))
    }
}
