//! INSERT INTO

use crate::common::Result;
use crate::lexer::{keyword_types, Keyword, LexerEngine};
use crate::parser::ast::InsertStatement;
use crate::parser::clause::table_references::TableReferencesClauseParser;
use crate::rule::ShardingRule;

pub struct InsertIntoClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> InsertIntoClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    /// Разбирает `[modifiers] INTO table [PARTITION (...)]`
    pub fn parse(&mut self, statement: &mut InsertStatement) -> Result<()> {
        let rules = &self.lexer_engine.dialect().parser;
        let unsupported = keyword_types(rules.insert_unsupported_before_into);
        let skipped = keyword_types(rules.insert_skipped_between_table_and_values);

        self.lexer_engine.unsupported_if(&unsupported)?;
        self.lexer_engine.skip_until(&[Keyword::Into.into()])?;
        self.lexer_engine.expect(Keyword::Into)?;
        TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule)
            .parse_single_table_without_alias(&mut statement.base)?;
        while self.lexer_engine.skip_if(&skipped)? {
            self.lexer_engine
                .skip_parentheses(&mut statement.base.parameters_index)?;
        }
        Ok(())
    }
}
