//! ON DUPLICATE KEY UPDATE

use crate::common::{Error, Result};
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::ast::{Column, InsertStatement};
use crate::parser::clause::expression::BasicExpressionParser;
use crate::parser::clause::insert_columns::insert_table_name;
use crate::rule::ShardingRule;

pub struct InsertDuplicateKeyUpdateClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> InsertDuplicateKeyUpdateClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    /// `col = expr` или `col = VALUES(col)`; колонку шардинга менять нельзя
    pub fn parse(&mut self, statement: &mut InsertStatement) -> Result<()> {
        if !self.lexer_engine.dialect().parser.insert_on_duplicate_key
            || !self.lexer_engine.skip_if(&[Keyword::On.into()])?
        {
            return Ok(());
        }
        self.lexer_engine.expect(Keyword::Duplicate)?;
        self.lexer_engine.expect(Keyword::Key)?;
        self.lexer_engine.expect(Keyword::Update)?;
        let table_name = insert_table_name(statement)?;
        loop {
            let column_position = self.lexer_engine.current_token().begin_position;
            let expression = BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?;
            if let Some(column_name) = expression.column_name() {
                let column = Column::new(column_name, table_name.as_str());
                if self.sharding_rule.is_sharding_column(&column) {
                    log::warn!("Rejecting update of sharding column {}", column.name);
                    return Err(Error::unsupported(
                        column_position,
                        format!("Cannot update sharding key {}", column.name),
                    ));
                }
            }
            self.lexer_engine.expect(Symbol::Eq)?;
            BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?;
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        Ok(())
    }
}
