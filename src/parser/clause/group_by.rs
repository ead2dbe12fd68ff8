//! GROUP BY и HAVING

use crate::common::Result;
use crate::lexer::{keyword_types, Keyword, LexerEngine, Symbol};
use crate::parser::ast::{OrderDirection, SelectStatement};
use crate::parser::clause::expression::BasicExpressionParser;
use crate::parser::clause::order_by::{order_item_from_expression, parse_order_direction};

pub struct GroupByClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> GroupByClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    /// Разбирает `GROUP BY` и запоминает конец предложения
    pub fn parse(&mut self, statement: &mut SelectStatement) -> Result<()> {
        if !self.lexer_engine.skip_if(&[Keyword::Group.into()])? {
            return Ok(());
        }
        self.lexer_engine.expect(Keyword::By)?;
        loop {
            let expression = BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?;
            let order_direction = parse_order_direction(self.lexer_engine)?;
            if let Some(item) = order_item_from_expression(
                self.lexer_engine,
                statement,
                expression,
                order_direction,
                OrderDirection::Asc,
            )? {
                statement.group_by_items.push(item);
            }
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        let skipped = keyword_types(self.lexer_engine.dialect().parser.skipped_after_group_by);
        self.lexer_engine.skip_all(&skipped)?;
        statement.group_by_last_position = self.lexer_engine.previous_end_position();
        Ok(())
    }
}

/// HAVING не поддерживается
pub struct HavingClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> HavingClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    pub fn parse(&mut self) -> Result<()> {
        self.lexer_engine.unsupported_if(&[Keyword::Having.into()])
    }
}
