//! SET в UPDATE

use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::ast::StatementBase;
use crate::parser::clause::expression::BasicExpressionParser;

pub struct UpdateSetItemsClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> UpdateSetItemsClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    /// `SET col = expr, ...`, также `col := expr` и `expr::type`
    pub fn parse(&mut self, base: &mut StatementBase) -> Result<()> {
        self.lexer_engine.expect(Keyword::Set)?;
        loop {
            self.parse_set_item(base)?;
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        Ok(())
    }

    fn parse_set_item(&mut self, base: &mut StatementBase) -> Result<()> {
        if self.lexer_engine.matches(Symbol::LeftParen) {
            self.lexer_engine.skip_parentheses(&mut base.parameters_index)?;
        } else {
            BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        }
        if !self
            .lexer_engine
            .skip_if(&[Symbol::Eq.into(), Symbol::ColonEq.into()])?
        {
            self.lexer_engine.expect(Symbol::Eq)?;
        }
        BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        while self.lexer_engine.skip_if(&[Symbol::DoubleColon.into()])? {
            self.lexer_engine.advance()?;
        }
        Ok(())
    }
}
