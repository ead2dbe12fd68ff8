//! Псевдонимы элементов SELECT и таблиц

use crate::common::utils::exact_value;
use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine, Literal};

pub struct AliasExpressionParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> AliasExpressionParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    /// `AS alias`, `alias` или `'alias'` после элемента списка SELECT
    pub fn parse_select_item_alias(&mut self) -> Result<Option<String>> {
        self.parse_alias()
    }

    /// Псевдоним таблицы
    pub fn parse_table_alias(&mut self) -> Result<Option<String>> {
        self.parse_alias()
    }

    fn parse_alias(&mut self) -> Result<Option<String>> {
        if self.lexer_engine.skip_if(&[Keyword::As.into()])? {
            if self.lexer_engine.current_type().is_symbol() {
                return Ok(None);
            }
            return self.take_alias();
        }
        if self
            .lexer_engine
            .matches_any(&[Literal::Identifier.into(), Literal::Chars.into()])
        {
            return self.take_alias();
        }
        Ok(None)
    }

    fn take_alias(&mut self) -> Result<Option<String>> {
        let alias = exact_value(self.lexer_engine.current_literals());
        self.lexer_engine.advance()?;
        Ok(Some(alias))
    }
}
