//! LIMIT, OFFSET и TOP

use crate::common::Result;
use crate::dialect::LimitStyle;
use crate::lexer::{Keyword, LexerEngine, Literal, Symbol};
use crate::parser::ast::{Limit, LimitValue, SelectStatement, SqlToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LimitPart {
    Offset,
    RowCount,
}

pub struct LimitClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> LimitClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    /// Ограничение строк в конце запроса.
    ///
    /// `LIMIT n`, `LIMIT m, n` (если диалект допускает запятую),
    /// `LIMIT n OFFSET m`, `OFFSET m [LIMIT n]`, `LIMIT ALL`.
    pub fn parse(&mut self, statement: &mut SelectStatement) -> Result<()> {
        let LimitStyle::Limit { comma } = self.lexer_engine.dialect().parser.limit_style else {
            return Ok(());
        };
        let mut limit = Limit::default();
        if self.lexer_engine.skip_if(&[Keyword::Limit.into()])? {
            if comma && self.lexer_engine.peek()?.token_type == Symbol::Comma.into() {
                limit.offset = self.parse_value(statement, LimitPart::Offset)?;
                self.lexer_engine.expect(Symbol::Comma)?;
                limit.row_count = self.parse_value(statement, LimitPart::RowCount)?;
            } else {
                limit.row_count = self.parse_value(statement, LimitPart::RowCount)?;
                if self.lexer_engine.skip_if(&[Keyword::Offset.into()])? {
                    limit.offset = self.parse_value(statement, LimitPart::Offset)?;
                }
            }
        } else if self.lexer_engine.skip_if(&[Keyword::Offset.into()])? {
            limit.offset = self.parse_value(statement, LimitPart::Offset)?;
            if self.lexer_engine.skip_if(&[Keyword::Limit.into()])? {
                limit.row_count = self.parse_value(statement, LimitPart::RowCount)?;
            }
        }
        if !limit.is_empty() {
            statement.limit = Some(limit);
        }
        Ok(())
    }

    /// `TOP n`, `TOP (n)` или `TOP ?` сразу после SELECT
    pub fn parse_top(&mut self, statement: &mut SelectStatement) -> Result<()> {
        if self.lexer_engine.dialect().parser.limit_style != LimitStyle::Top
            || !self.lexer_engine.skip_if(&[Keyword::Top.into()])?
        {
            return Ok(());
        }
        let row_count = if self.lexer_engine.skip_if(&[Symbol::LeftParen.into()])? {
            let value = self.parse_value(statement, LimitPart::RowCount)?;
            self.lexer_engine.expect(Symbol::RightParen)?;
            value
        } else {
            self.parse_value(statement, LimitPart::RowCount)?
        };
        self.lexer_engine.skip_if(&[Keyword::Percent.into()])?;
        if self.lexer_engine.skip_if(&[Keyword::With.into()])? {
            self.lexer_engine.expect(Keyword::Ties)?;
        }
        if row_count.is_some() {
            statement.limit = Some(Limit {
                offset: None,
                row_count,
            });
        }
        Ok(())
    }

    /// Значение ограничения; `ALL` дает `None`
    fn parse_value(&mut self, statement: &mut SelectStatement, part: LimitPart) -> Result<Option<LimitValue>> {
        if self.lexer_engine.skip_if(&[Keyword::All.into()])? {
            return Ok(None);
        }
        if self.lexer_engine.matches(Symbol::Question) {
            let index = statement.base.increase_parameters_index();
            self.lexer_engine.advance()?;
            return Ok(Some(LimitValue::placeholder(index, false)));
        }
        if !self.lexer_engine.matches(Literal::Int) {
            return Err(self.lexer_engine.syntax_error("expected INT or '?'"));
        }
        let begin_position = self.lexer_engine.current_token().begin_position;
        let value: i64 = self
            .lexer_engine
            .current_literals()
            .parse()
            .map_err(|_| self.lexer_engine.syntax_error("expected row count"))?;
        statement.base.add_sql_token(match part {
            LimitPart::Offset => SqlToken::Offset {
                begin_position,
                offset: value,
            },
            LimitPart::RowCount => SqlToken::RowCount {
                begin_position,
                row_count: value,
            },
        });
        self.lexer_engine.advance()?;
        Ok(Some(LimitValue::literal(value, false)))
    }
}
