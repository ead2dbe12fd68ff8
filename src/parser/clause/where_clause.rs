//! WHERE

use crate::common::utils::exact_value;
use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine, Symbol, TokenType};
use crate::parser::ast::{Column, Condition, ShardingOperator, SqlExpression, StatementBase};
use crate::parser::clause::expression::BasicExpressionParser;
use crate::rule::ShardingRule;

const OTHER_COMPARISON_OPERATORS: &[TokenType] = &[
    TokenType::Symbol(Symbol::Lt),
    TokenType::Symbol(Symbol::Gt),
    TokenType::Symbol(Symbol::LtEq),
    TokenType::Symbol(Symbol::GtEq),
    TokenType::Symbol(Symbol::LtGt),
    TokenType::Symbol(Symbol::BangEq),
    TokenType::Symbol(Symbol::LtEqGt),
    TokenType::Symbol(Symbol::BangGt),
    TokenType::Symbol(Symbol::BangLt),
];

const PATTERN_OPERATORS: &[TokenType] = &[
    TokenType::Keyword(Keyword::Like),
    TokenType::Keyword(Keyword::Regexp),
];

/// Условия WHERE.
///
/// Поддерживаются только сравнения, соединенные через AND. Условия шардинга
/// строятся из `=`, `IN` и `BETWEEN` по колонке шардинга.
pub struct WhereClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> WhereClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    pub fn parse(&mut self, base: &mut StatementBase) -> Result<()> {
        if self.lexer_engine.skip_if(&[Keyword::Where.into()])? {
            self.parse_conditions(base)?;
        }
        Ok(())
    }

    fn parse_conditions(&mut self, base: &mut StatementBase) -> Result<()> {
        loop {
            self.parse_comparison_condition(base)?;
            if !self.lexer_engine.skip_if(&[Keyword::And.into()])? {
                break;
            }
        }
        if self.lexer_engine.matches(Keyword::Or) {
            log::warn!("Rejecting OR in WHERE clause");
            return Err(self.lexer_engine.unsupported_error());
        }
        Ok(())
    }

    fn parse_comparison_condition(&mut self, base: &mut StatementBase) -> Result<()> {
        let mut open_parens = 0usize;
        while self.lexer_engine.matches(Symbol::LeftParen) && !self.is_sub_query()? {
            self.lexer_engine.advance()?;
            open_parens += 1;
        }
        let left = BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        open_parens -= self.skip_right_parens(open_parens)?;
        self.parse_operator(base, &left)?;
        self.skip_right_parens(open_parens)?;
        Ok(())
    }

    fn parse_operator(&mut self, base: &mut StatementBase, left: &SqlExpression) -> Result<()> {
        if self.lexer_engine.skip_if(&[Symbol::Eq.into()])? {
            let right = BasicExpressionParser::new(self.lexer_engine).parse(base)?;
            self.add_condition(base, left, ShardingOperator::Equal, vec![right]);
        } else if self.lexer_engine.skip_if(&[Keyword::In.into()])? {
            if let Some(values) = self.parse_in_values(base)? {
                self.add_condition(base, left, ShardingOperator::In, values);
            }
        } else if self.lexer_engine.skip_if(&[Keyword::Between.into()])? {
            let values = self.parse_between_values(base)?;
            self.add_condition(base, left, ShardingOperator::Between, values);
        } else if self.lexer_engine.skip_if(&[Keyword::Not.into()])? {
            if self.lexer_engine.skip_if(&[Keyword::In.into()])? {
                self.lexer_engine
                    .skip_parentheses(&mut base.parameters_index)?;
            } else if self.lexer_engine.skip_if(&[Keyword::Between.into()])? {
                self.parse_between_values(base)?;
            } else if self.lexer_engine.skip_if(PATTERN_OPERATORS)? {
                self.parse_pattern(base)?;
            }
        } else if self.lexer_engine.skip_if(&[Keyword::Is.into()])? {
            self.lexer_engine.skip_if(&[Keyword::Not.into()])?;
            BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        } else if self.lexer_engine.skip_if(PATTERN_OPERATORS)? {
            self.parse_pattern(base)?;
        } else if self.lexer_engine.skip_if(OTHER_COMPARISON_OPERATORS)? {
            BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        }
        Ok(())
    }

    /// Значения `IN (...)`; для подзапроса возвращает `None`
    fn parse_in_values(&mut self, base: &mut StatementBase) -> Result<Option<Vec<SqlExpression>>> {
        if self.is_sub_query()? {
            self.lexer_engine
                .skip_parentheses(&mut base.parameters_index)?;
            return Ok(None);
        }
        self.lexer_engine.expect(Symbol::LeftParen)?;
        let mut values = Vec::new();
        loop {
            values.push(BasicExpressionParser::new(self.lexer_engine).parse(base)?);
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        self.lexer_engine.expect(Symbol::RightParen)?;
        Ok(Some(values))
    }

    fn parse_between_values(&mut self, base: &mut StatementBase) -> Result<Vec<SqlExpression>> {
        let low = BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        self.lexer_engine.expect(Keyword::And)?;
        let high = BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        Ok(vec![low, high])
    }

    fn parse_pattern(&mut self, base: &mut StatementBase) -> Result<()> {
        BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        if self.lexer_engine.skip_if(&[Keyword::Escape.into()])? {
            BasicExpressionParser::new(self.lexer_engine).parse(base)?;
        }
        Ok(())
    }

    fn is_sub_query(&self) -> Result<bool> {
        Ok(self.lexer_engine.matches(Symbol::LeftParen)
            && self.lexer_engine.peek()?.token_type == Keyword::Select.into())
    }

    /// Закрывает не более `max` скобок, возвращает число закрытых
    fn skip_right_parens(&mut self, max: usize) -> Result<usize> {
        let mut closed = 0;
        while closed < max && self.lexer_engine.skip_if(&[Symbol::RightParen.into()])? {
            closed += 1;
        }
        Ok(closed)
    }

    fn add_condition(
        &self,
        base: &mut StatementBase,
        left: &SqlExpression,
        operator: ShardingOperator,
        values: Vec<SqlExpression>,
    ) {
        let Some(column) = find_column(base, left) else {
            return;
        };
        if !values.iter().all(SqlExpression::is_sharding_value) {
            return;
        }
        if self.sharding_rule.is_sharding_column(&column) {
            log::debug!("Sharding condition on {}.{}: {:?}", column.table_name, column.name, operator);
            base.conditions.add(Condition::new(column, operator, values));
        }
    }
}

/// Колонка левой части сравнения.
///
/// `owner.name` ищется по имени или псевдониму таблицы, голое имя относится
/// к единственной таблице выражения.
pub fn find_column(base: &StatementBase, expression: &SqlExpression) -> Option<Column> {
    match expression {
        SqlExpression::Property { owner, name } => base
            .tables
            .find(&exact_value(owner))
            .map(|table| Column::new(exact_value(name), table.name.clone())),
        SqlExpression::Identifier { name } => base
            .tables
            .single_table_name()
            .map(|table_name| Column::new(exact_value(name), table_name)),
        _ => None,
    }
}

