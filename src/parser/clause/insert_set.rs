//! INSERT ... SET

use crate::common::{Error, Result};
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::ast::{
    AndCondition, Column, Condition, InsertStatement, InsertValue, InsertValueKind,
    ShardingOperator, SqlToken,
};
use crate::parser::clause::expression::BasicExpressionParser;
use crate::parser::clause::insert_columns::insert_table_name;
use crate::parser::clause::insert_values::generated_key_condition;
use crate::rule::ShardingRule;

pub struct InsertSetClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> InsertSetClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    /// Разбирает `SET col = expr, ...`.
    ///
    /// Синтезированный список колонок здесь не нужен и отбрасывается.
    pub fn parse(&mut self, statement: &mut InsertStatement) -> Result<()> {
        if !self.lexer_engine.dialect().parser.insert_set
            || !self.lexer_engine.skip_if(&[Keyword::Set.into()])?
        {
            return Ok(());
        }
        statement
            .base
            .sql_tokens
            .retain(|token| !matches!(token, SqlToken::InsertColumn { .. } | SqlToken::Items(_)));
        statement.columns.clear();
        statement.generate_key_column_index = None;

        let table_name = insert_table_name(statement)?;
        let generate_key_column = self.sharding_rule.generate_key_column(&table_name);
        let begin_position = self.lexer_engine.current_token().begin_position;
        let parameters_before = statement.base.parameters_index;
        let mut and_condition = AndCondition::default();
        loop {
            let column_position = self.lexer_engine.current_token().begin_position;
            let expression = BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?;
            let column_name = expression.column_name().ok_or_else(|| {
                Error::syntax(column_position, format!("expected column name, found {:?}", expression))
            })?;
            let column = Column::new(column_name, table_name.as_str());
            if !self
                .lexer_engine
                .skip_if(&[Symbol::Eq.into(), Symbol::ColonEq.into()])?
            {
                self.lexer_engine.expect(Symbol::Eq)?;
            }
            let value = BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?;
            if generate_key_column
                .as_deref()
                .is_some_and(|key| key.eq_ignore_ascii_case(&column.name))
            {
                statement
                    .generated_key_conditions
                    .push(generated_key_condition(&column, value.clone(), column_position)?);
            }
            if value.is_sharding_value() && self.sharding_rule.is_sharding_column(&column) {
                and_condition
                    .conditions
                    .push(Condition::new(column.clone(), ShardingOperator::Equal, vec![value]));
            }
            statement.columns.push(column);
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        let end_position = self.lexer_engine.previous_end_position();
        statement.base.conditions.push_and_condition(and_condition);
        statement.insert_values.push(InsertValue {
            kind: InsertValueKind::Set,
            expression: self.lexer_engine.substring(begin_position, end_position),
            parameters_count: statement.base.parameters_index - parameters_before,
        });
        Ok(())
    }
}
