//! VALUES

use crate::common::{Error, Result};
use crate::lexer::{Keyword, LexerEngine, Symbol, TokenType};
use crate::parser::ast::{
    AndCondition, Column, Condition, GeneratedKeyCondition, InsertStatement, InsertValue,
    InsertValueKind, ShardingOperator, SqlExpression, SqlToken,
};
use crate::parser::clause::expression::BasicExpressionParser;
use crate::parser::clause::insert_columns::insert_table_name;
use crate::rule::ShardingRule;

pub struct InsertValuesClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> InsertValuesClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    /// Разбирает `VALUES (...), (...)`.
    ///
    /// Каждая строка дает `InsertValuesToken`, `InsertValue` и свою группу
    /// условий шардинга.
    pub fn parse(&mut self, statement: &mut InsertStatement) -> Result<()> {
        let mut values_keywords: Vec<TokenType> = vec![Keyword::Values.into()];
        values_keywords.extend(
            self.lexer_engine
                .dialect()
                .parser
                .insert_values_keywords
                .iter()
                .map(|k| TokenType::Keyword(*k)),
        );
        if !self.lexer_engine.skip_if(&values_keywords)? {
            return Ok(());
        }
        let table_name = insert_table_name(statement)?;
        let generate_key_column = self.sharding_rule.generate_key_column(&table_name);
        loop {
            self.parse_row(statement, &table_name, generate_key_column.as_deref())?;
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        Ok(())
    }

    fn parse_row(
        &mut self,
        statement: &mut InsertStatement,
        table_name: &str,
        generate_key_column: Option<&str>,
    ) -> Result<()> {
        let begin_position = self.lexer_engine.current_token().begin_position;
        statement.base.add_sql_token(SqlToken::InsertValues {
            begin_position,
            table_name: table_name.to_string(),
        });
        let parameters_before = statement.base.parameters_index;
        self.lexer_engine.expect(Symbol::LeftParen)?;
        let mut values = Vec::new();
        loop {
            values.push(BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?);
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        self.lexer_engine.expect(Symbol::RightParen)?;
        let end_position = self.lexer_engine.previous_end_position();

        if let Some(key) = generate_key_column {
            if values.len() < statement.columns.len() {
                remove_generate_key_column(statement, key);
            }
        }
        if !statement.columns.is_empty() && statement.columns.len() != values.len() {
            return Err(Error::syntax(
                begin_position,
                format!(
                    "column count {} doesn't match value count {}",
                    statement.columns.len(),
                    values.len()
                ),
            ));
        }

        let mut and_condition = AndCondition::default();
        for (column, value) in statement.columns.iter().zip(values) {
            if generate_key_column.is_some_and(|key| key.eq_ignore_ascii_case(&column.name)) {
                statement
                    .generated_key_conditions
                    .push(generated_key_condition(column, value.clone(), begin_position)?);
            }
            if value.is_sharding_value() && self.sharding_rule.is_sharding_column(column) {
                and_condition
                    .conditions
                    .push(Condition::new(column.clone(), ShardingOperator::Equal, vec![value]));
            }
        }
        statement.base.conditions.push_and_condition(and_condition);
        statement.insert_values.push(InsertValue {
            kind: InsertValueKind::Values,
            expression: self.lexer_engine.substring(begin_position, end_position),
            parameters_count: statement.base.parameters_index - parameters_before,
        });
        Ok(())
    }
}

/// Значение генерируемого ключа должно быть литералом или параметром
pub fn generated_key_condition(
    column: &Column,
    value: SqlExpression,
    position: usize,
) -> Result<GeneratedKeyCondition> {
    match value {
        SqlExpression::Number { .. } | SqlExpression::Placeholder { .. } | SqlExpression::Text { .. } => {
            Ok(GeneratedKeyCondition {
                column: column.clone(),
                value,
            })
        }
        other => Err(Error::unsupported(
            position,
            format!("generated key {} must be a literal or parameter, found {:?}", column.name, other),
        )),
    }
}

/// Убирает ключ из синтезированного списка колонок, если строка его не задает
fn remove_generate_key_column(statement: &mut InsertStatement, key: &str) {
    let before = statement.columns.len();
    statement
        .columns
        .retain(|column| !column.name.eq_ignore_ascii_case(key));
    if statement.columns.len() == before {
        return;
    }
    for token in statement.base.sql_tokens.iter_mut() {
        if let SqlToken::Items(items_token) = token {
            items_token.items.retain(|item| !item.eq_ignore_ascii_case(key));
        }
    }
    statement.generate_key_column_index = None;
}
