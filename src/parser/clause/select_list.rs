//! Список SELECT

use crate::common::utils::exact_value;
use crate::common::Result;
use crate::lexer::{keyword_types, Keyword, LexerEngine, Symbol};
use crate::parser::ast::{AggregationSelectItem, AggregationType, SelectItem, SelectStatement, SqlToken};
use crate::parser::clause::alias::AliasExpressionParser;
use crate::parser::clause::expression::{is_negative_number, skip_operand, COMPOSITE_OPERATORS};
use crate::rule::ShardingRule;

pub struct SelectListClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> SelectListClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    /// Разбирает элементы списка и запоминает начало первого токена после него
    pub fn parse(&mut self, statement: &mut SelectStatement) -> Result<()> {
        loop {
            let item = self.parse_select_item(statement)?;
            statement.items.push(item);
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        statement.select_list_last_position = self.lexer_engine.current_token().begin_position;
        Ok(())
    }

    fn parse_select_item(&mut self, statement: &mut SelectStatement) -> Result<SelectItem> {
        let skipped = keyword_types(self.lexer_engine.dialect().parser.skipped_before_select_item);
        self.lexer_engine.skip_if(&skipped)?;
        if self.lexer_engine.skip_if(&[Symbol::Star.into()])? {
            statement.contains_star = true;
            return Ok(SelectItem::Star { owner: None });
        }
        if let Some(aggregation_type) = self
            .lexer_engine
            .current_type()
            .keyword()
            .and_then(AggregationType::from_keyword)
        {
            if self.lexer_engine.peek()?.token_type == Symbol::LeftParen.into() {
                return self.parse_aggregation_select_item(statement, aggregation_type);
            }
        }
        self.parse_common_select_item(statement)
    }

    fn parse_aggregation_select_item(
        &mut self,
        statement: &mut SelectStatement,
        aggregation_type: AggregationType,
    ) -> Result<SelectItem> {
        self.lexer_engine.advance()?;
        let inner = self
            .lexer_engine
            .skip_parentheses(&mut statement.base.parameters_index)?;
        let alias = AliasExpressionParser::new(self.lexer_engine).parse_select_item_alias()?;
        Ok(SelectItem::Aggregation(AggregationSelectItem::new(
            aggregation_type,
            format!("({})", inner),
            alias,
        )))
    }

    fn parse_common_select_item(&mut self, statement: &mut SelectStatement) -> Result<SelectItem> {
        let begin_position = self.lexer_engine.current_token().begin_position;
        let literals = self.lexer_engine.current_literals().to_string();
        if self.lexer_engine.matches(Keyword::Case) {
            self.skip_case_when(&mut statement.base.parameters_index)?;
        } else {
            if self.lexer_engine.matches(Symbol::Question) {
                statement.base.increase_parameters_index();
            }
            self.lexer_engine.advance()?;
            if self.lexer_engine.matches(Symbol::LeftParen) {
                self.lexer_engine
                    .skip_parentheses(&mut statement.base.parameters_index)?;
            } else if self.lexer_engine.skip_if(&[Symbol::Dot.into()])? {
                let owner = exact_value(&literals);
                if self.sharding_rule.contains_table(&owner) {
                    statement
                        .base
                        .add_sql_token(SqlToken::table(begin_position, literals.clone()));
                }
                if self.lexer_engine.skip_if(&[Symbol::Star.into()])? {
                    return Ok(SelectItem::Star { owner: Some(owner) });
                }
                self.lexer_engine.advance()?;
            }
        }
        loop {
            if is_negative_number(self.lexer_engine) {
                self.lexer_engine.advance()?;
            } else if self.lexer_engine.skip_if(COMPOSITE_OPERATORS)? {
                if self.lexer_engine.matches(Keyword::Case) {
                    self.skip_case_when(&mut statement.base.parameters_index)?;
                } else {
                    skip_operand(self.lexer_engine, &mut statement.base)?;
                }
            } else {
                break;
            }
        }
        let end_position = self.lexer_engine.previous_end_position();
        let expression = exact_value(self.lexer_engine.substring(begin_position, end_position).trim());
        let alias = AliasExpressionParser::new(self.lexer_engine).parse_select_item_alias()?;
        Ok(SelectItem::Common { expression, alias })
    }

    /// Пропускает `CASE ... END` с учетом вложенности
    fn skip_case_when(&mut self, parameters_index: &mut usize) -> Result<()> {
        let mut depth = 0usize;
        loop {
            if self.lexer_engine.matches(Keyword::Case) {
                depth += 1;
            } else if self.lexer_engine.matches(Symbol::Question) {
                *parameters_index += 1;
            } else if self.lexer_engine.matches(Keyword::End) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return self.lexer_engine.advance();
                }
            } else if self.lexer_engine.is_end() {
                return Ok(());
            }
            self.lexer_engine.advance()?;
        }
    }
}
