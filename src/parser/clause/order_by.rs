//! ORDER BY

use crate::common::utils::exact_value;
use crate::common::{Error, Result};
use crate::lexer::{keyword_types, Keyword, LexerEngine, Symbol};
use crate::parser::ast::{OrderDirection, OrderItem, SelectStatement, SqlExpression};
use crate::parser::clause::expression::BasicExpressionParser;

pub struct OrderByClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> OrderByClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    /// Разбирает `ORDER [SIBLINGS] BY item [ASC|DESC] [NULLS FIRST|LAST], ...`
    pub fn parse(&mut self, statement: &mut SelectStatement) -> Result<()> {
        if !self.lexer_engine.skip_if(&[Keyword::Order.into()])? {
            return Ok(());
        }
        if self.lexer_engine.dialect().parser.order_by_siblings {
            self.lexer_engine.skip_if(&[Keyword::Siblings.into()])?;
        }
        self.lexer_engine.expect(Keyword::By)?;
        let null_order_direction = self.lexer_engine.dialect().null_order_direction();
        let mut items = Vec::new();
        loop {
            let expression = BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?;
            let order_direction = parse_order_direction(self.lexer_engine)?;
            if self.lexer_engine.skip_if(&[Keyword::Nulls.into()])? {
                self.lexer_engine
                    .skip_if(&keyword_types(&[Keyword::First, Keyword::Last]))?;
            }
            if let Some(item) = order_item_from_expression(
                self.lexer_engine,
                statement,
                expression,
                order_direction,
                null_order_direction,
            )? {
                items.push(item);
            }
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        statement.order_by_items.extend(items);
        Ok(())
    }
}

/// Необязательные `ASC` или `DESC`, по умолчанию `ASC`
pub fn parse_order_direction(lexer_engine: &mut LexerEngine) -> Result<OrderDirection> {
    if lexer_engine.skip_if(&[Keyword::Desc.into()])? {
        return Ok(OrderDirection::Desc);
    }
    lexer_engine.skip_if(&[Keyword::Asc.into()])?;
    Ok(OrderDirection::Asc)
}

/// Строит элемент сортировки из выражения; для `?` элемента нет.
///
/// Имена и выражения сопоставляются с псевдонимами списка SELECT.
pub fn order_item_from_expression(
    lexer_engine: &LexerEngine,
    statement: &SelectStatement,
    expression: SqlExpression,
    order_direction: OrderDirection,
    null_order_direction: OrderDirection,
) -> Result<Option<OrderItem>> {
    let item = match expression {
        SqlExpression::Text { value } => {
            OrderItem::with_name(exact_value(&value), order_direction, null_order_direction, None)
        }
        SqlExpression::Number { value } => {
            let index = usize::try_from(value.as_i64())
                .ok()
                .filter(|index| *index > 0)
                .ok_or_else(|| {
                    Error::syntax(
                        lexer_engine.previous_end_position(),
                        format!("invalid column index {}", value),
                    )
                })?;
            OrderItem::with_index(index, order_direction, null_order_direction)
        }
        SqlExpression::Identifier { name } => {
            let name = exact_value(&name);
            let alias = statement.alias(&name);
            OrderItem::with_name(name, order_direction, null_order_direction, alias)
        }
        SqlExpression::Property { owner, name } => {
            let owner = exact_value(&owner);
            let name = exact_value(&name);
            let alias = statement.alias(&format!("{}.{}", owner, name));
            OrderItem::with_owner(owner, name, order_direction, null_order_direction, alias)
        }
        SqlExpression::Ignore { expression } => {
            let alias = statement.alias(&expression);
            OrderItem::with_name(expression, order_direction, null_order_direction, alias)
        }
        SqlExpression::Placeholder { .. } => return Ok(None),
    };
    Ok(Some(item))
}
