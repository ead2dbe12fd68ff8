//! Разбор скалярных выражений

use crate::common::utils::{exact_value, parse_decimal, parse_integer};
use crate::common::Result;
use crate::lexer::{LexerEngine, Literal, Symbol, TokenType};
use crate::parser::ast::{SqlExpression, SqlToken, StatementBase};

/// Операторы, продолжающие составное выражение
pub const COMPOSITE_OPERATORS: &[TokenType] = &[
    TokenType::Symbol(Symbol::Plus),
    TokenType::Symbol(Symbol::Sub),
    TokenType::Symbol(Symbol::Star),
    TokenType::Symbol(Symbol::Slash),
    TokenType::Symbol(Symbol::Percent),
    TokenType::Symbol(Symbol::Amp),
    TokenType::Symbol(Symbol::Bar),
    TokenType::Symbol(Symbol::DoubleAmp),
    TokenType::Symbol(Symbol::DoubleBar),
    TokenType::Symbol(Symbol::Caret),
    TokenType::Symbol(Symbol::Dot),
];

/// Парсер выражений
pub struct BasicExpressionParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> BasicExpressionParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    /// Разбирает одно выражение.
    ///
    /// Для `owner.name`, где `owner` является таблицей выражения, добавляет
    /// `TableToken` на место владельца.
    pub fn parse(&mut self, base: &mut StatementBase) -> Result<SqlExpression> {
        let begin_position = self.lexer_engine.current_token().begin_position;
        let expression = self.parse_expression(base)?;
        if let SqlExpression::Property { owner, .. } = &expression {
            if base.tables.contains_table_name(&exact_value(owner)) {
                base.add_sql_token(SqlToken::table(begin_position, owner.clone()));
            }
        }
        Ok(expression)
    }

    fn parse_expression(&mut self, base: &mut StatementBase) -> Result<SqlExpression> {
        let begin_position = self.lexer_engine.current_token().begin_position;
        if self.lexer_engine.matches(Symbol::LeftParen) {
            self.lexer_engine
                .skip_parentheses(&mut base.parameters_index)?;
            self.skip_rest_composite_expression(base)?;
            return Ok(self.ignore_expression(begin_position));
        }
        let literals = self.lexer_engine.current_literals().to_string();
        let expression = self.primary_expression(base, &literals);
        self.lexer_engine.advance()?;
        if self.lexer_engine.skip_if(&[Symbol::Dot.into()])? {
            let property = self.lexer_engine.current_literals().to_string();
            self.lexer_engine.advance()?;
            if self.skip_if_composite_expression(base)? {
                return Ok(self.ignore_expression(begin_position));
            }
            return Ok(SqlExpression::Property {
                owner: literals,
                name: property,
            });
        }
        if self.lexer_engine.matches(Symbol::LeftParen) {
            self.lexer_engine
                .skip_parentheses(&mut base.parameters_index)?;
            self.skip_rest_composite_expression(base)?;
            return Ok(self.ignore_expression(begin_position));
        }
        if self.skip_if_composite_expression(base)? {
            return Ok(self.ignore_expression(begin_position));
        }
        Ok(expression)
    }

    fn primary_expression(&self, base: &mut StatementBase, literals: &str) -> SqlExpression {
        let number = match self.lexer_engine.current_type() {
            TokenType::Symbol(Symbol::Question) => {
                return SqlExpression::Placeholder {
                    index: base.increase_parameters_index(),
                }
            }
            TokenType::Literal(Literal::Chars) => {
                return SqlExpression::Text {
                    value: literals.to_string(),
                }
            }
            TokenType::Literal(Literal::Identifier) => {
                return SqlExpression::Identifier {
                    name: exact_value(literals),
                }
            }
            TokenType::Literal(Literal::Int) => parse_integer(literals, 10),
            TokenType::Literal(Literal::Float) => parse_decimal(literals),
            TokenType::Literal(Literal::Hex) => parse_integer(literals, 16),
            _ => None,
        };
        match number {
            Some(value) => SqlExpression::Number { value },
            None => SqlExpression::Ignore {
                expression: literals.to_string(),
            },
        }
    }

    /// Текст от `begin_position` до конца последнего прочитанного токена
    fn ignore_expression(&self, begin_position: usize) -> SqlExpression {
        let end_position = self.lexer_engine.previous_end_position();
        SqlExpression::Ignore {
            expression: self
                .lexer_engine
                .substring(begin_position, end_position)
                .trim()
                .to_string(),
        }
    }

    fn skip_if_composite_expression(&mut self, base: &mut StatementBase) -> Result<bool> {
        if self.lexer_engine.matches_any(COMPOSITE_OPERATORS) {
            self.skip_rest_composite_expression(base)?;
            return Ok(true);
        }
        if is_negative_number(self.lexer_engine) {
            self.lexer_engine.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Пропускает цепочку `оператор операнд`
    fn skip_rest_composite_expression(&mut self, base: &mut StatementBase) -> Result<()> {
        loop {
            if self.lexer_engine.skip_if(COMPOSITE_OPERATORS)? {
                skip_operand(self.lexer_engine, base)?;
            } else {
                return Ok(());
            }
        }
    }
}

/// Отрицательный числовой литерал сразу после операнда продолжает выражение:
/// `a-2` сканируется как `a` и `-2`
pub fn is_negative_number(lexer_engine: &LexerEngine) -> bool {
    lexer_engine.matches_any(&[Literal::Int.into(), Literal::Float.into()])
        && lexer_engine.current_literals().starts_with('-')
}

/// Пропускает один операнд составного выражения вместе со скобками вызова
pub fn skip_operand(lexer_engine: &mut LexerEngine, base: &mut StatementBase) -> Result<()> {
    if lexer_engine.matches(Symbol::Question) {
        base.increase_parameters_index();
    }
    if lexer_engine.matches(Symbol::LeftParen) {
        lexer_engine.skip_parentheses(&mut base.parameters_index)?;
        return Ok(());
    }
    lexer_engine.advance()?;
    lexer_engine.skip_parentheses(&mut base.parameters_index)?;
    Ok(())
}
