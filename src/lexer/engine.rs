//! Курсор над потоком токенов
//!
//! `LexerEngine` предоставляет примитивы навигации, которыми пользуются все
//! парсеры. Сам он грамматику SQL не знает.

use crate::common::{Error, Result};
use crate::dialect::{DatabaseType, Dialect};
use crate::lexer::lexer::Lexer;
use crate::lexer::token::{Assist, Symbol, Token, TokenType};

/// Движок лексического анализа
pub struct LexerEngine {
    lexer: Lexer,
}

impl LexerEngine {
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer }
    }

    /// Создает движок для SQL заданного диалекта
    pub fn for_dialect(database_type: DatabaseType, sql: &str) -> Self {
        Self::new(Lexer::new(sql, Dialect::of(database_type)))
    }

    /// Переходит к следующему токену
    pub fn advance(&mut self) -> Result<()> {
        self.lexer.next_token()
    }

    pub fn current_token(&self) -> &Token {
        self.lexer.current_token()
    }

    pub fn current_type(&self) -> TokenType {
        self.lexer.current_token().token_type
    }

    pub fn current_literals(&self) -> &str {
        &self.lexer.current_token().literals
    }

    /// Следующий токен без сдвига курсора
    pub fn peek(&self) -> Result<Token> {
        self.lexer.peek_token()
    }

    pub fn is_end(&self) -> bool {
        self.current_type() == TokenType::Assist(Assist::End)
    }

    /// Совпадает ли текущий токен с одним из типов
    pub fn matches_any(&self, token_types: &[TokenType]) -> bool {
        token_types.contains(&self.current_type())
    }

    pub fn matches(&self, token_type: impl Into<TokenType>) -> bool {
        self.current_type() == token_type.into()
    }

    /// Пропускает текущий токен, если он совпадает с одним из типов
    pub fn skip_if(&mut self, token_types: &[TokenType]) -> Result<bool> {
        if self.matches_any(token_types) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Пропускает все подряд идущие токены из набора
    pub fn skip_all(&mut self, token_types: &[TokenType]) -> Result<()> {
        while self.matches_any(token_types) {
            self.advance()?;
        }
        Ok(())
    }

    /// Пропускает токены до первого из набора или до конца ввода
    pub fn skip_until(&mut self, token_types: &[TokenType]) -> Result<()> {
        while !self.matches_any(token_types) && !self.is_end() {
            self.advance()?;
        }
        Ok(())
    }

    /// Требует токен заданного типа и переходит за него
    pub fn expect(&mut self, token_type: impl Into<TokenType>) -> Result<()> {
        let token_type = token_type.into();
        if self.current_type() != token_type {
            return Err(self.syntax_error(&format!("expected {}", token_type)));
        }
        self.advance()
    }

    /// Ошибка, если текущий токен совпадает с одним из типов
    pub fn unsupported_if(&self, token_types: &[TokenType]) -> Result<()> {
        if self.matches_any(token_types) {
            return Err(self.unsupported_error());
        }
        Ok(())
    }

    /// Ошибка, если ни один из типов не был пропущен
    pub fn unsupported_if_not_skipped(&mut self, token_types: &[TokenType]) -> Result<()> {
        if !self.skip_if(token_types)? {
            return Err(self.unsupported_error());
        }
        Ok(())
    }

    /// Пропускает сбалансированные скобки, начиная с текущей `(`.
    ///
    /// Каждый встреченный `?` увеличивает `parameters_index`. Возвращает
    /// текст между внешними скобками; курсор оказывается за закрывающей `)`.
    /// Если текущий токен не `(`, возвращает пустую строку.
    pub fn skip_parentheses(&mut self, parameters_index: &mut usize) -> Result<String> {
        if !self.matches(Symbol::LeftParen) {
            return Ok(String::new());
        }
        let begin = self.current_token().end_position;
        let mut count = 0usize;
        self.advance()?;
        loop {
            match self.current_type() {
                TokenType::Symbol(Symbol::Question) => *parameters_index += 1,
                TokenType::Symbol(Symbol::LeftParen) => count += 1,
                TokenType::Symbol(Symbol::RightParen) => {
                    if count == 0 {
                        let end = self.current_token().begin_position;
                        self.advance()?;
                        return Ok(self.lexer.substring(begin, end));
                    }
                    count -= 1;
                }
                TokenType::Assist(Assist::End) => {
                    return Ok(self.lexer.substring(begin, self.lexer.len()));
                }
                _ => {}
            }
            self.advance()?;
        }
    }

    /// Конец предыдущего токена
    pub fn previous_end_position(&self) -> usize {
        self.lexer.previous_end_position()
    }

    /// Подстрока исходного SQL
    pub fn substring(&self, begin: usize, end: usize) -> String {
        self.lexer.substring(begin, end)
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.lexer.dialect()
    }

    pub fn database_type(&self) -> DatabaseType {
        self.lexer.dialect().database_type
    }

    /// Синтаксическая ошибка на текущем токене
    pub fn syntax_error(&self, message: &str) -> Error {
        let token = self.current_token();
        Error::syntax(
            token.begin_position,
            format!(
                "{}, found {} '{}'",
                message, token.token_type, token.literals
            ),
        )
    }

    /// Ошибка неподдерживаемой конструкции на текущем токене
    pub fn unsupported_error(&self) -> Error {
        let token = self.current_token();
        log::warn!(
            "Rejecting unsupported {} '{}' at offset {}",
            token.token_type,
            token.literals,
            token.begin_position
        );
        Error::unsupported(
            token.begin_position,
            format!("{} '{}'", token.token_type, token.literals),
        )
    }
}
