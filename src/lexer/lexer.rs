//! Лексический анализатор SQL для shardsql
//!
//! Владеет позицией сканирования и текущим токеном. Диалектные различия
//! (хинты, комментарии `#`, переменные, строки `N'...'`, кавычки
//! идентификаторов) берутся из [`LexerRules`] диалекта.

use crate::common::{Error, Result};
use crate::dialect::{Dialect, LexerRules};
use crate::lexer::char_type::{is_alphabet, is_digital, is_symbol, is_whitespace, EOI};
use crate::lexer::token::{Assist, Token};
use crate::lexer::tokenizer::Tokenizer;

/// Лексический анализатор SQL
pub struct Lexer {
    /// Исходный текст
    input: Vec<char>,
    /// Диалект
    dialect: &'static Dialect,
    /// Смещение, с которого будет сканироваться следующий токен
    offset: usize,
    /// Текущий токен
    current_token: Token,
    /// Конец предыдущего токена
    previous_end_position: usize,
}

impl Lexer {
    /// Создает новый лексический анализатор
    pub fn new(input: &str, dialect: &'static Dialect) -> Self {
        Self {
            input: input.chars().collect(),
            dialect,
            offset: 0,
            current_token: Token::new(Assist::Error.into(), "", 0, 0),
            previous_end_position: 0,
        }
    }

    /// Сканирует следующий токен и делает его текущим
    pub fn next_token(&mut self) -> Result<()> {
        let token = self.scan_token(self.offset)?;
        log::trace!("Scanned token {}", token);
        self.previous_end_position = self.current_token.end_position;
        self.offset = token.end_position;
        self.current_token = token;
        Ok(())
    }

    /// Возвращает следующий токен, не сдвигая позицию
    pub fn peek_token(&self) -> Result<Token> {
        self.scan_token(self.offset)
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn previous_end_position(&self) -> usize {
        self.previous_end_position
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// Длина входного текста в символах
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Подстрока исходного текста `[begin, end)` в символах
    pub fn substring(&self, begin: usize, end: usize) -> String {
        let end = end.min(self.input.len());
        let begin = begin.min(end);
        self.input[begin..end].iter().collect()
    }

    fn rules(&self) -> &LexerRules {
        &self.dialect.lexer
    }

    fn scan_token(&self, offset: usize) -> Result<Token> {
        let offset = self.skip_ignored_token(offset)?;
        let tokenizer = Tokenizer::new(&self.input, &self.dialect.dictionary, offset);
        let current = self.char_at(offset);
        if self.is_variable_begin(offset) {
            Ok(tokenizer.scan_variable())
        } else if self.is_n_chars_begin(offset) {
            let mut token =
                Tokenizer::new(&self.input, &self.dialect.dictionary, offset + 1).scan_chars()?;
            token.begin_position = offset;
            Ok(token)
        } else if self.is_identifier_begin(current) {
            tokenizer.scan_identifier()
        } else if self.is_hex_decimal_begin(offset) {
            Ok(tokenizer.scan_hex_decimal())
        } else if self.is_number_begin(offset) {
            Ok(tokenizer.scan_number())
        } else if is_symbol(current) {
            tokenizer.scan_symbol()
        } else if is_chars_begin(current) {
            tokenizer.scan_chars()
        } else if offset >= self.input.len() {
            Ok(Token::new(Assist::End.into(), "", offset, offset))
        } else {
            Err(Error::lexical(
                offset,
                format!("illegal input character '{}'", current),
            ))
        }
    }

    /// Пропускает хинты, пробелы и комментарии, пока они встречаются
    fn skip_ignored_token(&self, offset: usize) -> Result<usize> {
        let mut offset = offset;
        loop {
            let tokenizer = Tokenizer::new(&self.input, &self.dialect.dictionary, offset);
            let next = if let Some(hint_begin) = self.hint_begin_at(offset) {
                tokenizer.skip_hint(hint_begin.chars().count())?
            } else if self.is_comment_begin(offset) {
                tokenizer.skip_comment()?
            } else if is_whitespace(self.char_at(offset)) {
                tokenizer.skip_whitespace()
            } else {
                return Ok(offset);
            };
            offset = next;
        }
    }

    fn hint_begin_at(&self, offset: usize) -> Option<&'static str> {
        self.rules()
            .hint_begin
            .filter(|hint| self.starts_with(offset, hint))
    }

    fn is_comment_begin(&self, offset: usize) -> bool {
        let current = self.char_at(offset);
        let next = self.char_at(offset + 1);
        (current == '/' && next == '/')
            || (current == '-' && next == '-')
            || (current == '/' && next == '*')
            || (self.rules().pound_comment && current == '#')
    }

    fn is_variable_begin(&self, offset: usize) -> bool {
        self.rules().variables && self.char_at(offset) == '@'
    }

    fn is_n_chars_begin(&self, offset: usize) -> bool {
        self.rules().n_chars
            && matches!(self.char_at(offset), 'N' | 'n')
            && self.char_at(offset + 1) == '\''
    }

    fn is_identifier_begin(&self, ch: char) -> bool {
        is_alphabet(ch) || matches!(ch, '`' | '_' | '$') || self.rules().identifier_quotes.contains(&ch)
    }

    fn is_hex_decimal_begin(&self, offset: usize) -> bool {
        self.char_at(offset) == '0' && matches!(self.char_at(offset + 1), 'x' | 'X')
    }

    /// Начало числа. `.2` и `-.2` считаются числом, только если перед ними
    /// не стоит символ идентификатора: `a.2` это свойство, а не `a` и `.2`.
    fn is_number_begin(&self, offset: usize) -> bool {
        let current = self.char_at(offset);
        let next = self.char_at(offset + 1);
        if is_digital(current) {
            return true;
        }
        if current == '.' {
            return is_digital(next) && !self.is_identifier_before(offset);
        }
        if current == '-' {
            return is_digital(next)
                || (next == '.'
                    && is_digital(self.char_at(offset + 2))
                    && !self.is_identifier_before(offset));
        }
        false
    }

    fn is_identifier_before(&self, offset: usize) -> bool {
        offset > 0 && self.is_identifier_begin(self.char_at(offset - 1))
    }

    fn starts_with(&self, offset: usize, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(i, ch)| self.char_at(offset + i) == ch)
    }

    fn char_at(&self, offset: usize) -> char {
        self.input.get(offset).copied().unwrap_or(EOI)
    }
}

fn is_chars_begin(ch: char) -> bool {
    ch == '\'' || ch == '"'
}
