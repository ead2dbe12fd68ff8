//! Однократное сканирование токена с заданного смещения
//!
//! Каждый метод `Tokenizer` является чистой функцией от (текст, смещение):
//! методы пропуска возвращают новое смещение, методы сканирования возвращают
//! токен, `end_position` которого и есть новое смещение.

use crate::common::constants::{
    COMMENT_AND_HINT_END_SYMBOL_LENGTH, COMMENT_BEGIN_SYMBOL_LENGTH, HEX_BEGIN_SYMBOL_LENGTH,
    POUND_COMMENT_BEGIN_SYMBOL_LENGTH,
};
use crate::common::{Error, Result};
use crate::lexer::char_type::{is_alphabet, is_digital, is_symbol, is_whitespace, EOI};
use crate::lexer::dictionary::Dictionary;
use crate::lexer::keyword::Keyword;
use crate::lexer::token::{Literal, Symbol, Token, TokenType};

/// Сканер одного токена
pub struct Tokenizer<'a> {
    input: &'a [char],
    dictionary: &'a Dictionary,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [char], dictionary: &'a Dictionary, offset: usize) -> Self {
        Self {
            input,
            dictionary,
            offset,
        }
    }

    /// Пропускает пробельные символы
    pub fn skip_whitespace(&self) -> usize {
        let mut length = 0;
        while is_whitespace(self.char_at(length)) {
            length += 1;
        }
        self.offset + length
    }

    /// Пропускает комментарий `--`, `//`, `#` или `/* */`
    pub fn skip_comment(&self) -> Result<usize> {
        let current = self.char_at(0);
        let next = self.char_at(1);
        if (current == '/' && next == '/') || (current == '-' && next == '-') {
            Ok(self.skip_single_line_comment(COMMENT_BEGIN_SYMBOL_LENGTH))
        } else if current == '#' {
            Ok(self.skip_single_line_comment(POUND_COMMENT_BEGIN_SYMBOL_LENGTH))
        } else if current == '/' && next == '*' {
            self.skip_multi_line(COMMENT_BEGIN_SYMBOL_LENGTH, "comment")
        } else {
            Ok(self.offset)
        }
    }

    /// Пропускает хинт, открывающая последовательность которого имеет длину `begin_length`
    pub fn skip_hint(&self, begin_length: usize) -> Result<usize> {
        self.skip_multi_line(begin_length, "hint")
    }

    fn skip_single_line_comment(&self, begin_length: usize) -> usize {
        let mut length = begin_length;
        while self.char_at(length) != '\n' && self.char_at(length) != EOI {
            length += 1;
        }
        (self.offset + length + 1).min(self.input.len())
    }

    fn skip_multi_line(&self, begin_length: usize, what: &str) -> Result<usize> {
        let mut length = begin_length;
        loop {
            if self.offset + length >= self.input.len() {
                return Err(Error::lexical(self.offset, format!("unterminated {}", what)));
            }
            if self.char_at(length) == '*' && self.char_at(length + 1) == '/' {
                return Ok(self.offset + length + COMMENT_AND_HINT_END_SYMBOL_LENGTH);
            }
            length += 1;
        }
    }

    /// Сканирует переменную `@name` или `@@name`
    pub fn scan_variable(&self) -> Token {
        let mut length = 1;
        if self.char_at(1) == '@' {
            length += 1;
        }
        while is_variable_char(self.char_at(length)) {
            length += 1;
        }
        self.token(Literal::Variable.into(), length)
    }

    /// Сканирует идентификатор или ключевое слово
    pub fn scan_identifier(&self) -> Result<Token> {
        let current = self.char_at(0);
        if matches!(current, '`' | '"' | '[') {
            let terminator = if current == '[' { ']' } else { current };
            let length = self.length_until_terminated_char(terminator)?;
            return Ok(self.token(Literal::Identifier.into(), length));
        }
        let mut length = 0;
        while is_identifier_char(self.char_at(length)) {
            length += 1;
        }
        let literals = self.substring(length);
        let token_type = if is_ambiguous_identifier(&literals) {
            if self.is_followed_by_by(length) {
                self.dictionary.find_token_type(&literals)?
            } else {
                Literal::Identifier.into()
            }
        } else {
            self.dictionary
                .find_token_type_or(&literals, Literal::Identifier.into())
        };
        Ok(Token::new(token_type, literals, self.offset, self.offset + length))
    }

    /// `BY` после пробелов; допускается `ORDER SIBLINGS BY`
    fn is_followed_by_by(&self, length: usize) -> bool {
        let mut i = self.skip_whitespaces(length);
        if self.is_word_at(i, "SIBLINGS") {
            i = self.skip_whitespaces(i + "SIBLINGS".len());
        }
        self.is_word_at(i, "BY")
    }

    fn skip_whitespaces(&self, mut step: usize) -> usize {
        while is_whitespace(self.char_at(step)) {
            step += 1;
        }
        step
    }

    fn is_word_at(&self, step: usize, word: &str) -> bool {
        word.chars()
            .enumerate()
            .all(|(i, ch)| self.char_at(step + i).eq_ignore_ascii_case(&ch))
            && !is_identifier_char(self.char_at(step + word.len()))
    }

    /// Сканирует шестнадцатеричное число `0x1F`, `0x-1F`
    pub fn scan_hex_decimal(&self) -> Token {
        let mut length = HEX_BEGIN_SYMBOL_LENGTH;
        if self.char_at(length) == '-' {
            length += 1;
        }
        while self.char_at(length).is_ascii_hexdigit() {
            length += 1;
        }
        self.token(Literal::Hex.into(), length)
    }

    /// Сканирует целое или вещественное число
    pub fn scan_number(&self) -> Token {
        let mut length = 0;
        if self.char_at(0) == '-' {
            length += 1;
        }
        length += self.digital_length(length);
        let mut is_float = false;
        if self.char_at(length) == '.' {
            is_float = true;
            length += 1;
            length += self.digital_length(length);
        }
        if matches!(self.char_at(length), 'e' | 'E') {
            is_float = true;
            length += 1;
            if matches!(self.char_at(length), '+' | '-') {
                length += 1;
            }
            length += self.digital_length(length);
        }
        if matches!(self.char_at(length), 'f' | 'F' | 'd' | 'D') {
            is_float = true;
            length += 1;
        }
        let literal = if is_float { Literal::Float } else { Literal::Int };
        self.token(literal.into(), length)
    }

    fn digital_length(&self, from: usize) -> usize {
        let mut length = 0;
        while is_digital(self.char_at(from + length)) {
            length += 1;
        }
        length
    }

    /// Сканирует строку в кавычках; литерал токена не содержит кавычек
    pub fn scan_chars(&self) -> Result<Token> {
        let terminator = self.char_at(0);
        let length = self.length_until_terminated_char(terminator)?;
        let literals: String = self.input[self.offset + 1..self.offset + length - 1].iter().collect();
        Ok(Token::new(
            Literal::Chars.into(),
            literals,
            self.offset,
            self.offset + length,
        ))
    }

    /// Сканирует самый длинный известный символ, сокращая серию справа
    pub fn scan_symbol(&self) -> Result<Token> {
        let mut length = 0;
        while is_symbol(self.char_at(length)) {
            length += 1;
        }
        while length > 0 {
            let literals = self.substring(length);
            if let Some(symbol) = Symbol::from_literals(&literals) {
                return Ok(Token::new(
                    TokenType::Symbol(symbol),
                    literals,
                    self.offset,
                    self.offset + length,
                ));
            }
            length -= 1;
        }
        Err(Error::lexical(
            self.offset,
            format!("illegal symbol '{}'", self.char_at(0)),
        ))
    }

    /// Длина конструкции в кавычках с учетом закрывающего символа.
    /// Удвоенный терминатор считается экранированным символом.
    fn length_until_terminated_char(&self, terminator: char) -> Result<usize> {
        let mut length = 1;
        loop {
            if self.offset + length >= self.input.len() {
                return Err(Error::lexical(
                    self.offset,
                    format!("missing terminating {} character", terminator),
                ));
            }
            if self.char_at(length) == terminator {
                if self.char_at(length + 1) != terminator {
                    return Ok(length + 1);
                }
                length += 1;
            }
            length += 1;
        }
    }

    fn char_at(&self, step: usize) -> char {
        self.input.get(self.offset + step).copied().unwrap_or(EOI)
    }

    fn substring(&self, length: usize) -> String {
        let end = (self.offset + length).min(self.input.len());
        self.input[self.offset..end].iter().collect()
    }

    fn token(&self, token_type: TokenType, length: usize) -> Token {
        Token::new(
            token_type,
            self.substring(length),
            self.offset,
            self.offset + length,
        )
    }
}

/// Символ, допустимый внутри неэкранированного идентификатора
pub fn is_identifier_char(ch: char) -> bool {
    is_alphabet(ch) || is_digital(ch) || matches!(ch, '_' | '$' | '#')
}

fn is_variable_char(ch: char) -> bool {
    is_identifier_char(ch) || ch == '.'
}

fn is_ambiguous_identifier(literals: &str) -> bool {
    literals.eq_ignore_ascii_case(Keyword::Order.as_str())
        || literals.eq_ignore_ascii_case(Keyword::Group.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(sql: &str) -> Vec<char> {
        sql.chars().collect()
    }

    #[test]
    fn test_skip_single_line_comment_consumes_newline() {
        let dictionary = Dictionary::new(&[]);
        let input = chars("-- note\nSELECT");
        let offset = Tokenizer::new(&input, &dictionary, 0).skip_comment().unwrap();
        assert_eq!(offset, 8);
    }

    #[test]
    fn test_unterminated_multi_line_comment() {
        let dictionary = Dictionary::new(&[]);
        let input = chars("/* never closed");
        let error = Tokenizer::new(&input, &dictionary, 0).skip_comment().unwrap_err();
        assert!(error.is_lexical());
        assert_eq!(error.offset(), Some(0));
    }

    #[test]
    fn test_scan_number_variants() {
        let dictionary = Dictionary::new(&[]);
        for (sql, literal, expected) in [
            ("123 ", Literal::Int, "123"),
            ("-5,", Literal::Int, "-5"),
            ("1.5)", Literal::Float, "1.5"),
            ("1e10", Literal::Float, "1e10"),
            ("2E-3", Literal::Float, "2E-3"),
            ("3f", Literal::Float, "3f"),
            ("1e", Literal::Float, "1e"),
            ("1..2", Literal::Float, "1."),
        ] {
            let input = chars(sql);
            let token = Tokenizer::new(&input, &dictionary, 0).scan_number();
            assert_eq!(token.token_type, TokenType::Literal(literal), "{}", sql);
            assert_eq!(token.literals, expected);
        }
    }

    #[test]
    fn test_doubled_terminator_is_escape() {
        let dictionary = Dictionary::new(&[]);
        let input = chars("'it''s' x");
        let token = Tokenizer::new(&input, &dictionary, 0).scan_chars().unwrap();
        assert_eq!(token.literals, "it''s");
        assert_eq!(token.end_position, 7);
    }

    #[test]
    fn test_symbol_shrinks_from_right() {
        let dictionary = Dictionary::new(&[]);
        let input = chars("<=(");
        let token = Tokenizer::new(&input, &dictionary, 0).scan_symbol().unwrap();
        assert_eq!(token.token_type, Symbol::LtEq.into());
        assert_eq!(token.end_position, 2);
    }
}
