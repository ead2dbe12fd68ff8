//! Токены SQL для shardsql

use crate::lexer::keyword::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Символы и операторы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semi,
    Comma,
    Dot,
    DoubleDot,
    Plus,
    Sub,
    Star,
    Slash,
    Question,
    Eq,
    Gt,
    Lt,
    Bang,
    Tilde,
    Caret,
    Percent,
    Colon,
    DoubleColon,
    ColonEq,
    LtEq,
    GtEq,
    LtEqGt,
    LtGt,
    BangEq,
    BangGt,
    BangLt,
    Amp,
    Bar,
    DoubleAmp,
    DoubleBar,
    DoubleLt,
    DoubleGt,
    MonkeysAt,
    Pound,
}

impl Symbol {
    /// Все символы
    pub const ALL: &'static [Symbol] = &[
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBrace,
        Symbol::RightBrace,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::Semi,
        Symbol::Comma,
        Symbol::Dot,
        Symbol::DoubleDot,
        Symbol::Plus,
        Symbol::Sub,
        Symbol::Star,
        Symbol::Slash,
        Symbol::Question,
        Symbol::Eq,
        Symbol::Gt,
        Symbol::Lt,
        Symbol::Bang,
        Symbol::Tilde,
        Symbol::Caret,
        Symbol::Percent,
        Symbol::Colon,
        Symbol::DoubleColon,
        Symbol::ColonEq,
        Symbol::LtEq,
        Symbol::GtEq,
        Symbol::LtEqGt,
        Symbol::LtGt,
        Symbol::BangEq,
        Symbol::BangGt,
        Symbol::BangLt,
        Symbol::Amp,
        Symbol::Bar,
        Symbol::DoubleAmp,
        Symbol::DoubleBar,
        Symbol::DoubleLt,
        Symbol::DoubleGt,
        Symbol::MonkeysAt,
        Symbol::Pound,
    ];

    /// Написание символа в SQL
    pub fn literals(&self) -> &'static str {
        match self {
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Semi => ";",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::DoubleDot => "..",
            Symbol::Plus => "+",
            Symbol::Sub => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Question => "?",
            Symbol::Eq => "=",
            Symbol::Gt => ">",
            Symbol::Lt => "<",
            Symbol::Bang => "!",
            Symbol::Tilde => "~",
            Symbol::Caret => "^",
            Symbol::Percent => "%",
            Symbol::Colon => ":",
            Symbol::DoubleColon => "::",
            Symbol::ColonEq => ":=",
            Symbol::LtEq => "<=",
            Symbol::GtEq => ">=",
            Symbol::LtEqGt => "<=>",
            Symbol::LtGt => "<>",
            Symbol::BangEq => "!=",
            Symbol::BangGt => "!>",
            Symbol::BangLt => "!<",
            Symbol::Amp => "&",
            Symbol::Bar => "|",
            Symbol::DoubleAmp => "&&",
            Symbol::DoubleBar => "||",
            Symbol::DoubleLt => "<<",
            Symbol::DoubleGt => ">>",
            Symbol::MonkeysAt => "@",
            Symbol::Pound => "#",
        }
    }

    /// Находит символ по точному написанию
    pub fn from_literals(literals: &str) -> Option<Symbol> {
        Symbol::ALL.iter().copied().find(|s| s.literals() == literals)
    }
}

/// Виды литералов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Int,
    Float,
    Hex,
    Chars,
    Identifier,
    Variable,
}

/// Служебные маркеры потока токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assist {
    End,
    Error,
}

/// Тип токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Keyword(Keyword),
    Symbol(Symbol),
    Literal(Literal),
    Assist(Assist),
}

impl TokenType {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenType::Keyword(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, TokenType::Symbol(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenType::Literal(_))
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenType::Keyword(keyword) => Some(*keyword),
            _ => None,
        }
    }
}

impl From<Keyword> for TokenType {
    fn from(keyword: Keyword) -> Self {
        TokenType::Keyword(keyword)
    }
}

impl From<Symbol> for TokenType {
    fn from(symbol: Symbol) -> Self {
        TokenType::Symbol(symbol)
    }
}

impl From<Literal> for TokenType {
    fn from(literal: Literal) -> Self {
        TokenType::Literal(literal)
    }
}

impl From<Assist> for TokenType {
    fn from(assist: Assist) -> Self {
        TokenType::Assist(assist)
    }
}

/// Переводит список ключевых слов в типы токенов
pub fn keyword_types(keywords: &[Keyword]) -> Vec<TokenType> {
    keywords.iter().map(|k| TokenType::Keyword(*k)).collect()
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Keyword(keyword) => write!(f, "{}", keyword.as_str()),
            TokenType::Symbol(symbol) => write!(f, "'{}'", symbol.literals()),
            TokenType::Literal(literal) => match literal {
                Literal::Int => write!(f, "INT"),
                Literal::Float => write!(f, "FLOAT"),
                Literal::Hex => write!(f, "HEX"),
                Literal::Chars => write!(f, "CHARS"),
                Literal::Identifier => write!(f, "IDENTIFIER"),
                Literal::Variable => write!(f, "VARIABLE"),
            },
            TokenType::Assist(Assist::End) => write!(f, "END"),
            TokenType::Assist(Assist::Error) => write!(f, "ERROR"),
        }
    }
}

/// Токен SQL
///
/// `end_position` указывает на первый символ после токена. Для строковых
/// литералов `literals` не содержит кавычек, поэтому начало токена
/// хранится отдельно.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Тип токена
    pub token_type: TokenType,
    /// Текст токена
    pub literals: String,
    /// Смещение первого символа токена
    pub begin_position: usize,
    /// Смещение первого символа после токена
    pub end_position: usize,
}

impl Token {
    /// Создает новый токен
    pub fn new(
        token_type: TokenType,
        literals: impl Into<String>,
        begin_position: usize,
        end_position: usize,
    ) -> Self {
        Self {
            token_type,
            literals: literals.into(),
            begin_position,
            end_position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' [{}..{})", self.token_type, self.literals, self.begin_position, self.end_position)
    }
}
