//! Лексический анализ SQL для shardsql
//!
//! Классификатор символов, словарь ключевых слов, однократный сканер токенов,
//! лексер с позицией и курсор `LexerEngine`, через который работают парсеры.

pub mod char_type;
pub mod dictionary;
pub mod engine;
pub mod keyword;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use dictionary::Dictionary;
pub use engine::LexerEngine;
pub use keyword::Keyword;
pub use lexer::Lexer;
pub use token::{keyword_types, Assist, Literal, Symbol, Token, TokenType};
pub use tokenizer::Tokenizer;
