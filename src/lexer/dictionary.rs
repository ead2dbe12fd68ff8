//! Словарь ключевых слов диалекта

use crate::common::{Error, Result};
use crate::lexer::keyword::{Keyword, DEFAULT_KEYWORDS};
use crate::lexer::token::TokenType;
use std::collections::HashMap;

/// Неизменяемое отображение написания ключевого слова в тип токена.
///
/// Строится один раз на диалект: общие ключевые слова плюс слова диалекта.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tokens: HashMap<String, TokenType>,
}

impl Dictionary {
    /// Создает словарь из общих ключевых слов и ключевых слов диалекта
    pub fn new(dialect_keywords: &[Keyword]) -> Self {
        let tokens = DEFAULT_KEYWORDS
            .iter()
            .chain(dialect_keywords)
            .map(|k| (k.as_str().to_string(), TokenType::Keyword(*k)))
            .collect();
        Self { tokens }
    }

    /// Находит тип токена, иначе возвращает `default_type`
    pub fn find_token_type_or(&self, literals: &str, default_type: TokenType) -> TokenType {
        self.tokens
            .get(&literals.to_ascii_uppercase())
            .copied()
            .unwrap_or(default_type)
    }

    /// Находит тип токена, который обязан присутствовать в словаре
    pub fn find_token_type(&self, literals: &str) -> Result<TokenType> {
        self.tokens
            .get(&literals.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| Error::internal(format!("'{}' is not a registered keyword", literals)))
    }

    pub fn contains(&self, keyword: Keyword) -> bool {
        self.tokens.contains_key(keyword.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Ключевые слова словаря в алфавитном порядке
    pub fn keywords(&self) -> Vec<Keyword> {
        let mut keywords: Vec<Keyword> = self.tokens.values().filter_map(|t| t.keyword()).collect();
        keywords.sort_by_key(|k| k.as_str());
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::Literal;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = Dictionary::new(&[]);
        assert_eq!(
            dictionary.find_token_type_or("select", Literal::Identifier.into()),
            TokenType::Keyword(Keyword::Select)
        );
        assert_eq!(
            dictionary.find_token_type_or("SeLeCt", Literal::Identifier.into()),
            TokenType::Keyword(Keyword::Select)
        );
    }

    #[test]
    fn test_unknown_literal_falls_back() {
        let dictionary = Dictionary::new(&[]);
        assert_eq!(
            dictionary.find_token_type_or("t_order", Literal::Identifier.into()),
            TokenType::Literal(Literal::Identifier)
        );
        assert!(dictionary.find_token_type("t_order").is_err());
        assert_eq!(dictionary.find_token_type("order").unwrap(), Keyword::Order.into());
    }

    #[test]
    fn test_dialect_keywords_overlay_defaults() {
        let default = Dictionary::new(&[]);
        let mysql = Dictionary::new(&[Keyword::Limit, Keyword::Show]);
        assert!(!default.contains(Keyword::Limit));
        assert!(mysql.contains(Keyword::Limit));
        assert!(mysql.contains(Keyword::Select));
        assert_eq!(mysql.len(), default.len() + 2);
        assert!(mysql.keywords().contains(&Keyword::Show));
    }
}
