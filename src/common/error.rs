//! Обработка ошибок для shardsql

use thiserror::Error;

/// Основной тип ошибки для shardsql
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Лексическая ошибка: символ не распознан или литерал не закрыт
    #[error("SQL lexical error at offset {offset}: {message}")]
    Lexical { offset: usize, message: String },

    /// Синтаксическая ошибка: текущий токен не соответствует грамматике
    #[error("SQL syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// Конструкция распознана, но не поддерживается при шардировании
    #[error("Unsupported SQL at offset {offset}: {message}")]
    Unsupported { offset: usize, message: String },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для shardsql
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает лексическую ошибку
    pub fn lexical(offset: usize, message: impl Into<String>) -> Self {
        Self::Lexical {
            offset,
            message: message.into(),
        }
    }

    /// Создает синтаксическую ошибку
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Создает ошибку неподдерживаемой конструкции
    pub fn unsupported(offset: usize, message: impl Into<String>) -> Self {
        Self::Unsupported {
            offset,
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Смещение в исходном SQL для ошибок разбора
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Lexical { offset, .. }
            | Self::Syntax { offset, .. }
            | Self::Unsupported { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
