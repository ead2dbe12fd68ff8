//! Константы для shardsql

/// Символ-маркер конца входных данных
pub const EOI: char = '\u{1A}';

/// Длина открывающей последовательности комментария (`--`, `//`, `/*`)
pub const COMMENT_BEGIN_SYMBOL_LENGTH: usize = 2;

/// Длина открывающей последовательности комментария MySQL (`#`)
pub const POUND_COMMENT_BEGIN_SYMBOL_LENGTH: usize = 1;

/// Длина закрывающей последовательности комментария и хинта (`*/`)
pub const COMMENT_AND_HINT_END_SYMBOL_LENGTH: usize = 2;

/// Длина префикса шестнадцатеричного числа (`0x`)
pub const HEX_BEGIN_SYMBOL_LENGTH: usize = 2;

/// Имя конфигурационного файла по умолчанию
pub const DEFAULT_CONFIG_FILE: &str = "shardsql.toml";

/// Емкость кэша результатов разбора по умолчанию
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "info";
