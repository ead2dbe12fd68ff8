//! Классификация символов SQL

pub use crate::common::constants::EOI;

/// Пробельный символ (управляющие символы, пробел и неразрывные пробелы)
pub fn is_whitespace(ch: char) -> bool {
    (ch <= '\u{20}' && ch != EOI) || ('\u{7F}'..='\u{A0}').contains(&ch)
}

/// Маркер конца входных данных
pub fn is_end_of_input(ch: char) -> bool {
    ch == EOI
}

pub fn is_alphabet(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_digital(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Символ, с которого может начинаться оператор или разделитель
pub fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '^'
            | '='
            | '>'
            | '<'
            | '~'
            | '!'
            | '?'
            | '&'
            | '|'
            | '.'
            | ':'
            | '#'
            | ','
            | ';'
    )
}
