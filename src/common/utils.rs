//! Утилиты для shardsql

use serde::{Deserialize, Serialize};

/// Числовое значение SQL литерала
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    Integer(i64),
    Decimal(f64),
}

impl NumberValue {
    /// Целая часть значения
    pub fn as_i64(&self) -> i64 {
        match self {
            NumberValue::Integer(value) => *value,
            NumberValue::Decimal(value) => *value as i64,
        }
    }
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberValue::Integer(value) => write!(f, "{}", value),
            NumberValue::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// Убирает кавычки идентификаторов и строк: `` ` `` `"` `'` `[` `]`
pub fn exact_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '`' | '\'' | '"'))
        .collect()
}

/// Убирает пробелы из выражения для сравнения
pub fn exact_expression(value: &str) -> String {
    value.chars().filter(|c| *c != ' ').collect()
}

/// Разбирает целочисленный литерал в системе счисления 10 или 16.
///
/// Шестнадцатеричный литерал имеет вид `0x1F` или `0x-1F`. Десятичное
/// значение, не помещающееся в i64, возвращается как Decimal.
pub fn parse_integer(literals: &str, radix: u32) -> Option<NumberValue> {
    if radix == 16 {
        let digits = literals
            .strip_prefix("0x")
            .or_else(|| literals.strip_prefix("0X"))?;
        let (negative, digits) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits),
        };
        let value = i64::from_str_radix(digits, 16).ok()?;
        return Some(NumberValue::Integer(if negative { -value } else { value }));
    }
    match literals.parse::<i64>() {
        Ok(value) => Some(NumberValue::Integer(value)),
        Err(_) => literals.parse::<f64>().ok().map(NumberValue::Decimal),
    }
}

/// Разбирает вещественный литерал, допуская суффиксы `f`, `F`, `d`, `D`
pub fn parse_decimal(literals: &str) -> Option<NumberValue> {
    let trimmed = literals.trim_end_matches(['f', 'F', 'd', 'D']);
    trimmed.parse::<f64>().ok().map(NumberValue::Decimal)
}
