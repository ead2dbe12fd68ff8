//! Тесты для правил шардирования и метаданных

pub mod rule_tests;
