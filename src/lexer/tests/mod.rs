//! Тесты для лексического анализатора shardsql

pub mod engine_tests;
pub mod lexer_tests;
