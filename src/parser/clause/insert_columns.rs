//! Список колонок INSERT

use crate::common::{Error, Result};
use crate::lexer::{LexerEngine, Symbol};
use crate::parser::ast::{Column, InsertStatement, ItemsToken, SqlToken};
use crate::parser::clause::expression::BasicExpressionParser;
use crate::rule::{ShardingRule, ShardingTableMetaData};

pub struct InsertColumnsClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
    table_metadata: &'a dyn ShardingTableMetaData,
}

impl<'a> InsertColumnsClauseParser<'a> {
    pub fn new(
        lexer_engine: &'a mut LexerEngine,
        sharding_rule: &'a dyn ShardingRule,
        table_metadata: &'a dyn ShardingTableMetaData,
    ) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
            table_metadata,
        }
    }

    /// Разбирает явный список колонок или строит его по метаданным таблицы.
    ///
    /// Синтезированный список выражается токенами `(`, колонки и `)` на
    /// позиции перед VALUES.
    pub fn parse(&mut self, statement: &mut InsertStatement) -> Result<()> {
        let table_name = insert_table_name(statement)?;
        if self.lexer_engine.skip_if(&[Symbol::LeftParen.into()])? {
            self.parse_explicit_columns(statement, &table_name)
        } else if self.table_metadata.contains_table(&table_name) {
            self.synthesize_columns(statement, &table_name);
            Ok(())
        } else {
            Ok(())
        }
    }

    fn parse_explicit_columns(&mut self, statement: &mut InsertStatement, table_name: &str) -> Result<()> {
        let generate_key_column = self.sharding_rule.generate_key_column(table_name);
        loop {
            let begin_position = self.lexer_engine.current_token().begin_position;
            let expression = BasicExpressionParser::new(self.lexer_engine).parse(&mut statement.base)?;
            let column_name = expression.column_name().ok_or_else(|| {
                Error::syntax(begin_position, format!("expected column name, found {:?}", expression))
            })?;
            if generate_key_column
                .as_deref()
                .is_some_and(|key| key.eq_ignore_ascii_case(&column_name))
            {
                statement.generate_key_column_index = Some(statement.columns.len());
            }
            statement.columns.push(Column::new(column_name, table_name));
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        statement.columns_list_last_position = self.lexer_engine.current_token().begin_position;
        self.lexer_engine.expect(Symbol::RightParen)
    }

    fn synthesize_columns(&mut self, statement: &mut InsertStatement, table_name: &str) {
        let position = self
            .lexer_engine
            .current_token()
            .begin_position
            .saturating_sub(1);
        let mut items_token = ItemsToken::new(position);
        items_token.first_of_items_special = true;
        let generate_key_column = self.sharding_rule.generate_key_column(table_name);
        for column_name in self.table_metadata.column_names(table_name) {
            if generate_key_column
                .as_deref()
                .is_some_and(|key| key.eq_ignore_ascii_case(&column_name))
            {
                statement.generate_key_column_index = Some(statement.columns.len());
            }
            items_token.items.push(column_name.clone());
            statement.columns.push(Column::new(column_name, table_name));
        }
        log::debug!(
            "Synthesized {} insert columns for table {}",
            items_token.items.len(),
            table_name
        );
        statement.base.add_sql_token(SqlToken::InsertColumn {
            begin_position: position,
            column_name: "(".to_string(),
        });
        statement.base.add_sql_token(SqlToken::Items(items_token));
        statement.base.add_sql_token(SqlToken::InsertColumn {
            begin_position: position,
            column_name: ")".to_string(),
        });
        statement.columns_list_last_position = position;
    }
}

/// Имя единственной таблицы INSERT
pub fn insert_table_name(statement: &InsertStatement) -> Result<String> {
    statement
        .base
        .tables
        .single_table_name()
        .map(str::to_string)
        .ok_or_else(|| Error::internal("INSERT statement without table"))
}
