//! INSERT

use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::ast::{InsertStatement, InsertValueKind, ItemsToken, SqlStatement, SqlToken};
use crate::parser::clause::insert_columns::insert_table_name;
use crate::parser::clause::{
    InsertColumnsClauseParser, InsertDuplicateKeyUpdateClauseParser, InsertIntoClauseParser,
    InsertSetClauseParser, InsertValuesClauseParser,
};
use crate::parser::statement::SqlParser;
use crate::rule::{ShardingRule, ShardingTableMetaData};

pub struct InsertStatementParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
    table_metadata: &'a dyn ShardingTableMetaData,
}

impl<'a> InsertStatementParser<'a> {
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

    /// Добавляет колонку генерируемого ключа в список колонок.
    ///
    /// Нужна только для формы VALUES, если ни одна колонка выражения не
    /// является ключом.
    fn process_generated_key(&self, statement: &mut InsertStatement) -> Result<()> {
        let table_name = insert_table_name(statement)?;
        let Some(key) = self.sharding_rule.generate_key_column(&table_name) else {
            return Ok(());
        };
        if statement.generate_key_column_index.is_some()
            || !statement.generated_key_conditions.is_empty()
            || statement
                .columns
                .iter()
                .any(|column| column.name.eq_ignore_ascii_case(&key))
        {
            return Ok(());
        }
        if statement.insert_values.is_empty()
            || statement
                .insert_values
                .iter()
                .any(|value| value.kind != InsertValueKind::Values)
        {
            return Ok(());
        }
        log::debug!("Appending generated key column {} to {}", key, table_name);
        let existing = statement.base.sql_tokens.iter_mut().find_map(|token| match token {
            SqlToken::Items(items_token) => Some(items_token),
            _ => None,
        });
        match existing {
            Some(items_token) => items_token.items.push(key),
            None => {
                let mut items_token = ItemsToken::new(statement.columns_list_last_position);
                items_token.items.push(key);
                statement.base.add_sql_token(SqlToken::Items(items_token));
            }
        }
        Ok(())
    }
}

impl SqlParser for InsertStatementParser<'_> {
    fn parse(&mut self) -> Result<SqlStatement> {
        self.lexer_engine.advance()?;
        let mut statement = InsertStatement::new();
        InsertIntoClauseParser::new(self.lexer_engine, self.sharding_rule).parse(&mut statement)?;
        InsertColumnsClauseParser::new(self.lexer_engine, self.sharding_rule, self.table_metadata)
            .parse(&mut statement)?;
        if self
            .lexer_engine
            .matches_any(&[Keyword::Select.into(), Symbol::LeftParen.into()])
        {
            log::warn!("Rejecting INSERT ... SELECT");
            return Err(self.lexer_engine.unsupported_error());
        }
        InsertValuesClauseParser::new(self.lexer_engine, self.sharding_rule).parse(&mut statement)?;
        InsertSetClauseParser::new(self.lexer_engine, self.sharding_rule).parse(&mut statement)?;
        InsertDuplicateKeyUpdateClauseParser::new(self.lexer_engine, self.sharding_rule)
            .parse(&mut statement)?;
        self.process_generated_key(&mut statement)?;
        Ok(SqlStatement::Insert(statement))
    }
}
