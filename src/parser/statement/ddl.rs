//! DDL: таблицы и индексы

use crate::common::utils::exact_value;
use crate::common::{Error, Result};
use crate::lexer::{keyword_types, Keyword, LexerEngine, Symbol};
use crate::parser::ast::{DdlKind, DdlStatement, SqlStatement, SqlToken, SqlType, StatementBase};
use crate::parser::clause::TableReferencesClauseParser;
use crate::parser::statement::SqlParser;
use crate::rule::ShardingRule;

/// Разбирает начало DDL; первое ключевое слово уже прочитано фабрикой
pub struct DdlStatementParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
    primary: Keyword,
}

impl<'a> DdlStatementParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule, primary: Keyword) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
            primary,
        }
    }

    fn table_kind(&self) -> Option<DdlKind> {
        match self.primary {
            Keyword::Create => Some(DdlKind::CreateTable),
            Keyword::Alter => Some(DdlKind::AlterTable),
            Keyword::Drop => Some(DdlKind::DropTable),
            Keyword::Truncate => Some(DdlKind::TruncateTable),
            _ => None,
        }
    }

    fn index_kind(&self) -> Option<DdlKind> {
        match self.primary {
            Keyword::Create => Some(DdlKind::CreateIndex),
            Keyword::Alter => Some(DdlKind::AlterIndex),
            Keyword::Drop => Some(DdlKind::DropIndex),
            _ => None,
        }
    }

    /// `IF [NOT] EXISTS`
    fn skip_if_exists(&mut self) -> Result<()> {
        if self.lexer_engine.skip_if(&[Keyword::If.into()])? {
            self.lexer_engine.skip_if(&[Keyword::Not.into()])?;
            self.lexer_engine.expect(Keyword::Exists)?;
        }
        Ok(())
    }

    fn parse_table(&mut self, base: &mut StatementBase) -> Result<()> {
        self.skip_if_exists()?;
        loop {
            TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule)
                .parse_single_table_without_alias(base)?;
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                return Ok(());
            }
        }
    }

    fn parse_index(&mut self, base: &mut StatementBase, kind: DdlKind) -> Result<()> {
        self.skip_if_exists()?;
        let begin_position = self.lexer_engine.current_token().begin_position;
        let index_name = exact_value(self.lexer_engine.current_literals());
        self.lexer_engine.advance()?;
        let has_table = match kind {
            DdlKind::CreateIndex => {
                self.lexer_engine.expect(Keyword::On)?;
                true
            }
            DdlKind::DropIndex => self.lexer_engine.skip_if(&[Keyword::On.into()])?,
            _ => false,
        };
        let table_name = if has_table {
            TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule)
                .parse_single_table_without_alias(base)?;
            base.tables.single_table_name().map(str::to_string)
        } else {
            None
        };
        base.add_sql_token(SqlToken::Index {
            begin_position,
            index_name,
            table_name,
        });
        Ok(())
    }
}

impl SqlParser for DdlStatementParser<'_> {
    fn parse(&mut self) -> Result<SqlStatement> {
        self.lexer_engine
            .skip_until(&keyword_types(&[Keyword::Table, Keyword::Index]))?;
        let mut base = StatementBase::new(SqlType::Ddl);
        let kind = if self.lexer_engine.skip_if(&[Keyword::Table.into()])? {
            let kind = self.table_kind().ok_or_else(|| self.lexer_engine.unsupported_error())?;
            self.parse_table(&mut base)?;
            kind
        } else if self.lexer_engine.matches(Keyword::Index) {
            let kind = self.index_kind().ok_or_else(|| self.lexer_engine.unsupported_error())?;
            self.lexer_engine.advance()?;
            self.parse_index(&mut base, kind)?;
            kind
        } else {
            return Err(Error::syntax(
                self.lexer_engine.current_token().begin_position,
                format!("expected TABLE or INDEX after {}", self.primary),
            ));
        };
        log::debug!("Parsed DDL statement {:?}", kind);
        Ok(SqlStatement::Ddl(DdlStatement { base, kind }))
    }
}
