//! DAL: USE, DESCRIBE и SHOW

use crate::common::utils::exact_value;
use crate::common::Result;
use crate::lexer::{keyword_types, Keyword, LexerEngine};
use crate::parser::ast::{DalKind, DalStatement, SqlStatement, SqlType, StatementBase};
use crate::parser::clause::TableReferencesClauseParser;
use crate::parser::statement::SqlParser;
use crate::rule::ShardingRule;

pub struct DalStatementParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> DalStatementParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    fn parse_table(&mut self, base: &mut StatementBase) -> Result<()> {
        TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule)
            .parse_single_table_without_alias(base)
    }

    /// `FROM` или `IN` перед именем
    fn skip_from(&mut self) -> Result<bool> {
        self.lexer_engine
            .skip_if(&keyword_types(&[Keyword::From, Keyword::In]))
    }

    fn parse_show(&mut self, base: &mut StatementBase) -> Result<DalKind> {
        self.lexer_engine.skip_if(&[Keyword::Full.into()])?;
        if self.lexer_engine.skip_if(&[Keyword::Databases.into()])? {
            return Ok(DalKind::ShowDatabases);
        }
        if self.lexer_engine.skip_if(&[Keyword::Tables.into()])? {
            let mut schema = None;
            if self.skip_from()? {
                schema = Some(exact_value(self.lexer_engine.current_literals()));
                self.lexer_engine.advance()?;
            }
            return Ok(DalKind::ShowTables { schema });
        }
        if self
            .lexer_engine
            .skip_if(&keyword_types(&[Keyword::Columns, Keyword::Fields]))?
        {
            self.skip_from()?;
            self.parse_table(base)?;
            return Ok(DalKind::ShowColumns);
        }
        if self.lexer_engine.skip_if(&[Keyword::Create.into()])? {
            self.lexer_engine.expect(Keyword::Table)?;
            self.parse_table(base)?;
            return Ok(DalKind::ShowCreateTable);
        }
        if self
            .lexer_engine
            .skip_if(&keyword_types(&[Keyword::Index, Keyword::Indexes, Keyword::Keys]))?
        {
            self.skip_from()?;
            self.parse_table(base)?;
            return Ok(DalKind::ShowIndex);
        }
        Ok(DalKind::ShowOther)
    }
}

impl SqlParser for DalStatementParser<'_> {
    fn parse(&mut self) -> Result<SqlStatement> {
        let mut base = StatementBase::new(SqlType::Dal);
        let kind = match self.lexer_engine.current_type().keyword() {
            Some(Keyword::Use) => {
                self.lexer_engine.advance()?;
                let schema = exact_value(self.lexer_engine.current_literals());
                self.lexer_engine.advance()?;
                DalKind::Use { schema }
            }
            Some(Keyword::Desc) | Some(Keyword::Describe) => {
                self.lexer_engine.advance()?;
                self.parse_table(&mut base)?;
                DalKind::Describe
            }
            Some(Keyword::Show) => {
                self.lexer_engine.advance()?;
                self.parse_show(&mut base)?
            }
            _ => return Err(self.lexer_engine.unsupported_error()),
        };
        Ok(SqlStatement::Dal(DalStatement { base, kind }))
    }
}
