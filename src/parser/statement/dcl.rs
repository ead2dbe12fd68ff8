//! DCL: права и учетные записи

use crate::common::utils::exact_value;
use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::ast::{DclKind, DclPrincipal, DclStatement, SqlStatement, SqlToken, SqlType, StatementBase, Table};
use crate::parser::statement::SqlParser;
use crate::rule::ShardingRule;

pub struct DclStatementParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
    primary: Keyword,
}

impl<'a> DclStatementParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule, primary: Keyword) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
            primary,
        }
    }

    /// `... ON [TABLE] [schema.]table`; `*` и `schema.*` таблицы не дают
    fn parse_privilege_target(&mut self, base: &mut StatementBase) -> Result<()> {
        self.lexer_engine.skip_until(&[Keyword::On.into()])?;
        if !self.lexer_engine.skip_if(&[Keyword::On.into()])? {
            return Ok(());
        }
        self.lexer_engine.skip_if(&[Keyword::Table.into()])?;
        if self.lexer_engine.skip_if(&[Symbol::Star.into()])? {
            return Ok(());
        }
        let mut begin_position = self.lexer_engine.current_token().begin_position;
        let mut literals = self.lexer_engine.current_literals().to_string();
        self.lexer_engine.advance()?;
        if self.lexer_engine.skip_if(&[Symbol::Dot.into()])? {
            if self.lexer_engine.skip_if(&[Symbol::Star.into()])? {
                return Ok(());
            }
            begin_position = self.lexer_engine.current_token().begin_position;
            literals = self.lexer_engine.current_literals().to_string();
            self.lexer_engine.advance()?;
        }
        let table_name = exact_value(&literals);
        if self.sharding_rule.contains_table(&table_name) || self.sharding_rule.has_default_data_source() {
            base.add_sql_token(SqlToken::table(begin_position, literals));
            base.tables.add(Table::new(table_name, None));
        }
        Ok(())
    }

    fn parse_principal(&mut self) -> Result<Option<DclPrincipal>> {
        let principal = match self.lexer_engine.current_type().keyword() {
            Some(Keyword::User) => Some(DclPrincipal::User),
            Some(Keyword::Role) => Some(DclPrincipal::Role),
            Some(Keyword::Login) => Some(DclPrincipal::Login),
            _ => None,
        };
        if principal.is_some() {
            self.lexer_engine.advance()?;
        }
        Ok(principal)
    }
}

impl SqlParser for DclStatementParser<'_> {
    fn parse(&mut self) -> Result<SqlStatement> {
        let mut base = StatementBase::new(SqlType::Dcl);
        let kind = match self.primary {
            Keyword::Grant => DclKind::Grant,
            Keyword::Revoke => DclKind::Revoke,
            Keyword::Deny => DclKind::Deny,
            Keyword::Create => DclKind::Create,
            Keyword::Alter => DclKind::Alter,
            Keyword::Drop => DclKind::Drop,
            Keyword::Rename => DclKind::Rename,
            _ => return Err(self.lexer_engine.unsupported_error()),
        };
        let principal = match kind {
            DclKind::Grant | DclKind::Revoke | DclKind::Deny => {
                self.parse_privilege_target(&mut base)?;
                None
            }
            _ => self.parse_principal()?,
        };
        Ok(SqlStatement::Dcl(DclStatement {
            base,
            kind,
            principal,
        }))
    }
}
