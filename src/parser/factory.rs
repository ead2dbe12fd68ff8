//! Выбор парсера по первым токенам выражения

use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine, TokenType};
use crate::parser::statement::{
    DalStatementParser, DclStatementParser, DdlStatementParser, DeleteStatementParser,
    InsertStatementParser, SelectStatementParser, SqlParser, TclStatementParser,
    UpdateStatementParser,
};
use crate::rule::{ShardingRule, ShardingTableMetaData};

const DDL_PRIMARY: &[Keyword] = &[Keyword::Create, Keyword::Alter, Keyword::Drop, Keyword::Truncate];
const DDL_SECONDARY: &[Keyword] = &[Keyword::Table, Keyword::Index, Keyword::Unique, Keyword::Temporary];
const DCL_PRIMARY: &[Keyword] = &[Keyword::Grant, Keyword::Revoke, Keyword::Deny];
const DCL_PRINCIPAL_PRIMARY: &[Keyword] = &[Keyword::Create, Keyword::Alter, Keyword::Drop, Keyword::Rename];
const DCL_PRINCIPAL: &[Keyword] = &[Keyword::User, Keyword::Role, Keyword::Login];

pub struct SqlParserFactory;

impl SqlParserFactory {
    /// Создает парсер для выражения, на первом токене которого стоит курсор.
    ///
    /// DDL и DCL распознаются по паре первых ключевых слов, поэтому для них
    /// курсор сдвигается на второй токен.
    pub fn new_instance<'a>(
        lexer_engine: &'a mut LexerEngine,
        sharding_rule: &'a dyn ShardingRule,
        table_metadata: &'a dyn ShardingTableMetaData,
    ) -> Result<Box<dyn SqlParser + 'a>> {
        let first = lexer_engine.current_type().keyword();
        log::debug!("Dispatching statement starting with {}", lexer_engine.current_type());
        match first {
            Some(Keyword::Select) => {
                return Ok(Box::new(SelectStatementParser::new(
                    lexer_engine,
                    sharding_rule,
                    table_metadata,
                )))
            }
            Some(Keyword::Insert) => {
                return Ok(Box::new(InsertStatementParser::new(
                    lexer_engine,
                    sharding_rule,
                    table_metadata,
                )))
            }
            Some(Keyword::Update) => return Ok(Box::new(UpdateStatementParser::new(lexer_engine, sharding_rule))),
            Some(Keyword::Delete) => return Ok(Box::new(DeleteStatementParser::new(lexer_engine, sharding_rule))),
            Some(Keyword::Set | Keyword::Commit | Keyword::Rollback | Keyword::Savepoint | Keyword::Begin) => {
                return Ok(Box::new(TclStatementParser::new(lexer_engine)))
            }
            Some(Keyword::Use | Keyword::Desc | Keyword::Describe | Keyword::Show) => {
                return Ok(Box::new(DalStatementParser::new(lexer_engine, sharding_rule)))
            }
            _ => {}
        }
        let Some(primary) = first else {
            return Err(lexer_engine.unsupported_error());
        };
        lexer_engine.advance()?;
        let secondary = lexer_engine.current_type();
        if is_ddl(primary, secondary) {
            return Ok(Box::new(DdlStatementParser::new(lexer_engine, sharding_rule, primary)));
        }
        if is_dcl(primary, secondary) {
            return Ok(Box::new(DclStatementParser::new(lexer_engine, sharding_rule, primary)));
        }
        Err(lexer_engine.unsupported_error())
    }
}

fn is_ddl(primary: Keyword, secondary: TokenType) -> bool {
    DDL_PRIMARY.contains(&primary) && secondary.keyword().is_some_and(|k| DDL_SECONDARY.contains(&k))
}

fn is_dcl(primary: Keyword, secondary: TokenType) -> bool {
    DCL_PRIMARY.contains(&primary)
        || (DCL_PRINCIPAL_PRIMARY.contains(&primary)
            && secondary.keyword().is_some_and(|k| DCL_PRINCIPAL.contains(&k)))
}
