//! SELECT

use crate::common::Result;
use crate::lexer::{keyword_types, Keyword, LexerEngine, Symbol};
use crate::parser::ast::{SelectStatement, SqlStatement};
use crate::parser::clause::{
    AliasExpressionParser, DistinctClauseParser, GroupByClauseParser, HavingClauseParser,
    LimitClauseParser, OrderByClauseParser, SelectListClauseParser, SelectRestClauseParser,
    TableReferencesClauseParser, WhereClauseParser,
};
use crate::parser::statement::derived::DerivedColumnInjector;
use crate::parser::statement::SqlParser;
use crate::rule::{ShardingRule, ShardingTableMetaData};

pub struct SelectStatementParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
    table_metadata: &'a dyn ShardingTableMetaData,
}

impl<'a> SelectStatementParser<'a> {
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

    /// Разбирает один уровень SELECT; подзапросы FROM разбираются рекурсивно
    /// с общим счетчиком параметров
    fn parse_internal(&mut self, parameters_index: usize) -> Result<SelectStatement> {
        let mut statement = SelectStatement::new();
        statement.base.parameters_index = parameters_index;
        self.lexer_engine.advance()?;
        DistinctClauseParser::new(self.lexer_engine).parse()?;
        let select_options = keyword_types(self.lexer_engine.dialect().parser.select_options);
        self.lexer_engine.skip_all(&select_options)?;
        LimitClauseParser::new(self.lexer_engine).parse_top(&mut statement)?;
        SelectListClauseParser::new(self.lexer_engine, self.sharding_rule).parse(&mut statement)?;
        self.lexer_engine.unsupported_if(&[Keyword::Into.into()])?;
        self.parse_from(&mut statement)?;
        WhereClauseParser::new(self.lexer_engine, self.sharding_rule).parse(&mut statement.base)?;
        GroupByClauseParser::new(self.lexer_engine).parse(&mut statement)?;
        HavingClauseParser::new(self.lexer_engine).parse()?;
        OrderByClauseParser::new(self.lexer_engine).parse(&mut statement)?;
        LimitClauseParser::new(self.lexer_engine).parse(&mut statement)?;
        SelectRestClauseParser::new(self.lexer_engine).parse()?;
        Ok(statement)
    }

    fn parse_from(&mut self, statement: &mut SelectStatement) -> Result<()> {
        if !self.lexer_engine.skip_if(&[Keyword::From.into()])? {
            return Ok(());
        }
        if !self.is_sub_query()? {
            return TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule)
                .parse(&mut statement.base, false);
        }
        self.lexer_engine.advance()?;
        let sub_query = self.parse_internal(statement.base.parameters_index)?;
        statement.base.parameters_index = sub_query.base.parameters_index;
        statement.sub_query_statement = Some(Box::new(sub_query));
        self.lexer_engine.expect(Symbol::RightParen)?;
        AliasExpressionParser::new(self.lexer_engine).parse_table_alias()?;

        let mut table_references = TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule);
        table_references.parse_join_table(&mut statement.base)?;
        if self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
            TableReferencesClauseParser::new(self.lexer_engine, self.sharding_rule)
                .parse(&mut statement.base, false)?;
        }
        Ok(())
    }

    fn is_sub_query(&self) -> Result<bool> {
        Ok(self.lexer_engine.matches(Symbol::LeftParen)
            && self.lexer_engine.peek()?.token_type == Keyword::Select.into())
    }
}

impl SqlParser for SelectStatementParser<'_> {
    fn parse(&mut self) -> Result<SqlStatement> {
        let statement = self.parse_internal(0)?;
        let mut statement = statement.merge_sub_query_statement();
        DerivedColumnInjector::new(self.table_metadata).inject(&mut statement);
        Ok(SqlStatement::Select(statement))
    }
}
