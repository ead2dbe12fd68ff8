//! Ссылки на таблицы: FROM, JOIN и таблица UPDATE/DELETE/INSERT

use crate::common::utils::exact_value;
use crate::common::{Error, Result};
use crate::lexer::{keyword_types, Keyword, LexerEngine, Symbol, TokenType};
use crate::parser::ast::{SqlToken, StatementBase, Table};
use crate::parser::clause::alias::AliasExpressionParser;
use crate::parser::clause::expression::BasicExpressionParser;
use crate::rule::ShardingRule;

const JOIN_KEYWORDS: &[Keyword] = &[
    Keyword::Inner,
    Keyword::Outer,
    Keyword::Left,
    Keyword::Right,
    Keyword::Full,
    Keyword::Cross,
    Keyword::Natural,
    Keyword::Join,
];

const JOIN_CONDITION_OPERATORS: &[TokenType] = &[
    TokenType::Symbol(Symbol::Eq),
    TokenType::Symbol(Symbol::Gt),
    TokenType::Symbol(Symbol::Lt),
    TokenType::Symbol(Symbol::GtEq),
    TokenType::Symbol(Symbol::LtEq),
    TokenType::Symbol(Symbol::LtGt),
    TokenType::Symbol(Symbol::BangEq),
];

pub struct TableReferencesClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
    sharding_rule: &'a dyn ShardingRule,
}

impl<'a> TableReferencesClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine, sharding_rule: &'a dyn ShardingRule) -> Self {
        Self {
            lexer_engine,
            sharding_rule,
        }
    }

    /// Разбирает ссылки на таблицы, разделенные запятыми или JOIN.
    ///
    /// При `is_single_table_only` допускается только одна таблица.
    pub fn parse(&mut self, base: &mut StatementBase, is_single_table_only: bool) -> Result<()> {
        let begin_position = self.lexer_engine.current_token().begin_position;
        loop {
            self.parse_table_factor(base, is_single_table_only)?;
            self.parse_join_table(base)?;
            if !self.lexer_engine.skip_if(&[Symbol::Comma.into()])? {
                break;
            }
        }
        if is_single_table_only && !base.tables.is_single_table() {
            log::warn!("Rejecting multiple-table statement at offset {}", begin_position);
            return Err(Error::unsupported(
                begin_position,
                "Cannot support Multiple-Table.",
            ));
        }
        Ok(())
    }

    fn parse_table_factor(&mut self, base: &mut StatementBase, is_single_table_only: bool) -> Result<()> {
        let begin_position = self.lexer_engine.current_token().begin_position;
        let literals = self.lexer_engine.current_literals().to_string();
        self.lexer_engine.advance()?;
        if self.lexer_engine.matches(Symbol::Dot) {
            return Err(Error::unsupported(
                begin_position,
                format!("Cannot support SQL for `schema.table`: {}", literals),
            ));
        }
        let table_name = exact_value(&literals);
        let alias = AliasExpressionParser::new(self.lexer_engine).parse_table_alias()?;
        if is_single_table_only
            || self.sharding_rule.contains_table(&table_name)
            || self.sharding_rule.has_default_data_source()
        {
            base.add_sql_token(SqlToken::table(begin_position, literals));
            base.tables.add(Table::new(table_name, alias));
        }
        self.skip_index_hints(base)
    }

    /// `USE/IGNORE/FORCE INDEX|KEY [FOR JOIN|ORDER BY|GROUP BY] (...)`
    fn skip_index_hints(&mut self, base: &mut StatementBase) -> Result<()> {
        if !self.lexer_engine.dialect().parser.index_hints {
            return Ok(());
        }
        let hints = keyword_types(&[Keyword::Use, Keyword::Ignore, Keyword::Force]);
        while self.lexer_engine.skip_if(&hints)? {
            self.lexer_engine
                .skip_if(&keyword_types(&[Keyword::Index, Keyword::Key]))?;
            if self.lexer_engine.skip_if(&[Keyword::For.into()])? {
                self.lexer_engine.advance()?;
                self.lexer_engine.skip_if(&[Keyword::By.into()])?;
            }
            self.lexer_engine
                .skip_parentheses(&mut base.parameters_index)?;
        }
        Ok(())
    }

    /// Разбирает цепочку JOIN после таблицы
    pub fn parse_join_table(&mut self, base: &mut StatementBase) -> Result<()> {
        while self.parse_join_type()? {
            if self.lexer_engine.matches(Symbol::LeftParen) {
                log::warn!("Rejecting sub query in JOIN");
                return Err(Error::unsupported(
                    self.lexer_engine.current_token().begin_position,
                    "Cannot support sub query for join",
                ));
            }
            self.parse_table_factor(base, false)?;
            self.parse_join_condition(base)?;
        }
        Ok(())
    }

    fn parse_join_type(&mut self) -> Result<bool> {
        let mut join_keywords = keyword_types(JOIN_KEYWORDS);
        join_keywords.extend(keyword_types(self.lexer_engine.dialect().parser.join_keywords));
        if !self.lexer_engine.matches_any(&join_keywords) {
            return Ok(false);
        }
        self.lexer_engine.skip_all(&join_keywords)?;
        Ok(true)
    }

    fn parse_join_condition(&mut self, base: &mut StatementBase) -> Result<()> {
        if self.lexer_engine.skip_if(&[Keyword::On.into()])? {
            loop {
                BasicExpressionParser::new(self.lexer_engine).parse(base)?;
                if !self.lexer_engine.skip_if(JOIN_CONDITION_OPERATORS)? {
                    self.lexer_engine.expect(Symbol::Eq)?;
                }
                BasicExpressionParser::new(self.lexer_engine).parse(base)?;
                if !self.lexer_engine.skip_if(&[Keyword::And.into()])? {
                    break;
                }
            }
        } else if self.lexer_engine.skip_if(&[Keyword::Using.into()])? {
            self.lexer_engine
                .skip_parentheses(&mut base.parameters_index)?;
        }
        Ok(())
    }

    /// Одна таблица без псевдонима, например в `INSERT INTO t`
    pub fn parse_single_table_without_alias(&mut self, base: &mut StatementBase) -> Result<()> {
        let begin_position = self.lexer_engine.current_token().begin_position;
        let literals = self.lexer_engine.current_literals().to_string();
        self.lexer_engine.advance()?;
        if self.lexer_engine.matches(Symbol::Dot) {
            return Err(Error::unsupported(
                begin_position,
                format!("Cannot support SQL for `schema.table`: {}", literals),
            ));
        }
        base.add_sql_token(SqlToken::table(begin_position, literals.clone()));
        base.tables.add(Table::new(exact_value(&literals), None));
        Ok(())
    }
}
