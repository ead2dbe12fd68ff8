//! DISTINCT

use crate::common::Result;
use crate::lexer::{Keyword, LexerEngine, TokenType};

/// `ALL` пропускается, `DISTINCT` и его синонимы не поддерживаются
pub struct DistinctClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> DistinctClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    pub fn parse(&mut self) -> Result<()> {
        self.lexer_engine.skip_if(&[Keyword::All.into()])?;
        let mut distinct: Vec<TokenType> = vec![Keyword::Distinct.into()];
        distinct.extend(
            self.lexer_engine
                .dialect()
                .parser
                .distinct_synonyms
                .iter()
                .map(|k| TokenType::Keyword(*k)),
        );
        self.lexer_engine.unsupported_if(&distinct)
    }
}
