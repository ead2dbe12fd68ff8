//! Хвост SELECT

use crate::common::Result;
use crate::lexer::{keyword_types, LexerEngine};

/// Операции над множествами (UNION и подобные) не поддерживаются
pub struct SelectRestClauseParser<'a> {
    lexer_engine: &'a mut LexerEngine,
}

impl<'a> SelectRestClauseParser<'a> {
    pub fn new(lexer_engine: &'a mut LexerEngine) -> Self {
        Self { lexer_engine }
    }

    pub fn parse(&mut self) -> Result<()> {
        let set_operations = keyword_types(self.lexer_engine.dialect().parser.set_operations);
        self.lexer_engine.unsupported_if(&set_operations)
    }
}
