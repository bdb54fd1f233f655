use crate::error::PResult;

use super::{lexer::Lexer, ExprParser, Expression};

/// Builds the full expression tree and leaves evaluation to the caller.
pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            lexer: Lexer::new(src),
        }
    }
}

impl<'src> ExprParser<'src> for Parser<'src> {
    fn lexer(&self) -> &Lexer<'src> {
        &self.lexer
    }

    fn lexer_mut(&mut self) -> &mut Lexer<'src> {
        &mut self.lexer
    }

    fn reduce(&self, expr: Box<Expression>) -> PResult<Box<Expression>> {
        Ok(expr)
    }
}
