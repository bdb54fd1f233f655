mod eager_parser;
mod expr;
mod lexer;
mod parser;
mod token;

#[cfg(test)]
pub(crate) mod arbitrary;

pub use expr::Expression;
pub use token::{Operator, Precedence};

pub(crate) use eager_parser::EagerParser;
pub(crate) use parser::Parser;

use std::io::Read;

use crate::error::{Error, PResult};
use lexer::Lexer;
use token::Token;

/// Precedence-climbing descent over the grammar
///
/// ```text
/// expr      := binary(1)
/// binary(p) := unary { OP(prec >= p) binary(prec + 1) }*
/// unary     := ('+' | '-') unary | primary
/// primary   := NUMBER | '(' expr ')'
/// ```
///
/// Implementors decide what happens to every unary or binary node right
/// after it is built through [`ExprParser::reduce`].
pub(crate) trait ExprParser<'src> {
    fn lexer(&self) -> &Lexer<'src>;
    fn lexer_mut(&mut self) -> &mut Lexer<'src>;
    fn reduce(&self, expr: Box<Expression>) -> PResult<Box<Expression>>;

    /// Parses one complete expression and requires the input to end there.
    fn parse_all(&mut self) -> PResult<Box<Expression>> {
        let expr = match self.parse_expr() {
            Ok(expr) => expr,
            Err(err) => return Err(err.context(format!("could not parse {}", self.lexer()))),
        };

        match self.lexer().token() {
            Token::Eof => Ok(expr),
            _ => Err(Error::syntax(format!("unexpected {}", self.lexer()))),
        }
    }

    fn parse_expr(&mut self) -> PResult<Box<Expression>> {
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_prec: Precedence) -> PResult<Box<Expression>> {
        let mut lhs = self
            .parse_unary()
            .map_err(|err| err.context(format!("could not parse operand at {}", self.lexer())))?;

        // Outer loop walks the levels down to `min_prec`, the inner one folds
        // every operator of the current level, which keeps chains left-associative.
        let mut prec = self.lexer().token().precedence();
        while prec >= min_prec {
            while let Token::Op(op) = self.lexer().token() {
                if op.precedence() != prec {
                    break;
                }
                self.lexer_mut().advance();

                let rhs = self.parse_binary(prec + 1).map_err(|err| {
                    err.context(format!(
                        "could not parse right operand of '{op}' at {}",
                        self.lexer()
                    ))
                })?;

                lhs = self.reduce(Expression::binary(lhs, op, rhs))?;
            }
            prec -= 1;
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> PResult<Box<Expression>> {
        match self.lexer().token() {
            Token::Op(op) if op.is_sign() => {
                self.lexer_mut().advance();

                let operand = self.parse_unary().map_err(|err| {
                    err.context(format!(
                        "could not parse operand of sign '{op}' at {}",
                        self.lexer()
                    ))
                })?;

                self.reduce(Expression::unary(op, operand))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> PResult<Box<Expression>> {
        match self.lexer().token() {
            Token::Int(_) | Token::Float(_) => {
                let value = self.lexer().number()?;
                self.lexer_mut().advance();
                Ok(Box::new(Expression::Literal(value)))
            }
            Token::LParen => {
                self.lexer_mut().advance();

                let expr = self.parse_expr().map_err(|err| {
                    err.context(format!(
                        "could not parse parenthesized expression at {}",
                        self.lexer()
                    ))
                })?;

                if self.lexer().token() != Token::RParen {
                    return Err(Error::syntax(format!("got {}, want ')'", self.lexer())));
                }
                self.lexer_mut().advance();

                Ok(expr)
            }
            _ => Err(Error::syntax(format!("unexpected {}", self.lexer()))),
        }
    }
}

/// Parses `src` into an expression tree without evaluating it.
pub fn parse_str(src: &str) -> PResult<Box<Expression>> {
    Parser::new(src).parse_all()
}

/// Parses `src` while evaluating every subexpression as soon as it is
/// complete. The result is always an [`Expression::Literal`].
pub fn eval_parse_str(src: &str) -> PResult<Box<Expression>> {
    EagerParser::new(src).parse_all()
}

/// Reads the whole of `reader` and parses it with [`parse_str`].
pub fn parse<R: Read>(reader: R) -> PResult<Box<Expression>> {
    let src = read_source(reader)?;
    parse_str(&src)
}

/// Reads the whole of `reader` and parses it with [`eval_parse_str`].
pub fn eval_parse<R: Read>(reader: R) -> PResult<Box<Expression>> {
    let src = read_source(reader)?;
    eval_parse_str(&src)
}

fn read_source<R: Read>(mut reader: R) -> PResult<String> {
    let mut src = String::new();
    reader.read_to_string(&mut src)?;
    Ok(src)
}
