use crate::{
    error::{Error, ErrorKind, PResult},
    syntax::{Expression, Operator},
};

impl Expression {
    /// Evaluates the tree bottom-up. The left operand of a binary node is
    /// evaluated first and its failure stops evaluation of the right one.
    pub fn evaluate(&self) -> PResult<f64> {
        match self {
            Expression::Literal(v) => Ok(*v),
            Expression::Unary { op, operand } => {
                let x = operand.evaluate().map_err(|err| {
                    err.context(format!("evaluation of operand of unary '{op}' failed"))
                })?;

                match op {
                    Operator::Plus => Ok(x),
                    Operator::Minus => Ok(-x),
                    other => Err(Error::new(ErrorKind::UnsupportedOperator(*other))),
                }
            }
            Expression::Binary { lhs, op, rhs } => {
                let x = lhs.evaluate().map_err(|err| {
                    err.context(format!("evaluation of left operand of '{op}' failed"))
                })?;
                let y = rhs.evaluate().map_err(|err| {
                    err.context(format!("evaluation of right operand of '{op}' failed"))
                })?;

                match op {
                    Operator::Plus => Ok(x + y),
                    Operator::Minus => Ok(x - y),
                    Operator::Mul => Ok(x * y),
                    Operator::Div => {
                        if y == 0.0 {
                            return Err(Error::new(ErrorKind::DivisionByZero));
                        }
                        Ok(x / y)
                    }
                }
            }
        }
    }
}
