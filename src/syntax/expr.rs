use std::fmt;

use super::{token::Precedence, Operator};

/// Arithmetic expression tree. Every node owns its children and is never
/// mutated after construction.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(f64),
    Unary {
        op: Operator,
        operand: Box<Expression>,
    },
    Binary {
        lhs: Box<Expression>,
        op: Operator,
        rhs: Box<Expression>,
    },
}

impl Expression {
    pub fn unary(op: Operator, operand: Box<Expression>) -> Box<Self> {
        Box::new(Self::Unary { op, operand })
    }

    pub fn binary(lhs: Box<Expression>, op: Operator, rhs: Box<Expression>) -> Box<Self> {
        Box::new(Self::Binary { lhs, op, rhs })
    }

    /// Number of nodes in the tree. A literal counts as one.
    pub fn size(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Unary { operand, .. } => operand.size() + 1,
            Self::Binary { lhs, rhs, .. } => lhs.size() + rhs.size() + 1,
        }
    }

    fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Binary { op, .. } => Some(op.precedence()),
            _ => None,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parens: bool) -> fmt::Result {
        if parens {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Infix rendering with literals to two decimals, e.g. `1.00 + 2.00`.
///
/// Parentheses are only emitted where dropping them would change how the
/// text parses back: around a binary operand of a sign, around a left
/// operand that binds looser than its parent, and around a right operand
/// that binds looser or equally tight.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => write!(f, "{v:.2}"),
            Self::Unary { op, operand } => {
                write!(f, "{op}")?;
                operand.fmt_operand(f, operand.precedence().is_some())
            }
            Self::Binary { lhs, op, rhs } => {
                let prec = op.precedence();
                lhs.fmt_operand(f, lhs.precedence().is_some_and(|p| p < prec))?;
                write!(f, " {op} ")?;
                rhs.fmt_operand(f, rhs.precedence().is_some_and(|p| p <= prec))
            }
        }
    }
}
