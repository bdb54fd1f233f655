use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Mul,
    Div,
}

pub type Precedence = u8;

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub fn is_sign(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'src> {
    Eof,
    Invalid(char),
    Ident(&'src str),
    Int(&'src str),
    Float(&'src str),
    Op(Operator),

    LParen,
    RParen,
}

impl Token<'_> {
    /// Binding power of the token when it appears between two operands.
    /// Zero ends a precedence climb.
    pub fn precedence(self) -> Precedence {
        match self {
            Token::Op(op) => op.precedence(),
            _ => 0,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => f.write_str("end of file"),
            Token::Ident(id) => write!(f, "identifier {id}"),
            Token::Int(text) | Token::Float(text) => write!(f, "number {text}"),
            Token::Op(op) => write!(f, "{:?}", op.symbol()),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::Invalid(c) => write!(f, "{c:?}"),
        }
    }
}
