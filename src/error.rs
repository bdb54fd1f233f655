use std::fmt;

use crate::syntax::Operator;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    LexError(String),
    SyntaxError(String),
    DivisionByZero,
    UnsupportedOperator(Operator),
    IoError(String),
}

impl ErrorKind {
    pub fn is_eval_error(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::UnsupportedOperator(_))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexError(msg) | Self::SyntaxError(msg) | Self::IoError(msg) => f.write_str(msg),
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::UnsupportedOperator(op) => write!(f, "unsupported unary operator: {:?}", op.symbol()),
        }
    }
}

/// An error together with the trail of frames it passed through.
///
/// `context` is ordered innermost first: the frame closest to the root
/// cause pushes first, the entry point pushes last.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
    kind: ErrorKind,
    context: Vec<String>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
        }
    }

    pub fn lex(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::LexError(msg.into()))
    }

    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyntaxError(msg.into()))
    }

    pub fn context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn trail(&self) -> &[String] {
        &self.context
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::IoError(format!("could not read input: {err}")))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in self.context.iter().rev() {
            write!(f, "{ctx}: ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {}

pub type PResult<T> = Result<T, Error>;

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};

    #[test]
    fn display_outermost_context_first() {
        let err = Error::new(ErrorKind::DivisionByZero)
            .context("inner")
            .context("outer");

        assert_eq!(err.to_string(), "outer: inner: division by zero");
        assert_eq!(err.kind(), &ErrorKind::DivisionByZero);
        assert_eq!(err.trail(), &["inner".to_string(), "outer".to_string()]);
    }

    #[test]
    fn eval_error_class() {
        assert!(ErrorKind::DivisionByZero.is_eval_error());
        assert!(!ErrorKind::SyntaxError("unexpected end of file".into()).is_eval_error());
    }
}
