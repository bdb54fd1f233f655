use std::{borrow::Cow, fmt, iter::Peekable, str::CharIndices};

use crate::error::{Error, PResult};

use super::token::{Operator, Token};

/// Forward-only scanner holding exactly one token of lookahead.
pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    token: Token<'src>,
    text: &'src str,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        let mut lexer = Self {
            src,
            chars: src.char_indices().peekable(),
            token: Token::Eof,
            text: "",
        };
        lexer.advance();
        lexer
    }

    /// Scans the next token and replaces the current lookahead with it.
    pub fn advance(&mut self) {
        let (token, text) = self.scan();
        self.token = token;
        self.text = text;
    }

    pub fn token(&self) -> Token<'src> {
        self.token
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Converts the text of the current token to a finite float.
    pub fn number(&self) -> PResult<f64> {
        let digits = Self::strip_separators(self.text()).ok_or_else(|| {
            Error::lex(format!("could not parse the float number {self}: misplaced '_'"))
        })?;

        let value = digits
            .parse::<f64>()
            .map_err(|err| Error::lex(format!("could not parse the float number {self}: {err}")))?;

        if !value.is_finite() {
            return Err(Error::lex(format!(
                "could not parse the float number {self}: value out of range"
            )));
        }
        Ok(value)
    }

    /// Drops `_` digit separators. Each one must sit between two digits.
    fn strip_separators(text: &str) -> Option<Cow<'_, str>> {
        if !text.contains('_') {
            return Some(Cow::Borrowed(text));
        }

        let bytes = text.as_bytes();
        let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
            b != b'_'
                || (i > 0
                    && bytes[i - 1].is_ascii_digit()
                    && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
        });

        well_placed.then(|| Cow::Owned(text.replace('_', "")))
    }

    fn scan(&mut self) -> (Token<'src>, &'src str) {
        self.eat_while(char::is_whitespace);

        let (off, c) = match self.chars.next() {
            None => return (Token::Eof, ""),
            Some(next) => next,
        };

        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() => return self.read_number(off, c),
            '.' if self.peek().is_some_and(|d| d.is_ascii_digit()) => {
                return self.read_number(off, c)
            }
            c if Self::is_id_start(c) => return self.read_id(off),
            c => match Operator::from_char(c) {
                Some(op) => Token::Op(op),
                None => Token::Invalid(c),
            },
        };

        (token, &self.src[off..off + c.len_utf8()])
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.src.len(), |&(off, _)| off)
    }

    fn eat_while<P>(&mut self, predicate: P)
    where
        P: Fn(char) -> bool,
    {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        self.eat_while(|c| !predicate(c));
        let to_off = self.offset();
        &self.src[from_off..to_off]
    }

    /// Reads an integer or float literal. The text is only delimited here;
    /// whether it is a valid number is decided by [`Lexer::number`].
    fn read_number(&mut self, from_off: usize, first: char) -> (Token<'src>, &'src str) {
        if first == '0' && matches!(self.peek(), Some('x' | 'X' | 'b' | 'B' | 'o' | 'O')) {
            self.bump();
            let s = self.slice_until(from_off, |c| !Self::is_id_part(c));
            return (Token::Int(s), s);
        }

        let mut is_float = first == '.';
        self.eat_while(Self::is_digit_part);

        if !is_float && self.peek() == Some('.') {
            self.bump();
            is_float = true;
            self.eat_while(Self::is_digit_part);
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            is_float = true;
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            self.eat_while(Self::is_digit_part);
        }

        let to_off = self.offset();
        let s = &self.src[from_off..to_off];
        if is_float {
            (Token::Float(s), s)
        } else {
            (Token::Int(s), s)
        }
    }

    fn read_id(&mut self, from_off: usize) -> (Token<'src>, &'src str) {
        let s = self.slice_until(from_off, |c| !Self::is_id_part(c));
        (Token::Ident(s), s)
    }

    fn is_digit_part(c: char) -> bool {
        c.is_ascii_digit() || c == '_'
    }

    fn is_id_start(c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn is_id_part(c: char) -> bool {
        Self::is_id_start(c) || c.is_ascii_digit()
    }
}

impl fmt::Display for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
