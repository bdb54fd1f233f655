use crate::error::PResult;

use super::{lexer::Lexer, ExprParser, Expression};

/// Fused parse-and-evaluate mode.
///
/// Every unary and binary node is evaluated the moment it is complete and
/// replaced by a literal, so recursion only ever hands literals upward and
/// the finished parse is a single [`Expression::Literal`]. An evaluation
/// failure aborts the parse like any syntax error.
pub(crate) struct EagerParser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> EagerParser<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            lexer: Lexer::new(src),
        }
    }
}

impl<'src> ExprParser<'src> for EagerParser<'src> {
    fn lexer(&self) -> &Lexer<'src> {
        &self.lexer
    }

    fn lexer_mut(&mut self) -> &mut Lexer<'src> {
        &mut self.lexer
    }

    fn reduce(&self, expr: Box<Expression>) -> PResult<Box<Expression>> {
        let value = expr
            .evaluate()
            .map_err(|err| err.context(format!("could not reduce {expr} before {}", self.lexer)))?;
        Ok(Box::new(Expression::Literal(value)))
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::EagerParser;
    use crate::{
        error::ErrorKind,
        syntax::{arbitrary::arb_expr, eval_parse_str, parse_str, ExprParser, Expression},
    };

    fn eval_parse_value(src: &str) -> f64 {
        match *eval_parse_str(src).unwrap() {
            Expression::Literal(v) => v,
            other => panic!("expected a literal, got {other:?}"),
        }
    }

    #[test]
    fn collapses_to_literal() {
        let expr = EagerParser::new("4 + 10 * -1").parse_all().unwrap();
        assert_eq!(*expr, Expression::Literal(-6.0));
        assert_eq!(expr.size(), 1);
        assert_eq!(expr.to_string(), "-6.00");
    }

    #[test]
    fn eval_parse_1() {
        assert_eq!(eval_parse_value("(4 + 10) * -1"), -14.0);
        assert_eq!(eval_parse_value("-48 + 9"), -39.0);
        assert_eq!(eval_parse_value("-8 + 5 * (13 - 1) * -1"), -68.0);
        assert_eq!(eval_parse_value("(-8 + 5) * (13 - 1) * -1"), 36.0);
    }

    #[test]
    fn eval_parse_2() {
        assert_eq!(eval_parse_value("1+2+3+4"), 10.0);
        assert_eq!(eval_parse_value("2*1+2"), 4.0);
        assert_eq!(eval_parse_value("2+1*2"), 4.0);
        assert_eq!(eval_parse_value("--3"), 3.0);
        assert_eq!(eval_parse_value("-+3"), -3.0);
        assert_eq!(eval_parse_value("7 / 2 / 2"), 1.75);
    }

    #[test]
    fn division_by_zero_aborts_parse() {
        for src in ["1 / 0", "1 / (2 - 2)", "3 * (1 / 0) + 4", "1 / -0.0"] {
            let err = eval_parse_str(src).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::DivisionByZero, "{src}");
        }

        assert_eq!(eval_parse_value("1 / 0.5"), 2.0);
    }

    #[test]
    fn out_of_range_literal_aborts_parse() {
        for src in ["1e400", "1e400 - 1e400", "1 + 1e400"] {
            let err = eval_parse_str(src).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::LexError(_)), "{src}: {err}");
        }

        assert_eq!(eval_parse_value("1_000 * 2"), 2000.0);
    }

    #[test]
    fn syntax_errors_match_tree_mode() {
        for src in ["", "(1+2", "1+", "1 2", "(", "1 / (2 * 3"] {
            let eager = eval_parse_str(src).unwrap_err();
            let tree = parse_str(src).unwrap_err();
            assert!(matches!(eager.kind(), ErrorKind::SyntaxError(_)), "{src:?}");
            assert_eq!(eager.kind(), tree.kind(), "{src:?}");
        }
    }

    proptest! {
        #[test]
        fn agrees_with_tree_mode((src, _, _) in arb_expr()) {
            let tree = parse_str(&src).unwrap().evaluate();
            let eager = eval_parse_str(&src);

            match (tree, eager) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(&*b, &Expression::Literal(b.evaluate().unwrap()));
                    let b = b.evaluate().unwrap();
                    prop_assert!(
                        a == b || (a.is_nan() && b.is_nan()) || (a - b).abs() <= 1e-9 * a.abs().max(1.0),
                        "{a} != {b}"
                    );
                }
                (Err(a), Err(b)) => prop_assert_eq!(a.kind(), b.kind()),
                (a, b) => prop_assert!(false, "{a:?} vs {b:?}"),
            }
        }
    }
}
