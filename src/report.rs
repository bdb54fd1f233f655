use arithparse::Expression;

/// Trees larger than this are reported by value only.
pub(crate) const MAX_PRINTED_SIZE: usize = 1000;

pub(crate) fn render(expr: &Expression, result: f64) -> String {
    if expr.size() <= MAX_PRINTED_SIZE {
        format!("Eval({expr}) = {}", group_thousands(result))
    } else {
        format!("Eval() = {}", group_thousands(result))
    }
}

/// Formats `value` with two decimals and `,` between groups of three digits.
pub(crate) fn group_thousands(value: f64) -> String {
    let s = format!("{value:.2}");
    if !value.is_finite() {
        return s;
    }

    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(s.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod test {
    use super::{group_thousands, render};
    use arithparse::{eval_parse_str, parse_str};

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0.0), "0.00");
        assert_eq!(group_thousands(999.999), "1,000.00");
        assert_eq!(group_thousands(1234567.891), "1,234,567.89");
        assert_eq!(group_thousands(-123456.0), "-123,456.00");
        assert_eq!(group_thousands(f64::INFINITY), "inf");
    }

    #[test]
    fn render_small_tree() {
        let expr = parse_str("1000 * 2 + 1").unwrap();
        let result = expr.evaluate().unwrap();
        assert_eq!(render(&expr, result), "Eval(1000.00 * 2.00 + 1.00) = 2,001.00");

        let expr = eval_parse_str("1000 * 2 + 1").unwrap();
        assert_eq!(render(&expr, 2001.0), "Eval(2001.00) = 2,001.00");
    }

    #[test]
    fn render_large_tree_without_text() {
        let src = vec!["1"; 501].join(" + ");
        let expr = parse_str(&src).unwrap();
        assert_eq!(expr.size(), 1001);
        assert_eq!(render(&expr, 501.0), "Eval() = 501.00");
    }
}
