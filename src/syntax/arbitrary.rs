use proptest::{prelude::*, sample::select};

/// Random source text in the expression grammar, paired with the number of
/// literals and operators it contains. Literals carry at most two decimals
/// so that formatting them back is exact.
pub(crate) fn arb_expr() -> impl Strategy<Value = (String, usize, usize)> {
    let leaf = (0u32..100_000).prop_map(|n| (format!("{}.{:02}", n / 100, n % 100), 1, 0));

    leaf.prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), select(vec!['+', '-', '*', '/']), inner.clone()).prop_map(
                |((lhs, ll, lo), op, (rhs, rl, ro))| (format!("{lhs} {op} {rhs}"), ll + rl, lo + ro + 1)
            ),
            (select(vec!['+', '-']), inner.clone())
                .prop_map(|(sign, (src, l, o))| (format!("{sign}{src}"), l, o + 1)),
            inner.prop_map(|(src, l, o)| (format!("({src})"), l, o)),
        ]
    })
}
