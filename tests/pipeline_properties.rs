use proptest::prelude::*;
use shunt::{evaluate_expression, render_tree};

/// Well-formed expressions, built so every composition stays valid.
fn expression() -> impl Strategy<Value = String> {
    let number = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 1u32..100).prop_map(|(i, f)| format!("{i}.{f}")),
    ];
    number.prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "^"]), inner.clone())
                .prop_map(|(a, op, b)| format!("({a}){op}({b})")),
            (inner.clone(), prop::sample::select(vec!["+", "-", "*"]), inner.clone())
                .prop_map(|(a, op, b)| format!("{a} {op} ({b})")),
            (prop::sample::select(vec!["-", "+"]), inner.clone())
                .prop_map(|(sign, a)| format!("{sign}({a})")),
            // a sign right after the comma would be read as binary
            (inner.clone(), inner).prop_map(|(a, b)| format!("log({a}, ({b}))")),
        ]
    })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(input in expression()) {
        let first = evaluate_expression(&input, false).unwrap();
        let second = evaluate_expression(&input, false).unwrap();
        prop_assert_eq!(first.value.to_bits(), second.value.to_bits());
        prop_assert_eq!(&first.tree, &second.tree);
        prop_assert_eq!(render_tree(&first.tree), render_tree(&second.tree));
    }

    #[test]
    fn cache_is_transparent(input in expression()) {
        let plain = evaluate_expression(&input, false).unwrap();
        let cached = evaluate_expression(&input, true).unwrap();
        prop_assert_eq!(plain.value.to_bits(), cached.value.to_bits());
        prop_assert_eq!(plain.tree, cached.tree);
    }

    #[test]
    fn arbitrary_text_never_panics(input in "[0-9log.,()+*/^ \\-]{0,32}") {
        let _ = evaluate_expression(&input, true);
    }
}
