//! Shared table-driven test support.
//!
//! `test_case!` expands to a `#[test]` that computes the total of `input`
//! and compares it (or the error kind) with `total`. An optional
//! `normalized` checks the canonical rendering of the expression.

#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        total: $total:expr
        $(, normalized: $normalized:expr)?
        $(,)?
    ) => {
        #[test]
        fn $name() {
            let input: &str = &$input;
            let actual = invoice_calc::compute_invoice_total(input).map_err(|e| e.kind);
            pretty_assertions::assert_eq!(actual, $total, "input: {:?}", input);

            // Evaluating again must give the same answer.
            let again = invoice_calc::compute_invoice_total(input).map_err(|e| e.kind);
            pretty_assertions::assert_eq!(again, $total, "re-evaluating {:?}", input);

            $(
                let result = invoice_calc::evaluate_invoice(input).expect("evaluation failed");
                pretty_assertions::assert_eq!(result.normalized, $normalized);
                pretty_assertions::assert_eq!(result.original, input);
            )?
        }
    };
}
