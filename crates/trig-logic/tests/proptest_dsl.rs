// crates/trig-logic/tests/proptest_dsl.rs
// ============================================================================
// Module: Grammar Property-Based Tests
// Description: Property tests for parser correctness and stability.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for trigger expression grammar invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use trig_logic::Expr;
use trig_logic::parse_expr;

/// Renders an expression back to grammar text with full parenthesization.
///
/// Every operator level is wrapped in parentheses, so the rendered text is
/// unambiguous regardless of precedence and round-trips structurally as long
/// as every group carries at least two operands.
fn render(expr: &Expr<String>) -> String {
    match expr {
        Expr::Cond(name) => name.clone(),
        Expr::Not(inner) => format!("NOT ({})", render(inner)),
        Expr::And(parts) => {
            let rendered: Vec<String> = parts.iter().map(|p| render(p)).collect();
            format!("({})", rendered.join(" AND "))
        }
        Expr::Or(parts) => {
            let rendered: Vec<String> = parts.iter().map(|p| render(p)).collect();
            format!("({})", rendered.join(" OR "))
        }
    }
}

/// Strategy for condition names that can never collide with keywords.
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,8}"
        .prop_filter("keywords are not names", |name| {
            name != "AND" && name != "OR" && name != "NOT"
        })
}

/// Strategy for expression trees whose groups always have two or more operands.
fn expr_strategy(max_depth: u32) -> impl Strategy<Value = Expr<String>> {
    let leaf = name_strategy().prop_map(Expr::cond);

    leaf.prop_recursive(max_depth, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::negate),
            prop::collection::vec(inner.clone(), 2 .. 4).prop_map(Expr::and),
            prop::collection::vec(inner, 2 .. 4).prop_map(Expr::or),
        ]
    })
}

proptest! {
    #[test]
    fn rendered_expressions_round_trip(tree in expr_strategy(4)) {
        let text = render(&tree);
        let parsed = parse_expr(&text);
        prop_assert_eq!(parsed, Ok(tree));
    }

    #[test]
    fn round_trip_preserves_evaluation(tree in expr_strategy(4)) {
        let text = render(&tree);
        let parsed = match parse_expr(&text) {
            Ok(parsed) => parsed,
            Err(err) => return Err(TestCaseError::fail(format!("parse failed: {err}"))),
        };

        // Deterministic but name-dependent assignment.
        let lookup = |name: &String| name.len() % 2 == 0;
        prop_assert_eq!(parsed.eval(&lookup), tree.eval(&lookup));
    }

    #[test]
    fn parser_never_panics_on_arbitrary_input(input in ".{0,256}") {
        let _ = parse_expr(&input);
    }

    #[test]
    fn parsed_expressions_always_mention_a_condition(input in "[A-Za-z_() ]{0,64}") {
        if let Ok(expr) = parse_expr(&input) {
            prop_assert!(!expr.conditions().is_empty());
            prop_assert!(expr.complexity() >= 1);
        }
    }
}
