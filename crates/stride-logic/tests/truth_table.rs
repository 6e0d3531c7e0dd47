//! Truth-table and failure cases for predicate evaluation.

use rstest::rstest;
use stride_logic::{Bindings, MAX_DEPTH, PredicateError, evaluate};

#[rstest]
#[case("P and Q", true, true, true)]
#[case("P and Q", true, false, false)]
#[case("P or not Q", false, true, false)]
#[case("P or not Q", false, false, true)]
#[case("not P and Q", false, true, true)]
#[case("not P and Q", true, true, false)]
#[case("p and q", true, true, true)]
#[case("not (p and q)", true, true, false)]
#[case("(p or q) and not (p and q)", true, false, true)]
#[case("(p or q) and not (p and q)", true, true, false)]
#[case("true and p", false, true, false)]
#[case("false or q", false, true, true)]
#[case("not not p", true, false, true)]
#[case("p or q and false", false, true, false)]
fn evaluates_expression(#[case] expr: &str, #[case] p: bool, #[case] q: bool, #[case] want: bool) {
    assert_eq!(evaluate(expr, Bindings { p, q }), Ok(want), "{expr} with p={p} q={q}");
}

#[rstest]
#[case("P xor Q")]
#[case("p and r")]
#[case("p and")]
#[case("(p or q")]
#[case("p or q)")]
#[case("p == q")]
#[case("__import__")]
#[case("")]
fn malformed_expression_fails(#[case] expr: &str) {
    for (p, q) in [(false, false), (false, true), (true, false), (true, true)] {
        assert!(
            evaluate(expr, Bindings { p, q }).is_err(),
            "{expr} should be rejected"
        );
    }
}

#[test]
fn xor_is_reported_as_unknown_token() {
    let err = evaluate("P xor Q", Bindings::default()).expect_err("xor is unsupported");
    assert_eq!(
        err,
        PredicateError::UnknownToken {
            token: "xor".into(),
            offset: 2
        }
    );
}

#[test]
fn evaluation_is_repeatable() {
    let bindings = Bindings { p: true, q: false };
    let first = evaluate("p and not q", bindings);
    for _ in 0..10 {
        assert_eq!(evaluate("p and not q", bindings), first);
    }
}

#[rstest]
#[case::open_parens(format!("{}p{}", "(".repeat(10_000), ")".repeat(10_000)))]
#[case::unclosed_parens("(".repeat(10_000))]
#[case::negations(format!("{}p", "not ".repeat(10_000)))]
#[case::and_chain(format!("{}p", "p and ".repeat(10_000)))]
#[case::mixed(format!("{}p", "not (".repeat(5_000)))]
fn deep_nesting_is_rejected(#[case] expr: String) {
    let err = evaluate(&expr, Bindings { p: true, q: true }).expect_err("too deep");
    assert!(
        matches!(err, PredicateError::TooDeep { limit: MAX_DEPTH, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn nesting_within_limit_still_evaluates() {
    let expr = format!("{}p{}", "(not ".repeat(30), ")".repeat(30));
    assert_eq!(evaluate(&expr, Bindings { p: true, q: false }), Ok(true));
}
