use alloc::string::String;

use quickcheck::{QuickCheck, TestResult};

use super::arbitrary::{NumberText, tests};
use crate::{Grammar, GrammarOptions, Pattern};

fn grammar(extended: bool) -> Grammar {
    Grammar::new(GrammarOptions {
        extended_spellings: extended,
    })
}

/// Property: Zero and NonZero partition the comparable numbers, and agree
/// with the numeric value of the decomposition.
#[test]
fn zero_nonzero_partition_comparables() {
    fn prop(text: NumberText, extended: bool) -> TestResult {
        let g = grammar(extended);
        let text = text.0.as_str();
        let zero = g.matches(Pattern::Zero, text);
        let nonzero = g.matches(Pattern::NonZero, text);
        if zero && nonzero {
            return TestResult::failed();
        }
        if !g.matches(Pattern::Comparable, text) {
            return TestResult::from_bool(!zero && !nonzero);
        }
        let Ok(value) = g.parse_number(text).and_then(|n| n.to_f64()) else {
            return TestResult::failed();
        };
        TestResult::from_bool(zero != nonzero && zero == (value == 0.0))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(NumberText, bool) -> TestResult);
}

/// Property: on comparables, Positive is exactly NonZero without Negative;
/// NaN is never signed, zero or nonzero.
#[test]
fn sign_patterns_follow_nonzero() {
    fn prop(text: NumberText, extended: bool) -> bool {
        let g = grammar(extended);
        let text = text.0.as_str();
        let positive = g.matches(Pattern::Positive, text);
        let negative = g.matches(Pattern::Negative, text);
        let nonzero = g.matches(Pattern::NonZero, text);
        if g.matches(Pattern::NaN, text) {
            return !positive
                && !negative
                && !nonzero
                && !g.matches(Pattern::Zero, text)
                && !g.matches(Pattern::Comparable, text);
        }
        if g.matches(Pattern::Comparable, text) {
            positive == (nonzero && !negative)
        } else {
            !positive && !negative
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(NumberText, bool) -> bool);
}

/// Property: Number is the union of its parts, Numeric never overlaps the
/// special values, and Even/Odd only apply to integers.
#[test]
fn composite_patterns_are_unions() {
    fn prop(text: NumberText, extended: bool) -> bool {
        let g = grammar(extended);
        let text = text.0.as_str();
        let m = |p| g.matches(p, text);
        let special = m(Pattern::Infinity) || m(Pattern::NaN);
        m(Pattern::Number) == (special || m(Pattern::Integer) || m(Pattern::Numeric))
            && m(Pattern::Comparable) == (m(Pattern::Infinity) || m(Pattern::Numeric))
            && !(special && m(Pattern::Numeric))
            && (m(Pattern::Even) || m(Pattern::Odd)) == m(Pattern::Integer)
            && !(m(Pattern::Even) && m(Pattern::Odd))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(NumberText, bool) -> bool);
}

/// Property: anything Numeric decomposes with no excess, and a complete
/// decomposition is always a Number.
#[test]
fn numeric_decomposes_completely() {
    fn prop(text: NumberText, extended: bool) -> bool {
        let g = grammar(extended);
        let text = text.0.as_str();
        let parsed = g.grok_number(text);
        if g.matches(Pattern::Numeric, text) && !parsed.is_complete() {
            return false;
        }
        !parsed.is_complete() || g.matches(Pattern::Number, text)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(NumberText, bool) -> bool);
}

/// Property: the decomposer never panics, its excess is always a suffix of
/// the input, and a failure unsets every part and keeps the whole input.
#[test]
fn decomposition_invariants_hold_on_any_text() {
    fn prop(text: String, extended: bool) -> bool {
        let parsed = grammar(extended).grok_number(&text);
        if !text.ends_with(parsed.excess()) {
            return false;
        }
        if parsed.is_parsed() {
            let integer = parsed.integer_part().unwrap_or_default();
            let fraction = parsed.fraction().unwrap_or_default();
            let exponent_ok =
                parsed.exponent_sign().is_some() == parsed.exponent_digits().is_some();
            parsed.sign().is_some() && !(integer.is_empty() && fraction.is_empty()) && exponent_ok
        } else {
            parsed.sign().is_none()
                && parsed.fraction().is_none()
                && parsed.exponent_sign().is_none()
                && parsed.exponent_digits().is_none()
                && parsed.excess() == text
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, bool) -> bool);
}
