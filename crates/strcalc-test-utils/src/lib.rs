//! Testing utilities for strcalc workspace
//!
//! Shared fixtures, assertions and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use strcalc_core::{CalcResult, Calculator, ErrorKind};

pub fn setup_calculator() -> Calculator {
    Calculator::new()
}

/// Join operands the way a caller would type them
pub fn join_operands<T: ToString>(values: &[T], delimiter: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Build a `//<delimiter>\n<payload>` input
pub fn declared_input<T: ToString>(delimiter: &str, values: &[T]) -> String {
    format!("//{delimiter}\n{}", join_operands(values, delimiter))
}

#[track_caller]
pub fn assert_sum(result: CalcResult<f64>, expected: f64) {
    match result {
        Ok(total) => assert!(
            (total - expected).abs() < 1e-9,
            "expected sum {expected}, got {total}"
        ),
        Err(e) => panic!("expected sum {expected}, got error: {e}"),
    }
}

#[track_caller]
pub fn assert_fails(result: CalcResult<f64>, kind: ErrorKind) {
    match result {
        Ok(total) => panic!("expected {kind} failure, got sum {total}"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
}

/// Small non-negative integers; sums stay exact in `f64`
pub fn non_negative_operands(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..100_000, 1..=max_len)
}

/// Delimiters that can never be mistaken for part of a number
pub fn custom_delimiter() -> impl Strategy<Value = String> {
    "[#;|*%&@!,]{1,3}"
}
