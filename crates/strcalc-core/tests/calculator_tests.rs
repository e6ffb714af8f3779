//! Calculator Tests
//!
//! Behaviour of the five variants and the invocation counter.
//!
use pretty_assertions::assert_eq;
use strcalc_core::prelude::*;
use strcalc_test_utils::{assert_fails, assert_sum, setup_calculator};

#[test]
fn test_blank_input_counts_and_returns_zero() {
    let calc = setup_calculator();

    assert_sum(calc.add_v1(None), 0.0);
    assert_sum(calc.add_v2(Some("")), 0.0);
    assert_sum(calc.add_v3(Some("  ")), 0.0);
    assert_sum(calc.add_v4(None), 0.0);
    assert_sum(calc.add_v5(Some(" \n ")), 0.0);

    assert_eq!(calc.invocation_count(), 5);
}

#[test]
fn test_v1_operands() {
    let calc = setup_calculator();

    assert_sum(calc.add_v1(Some("1")), 1.0);
    assert_sum(calc.add_v1(Some("1,5")), 6.0);
    assert_sum(calc.add_v1(Some(" 1 , 2 ")), 3.0);
    assert_fails(calc.add_v1(Some("1,2,5")), ErrorKind::TooManyOperands);
    assert_fails(calc.add_v1(Some("x,2")), ErrorKind::NonNumericOperand);
}

#[test]
fn test_v1_messages() {
    let calc = setup_calculator();

    let err = calc.add_v1(Some("1,2,5")).unwrap_err();
    assert_eq!(err.to_string(), "supports only 0, 1, or 2 numbers");

    let err = calc.add_v1(Some("x,2")).unwrap_err();
    assert!(err.to_string().starts_with("all inputs must be valid numbers"));
}

#[test]
fn test_v2_unbounded() {
    let calc = setup_calculator();

    assert_sum(calc.add_v2(Some("1,5")), 6.0);
    assert_sum(calc.add_v2(Some("1,5,7,9")), 22.0);
    assert_sum(calc.add_v2(Some("1.5,2.25,-1")), 2.75);
    assert_fails(calc.add_v2(Some("1,,2")), ErrorKind::NonNumericOperand);
    assert_fails(calc.add_v2(Some("1\n2")), ErrorKind::NonNumericOperand);
}

#[test]
fn test_v3_mixed_delimiters() {
    let calc = setup_calculator();

    assert_sum(calc.add_v3(Some("1\n2,3")), 6.0);
    assert_sum(calc.add_v3(Some("1\n2,3\n4,5")), 15.0);
    assert_fails(calc.add_v3(Some("1,\n")), ErrorKind::NonNumericOperand);
    assert_fails(calc.add_v3(Some("1;2")), ErrorKind::NonNumericOperand);
}

#[test]
fn test_v4_declarations() {
    let calc = setup_calculator();

    assert_sum(calc.add_v4(Some("//#\n4#5#6")), 15.0);
    assert_sum(calc.add_v4(Some("//\n1;2")), 3.0);
    assert_sum(calc.add_v4(Some("//;\n")), 0.0);
    assert_sum(calc.add_v4(Some("1;2;3")), 6.0);
    assert_sum(calc.add_v4(Some("//;\n1;-2")), -1.0);
}

#[test]
fn test_v4_rejects_undeclared_delimiters() {
    let calc = setup_calculator();

    assert_fails(calc.add_v4(Some("1\n2;3")), ErrorKind::NonNumericOperand);
    assert_fails(calc.add_v4(Some("1,2")), ErrorKind::NonNumericOperand);
}

#[test]
fn test_v4_payload_is_second_line_only() {
    let calc = setup_calculator();

    assert_sum(calc.add_v4(Some("//;\n1;2\n3")), 3.0);
    assert_sum(calc.add_v4(Some("//#\n4#5\n6#7\n8")), 9.0);
    assert_sum(calc.add_v4(Some("//;\n\n5")), 0.0);
}

#[test]
fn test_v4_declaration_without_line_break() {
    let calc = setup_calculator();

    let err = calc.add_v4(Some("//;")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDelimiterDeclaration);
    assert_eq!(err.to_string(), "custom delimiter must be followed by numbers");
}

#[test]
fn test_v5_declarations() {
    let calc = setup_calculator();

    assert_sum(calc.add_v5(Some("//***\n1***2***3")), 6.0);
    assert_sum(calc.add_v5(Some("//;\n1;2;3")), 6.0);
    assert_sum(calc.add_v5(Some("4;5")), 9.0);
    assert_fails(calc.add_v5(Some("//;\n")), ErrorKind::MalformedDelimiterDeclaration);
    assert_fails(calc.add_v5(Some("//;")), ErrorKind::MalformedDelimiterDeclaration);
    assert_fails(calc.add_v5(Some("//;\n1;a")), ErrorKind::NonNumericOperand);
}

#[test]
fn test_v5_rejects_empty_second_line() {
    let calc = setup_calculator();

    assert_fails(calc.add_v5(Some("//;\n\n5")), ErrorKind::MalformedDelimiterDeclaration);
    assert_fails(calc.add_v5(Some("//;\n\n")), ErrorKind::MalformedDelimiterDeclaration);
    assert_sum(calc.add_v5(Some("//;\n1;2\n-3")), 3.0);
}

#[test]
fn test_v5_negatives() {
    let calc = setup_calculator();

    let err = calc.add_v5(Some("1;-2;-3;4")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NegativeOperandsPresent);
    assert!(err.to_string().contains("-2, -3"));

    let err = calc.add_v5(Some("//;\n1;2;-3")).unwrap_err();
    assert_eq!(err.to_string(), "negatives not allowed: -3");
}

#[test]
fn test_v4_and_v5_diverge_on_empty_payload() {
    let calc = setup_calculator();

    assert_sum(calc.add_v4(Some("//;\n")), 0.0);
    assert_fails(calc.add_v5(Some("//;\n")), ErrorKind::MalformedDelimiterDeclaration);
}

#[test]
fn test_counter_across_variants() {
    let calc = setup_calculator();

    let _ = calc.add_v1(Some("1,2"));
    let _ = calc.add_v1(Some("1,2,3"));
    let _ = calc.add_v2(Some("x"));
    let _ = calc.add_v3(None);
    let _ = calc.add_v4(Some("//;"));
    let _ = calc.add_v5(Some("-1"));
    let _ = calc.add(Variant::V2, Some("1"));

    assert_eq!(calc.invocation_count(), 7);
}

#[test]
fn test_counter_read_is_idempotent() {
    let calc = setup_calculator();
    let _ = calc.add_v2(Some("1,2"));

    let first = calc.invocation_count();
    assert_eq!(calc.invocation_count(), first);
    assert_eq!(calc.invocation_count(), first);
}

#[test]
fn test_instances_count_independently() {
    let a = setup_calculator();
    let b = setup_calculator();

    let _ = a.add_v1(Some("1"));
    let _ = a.add_v1(Some("2"));
    let _ = b.add_v1(Some("3"));

    assert_eq!(a.invocation_count(), 2);
    assert_eq!(b.invocation_count(), 1);
}

#[test]
fn test_demo_inputs() {
    let calc = setup_calculator();

    assert_sum(calc.add_v1(Some("1,2")), 3.0);
    assert_sum(calc.add_v2(Some("1,2,3")), 6.0);
    assert_sum(calc.add_v3(Some("1\n2,3")), 6.0);
    assert_sum(calc.add_v4(Some("//;\n1;2;3")), 6.0);
    assert_fails(calc.add_v5(Some("//;\n1;2;-3")), ErrorKind::NegativeOperandsPresent);
}
