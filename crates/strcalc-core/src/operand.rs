//! Operand parsing and reduction
//!
//! A token is numeric when, after trimming surrounding whitespace, it reads as
//! a plain base-10 number: optional sign, ASCII digits, optional fraction.
//! Exponents, `inf`, `NaN` and the empty string are rejected.

use crate::error::{CalcError, CalcResult};
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("decimal pattern is valid")
});

/// Check whether a token reads as a base-10 number
#[inline]
#[must_use]
pub fn is_numeric(token: &str) -> bool {
    DECIMAL.is_match(token.trim())
}

/// Parse one token into its numeric value
///
/// # Errors
/// [`CalcError::NonNumericOperand`] carrying the untrimmed token.
pub fn parse_operand(token: &str) -> CalcResult<f64> {
    if !is_numeric(token) {
        return Err(CalcError::non_numeric(token));
    }
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| CalcError::non_numeric(token))
}

/// Validate and convert every token, in order
///
/// Fails on the first non-numeric token; nothing is converted past it.
pub fn parse_operands<'a, I>(tokens: I) -> CalcResult<Vec<f64>>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().map(parse_operand).collect()
}

/// Left fold from zero
#[inline]
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |total, value| total + value)
}

/// Negative values in input order
#[must_use]
pub fn negatives(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| *v < 0.0).collect()
}
