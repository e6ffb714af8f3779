//! The calculator
//!
//! One shared routine, parameterized by [`SumPolicy`], behind five presets.
//! Every summation call bumps the invocation counter before doing anything
//! else, so failed calls are counted too.

use crate::config::CalculatorConfig;
use crate::delimiter::{Declaration, DelimiterSet};
use crate::error::{CalcError, CalcResult, ConfigError};
use crate::operand;
use crate::policy::{DelimiterStrategy, NegativePolicy, SumPolicy, Variant};
use std::sync::atomic::{AtomicU64, Ordering};

/// Stateful string calculator
///
/// Safe to share across threads; the counter is an atomic read-modify-write.
#[derive(Debug, Default)]
pub struct Calculator {
    config: CalculatorConfig,
    invocations: AtomicU64,
}

impl Calculator {
    /// Create calculator with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create calculator with configuration
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] when the config fails
    /// [`CalculatorConfig::validate`].
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            invocations: AtomicU64::new(0),
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Number of summation calls made so far, failed ones included
    #[inline]
    #[must_use]
    pub fn invocation_count(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }

    /// Up to two comma-separated operands
    ///
    /// # Errors
    /// `TooManyOperands`, `NonNumericOperand`
    pub fn add_v1(&self, input: Option<&str>) -> CalcResult<f64> {
        self.add(Variant::V1, input)
    }

    /// Any number of comma-separated operands
    ///
    /// # Errors
    /// `NonNumericOperand`
    pub fn add_v2(&self, input: Option<&str>) -> CalcResult<f64> {
        self.add(Variant::V2, input)
    }

    /// Operands separated by commas or newlines
    ///
    /// # Errors
    /// `NonNumericOperand`
    pub fn add_v3(&self, input: Option<&str>) -> CalcResult<f64> {
        self.add(Variant::V3, input)
    }

    /// Operands separated by a declared delimiter (`//<d>\n...`) or the default
    ///
    /// # Errors
    /// `MalformedDelimiterDeclaration`, `NonNumericOperand`
    pub fn add_v4(&self, input: Option<&str>) -> CalcResult<f64> {
        self.add(Variant::V4, input)
    }

    /// As [`Calculator::add_v4`], rejecting negatives
    ///
    /// # Errors
    /// `MalformedDelimiterDeclaration`, `NonNumericOperand`,
    /// `NegativeOperandsPresent`
    pub fn add_v5(&self, input: Option<&str>) -> CalcResult<f64> {
        self.add(Variant::V5, input)
    }

    /// Run one variant
    pub fn add(&self, variant: Variant, input: Option<&str>) -> CalcResult<f64> {
        let call = self.record_invocation();
        let result = self.evaluate(&variant.policy(), input);

        match &result {
            Ok(total) => tracing::debug!("{variant} call #{call}: sum = {total}"),
            Err(e) => tracing::debug!("{variant} call #{call} failed ({}): {e}", e.kind()),
        }

        result
    }

    /// Run the shared routine with an arbitrary policy
    pub fn add_with_policy(&self, policy: &SumPolicy, input: Option<&str>) -> CalcResult<f64> {
        let call = self.record_invocation();
        let result = self.evaluate(policy, input);

        match &result {
            Ok(total) => tracing::debug!("custom policy call #{call}: sum = {total}"),
            Err(e) => tracing::debug!("custom policy call #{call} failed ({}): {e}", e.kind()),
        }

        result
    }

    fn record_invocation(&self) -> u64 {
        self.invocations.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn evaluate(&self, policy: &SumPolicy, input: Option<&str>) -> CalcResult<f64> {
        let Some(text) = input.filter(|t| !t.trim().is_empty()) else {
            return Ok(0.0);
        };

        let tokens = self.tokenize(&policy.delimiters, text)?;
        tracing::trace!("tokens: {tokens:?}");

        if let Some(ceiling) = policy.operand_ceiling {
            if tokens.len() > ceiling {
                return Err(CalcError::TooManyOperands {
                    found: tokens.len(),
                });
            }
        }

        let values = operand::parse_operands(tokens.iter().copied())?;

        if policy.negatives == NegativePolicy::Reject {
            let negatives = operand::negatives(&values);
            if !negatives.is_empty() {
                return Err(CalcError::NegativeOperandsPresent { negatives });
            }
        }

        Ok(operand::sum(&values))
    }

    fn tokenize<'a>(&self, strategy: &DelimiterStrategy, text: &'a str) -> CalcResult<Vec<&'a str>> {
        match strategy {
            DelimiterStrategy::Fixed(set) => {
                tracing::trace!("splitting on {:?}", set.delimiters());
                Ok(set.split(text))
            }
            DelimiterStrategy::Declared(check) => {
                let declaration = Declaration::parse(
                    text,
                    &self.config.declaration_marker,
                    &self.config.default_delimiter,
                    *check,
                )?;

                // a declaration followed by nothing means zero operands
                if declaration.declared && declaration.payload.is_empty() {
                    return Ok(Vec::new());
                }

                let set = DelimiterSet::single(declaration.delimiter);
                tracing::trace!("splitting on {:?}", set.delimiters());
                Ok(set.split(declaration.payload))
            }
        }
    }
}
