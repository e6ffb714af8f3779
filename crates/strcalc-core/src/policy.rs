//! Summation policies
//!
//! Every variant runs the same pipeline (tokenize, validate, convert, reduce).
//! A [`SumPolicy`] captures what differs between them:
//! - how the delimiter is chosen
//! - how many operands are allowed
//! - whether negatives are rejected

use crate::delimiter::{DeclarationCheck, DelimiterSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operand ceiling of the bounded variant
pub const BOUNDED_OPERANDS: usize = 2;

/// How the active delimiter(s) of a call are found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterStrategy {
    /// Split the whole input on a fixed set
    Fixed(DelimiterSet),
    /// Read an optional declaration prefix, else use the configured default
    Declared(DeclarationCheck),
}

/// Treatment of values below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativePolicy {
    /// Sum them like any other value
    #[default]
    Allow,
    /// Fail listing every negative value
    Reject,
}

/// Parameters of the shared summation routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumPolicy {
    /// Delimiter resolution
    pub delimiters: DelimiterStrategy,
    /// Maximum token count, if bounded
    pub operand_ceiling: Option<usize>,
    /// Negative value handling
    pub negatives: NegativePolicy,
}

impl SumPolicy {
    /// Unbounded policy with fixed delimiters that allows negatives
    #[inline]
    #[must_use]
    pub fn fixed(delimiters: DelimiterSet) -> Self {
        Self {
            delimiters: DelimiterStrategy::Fixed(delimiters),
            operand_ceiling: None,
            negatives: NegativePolicy::Allow,
        }
    }

    /// Unbounded policy reading a delimiter declaration
    #[inline]
    #[must_use]
    pub fn declared(check: DeclarationCheck) -> Self {
        Self {
            delimiters: DelimiterStrategy::Declared(check),
            operand_ceiling: None,
            negatives: NegativePolicy::Allow,
        }
    }

    /// With operand ceiling
    #[inline]
    #[must_use]
    pub fn with_ceiling(mut self, ceiling: usize) -> Self {
        self.operand_ceiling = Some(ceiling);
        self
    }

    /// With negative policy
    #[inline]
    #[must_use]
    pub fn with_negatives(mut self, negatives: NegativePolicy) -> Self {
        self.negatives = negatives;
        self
    }
}

/// The five parsing rules, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// At most two comma-separated operands
    V1,
    /// Any number of comma-separated operands
    V2,
    /// Comma or newline, mixed freely
    V3,
    /// Custom delimiter declaration, default `;`
    V4,
    /// Custom delimiter declaration, negatives rejected
    V5,
}

impl Variant {
    /// All variants in order
    pub const ALL: [Variant; 5] = [Self::V1, Self::V2, Self::V3, Self::V4, Self::V5];

    /// Policy this variant runs with
    #[must_use]
    pub fn policy(&self) -> SumPolicy {
        match self {
            Self::V1 => SumPolicy::fixed(DelimiterSet::comma()).with_ceiling(BOUNDED_OPERANDS),
            Self::V2 => SumPolicy::fixed(DelimiterSet::comma()),
            Self::V3 => SumPolicy::fixed(DelimiterSet::comma_or_newline()),
            Self::V4 => SumPolicy::declared(DeclarationCheck::RequirePayloadLine),
            Self::V5 => SumPolicy::declared(DeclarationCheck::RejectEmptyPayload)
                .with_negatives(NegativePolicy::Reject),
        }
    }

    /// Short lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::V5 => "v5",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown variant name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant '{0}', expected one of v1, v2, v3, v4, v5")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_v1_is_bounded() {
        for variant in Variant::ALL {
            let expected = (variant == Variant::V1).then_some(BOUNDED_OPERANDS);
            assert_eq!(variant.policy().operand_ceiling, expected, "{variant}");
        }
    }

    #[test]
    fn only_v5_rejects_negatives() {
        for variant in Variant::ALL {
            let expected = if variant == Variant::V5 {
                NegativePolicy::Reject
            } else {
                NegativePolicy::Allow
            };
            assert_eq!(variant.policy().negatives, expected, "{variant}");
        }
    }

    #[test]
    fn declaration_checks_differ() {
        assert_eq!(
            Variant::V4.policy().delimiters,
            DelimiterStrategy::Declared(DeclarationCheck::RequirePayloadLine)
        );
        assert_eq!(
            Variant::V5.policy().delimiters,
            DelimiterStrategy::Declared(DeclarationCheck::RejectEmptyPayload)
        );
    }

    #[test]
    fn variant_from_str() {
        assert_eq!("v3".parse::<Variant>().unwrap(), Variant::V3);
        assert_eq!(" V5 ".parse::<Variant>().unwrap(), Variant::V5);
        assert!("v6".parse::<Variant>().is_err());
    }

    #[test]
    fn variant_display_roundtrip() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }
}
