//! Error types for the string calculator
//!
//! Provides error handling for:
//! - Summation failures (operand count, declarations, numeric validation, negatives)
//! - Configuration loading and validation

use std::fmt;
use std::path::PathBuf;

/// Errors raised by a summation call
///
/// Any of these aborts the call. The invocation counter has already been
/// incremented by the time one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// More operands than the variant accepts
    #[error("supports only 0, 1, or 2 numbers")]
    TooManyOperands {
        /// Number of tokens the input split into
        found: usize,
    },

    /// Delimiter declaration present but the number payload is missing
    #[error("custom delimiter must be followed by numbers")]
    MalformedDelimiterDeclaration,

    /// A token did not parse as a base-10 number
    #[error("all inputs must be valid numbers (found {token:?})")]
    NonNumericOperand {
        /// The offending token, as split from the input
        token: String,
    },

    /// Negative operands rejected, listed in input order
    #[error("negatives not allowed: {}", NegativeList(.negatives))]
    NegativeOperandsPresent {
        /// Every negative value, left to right
        negatives: Vec<f64>,
    },
}

impl CalcError {
    /// Create non-numeric operand error
    pub fn non_numeric(token: impl Into<String>) -> Self {
        Self::NonNumericOperand {
            token: token.into(),
        }
    }

    /// Fieldless kind of this error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooManyOperands { .. } => ErrorKind::TooManyOperands,
            Self::MalformedDelimiterDeclaration => ErrorKind::MalformedDelimiterDeclaration,
            Self::NonNumericOperand { .. } => ErrorKind::NonNumericOperand,
            Self::NegativeOperandsPresent { .. } => ErrorKind::NegativeOperandsPresent,
        }
    }
}

/// Failure kinds, independent of payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`CalcError::TooManyOperands`]
    TooManyOperands,
    /// See [`CalcError::MalformedDelimiterDeclaration`]
    MalformedDelimiterDeclaration,
    /// See [`CalcError::NonNumericOperand`]
    NonNumericOperand,
    /// See [`CalcError::NegativeOperandsPresent`]
    NegativeOperandsPresent,
}

impl ErrorKind {
    /// Stable identifier, used in machine-readable output
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooManyOperands => "too_many_operands",
            Self::MalformedDelimiterDeclaration => "malformed_delimiter_declaration",
            Self::NonNumericOperand => "non_numeric_operand",
            Self::NegativeOperandsPresent => "negative_operands_present",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `", "`-joined rendering of negative operands
struct NegativeList<'a>(&'a [f64]);

impl fmt::Display for NegativeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Errors while loading or validating a [`crate::CalculatorConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during config read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds unusable values
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for summation calls
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_operands_display() {
        let err = CalcError::TooManyOperands { found: 3 };
        assert_eq!(err.to_string(), "supports only 0, 1, or 2 numbers");
    }

    #[test]
    fn negatives_joined_in_order() {
        let err = CalcError::NegativeOperandsPresent {
            negatives: vec![-2.0, -3.0, -0.5],
        };
        assert_eq!(err.to_string(), "negatives not allowed: -2, -3, -0.5");
    }

    #[test]
    fn non_numeric_names_token() {
        let err = CalcError::non_numeric("x");
        assert_eq!(err.to_string(), "all inputs must be valid numbers (found \"x\")");
        assert_eq!(err.kind(), ErrorKind::NonNumericOperand);
    }

    #[test]
    fn kind_identifiers() {
        assert_eq!(
            CalcError::MalformedDelimiterDeclaration.kind().to_string(),
            "malformed_delimiter_declaration"
        );
        assert_eq!(ErrorKind::TooManyOperands.as_str(), "too_many_operands");
    }

    #[test]
    fn config_io_error_display() {
        let err = ConfigError::io_error(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("missing.toml"));
    }
}
