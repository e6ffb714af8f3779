//! strcalc Core
//!
//! Sums delimited strings of numbers under five progressively richer parsing
//! rules, and counts how often it was asked to.
//!
//! # Variants
//!
//! - **V1**: at most two comma-separated operands
//! - **V2**: any number of comma-separated operands
//! - **V3**: commas and newlines, mixed freely
//! - **V4**: optional `//<delimiter>\n` declaration, default `;`
//! - **V5**: as V4, and negative operands are rejected
//!
//! # Architecture
//!
//! ```text
//! input → blank check → delimiter policy → DelimiterSet::split → operand validation → sum
//!                             ↑
//!                 Declaration::parse (V4, V5)
//! ```
//!
//! # Example
//!
//! ```rust
//! use strcalc_core::{Calculator, ErrorKind};
//!
//! let calc = Calculator::new();
//!
//! assert_eq!(calc.add_v3(Some("1\n2,3")).unwrap(), 6.0);
//! assert_eq!(calc.add_v4(Some("//#\n4#5#6")).unwrap(), 15.0);
//!
//! let err = calc.add_v5(Some("1;-2;-3;4")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NegativeOperandsPresent);
//!
//! assert_eq!(calc.invocation_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod calculator;
pub mod config;
pub mod delimiter;
pub mod error;
pub mod operand;
pub mod policy;

// Re-exports for convenience
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use delimiter::{Declaration, DeclarationCheck, DelimiterSet};
pub use error::{CalcError, CalcResult, ConfigError, ErrorKind};
pub use policy::{DelimiterStrategy, NegativePolicy, SumPolicy, UnknownVariant, Variant};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the calculator
    pub use crate::calculator::Calculator;
    pub use crate::config::CalculatorConfig;
    pub use crate::error::{CalcError, CalcResult, ErrorKind};
    pub use crate::policy::Variant;
}
