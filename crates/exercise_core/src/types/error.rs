//! Error types for structured error handling.
//!
//! This module provides:
//! - `MathError`: Errors from number theory, exact-value and conversion operations
//! - `MathResult`: Result alias used throughout the crate

use thiserror::Error;

/// Categorised errors for exercise value generation.
///
/// Every fallible operation in the crate reports one of these variants
/// synchronously at the call that detects the problem. No partial results
/// are ever returned alongside an error.
///
/// # Variants
/// - `DivisionByZero`: Zero denominator in a fraction
/// - `InvalidArgument`: Numeric input outside the operation's domain
/// - `InvalidUnit`: Unit token failed validation or is unrecognised
/// - `IncompatibleUnits`: Base units differ across a conversion
/// - `UnsupportedConversion`: Both units recognised but no conversion path exists
/// - `ValueNotFound`: Correct answer absent from a choice list
/// - `ArithmeticOverflow`: Intermediate result does not fit in 64 bits
///
/// # Examples
/// ```
/// use exercise_core::types::MathError;
///
/// let err = MathError::InvalidUnit("xyz".to_string());
/// assert_eq!(format!("{}", err), "Invalid unit: xyz");
///
/// let err = MathError::IncompatibleUnits {
///     from: "kg".to_string(),
///     to: "l".to_string(),
/// };
/// assert!(format!("{}", err).contains("not of the same type"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Denominator of a fraction is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Numeric input outside the domain of the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unit token failed validation or is not recognised.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// Base units of a conversion differ (e.g. mass to volume).
    #[error("Units are not of the same type: {from} and {to}")]
    IncompatibleUnits {
        /// Source unit token
        from: String,
        /// Target unit token
        to: String,
    },

    /// Both units are recognised but no conversion is defined between them.
    #[error("Conversion from {from} to {to} is not supported")]
    UnsupportedConversion {
        /// Source unit
        from: String,
        /// Target unit
        to: String,
    },

    /// Value expected in a collection was not found.
    #[error("Value not found: {0}")]
    ValueNotFound(String),

    /// Integer arithmetic overflowed.
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}

impl MathError {
    /// Create an `InvalidArgument` error from any displayable message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MathError::InvalidArgument(message.into())
    }

    /// Create an `InvalidUnit` error for the offending token.
    pub fn invalid_unit(unit: impl Into<String>) -> Self {
        MathError::InvalidUnit(unit.into())
    }

    /// Create an `UnsupportedConversion` error between two units.
    pub fn unsupported(from: impl ToString, to: impl ToString) -> Self {
        MathError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Check if the error was caused by a unit token or unit pairing.
    pub fn is_unit_error(&self) -> bool {
        matches!(
            self,
            MathError::InvalidUnit(_)
                | MathError::IncompatibleUnits { .. }
                | MathError::UnsupportedConversion { .. }
        )
    }
}

/// Result alias for operations that can fail with [`MathError`].
pub type MathResult<T> = Result<T, MathError>;
