//! Display-oriented numeric result type.
//!
//! Generated exercises print `4` rather than `4.0`, but keep `4.5` as is.
//! [`Number`] carries that decision as data so the typesetting layer never
//! has to re-inspect a float.

use std::fmt;

use super::error::{MathError, MathResult};

/// A numeric result collapsed to an integer when it has no fractional part.
///
/// # Examples
/// ```
/// use exercise_core::types::Number;
///
/// assert_eq!(Number::from_f64(4.0).unwrap(), Number::Integer(4));
/// assert_eq!(Number::from_f64(4.5).unwrap(), Number::Real(4.5));
/// assert_eq!(Number::Integer(4).to_string(), "4");
/// assert_eq!(Number::Real(1.5).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// Value with no fractional part
    Integer(i64),
    /// Value with a fractional part
    Real(f64),
}

impl Number {
    /// Collapse `value` to an integer when `value % 1 == 0`.
    ///
    /// Integral values outside the `i64` range stay `Real`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidArgument` for NaN or infinite input.
    pub fn from_f64(value: f64) -> MathResult<Self> {
        if !value.is_finite() {
            return Err(MathError::invalid_argument(format!(
                "non-finite value {}",
                value
            )));
        }
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Ok(Number::Integer(value as i64))
        } else {
            Ok(Number::Real(value))
        }
    }

    /// Value as `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(n) => n as f64,
            Number::Real(x) => x,
        }
    }

    /// Whether the value is exactly one (used for pluralisation).
    pub fn is_one(&self) -> bool {
        self.as_f64() == 1.0
    }

    /// Whether the value collapsed to an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Real(x) => write_real(f, *x),
        }
    }
}

/// Shortest round-trip digits; exponent form below `1e-4` or from `1e16`
/// up, written with a signed two-digit exponent (`1.5e-05`, `1e+16`).
fn write_real(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let magnitude = x.abs();
    if x == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return write!(f, "{}", x);
    }
    let scientific = format!("{:e}", x);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => f.write_str(&scientific),
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}
