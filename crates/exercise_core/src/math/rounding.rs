//! Significant-digit rounding.

use crate::types::{MathError, MathResult, Number};

/// Nudge added before rounding so values that sit exactly on a rounding
/// boundary in decimal (e.g. `0.125`, `2.5`) round away from zero instead
/// of following the binary representation or round-half-even.
pub const ROUNDING_EPSILON: f64 = 1e-15;

/// Round `value` to `k` significant digits.
///
/// The result collapses to [`Number::Integer`] when it has no fractional
/// part, so `4.0` is reported as `4` while `4.5` stays `4.5`. A request for
/// zero digits is treated as one digit.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` for NaN or infinite input.
///
/// # Examples
///
/// ```
/// use exercise_core::math::rounding::round_sig;
/// use exercise_core::types::Number;
///
/// assert_eq!(round_sig(1234.0, 2).unwrap(), Number::Integer(1200));
/// assert_eq!(round_sig(0.012345, 3).unwrap(), Number::Real(0.0123));
/// assert_eq!(round_sig(2.5, 1).unwrap(), Number::Integer(3));
/// ```
pub fn round_sig(value: f64, k: u32) -> MathResult<Number> {
    if !value.is_finite() {
        return Err(MathError::invalid_argument(format!(
            "cannot round non-finite value {}",
            value
        )));
    }
    let digits = k.max(1) as usize;
    // Scientific formatting rounds the exact binary value correctly, which is
    // what `%.<k>g` does; parsing it back yields the nearest f64.
    let formatted = format!("{:.*e}", digits - 1, value + ROUNDING_EPSILON);
    let rounded: f64 = formatted.parse().map_err(|_| {
        MathError::invalid_argument(format!("unparseable rounded value {}", formatted))
    })?;
    Number::from_f64(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_epsilon_breaks_ties_upwards() {
        // 0.125 is exact in binary; without the nudge it rounds to 0.12.
        assert_eq!(round_sig(0.125, 2).unwrap(), Number::Real(0.13));
        assert_eq!(round_sig(2.5, 1).unwrap(), Number::Integer(3));
        assert_eq!(round_sig(0.5, 1).unwrap(), Number::Real(0.5));
    }

    #[test]
    fn test_near_boundary_value() {
        assert_eq!(round_sig(149.999999999999, 2).unwrap(), Number::Integer(150));
        assert_eq!(round_sig(149.999999999999, 1).unwrap(), Number::Integer(100));
        assert_eq!(round_sig(149.999999999999, 3).unwrap(), Number::Integer(150));
    }

    #[test]
    fn test_collapse_to_integer() {
        assert_eq!(round_sig(4.0, 3).unwrap(), Number::Integer(4));
        assert_eq!(round_sig(4.5, 2).unwrap(), Number::Real(4.5));
        assert_eq!(round_sig(987_654.0, 3).unwrap(), Number::Integer(988_000));
    }

    #[test]
    fn test_small_values() {
        let r = round_sig(0.000_123_456, 2).unwrap().as_f64();
        assert_relative_eq!(r, 0.000_12, epsilon = 1e-18);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(round_sig(-1234.0, 2).unwrap(), Number::Integer(-1200));
        assert_eq!(round_sig(-0.0456, 1).unwrap(), Number::Real(-0.05));
    }

    #[test]
    fn test_zero_digits_means_one() {
        assert_eq!(round_sig(56.0, 0).unwrap(), round_sig(56.0, 1).unwrap());
    }

    #[test]
    fn test_zero() {
        assert_eq!(round_sig(0.0, 3).unwrap(), Number::Real(1e-15));
    }

    #[test]
    fn test_non_finite() {
        assert!(round_sig(f64::NAN, 2).is_err());
        assert!(round_sig(f64::NEG_INFINITY, 2).is_err());
    }
}
