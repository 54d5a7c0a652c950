//! Order statistics over small samples.
//!
//! The even-count median is the real mean of the two middle values, not
//! an exact fraction.
//!
//! [`interquartile_range`] uses its own parity-dependent split of the sorted
//! sample rather than a textbook quartile method. Generated answer keys
//! depend on these exact slices, so the index arithmetic must not change:
//!
//! | count `n` | lower half | upper half |
//! |-----------|------------|------------|
//! | odd  | `sorted[..(n - 3) div 2]` | `sorted[(n + 1) / 2..]` |
//! | even | `sorted[..n / 2 - 1]`     | `sorted[n / 2 + 1..]`   |
//!
//! `div` is floor division; a negative slice end counts back from the end of
//! the sample (only reachable for `n == 1`, where it yields an empty slice).

use num_traits::ToPrimitive;

use crate::types::{MathError, MathResult};

/// Median of `values`.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` if `values` is empty or contains a
/// value that is NaN or not representable as `f64`.
///
/// # Examples
///
/// ```
/// use exercise_core::math::statistics::median;
///
/// assert_eq!(median(&[3, 1, 2]).unwrap(), 2.0);
/// assert_eq!(median(&[1, 2, 3, 4]).unwrap(), 2.5);
/// assert_eq!(median(&[0.5, 0.25]).unwrap(), 0.375);
/// ```
pub fn median<T: ToPrimitive>(values: &[T]) -> MathResult<f64> {
    let sorted = sorted_sample(values)?;
    median_of_sorted(&sorted)
}

/// Interquartile range of `values`: `median(upper) - median(lower)`.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` if either half is empty (fewer than
/// four values) or any value is NaN.
///
/// # Examples
///
/// ```
/// use exercise_core::math::statistics::interquartile_range;
///
/// // lower = [1, 2], upper = [5, 6, 7]
/// assert_eq!(interquartile_range(&[1, 2, 3, 4, 5, 6, 7]).unwrap(), 4.5);
/// // lower = [1, 2, 3], upper = [6, 7, 8]
/// assert_eq!(interquartile_range(&[8, 7, 6, 5, 4, 3, 2, 1]).unwrap(), 5.0);
/// ```
pub fn interquartile_range<T: ToPrimitive>(values: &[T]) -> MathResult<f64> {
    let sorted = sorted_sample(values)?;
    let n = sorted.len() as isize;
    let (lower_end, upper_start) = if n % 2 == 1 {
        ((n - 3).div_euclid(2), (n + 1) / 2)
    } else {
        (n / 2 - 1, n / 2 + 1)
    };
    let lower = &sorted[..slice_end(lower_end, sorted.len())];
    let upper = &sorted[(upper_start as usize).min(sorted.len())..];
    tracing::trace!(
        n,
        lower_len = lower.len(),
        upper_len = upper.len(),
        "split sample for interquartile range"
    );
    if lower.is_empty() || upper.is_empty() {
        return Err(MathError::invalid_argument(format!(
            "interquartile range needs at least 4 values, got {}",
            n
        )));
    }
    Ok(median_of_sorted(upper)? - median_of_sorted(lower)?)
}

/// Resolve a possibly negative slice end against `len`.
fn slice_end(end: isize, len: usize) -> usize {
    if end < 0 {
        len.saturating_sub(end.unsigned_abs())
    } else {
        (end as usize).min(len)
    }
}

fn sorted_sample<T: ToPrimitive>(values: &[T]) -> MathResult<Vec<f64>> {
    let mut sorted = values
        .iter()
        .map(|v| match v.to_f64() {
            Some(x) if !x.is_nan() => Ok(x),
            _ => Err(MathError::invalid_argument("sample value is not a number")),
        })
        .collect::<MathResult<Vec<f64>>>()?;
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

fn median_of_sorted(sorted: &[f64]) -> MathResult<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(MathError::invalid_argument("median of an empty sample"));
    }
    if n % 2 == 1 {
        Ok(sorted[(n - 1) / 2])
    } else {
        Ok((sorted[n / 2] + sorted[n / 2 - 1]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[1, 2, 3]).unwrap(), 2.0);
        assert_eq!(median(&[1, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(median(&[7]).unwrap(), 7.0);
    }

    #[test]
    fn test_median_unsorted_input() {
        assert_eq!(median(&[9, -1, 4, 4, 0]).unwrap(), 4.0);
        assert_eq!(median(&[10.0, 2.0, 8.0, 4.0]).unwrap(), 6.0);
    }

    #[test]
    fn test_median_even_uses_real_division() {
        assert_eq!(median(&[1, 2]).unwrap(), 1.5);
    }

    #[test]
    fn test_median_empty() {
        let empty: [i32; 0] = [];
        assert!(matches!(median(&empty), Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn test_median_rejects_nan() {
        assert!(median(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_iqr_odd_split() {
        // n = 5: lower = [1], upper = [4, 5]
        assert_eq!(interquartile_range(&[1, 2, 3, 4, 5]).unwrap(), 3.5);
        // n = 9: lower = [1, 2, 3], upper = [6, 7, 8, 9]
        assert_eq!(
            interquartile_range(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap(),
            5.5
        );
    }

    #[test]
    fn test_iqr_even_split() {
        // n = 4: lower = [1], upper = [4]
        assert_eq!(interquartile_range(&[4, 3, 2, 1]).unwrap(), 3.0);
        // n = 6: lower = [1, 2], upper = [5, 6]
        assert_eq!(interquartile_range(&[1, 2, 3, 4, 5, 6]).unwrap(), 4.0);
    }

    #[test]
    fn test_iqr_real_values() {
        let data = [1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5, 9.5, 10.5];
        // lower = [1.5, 2.5, 3.5, 4.5], upper = [7.5, 8.5, 9.5, 10.5]
        assert_relative_eq!(interquartile_range(&data).unwrap(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_iqr_too_few_values() {
        for n in 0..4 {
            let data: Vec<i32> = (0..n).collect();
            assert!(
                interquartile_range(&data).is_err(),
                "n = {} should be rejected",
                n
            );
        }
    }

    #[test]
    fn test_slice_end_negative() {
        assert_eq!(slice_end(-1, 1), 0);
        assert_eq!(slice_end(-1, 5), 4);
        assert_eq!(slice_end(2, 5), 2);
        assert_eq!(slice_end(9, 5), 5);
    }

    proptest! {
        #[test]
        fn test_median_within_sample_bounds(values in prop::collection::vec(-1_000i64..1_000, 1..50)) {
            let m = median(&values).unwrap();
            let min = *values.iter().min().unwrap() as f64;
            let max = *values.iter().max().unwrap() as f64;
            prop_assert!(m >= min && m <= max);
        }

        #[test]
        fn test_iqr_non_negative(values in prop::collection::vec(-1_000i64..1_000, 4..50)) {
            prop_assert!(interquartile_range(&values).unwrap() >= 0.0);
        }
    }
}
