//! Number theory primitives.
//!
//! Small, bounded integer routines shared by the rest of the crate:
//! - [`is_prime`]: trial-division primality test
//! - [`nth_prime`]: 1-indexed prime sequence
//! - [`factors`] / [`prime_factors`]: divisor enumeration
//! - [`gcd`] / [`gcd_all`]: Euclidean greatest common divisor
//!
//! All loops are bounded by `√n` (primality) or `n` (divisor scan).

use crate::types::{MathError, MathResult};

/// Returns `true` if `n` is prime.
///
/// Values `n <= 1` are never prime. Trial division runs while `i² <= n`.
///
/// # Examples
///
/// ```
/// use exercise_core::math::number_theory::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns the `n`-th prime, counting from `nth_prime(1) == 2`.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` when `n == 0`.
///
/// # Examples
///
/// ```
/// use exercise_core::math::number_theory::nth_prime;
///
/// assert_eq!(nth_prime(1).unwrap(), 2);
/// assert_eq!(nth_prime(10).unwrap(), 29);
/// assert!(nth_prime(0).is_err());
/// ```
pub fn nth_prime(n: usize) -> MathResult<u64> {
    if n == 0 {
        return Err(MathError::invalid_argument(
            "prime index is 1-based; got 0",
        ));
    }
    let mut candidate: i64 = 1;
    for _ in 0..n {
        candidate += 1;
        while !is_prime(candidate) {
            candidate += 1;
        }
    }
    Ok(candidate as u64)
}

/// All positive divisors of `n` in ascending order.
///
/// Uses a linear scan over `1..=n`. Zero has no listed divisors.
///
/// # Examples
///
/// ```
/// use exercise_core::math::number_theory::factors;
///
/// assert_eq!(factors(12), vec![1, 2, 3, 4, 6, 12]);
/// assert_eq!(factors(1), vec![1]);
/// assert!(factors(0).is_empty());
/// ```
pub fn factors(n: u64) -> Vec<u64> {
    (1..=n).filter(|i| n % i == 0).collect()
}

/// Distinct prime divisors of `n`, ascending.
///
/// Each prime appears once regardless of multiplicity, so
/// `prime_factors(12) == [2, 3]`.
pub fn prime_factors(n: u64) -> Vec<u64> {
    factors(n)
        .into_iter()
        .filter(|&f| i64::try_from(f).map(is_prime).unwrap_or(false))
        .collect()
}

/// Greatest common divisor of two integers.
///
/// Computed with the Euclidean algorithm on absolute values, with the
/// convention `gcd(m, 0) == |m|` (and therefore `gcd(0, 0) == 0`).
///
/// # Examples
///
/// ```
/// use exercise_core::math::number_theory::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(m: i64, n: i64) -> u64 {
    euclid(m.unsigned_abs(), n.unsigned_abs())
}

/// Greatest common divisor of any number of integers.
///
/// Folds [`gcd`] pairwise from the left. The empty sequence yields `0`,
/// the identity of the fold.
///
/// # Examples
///
/// ```
/// use exercise_core::math::number_theory::gcd_all;
///
/// assert_eq!(gcd_all([12, 18, 27]), 3);
/// assert_eq!(gcd_all([5]), 5);
/// assert_eq!(gcd_all(std::iter::empty()), 0);
/// ```
pub fn gcd_all<I>(values: I) -> u64
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .fold(0u64, |acc, v| euclid(acc, v.unsigned_abs()))
}

#[inline]
fn euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
