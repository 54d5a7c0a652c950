//! Exact-value engine and the number theory it is built on.
//!
//! ## Modules
//!
//! - [`number_theory`]: primality, nth prime, divisors, gcd
//! - [`fraction`]: simplified integer fractions and their arithmetic
//! - [`radical`]: square-root simplification to `c·√r`
//! - [`rounding`]: significant-digit rounding with integer collapse
//! - [`statistics`]: median and interquartile range
//! - [`geometry`]: signed triangle area
//!
//! ## Examples
//!
//! ```
//! use exercise_core::math::{add, round_sig, simplify_radical};
//! use exercise_core::types::Number;
//!
//! assert_eq!(add(1, 2, 1, 3).unwrap().to_pair(), (5, 6));
//! assert_eq!(simplify_radical(18).unwrap().to_pair(), (3, 2));
//! assert_eq!(round_sig(0.125, 2).unwrap(), Number::Real(0.13));
//! ```

pub mod fraction;
pub mod geometry;
pub mod number_theory;
pub mod radical;
pub mod rounding;
pub mod statistics;

// Re-export public API at module level
pub use fraction::{add, simplify, subtract, Fraction};
pub use geometry::triangle_area;
pub use number_theory::{factors, gcd, gcd_all, is_prime, nth_prime, prime_factors};
pub use radical::{simplify_radical, Radical, RadicalForm};
pub use rounding::{round_sig, ROUNDING_EPSILON};
pub use statistics::{interquartile_range, median};
