//! # exercise_core: Exact Values for Generated Maths Exercises
//!
//! ## Foundation Layer Role
//!
//! exercise_core is the bottom layer of the workspace, providing:
//! - Number theory primitives: primes, divisors, gcd (`math::number_theory`)
//! - Exact fractions and radicals (`math::fraction`, `math::radical`)
//! - Significant-digit rounding and order statistics (`math::rounding`, `math::statistics`)
//! - Metric, imperial and time conversion (`conversion`)
//! - Clock values: times in words, `HH:MM`, hand angles (`conversion::clock`)
//! - Inline LaTeX formatters (`typeset`)
//! - Error types: `MathError` (`types::error`)
//!
//! Every operation is a pure, bounded, synchronous computation. Nothing here
//! holds state between calls.
//!
//! ## Dependencies
//!
//! - num-traits: Generic numeric input for statistics and geometry
//! - thiserror: Error derivation
//! - tracing: Diagnostic events (no subscriber is installed here)
//! - serde: Serialisation of value types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use exercise_core::conversion::{convert, time_to_words};
//! use exercise_core::math::{simplify, simplify_radical};
//!
//! let half = simplify(4, 8).unwrap();
//! assert_eq!(half.to_pair(), (1, 2));
//!
//! let root = simplify_radical(72).unwrap();
//! assert_eq!(root.to_latex(), r"$6\sqrt{2}$");
//!
//! assert_eq!(convert(100.0, "cm", "m").unwrap(), 1.0);
//! assert_eq!(time_to_words(9, 45).unwrap(), "quarter to ten");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for fractions, radicals, units and numbers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod conversion;
pub mod math;
pub mod typeset;
pub mod types;
