//! # exercise_quiz: Multiple-Choice Framing for Generated Exercises
//!
//! ## Presentation Layer Role
//!
//! exercise_quiz sits on top of exercise_core and provides:
//! - Multiple-choice construction and LaTeX rendering (`choice`)
//! - A seeded, replayable randomness source (`rng`)
//! - Layout, reordering and seed settings from TOML or the environment (`config`)
//!
//! Randomness is always injected. Any `rand::Rng` works; [`rng::QuizRng`]
//! records its seed so a worksheet can be regenerated exactly.
//!
//! ## Usage Examples
//!
//! ```rust
//! use exercise_core::math::simplify_radical;
//! use exercise_quiz::{build_from_values, QuizConfig};
//!
//! let config = QuizConfig::from_toml_str("seed = 2024").unwrap();
//! let mut rng = config.rng();
//!
//! let answer = simplify_radical(50).unwrap();
//! let distractors = [simplify_radical(8).unwrap(), simplify_radical(18).unwrap()];
//! let item = build_from_values(
//!     "Simplify $\\sqrt{50}$",
//!     answer.to_latex(),
//!     distractors.iter().map(|r| r.to_latex()),
//!     &config.choice_options(),
//!     &mut rng,
//! )
//! .unwrap();
//!
//! assert_eq!(item.correct(), r"$5\sqrt{2}$");
//! assert!(item.render().contains(r"\choice $5\sqrt{2}$"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod choice;
pub mod config;
pub mod rng;

// Re-export public API at crate level
pub use choice::{build_choice, build_from_values, ChoiceLayout, ChoiceOptions, MultipleChoice};
pub use config::{ConfigError, QuizConfig};
pub use rng::QuizRng;
