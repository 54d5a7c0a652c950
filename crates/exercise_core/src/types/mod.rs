//! Shared value and error types.
//!
//! This module provides:
//! - `error`: Structured error type for every fallible operation in the crate
//! - `number`: Integer-or-real numeric result used for display
//!
//! # Re-exports
//!
//! - [`MathError`], [`MathResult`] from `error`
//! - [`Number`] from `number`

pub mod error;
pub mod number;

pub use error::{MathError, MathResult};
pub use number::Number;
