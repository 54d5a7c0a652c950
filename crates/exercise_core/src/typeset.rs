//! Small formatters for values embedded in typeset exercises.
//!
//! These produce inline LaTeX fragments only; page layout and diagrams are
//! left to the typesetting layer.

use std::fmt::Display;

use crate::math::fraction::simplify;
use crate::types::MathResult;

/// Wrap a value in inline-math dollars.
///
/// ```
/// use exercise_core::typeset::dollar;
///
/// assert_eq!(dollar(42), "$42$");
/// assert_eq!(dollar("x^2"), "$x^2$");
/// ```
pub fn dollar(value: impl Display) -> String {
    format!("${}$", value)
}

/// English ordinal for `n`: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...
///
/// ```
/// use exercise_core::typeset::ordinal;
///
/// assert_eq!(ordinal(1), "1st");
/// assert_eq!(ordinal(12), "12th");
/// assert_eq!(ordinal(103), "103rd");
/// ```
pub fn ordinal(n: u64) -> String {
    let suffix = if (n / 10) % 10 == 1 {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

/// `\frac{a}{b}` without simplification.
pub fn latex_frac(a: impl Display, b: impl Display) -> String {
    format!("\\frac{{{}}}{{{}}}", a, b)
}

/// `\frac{a}{b}` after reducing to lowest terms.
///
/// # Errors
///
/// Returns `MathError::DivisionByZero` if `b == 0`.
///
/// ```
/// use exercise_core::typeset::latex_frac_simplify;
///
/// assert_eq!(latex_frac_simplify(6, 8).unwrap(), r"\frac{3}{4}");
/// ```
pub fn latex_frac_simplify(a: i64, b: i64) -> MathResult<String> {
    Ok(simplify(a, b)?.to_latex())
}
