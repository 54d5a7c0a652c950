//! Exact integer fractions.
//!
//! A [`Fraction`] is a plain value pair. Constructors always return the
//! simplified form:
//! - `gcd(|numerator|, denominator) == 1`
//! - `denominator > 0` (the sign lives on the numerator)
//!
//! Arithmetic cross-multiplies and simplifies afterwards; there is no
//! common-denominator shortcut.

use std::fmt;

use super::number_theory::gcd;
use crate::types::{MathError, MathResult};

/// A simplified integer fraction `numerator / denominator`.
///
/// # Examples
///
/// ```
/// use exercise_core::math::fraction::Fraction;
///
/// let half = Fraction::new(4, 8).unwrap();
/// assert_eq!((half.numerator(), half.denominator()), (1, 2));
///
/// let neg = Fraction::new(3, -9).unwrap();
/// assert_eq!((neg.numerator(), neg.denominator()), (-1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFraction"))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Create the simplified fraction `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// - `MathError::DivisionByZero` if `denominator == 0`
    /// - `MathError::ArithmeticOverflow` if normalising the sign overflows
    ///   (only possible with `i64::MIN` operands)
    pub fn new(numerator: i64, denominator: i64) -> MathResult<Self> {
        if denominator == 0 {
            return Err(MathError::DivisionByZero);
        }
        let divisor = i64::try_from(gcd(numerator, denominator))
            .map_err(|_| MathError::ArithmeticOverflow("gcd exceeds i64".to_string()))?;
        let (mut n, mut d) = (numerator / divisor, denominator / divisor);
        if d < 0 {
            n = n
                .checked_neg()
                .ok_or_else(|| MathError::ArithmeticOverflow("negating numerator".to_string()))?;
            d = d
                .checked_neg()
                .ok_or_else(|| MathError::ArithmeticOverflow("negating denominator".to_string()))?;
        }
        Ok(Self {
            numerator: n,
            denominator: d,
        })
    }

    /// Create the integer `value / 1`.
    pub fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Signed numerator.
    #[inline]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Strictly positive denominator.
    #[inline]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// The `(numerator, denominator)` pair.
    #[inline]
    pub fn to_pair(self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }

    /// Whether the fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Approximate value as `f64`.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// `self + other`, simplified.
    ///
    /// # Errors
    ///
    /// Returns `MathError::ArithmeticOverflow` if a cross product overflows.
    pub fn checked_add(self, other: Fraction) -> MathResult<Fraction> {
        add(
            self.numerator,
            self.denominator,
            other.numerator,
            other.denominator,
        )
    }

    /// `self - other`, simplified.
    ///
    /// # Errors
    ///
    /// Returns `MathError::ArithmeticOverflow` if a cross product overflows.
    pub fn checked_sub(self, other: Fraction) -> MathResult<Fraction> {
        subtract(
            self.numerator,
            self.denominator,
            other.numerator,
            other.denominator,
        )
    }

    /// LaTeX `\frac{n}{d}` markup.
    ///
    /// ```
    /// use exercise_core::math::fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(6, 8).unwrap().to_latex(), r"\frac{3}{4}");
    /// ```
    pub fn to_latex(&self) -> String {
        crate::typeset::latex_frac(self.numerator, self.denominator)
    }
}

/// Unchecked wire form; deserialisation goes through [`Fraction::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFraction {
    numerator: i64,
    denominator: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFraction> for Fraction {
    type Error = MathError;

    fn try_from(raw: RawFraction) -> MathResult<Self> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Simplify `a / b` by dividing both terms by their gcd.
///
/// # Errors
///
/// Returns `MathError::DivisionByZero` if `b == 0`.
///
/// # Examples
///
/// ```
/// use exercise_core::math::fraction::simplify;
///
/// assert_eq!(simplify(10, 4).unwrap().to_pair(), (5, 2));
/// assert_eq!(simplify(0, 7).unwrap().to_pair(), (0, 1));
/// assert!(simplify(1, 0).is_err());
/// ```
pub fn simplify(a: i64, b: i64) -> MathResult<Fraction> {
    Fraction::new(a, b)
}

/// `a/b + c/d`, simplified.
///
/// # Errors
///
/// - `MathError::DivisionByZero` if `b` or `d` is zero
/// - `MathError::ArithmeticOverflow` if a cross product overflows
///
/// # Examples
///
/// ```
/// use exercise_core::math::fraction::add;
///
/// assert_eq!(add(1, 2, 1, 3).unwrap().to_pair(), (5, 6));
/// assert_eq!(add(1, 4, 3, 4).unwrap().to_pair(), (1, 1));
/// ```
pub fn add(a: i64, b: i64, c: i64, d: i64) -> MathResult<Fraction> {
    let (ad, bc, bd) = cross_products(a, b, c, d)?;
    let numerator = ad
        .checked_add(bc)
        .ok_or_else(|| MathError::ArithmeticOverflow("a*d + b*c".to_string()))?;
    Fraction::new(numerator, bd)
}

/// `a/b - c/d`, simplified.
///
/// # Errors
///
/// - `MathError::DivisionByZero` if `b` or `d` is zero
/// - `MathError::ArithmeticOverflow` if a cross product overflows
///
/// # Examples
///
/// ```
/// use exercise_core::math::fraction::subtract;
///
/// assert_eq!(subtract(1, 2, 1, 3).unwrap().to_pair(), (1, 6));
/// assert_eq!(subtract(1, 3, 1, 2).unwrap().to_pair(), (-1, 6));
/// ```
pub fn subtract(a: i64, b: i64, c: i64, d: i64) -> MathResult<Fraction> {
    let (ad, bc, bd) = cross_products(a, b, c, d)?;
    let numerator = ad
        .checked_sub(bc)
        .ok_or_else(|| MathError::ArithmeticOverflow("a*d - b*c".to_string()))?;
    Fraction::new(numerator, bd)
}

fn cross_products(a: i64, b: i64, c: i64, d: i64) -> MathResult<(i64, i64, i64)> {
    let overflow = |what: &str| MathError::ArithmeticOverflow(what.to_string());
    let ad = a.checked_mul(d).ok_or_else(|| overflow("a*d"))?;
    let bc = b.checked_mul(c).ok_or_else(|| overflow("b*c"))?;
    let bd = b.checked_mul(d).ok_or_else(|| overflow("b*d"))?;
    Ok((ad, bc, bd))
}
