//! Square-root radicals of integers.
//!
//! [`simplify_radical`] rewrites `√n` as `c·√r` with `r` squarefree by
//! repeatedly dividing out perfect squares `i²` while `i² <= n`.

use std::fmt;

use crate::types::{MathError, MathResult};

/// `coefficient · √radicand` with a squarefree radicand.
///
/// # Examples
///
/// ```
/// use exercise_core::math::radical::simplify_radical;
///
/// let r = simplify_radical(72).unwrap();
/// assert_eq!((r.coefficient(), r.radicand()), (6, 2));
/// assert_eq!(r.to_latex(), r"$6\sqrt{2}$");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRadical"))]
pub struct Radical {
    coefficient: u64,
    radicand: u64,
}

/// How a [`Radical`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadicalForm {
    /// `√0`: renders as `0`
    Zero,
    /// Radicand is `1`: renders as the coefficient alone
    Integer(u64),
    /// Coefficient is `1`: renders as a bare radical
    Surd(u64),
    /// General `c√r`
    Scaled(u64, u64),
}

impl Radical {
    /// Create `coefficient · √radicand` from an already simplified pair.
    ///
    /// `√0` is only accepted in its canonical form `(1, 0)`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidArgument` if the coefficient is zero or
    /// the radicand still contains a square factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercise_core::math::radical::Radical;
    ///
    /// assert_eq!(Radical::new(3, 2).unwrap().to_latex(), r"$3\sqrt{2}$");
    /// assert!(Radical::new(1, 8).is_err());
    /// ```
    pub fn new(coefficient: u64, radicand: u64) -> MathResult<Self> {
        if coefficient == 0 || (radicand == 0 && coefficient != 1) {
            return Err(MathError::invalid_argument(format!(
                "non-canonical radical {}·√{}",
                coefficient, radicand
            )));
        }
        if extract_squares(radicand).0 != 1 {
            return Err(MathError::invalid_argument(format!(
                "radicand {} is not squarefree",
                radicand
            )));
        }
        Ok(Self {
            coefficient,
            radicand,
        })
    }

    /// Multiplier outside the root.
    #[inline]
    pub fn coefficient(&self) -> u64 {
        self.coefficient
    }

    /// Squarefree value under the root.
    #[inline]
    pub fn radicand(&self) -> u64 {
        self.radicand
    }

    /// The `(coefficient, radicand)` pair.
    #[inline]
    pub fn to_pair(self) -> (u64, u64) {
        (self.coefficient, self.radicand)
    }

    /// Rendering variant for this radical.
    pub fn form(&self) -> RadicalForm {
        match (self.coefficient, self.radicand) {
            (_, 0) => RadicalForm::Zero,
            (c, 1) => RadicalForm::Integer(c),
            (1, r) => RadicalForm::Surd(r),
            (c, r) => RadicalForm::Scaled(c, r),
        }
    }

    /// Approximate value as `f64`.
    pub fn to_f64(&self) -> f64 {
        self.coefficient as f64 * (self.radicand as f64).sqrt()
    }

    /// Inline-math LaTeX markup, e.g. `$3\sqrt{2}$`.
    pub fn to_latex(&self) -> String {
        match self.form() {
            RadicalForm::Zero => "$0$".to_string(),
            RadicalForm::Integer(c) => format!("${}$", c),
            RadicalForm::Surd(r) => format!("$\\sqrt{{{}}}$", r),
            RadicalForm::Scaled(c, r) => format!("${}\\sqrt{{{}}}$", c, r),
        }
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form() {
            RadicalForm::Zero => write!(f, "0"),
            RadicalForm::Integer(c) => write!(f, "{}", c),
            RadicalForm::Surd(r) => write!(f, "√{}", r),
            RadicalForm::Scaled(c, r) => write!(f, "{}√{}", c, r),
        }
    }
}

/// Simplify `√n` to `c·√r` with `r` squarefree and `c²·r == n`.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` for negative `n`.
///
/// # Examples
///
/// ```
/// use exercise_core::math::radical::simplify_radical;
///
/// assert_eq!(simplify_radical(12).unwrap().to_pair(), (2, 3));
/// assert_eq!(simplify_radical(49).unwrap().to_pair(), (7, 1));
/// assert_eq!(simplify_radical(0).unwrap().to_pair(), (1, 0));
/// assert!(simplify_radical(-4).is_err());
/// ```
pub fn simplify_radical(n: i64) -> MathResult<Radical> {
    if n < 0 {
        tracing::warn!(n, "rejected negative radicand");
        return Err(MathError::invalid_argument(format!(
            "cannot take the square root of negative {}",
            n
        )));
    }
    let (coefficient, radicand) = extract_squares(n as u64);
    tracing::trace!(n, coefficient, radicand, "simplified radical");
    Ok(Radical {
        coefficient,
        radicand,
    })
}

/// Split `n` into `(c, r)` with `c²·r == n` and `r` squarefree.
fn extract_squares(n: u64) -> (u64, u64) {
    let mut radicand = n;
    let mut coefficient: u64 = 1;
    let mut i: u64 = 2;
    // i stays put after a division so repeated square factors are removed.
    while i <= radicand / i {
        let square = i * i;
        if radicand % square == 0 {
            coefficient *= i;
            radicand /= square;
        } else {
            i += 1;
        }
    }
    (coefficient, radicand)
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRadical {
    coefficient: u64,
    radicand: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRadical> for Radical {
    type Error = MathError;

    fn try_from(raw: RawRadical) -> MathResult<Self> {
        Radical::new(raw.coefficient, raw.radicand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn is_squarefree(r: u64) -> bool {
        (2..).take_while(|i| i * i <= r).all(|i| r % (i * i) != 0)
    }

    #[test]
    fn test_repeated_square_factors() {
        // 16 = 2² · 2²
        assert_eq!(simplify_radical(16).unwrap().to_pair(), (4, 1));
        // 32 = 2² · 2² · 2
        assert_eq!(simplify_radical(32).unwrap().to_pair(), (4, 2));
        // 720 = 12² · 5
        assert_eq!(simplify_radical(720).unwrap().to_pair(), (12, 5));
    }

    #[test]
    fn test_squarefree_input_unchanged() {
        assert_eq!(simplify_radical(30).unwrap().to_pair(), (1, 30));
        assert_eq!(simplify_radical(2).unwrap().to_pair(), (1, 2));
    }

    #[test]
    fn test_render_variants() {
        assert_eq!(simplify_radical(0).unwrap().to_latex(), "$0$");
        assert_eq!(simplify_radical(1).unwrap().to_latex(), "$1$");
        assert_eq!(simplify_radical(36).unwrap().to_latex(), "$6$");
        assert_eq!(simplify_radical(7).unwrap().to_latex(), r"$\sqrt{7}$");
        assert_eq!(simplify_radical(50).unwrap().to_latex(), r"$5\sqrt{2}$");
    }

    #[test]
    fn test_display() {
        assert_eq!(simplify_radical(50).unwrap().to_string(), "5√2");
        assert_eq!(simplify_radical(0).unwrap().to_string(), "0");
    }

    #[test]
    fn test_form() {
        assert_eq!(simplify_radical(0).unwrap().form(), RadicalForm::Zero);
        assert_eq!(simplify_radical(9).unwrap().form(), RadicalForm::Integer(3));
        assert_eq!(simplify_radical(3).unwrap().form(), RadicalForm::Surd(3));
        assert_eq!(simplify_radical(18).unwrap().form(), RadicalForm::Scaled(3, 2));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            simplify_radical(-1),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_to_f64() {
        assert_relative_eq!(simplify_radical(8).unwrap().to_f64(), 8f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(Radical::new(5, 2).unwrap(), simplify_radical(50).unwrap());
        assert_eq!(Radical::new(1, 0).unwrap(), simplify_radical(0).unwrap());
        assert!(Radical::new(2, 12).is_err());
        assert!(Radical::new(0, 3).is_err());
        assert!(Radical::new(4, 0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_squarefree() {
        let r: Radical = serde_json::from_str(r#"{"coefficient":3,"radicand":2}"#).unwrap();
        assert_eq!(r.to_pair(), (3, 2));
        assert!(serde_json::from_str::<Radical>(r#"{"coefficient":1,"radicand":8}"#).is_err());
        assert!(serde_json::from_str::<Radical>(r#"{"coefficient":0,"radicand":5}"#).is_err());
    }

    proptest! {
        #[test]
        fn test_radical_reconstructs_input(n in 0i64..200_000) {
            let r = simplify_radical(n).unwrap();
            prop_assert_eq!(r.coefficient() * r.coefficient() * r.radicand(), n as u64);
            prop_assert!(is_squarefree(r.radicand()));
            prop_assert_eq!(Radical::new(r.coefficient(), r.radicand()).unwrap(), r);
        }

        #[test]
        fn test_radical_is_idempotent(n in 0i64..200_000) {
            let r = simplify_radical(n).unwrap();
            let again = simplify_radical(r.radicand() as i64).unwrap();
            prop_assert_eq!(again.to_pair(), (1, r.radicand()));
        }
    }
}
