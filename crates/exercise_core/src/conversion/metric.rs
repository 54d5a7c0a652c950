//! Metric unit tokens and prefix scaling.
//!
//! A token such as `"km"` or `"dal"` is split suffix-first: the final
//! character is the base unit and everything before it is the prefix. This
//! is what disambiguates the overloaded `m`: `"mm"` is milli-metre, `"m"` is
//! a bare metre and `"mg"` is milli-gram.

use std::fmt;
use std::str::FromStr;

use crate::types::{MathError, MathResult};

/// Metric prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricPrefix {
    /// `m`, 10⁻³
    Milli,
    /// `c`, 10⁻²
    Centi,
    /// `d`, 10⁻¹
    Deci,
    /// no prefix
    Unit,
    /// `da`, 10¹
    Deca,
    /// `h`, 10²
    Hecto,
    /// `k`, 10³
    Kilo,
}

impl MetricPrefix {
    /// All prefixes, smallest first.
    pub const ALL: [MetricPrefix; 7] = [
        MetricPrefix::Milli,
        MetricPrefix::Centi,
        MetricPrefix::Deci,
        MetricPrefix::Unit,
        MetricPrefix::Deca,
        MetricPrefix::Hecto,
        MetricPrefix::Kilo,
    ];

    /// Scale factor relative to the base unit.
    pub fn multiplier(&self) -> f64 {
        match self {
            MetricPrefix::Milli => 0.001,
            MetricPrefix::Centi => 0.01,
            MetricPrefix::Deci => 0.1,
            MetricPrefix::Unit => 1.0,
            MetricPrefix::Deca => 10.0,
            MetricPrefix::Hecto => 100.0,
            MetricPrefix::Kilo => 1000.0,
        }
    }

    /// Token spelling (empty for [`MetricPrefix::Unit`]).
    pub fn symbol(&self) -> &'static str {
        match self {
            MetricPrefix::Milli => "m",
            MetricPrefix::Centi => "c",
            MetricPrefix::Deci => "d",
            MetricPrefix::Unit => "",
            MetricPrefix::Deca => "da",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Kilo => "k",
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.symbol() == s)
    }
}

/// Metric base unit, identifying the kind of quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseUnit {
    /// `m`, length
    Metre,
    /// `g`, mass
    Gram,
    /// `l`, volume
    Litre,
}

impl BaseUnit {
    /// Token spelling.
    pub fn symbol(&self) -> char {
        match self {
            BaseUnit::Metre => 'm',
            BaseUnit::Gram => 'g',
            BaseUnit::Litre => 'l',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'm' => Some(BaseUnit::Metre),
            'g' => Some(BaseUnit::Gram),
            'l' => Some(BaseUnit::Litre),
            _ => None,
        }
    }
}

/// A parsed metric unit token: prefix plus base unit.
///
/// # Examples
///
/// ```
/// use exercise_core::conversion::metric::{BaseUnit, MetricPrefix, MetricUnit};
///
/// let mm: MetricUnit = "mm".parse().unwrap();
/// assert_eq!(mm.prefix, MetricPrefix::Milli);
/// assert_eq!(mm.base, BaseUnit::Metre);
///
/// let m: MetricUnit = "m".parse().unwrap();
/// assert_eq!(m.prefix, MetricPrefix::Unit);
/// assert_eq!(m.to_string(), "m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricUnit {
    /// Scale prefix
    pub prefix: MetricPrefix,
    /// Quantity kind
    pub base: BaseUnit,
}

impl MetricUnit {
    /// Create a unit from its parts.
    pub fn new(prefix: MetricPrefix, base: BaseUnit) -> Self {
        Self { prefix, base }
    }

    /// Scale factor relative to the base unit.
    pub fn multiplier(&self) -> f64 {
        self.prefix.multiplier()
    }
}

impl FromStr for MetricUnit {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let base = chars
            .next_back()
            .and_then(BaseUnit::from_symbol)
            .ok_or_else(|| MathError::invalid_unit(s))?;
        let prefix =
            MetricPrefix::from_symbol(chars.as_str()).ok_or_else(|| MathError::invalid_unit(s))?;
        Ok(Self { prefix, base })
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix.symbol(), self.base.symbol())
    }
}

/// Whether `unit` is a valid metric token.
///
/// ```
/// use exercise_core::conversion::metric::valid_metric;
///
/// assert!(valid_metric("dag"));
/// assert!(valid_metric("l"));
/// assert!(!valid_metric("Km"));
/// assert!(!valid_metric(""));
/// ```
pub fn valid_metric(unit: &str) -> bool {
    unit.parse::<MetricUnit>().is_ok()
}

/// Convert `number` between two metric units of the same kind.
///
/// # Errors
///
/// - `MathError::InvalidUnit` if either token is not a valid metric unit
/// - `MathError::IncompatibleUnits` if the base units differ
///
/// # Examples
///
/// ```
/// use exercise_core::conversion::metric::convert;
///
/// assert_eq!(convert(100.0, "cm", "m").unwrap(), 1.0);
/// assert_eq!(convert(2.5, "kg", "g").unwrap(), 2500.0);
/// assert!(convert(5.0, "kg", "l").is_err());
/// ```
pub fn convert(number: f64, unit_in: &str, unit_out: &str) -> MathResult<f64> {
    let from: MetricUnit = unit_in.parse().inspect_err(|_| {
        tracing::warn!(unit = unit_in, "rejected metric unit");
    })?;
    let to: MetricUnit = unit_out.parse().inspect_err(|_| {
        tracing::warn!(unit = unit_out, "rejected metric unit");
    })?;
    convert_units(number, from, to)
}

/// Convert `number` between two parsed metric units.
///
/// # Errors
///
/// Returns `MathError::IncompatibleUnits` if the base units differ.
pub fn convert_units(number: f64, from: MetricUnit, to: MetricUnit) -> MathResult<f64> {
    if from.base != to.base {
        return Err(MathError::IncompatibleUnits {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    let result = number * from.multiplier() / to.multiplier();
    tracing::debug!(number, %from, %to, result, "metric conversion");
    Ok(result)
}
