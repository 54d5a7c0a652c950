//! Imperial ↔ metric bridge.
//!
//! Each imperial unit maps to one metric counterpart through a fixed,
//! classroom-friendly approximation. The constants are deliberately rounded
//! (1 inch ≈ 2.5 cm) and must stay exactly as listed so generated answers
//! are reproducible.
//!
//! | Unit | Tokens | Counterpart | Factor |
//! |------|--------|-------------|--------|
//! | inch | `inch`, `inches` | cm | ×2.5 |
//! | pound | `lb`, `lbs`, `pounds` | kg | ÷2.2 |
//! | pint | `pint`, `pints` | ml | ×568 |
//! | mile | `mile`, `miles` | km | ×1.6 |

use std::fmt;
use std::str::FromStr;

use super::metric::{self, BaseUnit, MetricPrefix, MetricUnit};
use crate::types::{MathError, MathResult};

/// Recognised imperial unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImperialUnit {
    /// Inch, bridged to centimetres
    Inch,
    /// Pound, bridged to kilograms
    Pound,
    /// Pint, bridged to millilitres
    Pint,
    /// Mile, bridged to kilometres
    Mile,
}

impl ImperialUnit {
    /// Metric unit the conversion constant is expressed against.
    pub fn counterpart(&self) -> MetricUnit {
        match self {
            ImperialUnit::Inch => MetricUnit::new(MetricPrefix::Centi, BaseUnit::Metre),
            ImperialUnit::Pound => MetricUnit::new(MetricPrefix::Kilo, BaseUnit::Gram),
            ImperialUnit::Pint => MetricUnit::new(MetricPrefix::Milli, BaseUnit::Litre),
            ImperialUnit::Mile => MetricUnit::new(MetricPrefix::Kilo, BaseUnit::Metre),
        }
    }

    /// Express `number` of this unit in its metric counterpart.
    pub fn to_metric(&self, number: f64) -> f64 {
        match self {
            ImperialUnit::Inch => number * 2.5,
            ImperialUnit::Pound => number / 2.2,
            ImperialUnit::Pint => number * 568.0,
            ImperialUnit::Mile => number * 1.6,
        }
    }

    /// Express `number` of the metric counterpart in this unit.
    pub fn from_metric(&self, number: f64) -> f64 {
        match self {
            ImperialUnit::Inch => number / 2.5,
            ImperialUnit::Pound => number * 2.2,
            ImperialUnit::Pint => number / 568.0,
            ImperialUnit::Mile => number / 1.6,
        }
    }

    /// Singular name.
    pub fn name(&self) -> &'static str {
        match self {
            ImperialUnit::Inch => "inch",
            ImperialUnit::Pound => "lb",
            ImperialUnit::Pint => "pint",
            ImperialUnit::Mile => "mile",
        }
    }
}

impl FromStr for ImperialUnit {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inch" | "inches" => Ok(ImperialUnit::Inch),
            "lb" | "lbs" | "pounds" => Ok(ImperialUnit::Pound),
            "pint" | "pints" => Ok(ImperialUnit::Pint),
            "mile" | "miles" => Ok(ImperialUnit::Mile),
            _ => Err(MathError::invalid_unit(s)),
        }
    }
}

impl fmt::Display for ImperialUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `number` between an imperial unit and a metric unit.
///
/// The input side is checked first: if `unit_in` is imperial, `number` is
/// bridged to the counterpart and then rescaled to `unit_out`. Otherwise, if
/// `unit_out` is imperial, `number` is converted by the inverse factor and
/// rescaled from `unit_in` to the counterpart.
///
/// # Errors
///
/// - `MathError::InvalidUnit` if neither side is imperial, or the other side
///   is not a valid metric token
/// - `MathError::IncompatibleUnits` if the metric side measures a different
///   quantity than the imperial unit
///
/// # Examples
///
/// ```
/// use exercise_core::conversion::imperial::convert_imperial;
///
/// assert_eq!(convert_imperial("inches", "cm", 4.0).unwrap(), 10.0);
/// assert_eq!(convert_imperial("kg", "lbs", 10.0).unwrap(), 22.0);
/// assert!(convert_imperial("cm", "m", 1.0).is_err());
/// ```
pub fn convert_imperial(unit_in: &str, unit_out: &str, number: f64) -> MathResult<f64> {
    if let Ok(unit) = unit_in.parse::<ImperialUnit>() {
        tracing::debug!(%unit, unit_out, number, "bridging from imperial");
        let to: MetricUnit = unit_out.parse()?;
        return metric::convert_units(unit.to_metric(number), unit.counterpart(), to);
    }
    if let Ok(unit) = unit_out.parse::<ImperialUnit>() {
        tracing::debug!(unit_in, %unit, number, "bridging to imperial");
        let from: MetricUnit = unit_in.parse()?;
        return metric::convert_units(unit.from_metric(number), from, unit.counterpart());
    }
    tracing::warn!(unit_in, unit_out, "no imperial unit in conversion");
    Err(MathError::invalid_unit(format!("{} -> {}", unit_in, unit_out)))
}
