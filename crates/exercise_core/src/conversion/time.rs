//! Time-unit conversion.
//!
//! Unit tokens are free-form ("3 Hours", "minutes", "a week") and are
//! matched by substring against the canonical names in [`TimeUnit::ALL`],
//! first match wins.
//!
//! Conversions involving months or years use calendar approximations
//! (12 months, 52 weeks or 365 days per year) and are only defined directly
//! to or from a year. Everything from seconds up to weeks goes through a
//! shared table of seconds.

use std::fmt;
use std::str::FromStr;

use crate::types::{MathError, MathResult, Number};

/// Canonical time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    /// second
    Second,
    /// minute
    Minute,
    /// hour
    Hour,
    /// day
    Day,
    /// week
    Week,
    /// month
    Month,
    /// year
    Year,
}

impl TimeUnit {
    /// Match order for free-form tokens.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Singular lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// Length in seconds, for the units that have a fixed one.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            TimeUnit::Second => Some(1.0),
            TimeUnit::Minute => Some(60.0),
            TimeUnit::Hour => Some(3600.0),
            TimeUnit::Day => Some(86400.0),
            TimeUnit::Week => Some(604800.0),
            TimeUnit::Month | TimeUnit::Year => None,
        }
    }

    /// Read a free-form token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidUnit` if no canonical name occurs in `token`.
    ///
    /// ```
    /// use exercise_core::conversion::time::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::read("Minutes").unwrap(), TimeUnit::Minute);
    /// assert_eq!(TimeUnit::read("per year").unwrap(), TimeUnit::Year);
    /// assert!(TimeUnit::read("fortnight").is_err());
    /// ```
    pub fn read(token: &str) -> MathResult<Self> {
        let lowered = token.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| lowered.contains(unit.name()))
            .ok_or_else(|| MathError::invalid_unit(token))
    }
}

impl FromStr for TimeUnit {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read(s)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `number` of `unit_in` into `unit_out`, returning the value and
/// the canonical target unit.
///
/// # Errors
///
/// - `MathError::InvalidUnit` if either token is unrecognised
/// - `MathError::UnsupportedConversion` if no path is defined (e.g. hour to
///   month)
pub fn convert_time_value(number: f64, unit_in: &str, unit_out: &str) -> MathResult<(f64, TimeUnit)> {
    use TimeUnit::*;

    let from = TimeUnit::read(unit_in)?;
    let to = TimeUnit::read(unit_out)?;
    let value = match (from, to) {
        (Year, Month) => number * 12.0,
        (Year, Week) => number * 52.0,
        (Year, Day) => number * 365.0,
        (Month, Year) => number / 12.0,
        (Week, Year) => number / 52.0,
        (Day, Year) => number / 365.0,
        _ => match (from.seconds(), to.seconds()) {
            (Some(a), Some(b)) => number * a / b,
            _ => {
                tracing::warn!(%from, %to, "no time conversion path");
                return Err(MathError::unsupported(from, to));
            }
        },
    };
    tracing::debug!(number, %from, %to, value, "time conversion");
    Ok((value, to))
}

/// Convert `number` of `unit_in` into `unit_out` and render it with the unit
/// name, pluralised unless the result is exactly one.
///
/// # Errors
///
/// Same as [`convert_time_value`], plus `MathError::InvalidArgument` if the
/// result is not finite.
///
/// # Examples
///
/// ```
/// use exercise_core::conversion::time::convert_time;
///
/// assert_eq!(convert_time(1.0, "year", "day").unwrap(), "365 days");
/// assert_eq!(convert_time(90.0, "minutes", "hours").unwrap(), "1.5 hours");
/// assert_eq!(convert_time(60.0, "minutes", "hours").unwrap(), "1 hour");
/// ```
pub fn convert_time(number: f64, unit_in: &str, unit_out: &str) -> MathResult<String> {
    let (value, unit) = convert_time_value(number, unit_in, unit_out)?;
    let rendered = Number::from_f64(value)?;
    let plural = if rendered.is_one() { "" } else { "s" };
    Ok(format!("{} {}{}", rendered, unit, plural))
}
