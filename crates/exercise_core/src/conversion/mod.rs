//! Conversion engine: metric, imperial and time units, plus clock values.
//!
//! ## Modules
//!
//! - [`metric`]: suffix-first metric token parsing and prefix scaling
//! - [`imperial`]: fixed-constant bridge between imperial and metric units
//! - [`time`]: calendar and seconds-table time conversion
//! - [`clock`]: times in words, `HH:MM` rendering, analogue hand angles
//!
//! ## Examples
//!
//! ```
//! use exercise_core::conversion::{convert, convert_time, minutes_to_time};
//!
//! assert_eq!(convert(100.0, "cm", "m").unwrap(), 1.0);
//! assert_eq!(convert_time(1.0, "year", "day").unwrap(), "365 days");
//! assert_eq!(minutes_to_time(75).unwrap(), "01:15");
//! ```

pub mod clock;
pub mod imperial;
pub mod metric;
pub mod time;

// Re-export public API at module level
pub use clock::{clock_hand_angles, minutes_to_time, time_to_words, ClockHands, MINUTES_PER_DAY};
pub use imperial::{convert_imperial, ImperialUnit};
pub use metric::{convert, convert_units, valid_metric, BaseUnit, MetricPrefix, MetricUnit};
pub use time::{convert_time, convert_time_value, TimeUnit};
