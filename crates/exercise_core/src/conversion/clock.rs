//! Clock-face values: times in words, `HH:MM` strings and hand angles.

use crate::types::{MathError, MathResult};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Words for 0..=30. Index 0 doubles as "twelve" so midnight/noon read
/// naturally; 15 and 30 use the clock words "quarter" and "half".
const CLOCK_WORDS: [&str; 31] = [
    "twelve",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "quarter",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "twenty one",
    "twenty two",
    "twenty three",
    "twenty four",
    "twenty five",
    "twenty six",
    "twenty seven",
    "twenty eight",
    "twenty nine",
    "half",
];

/// Read a clock time aloud, e.g. `"quarter past three"`.
///
/// Minutes up to 30 are read "past" the hour; later minutes are read "to"
/// the next hour.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` if `hour` is outside `0..=12` or
/// `minute` is outside `0..60`.
///
/// # Examples
///
/// ```
/// use exercise_core::conversion::clock::time_to_words;
///
/// assert_eq!(time_to_words(3, 15).unwrap(), "quarter past three");
/// assert_eq!(time_to_words(9, 45).unwrap(), "quarter to ten");
/// assert_eq!(time_to_words(12, 0).unwrap(), "twelve o'clock");
/// ```
pub fn time_to_words(hour: i32, minute: i32) -> MathResult<String> {
    if !(0..=12).contains(&hour) {
        return Err(MathError::invalid_argument(format!("hour {} outside 0..=12", hour)));
    }
    let h = hour as usize;
    match minute {
        0 => Ok(format!("{} o'clock", CLOCK_WORDS[h])),
        1..=30 => Ok(format!(
            "{} past {}",
            CLOCK_WORDS[minute as usize],
            CLOCK_WORDS[h]
        )),
        31..=59 => Ok(format!(
            "{} to {}",
            CLOCK_WORDS[(60 - minute) as usize],
            CLOCK_WORDS[h % 12 + 1]
        )),
        _ => Err(MathError::invalid_argument(format!(
            "minute {} outside 0..60",
            minute
        ))),
    }
}

/// Render minutes since midnight as a zero-padded `HH:MM` string.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` unless `0 <= minutes < 1440`.
///
/// # Examples
///
/// ```
/// use exercise_core::conversion::clock::minutes_to_time;
///
/// assert_eq!(minutes_to_time(75).unwrap(), "01:15");
/// assert_eq!(minutes_to_time(1439).unwrap(), "23:59");
/// assert!(minutes_to_time(1440).is_err());
/// ```
pub fn minutes_to_time(minutes: i32) -> MathResult<String> {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return Err(MathError::invalid_argument(format!(
            "minutes must be between 0 and {}, got {}",
            MINUTES_PER_DAY - 1,
            minutes
        )));
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// Angles of the clock hands in degrees, anticlockwise from three o'clock.
///
/// These are the values an analogue-clock diagram is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockHands {
    /// Hour hand angle; drifts back half a degree per elapsed minute
    pub hour_angle: f64,
    /// Minute hand angle in `[0, 360)`
    pub minute_angle: f64,
}

/// Hand angles for `hour:minute` on an analogue clock.
///
/// `hour` is read modulo 12, so 24-hour input is accepted.
///
/// # Errors
///
/// Returns `MathError::InvalidArgument` unless `0 <= minute < 60`.
///
/// ```
/// use exercise_core::conversion::clock::clock_hand_angles;
///
/// let hands = clock_hand_angles(3, 0).unwrap();
/// assert_eq!((hands.hour_angle, hands.minute_angle), (0.0, 90.0));
///
/// let hands = clock_hand_angles(18, 30).unwrap();
/// assert_eq!((hands.hour_angle, hands.minute_angle), (255.0, 270.0));
/// ```
pub fn clock_hand_angles(hour: i32, minute: i32) -> MathResult<ClockHands> {
    if !(0..60).contains(&minute) {
        return Err(MathError::invalid_argument(format!(
            "minute {} outside 0..60",
            minute
        )));
    }
    let hour_angle = (90 - 30 * hour.rem_euclid(12)).rem_euclid(360) as f64 - 0.5 * minute as f64;
    let minute_angle = (90 - 6 * minute).rem_euclid(360) as f64;
    Ok(ClockHands {
        hour_angle,
        minute_angle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_past() {
        assert_eq!(time_to_words(4, 1).unwrap(), "one past four");
        assert_eq!(time_to_words(7, 30).unwrap(), "half past seven");
        assert_eq!(time_to_words(0, 25).unwrap(), "twenty five past twelve");
    }

    #[test]
    fn test_words_to() {
        assert_eq!(time_to_words(11, 40).unwrap(), "twenty to twelve");
        assert_eq!(time_to_words(12, 50).unwrap(), "ten to one");
        assert_eq!(time_to_words(0, 59).unwrap(), "one to one");
        assert_eq!(time_to_words(2, 31).unwrap(), "twenty nine to three");
    }

    #[test]
    fn test_words_oclock() {
        assert_eq!(time_to_words(0, 0).unwrap(), "twelve o'clock");
        assert_eq!(time_to_words(5, 0).unwrap(), "five o'clock");
    }

    #[test]
    fn test_words_invalid() {
        assert!(matches!(time_to_words(13, 0), Err(MathError::InvalidArgument(_))));
        assert!(matches!(time_to_words(-1, 0), Err(MathError::InvalidArgument(_))));
        assert!(matches!(time_to_words(3, 60), Err(MathError::InvalidArgument(_))));
        assert!(matches!(time_to_words(3, -5), Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn test_minutes_to_time() {
        assert_eq!(minutes_to_time(0).unwrap(), "00:00");
        assert_eq!(minutes_to_time(75).unwrap(), "01:15");
        assert_eq!(minutes_to_time(600).unwrap(), "10:00");
        assert_eq!(minutes_to_time(1439).unwrap(), "23:59");
    }

    #[test]
    fn test_minutes_to_time_out_of_range() {
        assert!(matches!(minutes_to_time(1440), Err(MathError::InvalidArgument(_))));
        assert!(matches!(minutes_to_time(-1), Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn test_hand_angles() {
        let noon = clock_hand_angles(12, 0).unwrap();
        assert_eq!((noon.hour_angle, noon.minute_angle), (90.0, 90.0));
        let quarter_past_nine = clock_hand_angles(9, 15).unwrap();
        assert_eq!(quarter_past_nine.minute_angle, 0.0);
        assert_eq!(quarter_past_nine.hour_angle, 180.0 - 7.5);
        let twenty_to_one = clock_hand_angles(12, 40).unwrap();
        assert_eq!(twenty_to_one.minute_angle, 210.0);
        assert_eq!(twenty_to_one.hour_angle, 70.0);
    }

    #[test]
    fn test_hand_angles_reject_bad_minute() {
        for minute in [60, -1, i32::MAX, i32::MIN] {
            assert!(matches!(
                clock_hand_angles(0, minute),
                Err(MathError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_hand_angles_any_hour() {
        assert_eq!(clock_hand_angles(15, 0).unwrap(), clock_hand_angles(3, 0).unwrap());
        assert_eq!(clock_hand_angles(-9, 0).unwrap(), clock_hand_angles(3, 0).unwrap());
        assert!(clock_hand_angles(i32::MAX, 59).is_ok());
    }
}
