//! End-to-end checks on values as a worksheet generator would request them.

use approx::assert_relative_eq;
use exercise_core::conversion::{convert, convert_imperial, convert_time, minutes_to_time, time_to_words};
use exercise_core::math::{add, interquartile_range, median, round_sig, simplify, simplify_radical};
use exercise_core::typeset::dollar;
use exercise_core::types::{MathError, Number};

#[test]
fn test_fraction_answer_and_distractors() {
    // "Work out 2/3 + 1/4"
    let answer = add(2, 3, 1, 4).unwrap();
    assert_eq!(answer.to_pair(), (11, 12));
    assert_eq!(dollar(answer.to_latex()), r"$\frac{11}{12}$");

    // Common wrong answer: add numerators and denominators.
    let distractor = simplify(2 + 1, 3 + 4).unwrap();
    assert_ne!(distractor, answer);
}

#[test]
fn test_surd_question() {
    let answers: Vec<String> = [8, 12, 45, 50, 98]
        .into_iter()
        .map(|n| simplify_radical(n).unwrap().to_latex())
        .collect();
    assert_eq!(
        answers,
        vec![
            r"$2\sqrt{2}$",
            r"$2\sqrt{3}$",
            r"$3\sqrt{5}$",
            r"$5\sqrt{2}$",
            r"$7\sqrt{2}$"
        ]
    );
}

#[test]
fn test_estimation_question() {
    // Estimate 4.87 × 21.3 by rounding each to 1 s.f.
    let a = round_sig(4.87, 1).unwrap();
    let b = round_sig(21.3, 1).unwrap();
    assert_eq!((a, b), (Number::Integer(5), Number::Integer(20)));
    assert_eq!(a.as_f64() * b.as_f64(), 100.0);
}

#[test]
fn test_averages_question() {
    let data = [12, 15, 11, 18, 20, 14, 16, 13];
    assert_eq!(median(&data).unwrap(), 14.5);
    // sorted: 11 12 13 14 15 16 18 20 -> lower [11,12,13], upper [16,18,20]
    assert_eq!(interquartile_range(&data).unwrap(), 6.0);
}

#[test]
fn test_measures_question() {
    assert_relative_eq!(convert(3.5, "kg", "g").unwrap(), 3500.0);
    assert_relative_eq!(convert_imperial("inches", "cm", 12.0).unwrap(), 30.0);
    assert_eq!(convert_time(3.0, "weeks", "days").unwrap(), "21 days");
    assert!(matches!(
        convert(5.0, "kg", "l"),
        Err(MathError::IncompatibleUnits { .. })
    ));
    assert!(matches!(
        convert(5.0, "xyz", "m"),
        Err(MathError::InvalidUnit(_))
    ));
}

#[test]
fn test_time_question() {
    let start = 9 * 60 + 45;
    assert_eq!(minutes_to_time(start).unwrap(), "09:45");
    assert_eq!(time_to_words(9, 45).unwrap(), "quarter to ten");
    assert_eq!(minutes_to_time(start + 75).unwrap(), "11:00");
    assert!(minutes_to_time(1440).is_err());
}
