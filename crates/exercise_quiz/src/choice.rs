//! Multiple-choice question framing.
//!
//! [`build_choice`] takes a question, its options and the correct option,
//! optionally shuffles the options with a caller-supplied RNG and derives
//! the answer letter from the *final* position of the correct option.
//!
//! The rendered block uses the exam-class `choices` environments:
//!
//! ```text
//! <question>
//!
//! \begin{oneparchoices}
//! \choice 1
//! \choice 2
//! \end{oneparchoices}
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use exercise_core::types::{MathError, MathResult};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Upper bound on options: one per letter `A`..=`Z`.
pub const MAX_CHOICES: usize = 26;

/// Layout environment used when rendering the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceLayout {
    /// `oneparchoices`: options run on within one paragraph
    #[default]
    OnePar,
    /// `choices`: one option per line
    List,
}

impl ChoiceLayout {
    /// LaTeX environment name.
    pub fn environment(&self) -> &'static str {
        match self {
            ChoiceLayout::OnePar => "oneparchoices",
            ChoiceLayout::List => "choices",
        }
    }
}

impl FromStr for ChoiceLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "onepar" | "oneparchoices" => Ok(ChoiceLayout::OnePar),
            "list" | "choices" => Ok(ChoiceLayout::List),
            _ => Err(ConfigError::InvalidLayout(s.to_string())),
        }
    }
}

impl Display for ChoiceLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceLayout::OnePar => write!(f, "onepar"),
            ChoiceLayout::List => write!(f, "list"),
        }
    }
}

/// How a question's options are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOptions {
    /// Rendering environment
    pub layout: ChoiceLayout,
    /// Shuffle options before assigning letters
    pub reorder: bool,
    /// Largest accepted number of options (at most [`MAX_CHOICES`])
    pub max_choices: usize,
}

impl Default for ChoiceOptions {
    fn default() -> Self {
        Self {
            layout: ChoiceLayout::OnePar,
            reorder: true,
            max_choices: MAX_CHOICES,
        }
    }
}

impl ChoiceOptions {
    /// Options that keep the caller's order.
    pub fn fixed_order() -> Self {
        Self {
            reorder: false,
            ..Self::default()
        }
    }
}

/// A rendered multiple-choice item and its answer key.
///
/// `letter` always names the first position of `correct` in `choices`;
/// deserialisation re-derives it and rejects a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMultipleChoice")]
pub struct MultipleChoice {
    question: String,
    choices: Vec<String>,
    correct: String,
    letter: char,
    #[serde(skip)]
    index: usize,
    layout: ChoiceLayout,
}

#[derive(Deserialize)]
struct RawMultipleChoice {
    question: String,
    choices: Vec<String>,
    correct: String,
    #[serde(default)]
    letter: Option<char>,
    #[serde(default)]
    layout: ChoiceLayout,
}

impl TryFrom<RawMultipleChoice> for MultipleChoice {
    type Error = MathError;

    fn try_from(raw: RawMultipleChoice) -> MathResult<Self> {
        if raw.choices.len() > MAX_CHOICES {
            return Err(too_many_choices(MAX_CHOICES, raw.choices.len()));
        }
        let (index, letter) = locate(&raw.choices, &raw.correct)?;
        if let Some(given) = raw.letter.filter(|&given| given != letter) {
            return Err(MathError::invalid_argument(format!(
                "answer letter {} does not match {} for {:?}",
                given, letter, raw.correct
            )));
        }
        Ok(Self {
            question: raw.question,
            choices: raw.choices,
            correct: raw.correct,
            letter,
            index,
            layout: raw.layout,
        })
    }
}

/// Position of the first `correct` in `choices` and its letter.
///
/// Callers keep `choices` within [`MAX_CHOICES`].
fn locate(choices: &[String], correct: &str) -> MathResult<(usize, char)> {
    let index = choices.iter().position(|c| c == correct).ok_or_else(|| {
        tracing::warn!(correct, "correct answer missing from choices");
        MathError::ValueNotFound(correct.to_string())
    })?;
    let letter = char::from(b'A' + index as u8);
    Ok((index, letter))
}

fn too_many_choices(limit: usize, count: usize) -> MathError {
    MathError::invalid_argument(format!(
        "expected at most {} choices, got {}",
        limit, count
    ))
}

impl MultipleChoice {
    /// Question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Options in rendered order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The correct option.
    pub fn correct(&self) -> &str {
        &self.correct
    }

    /// Letter of the correct option in rendered order.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Zero-based position of the correct option in rendered order.
    pub fn correct_index(&self) -> usize {
        self.index
    }

    /// Answer key, e.g. `"C. 3/4"`.
    pub fn answer_key(&self) -> String {
        format!("{}. {}", self.letter, self.correct)
    }

    /// LaTeX question block.
    pub fn render(&self) -> String {
        let env = self.layout.environment();
        let mut out = format!("{}\n\n\\begin{{{}}}\n", self.question, env);
        for choice in &self.choices {
            out.push_str("\\choice ");
            out.push_str(choice);
            out.push('\n');
        }
        out.push_str(&format!("\\end{{{}}}", env));
        out
    }
}

impl Display for MultipleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build a multiple-choice item.
///
/// If `options.reorder` is set the options are shuffled with `rng` first;
/// the answer letter is always taken from the final order.
///
/// # Errors
///
/// - `MathError::InvalidArgument` if there are more than
///   `options.max_choices` options (capped at 26)
/// - `MathError::ValueNotFound` if `correct` is not one of `choices`,
///   including when `choices` is empty
///
/// # Examples
///
/// ```
/// use exercise_quiz::choice::{build_choice, ChoiceOptions};
/// use exercise_quiz::rng::QuizRng;
///
/// let choices = vec!["1/2".to_string(), "3/4".to_string(), "2/3".to_string()];
/// let mut rng = QuizRng::from_seed(42);
///
/// let item = build_choice("Simplify 6/8", choices, "3/4", &ChoiceOptions::fixed_order(), &mut rng)
///     .unwrap();
/// assert_eq!(item.answer_key(), "B. 3/4");
/// assert!(item.render().starts_with("Simplify 6/8\n\n\\begin{oneparchoices}\n"));
/// ```
pub fn build_choice<R: Rng + ?Sized>(
    question: impl Into<String>,
    mut choices: Vec<String>,
    correct: &str,
    options: &ChoiceOptions,
    rng: &mut R,
) -> MathResult<MultipleChoice> {
    let limit = options.max_choices.min(MAX_CHOICES);
    if choices.len() > limit {
        return Err(too_many_choices(limit, choices.len()));
    }
    if options.reorder {
        choices.shuffle(rng);
    }
    let (index, letter) = locate(&choices, correct)?;
    tracing::debug!(
        count = choices.len(),
        reorder = options.reorder,
        %letter,
        "built multiple-choice item"
    );
    Ok(MultipleChoice {
        question: question.into(),
        choices,
        correct: correct.to_string(),
        letter,
        index,
        layout: options.layout,
    })
}

/// Build a multiple-choice item from an answer value and its distractors.
///
/// The answer is placed first before any reordering, so with
/// [`ChoiceOptions::fixed_order`] it is always option `A`.
///
/// # Errors
///
/// Same as [`build_choice`].
///
/// # Examples
///
/// ```
/// use exercise_core::math::add;
/// use exercise_quiz::choice::{build_from_values, ChoiceOptions};
/// use exercise_quiz::rng::QuizRng;
///
/// let answer = add(1, 2, 1, 3).unwrap();
/// let distractors = [add(1, 2, 1, 2).unwrap(), add(1, 3, 1, 3).unwrap()];
/// let mut rng = QuizRng::from_seed(3);
///
/// let item = build_from_values("1/2 + 1/3", answer, distractors, &ChoiceOptions::default(), &mut rng)
///     .unwrap();
/// assert_eq!(item.correct(), "5/6");
/// assert_eq!(item.choices()[item.correct_index()], "5/6");
/// ```
pub fn build_from_values<T, I, R>(
    question: impl Into<String>,
    answer: T,
    distractors: I,
    options: &ChoiceOptions,
    rng: &mut R,
) -> MathResult<MultipleChoice>
where
    T: Display,
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let correct = answer.to_string();
    let choices: Vec<String> = std::iter::once(correct.clone())
        .chain(distractors.into_iter().map(|d| d.to_string()))
        .collect();
    build_choice(question, choices, &correct, options, rng)
}
