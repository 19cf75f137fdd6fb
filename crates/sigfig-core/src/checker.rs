//! Answer checking.
//!
//! Parses free-text input according to the live problem's answer type and
//! decides correctness within that type's tolerance. Malformed input is
//! simply incorrect; only blank input is refused outright.

use serde::{Deserialize, Serialize};

use crate::error::AnswerParseError;
use crate::format::{format_standard, ScientificValue};
use crate::model::{Answer, Comparison, Problem};

/// Absolute slack on a scientific-notation coefficient.
pub const COEFFICIENT_TOLERANCE: f64 = 0.05;

/// Relative slack on standard-form conversions (0.1%).
pub const STANDARD_RELATIVE_TOLERANCE: f64 = 0.001;

/// Relative slack on arithmetic and rounding results (1%).
pub const NUMBER_RELATIVE_TOLERANCE: f64 = 0.01;

/// Absolute floor for arithmetic results near zero.
pub const NUMBER_ABSOLUTE_TOLERANCE: f64 = 0.01;

/// The outcome of checking one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    /// The expected answer, formatted for display.
    pub expected_display: String,
    /// The problem's hint, if it has one.
    #[serde(default)]
    pub hint: Option<String>,
}

/// Check `raw_input` against `problem`.
///
/// Returns `None` for empty or whitespace-only input: nothing was submitted,
/// so the caller must not touch its score.
pub fn check(problem: &Problem, raw_input: &str) -> Option<Verdict> {
    let input = raw_input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let correct = match is_correct(&problem.answer, &input) {
        Ok(correct) => correct,
        Err(e) => {
            tracing::debug!(answer_type = %problem.answer_type(), "rejected answer: {e}");
            false
        }
    };

    tracing::debug!(category = %problem.category, correct, "checked answer");

    Some(Verdict {
        correct,
        expected_display: expected_display(&problem.answer),
        hint: problem.hint.clone(),
    })
}

fn is_correct(answer: &Answer, input: &str) -> Result<bool, AnswerParseError> {
    let correct = match answer {
        Answer::Scientific { value } => {
            let parsed = parse_scientific(input)?;
            (parsed.coefficient - value.coefficient).abs() < COEFFICIENT_TOLERANCE
                && parsed.exponent == value.exponent
        }
        Answer::Standard { value } => {
            let parsed = parse_number(input)?;
            (parsed - value).abs() < (value * STANDARD_RELATIVE_TOLERANCE).abs()
        }
        Answer::SigFigs { count } => parse_integer(input)? == i64::from(*count),
        Answer::Rounded { value, .. } | Answer::Number { value } => {
            let diff = (parse_number(input)? - value).abs();
            diff < (value * NUMBER_RELATIVE_TOLERANCE).abs() || diff < NUMBER_ABSOLUTE_TOLERANCE
        }
        Answer::Compare { relation } => parse_comparison(input)? == *relation,
        Answer::Magnitude {
            exponent,
            tolerance,
        } => {
            let slack = u64::try_from(*tolerance).unwrap_or(0);
            parse_integer(input)?
                .checked_sub(i64::from(*exponent))
                .is_some_and(|diff| diff.unsigned_abs() <= slack)
        }
    };
    Ok(correct)
}

/// Format the expected answer the way it is shown after a wrong submission.
pub fn expected_display(answer: &Answer) -> String {
    match answer {
        Answer::Scientific { value } => value.to_string(),
        Answer::Standard { value } => format_standard(*value),
        Answer::SigFigs { count } => count.to_string(),
        Answer::Rounded { value, .. } | Answer::Number { value } => value.to_string(),
        Answer::Compare { relation } => relation.to_string(),
        Answer::Magnitude { exponent, .. } => exponent.to_string(),
    }
}

/// Parse `<coefficient> <x|×|*> 10 [^] <exponent>`.
///
/// Spacing around the operator and exponent is free; the caret is optional
/// and the exponent may carry a minus sign. The coefficient is unsigned.
pub fn parse_scientific(input: &str) -> Result<ScientificValue, AnswerParseError> {
    let malformed = || AnswerParseError::MalformedScientific(input.to_string());
    let text = input.trim();
    if text.is_empty() {
        return Err(AnswerParseError::Empty);
    }

    let coefficient_end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(malformed)?;
    let (coefficient_text, rest) = text.split_at(coefficient_end);
    if coefficient_text.is_empty() {
        return Err(malformed());
    }

    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix(['x', 'X', '×', '*'])
        .ok_or_else(malformed)?
        .trim_start();
    let rest = rest.strip_prefix("10").ok_or_else(malformed)?.trim_start();
    let rest = rest.strip_prefix('^').unwrap_or(rest).trim_start();

    let digits = rest.strip_prefix('-').unwrap_or(rest);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }

    let coefficient: f64 = coefficient_text.parse().map_err(|_| malformed())?;
    let exponent: i32 = rest.parse().map_err(|_| malformed())?;
    Ok(ScientificValue::new(coefficient, exponent))
}

/// Parse a number, ignoring `,` thousands separators.
pub fn parse_number(input: &str) -> Result<f64, AnswerParseError> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(AnswerParseError::Empty);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| AnswerParseError::InvalidNumber(input.to_string()))
}

/// Read the leading whole number: an optional sign, then digits. Anything
/// after the digits (`.0`, a unit) is ignored, so `3.0` reads as 3 and
/// `-4.5` as -4.
pub fn parse_integer(input: &str) -> Result<i64, AnswerParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(AnswerParseError::Empty);
    }
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return Err(AnswerParseError::InvalidInteger(input.to_string()));
    }
    let end = text.len() - unsigned.len() + digits;
    text[..end]
        .parse()
        .map_err(|_| AnswerParseError::InvalidInteger(input.to_string()))
}

/// Parse `>`, `<`, `=` or `greater`, `less`, `equal`.
pub fn parse_comparison(input: &str) -> Result<Comparison, AnswerParseError> {
    input
        .parse()
        .map_err(|_| AnswerParseError::UnknownComparison(input.trim().to_string()))
}
