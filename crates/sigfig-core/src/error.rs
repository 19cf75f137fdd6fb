//! Error types for answer parsing and quiz handling.
//!
//! Malformed practice answers never escape the checker as errors; these
//! types exist so the parsing steps can say *why* an input was rejected
//! before the checker folds it into an "incorrect" verdict.

use thiserror::Error;

/// Errors produced while parsing a free-text practice answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerParseError {
    /// The input was empty or only whitespace.
    #[error("answer is empty")]
    Empty,

    /// The input did not match `<number> x 10^<exponent>`.
    #[error("not in scientific notation: {0}")]
    MalformedScientific(String),

    /// The input could not be read as a number.
    #[error("not a number: {0}")]
    InvalidNumber(String),

    /// The input could not be read as a whole number.
    #[error("not a whole number: {0}")]
    InvalidInteger(String),

    /// The input was not one of `>`, `<`, `=` or their word forms.
    #[error("unknown comparison: {0}")]
    UnknownComparison(String),
}

/// Errors from driving a [`QuizSession`](crate::quiz::QuizSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The chosen option does not exist for the current question.
    #[error("option {index} is out of range (question has {options} options)")]
    OptionOutOfRange { index: usize, options: usize },

    /// The current question already has an answer.
    #[error("question {0} has already been answered")]
    AlreadyAnswered(usize),

    /// There are no questions left.
    #[error("the quiz is already complete")]
    Finished,
}
