//! The fixed multiple-choice knowledge quiz.

use serde::Serialize;

use crate::error::QuizError;

/// A multiple-choice question with one correct option.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`.
    pub correct: usize,
    pub explanation: &'static str,
}

pub const QUESTIONS: [QuizQuestion; 8] = [
    QuizQuestion {
        question: "How many significant figures are in 0.00340?",
        options: ["2", "3", "4", "5"],
        correct: 1,
        explanation: "Leading zeros are never significant. The trailing zero after the 4 IS \
                      significant because it's after a decimal point. So: 3, 4, 0 = 3 sig figs.",
    },
    QuizQuestion {
        question: "What is the correct scientific notation for 45,600?",
        options: ["4.56 × 10³", "4.56 × 10⁴", "45.6 × 10³", "4.560 × 10⁴"],
        correct: 1,
        explanation: "Move the decimal 4 places left to get 4.56. The exponent equals the \
                      number of places moved: 10⁴.",
    },
    QuizQuestion {
        question: "How many significant figures are in 1000?",
        options: ["1", "2", "3", "4"],
        correct: 0,
        explanation: "Trailing zeros WITHOUT a decimal point are ambiguous but typically \
                      considered NOT significant. So 1000 has 1 sig fig. To show 4 sig figs, \
                      write 1000. or 1.000 × 10³.",
    },
    QuizQuestion {
        question: "When multiplying 2.5 × 3.42, how many sig figs should your answer have?",
        options: ["2", "3", "4", "5"],
        correct: 0,
        explanation: "In multiplication/division, the answer has the same number of sig figs \
                      as the measurement with the FEWEST sig figs. 2.5 has 2, 3.42 has 3 → \
                      answer has 2.",
    },
    QuizQuestion {
        question: "What is 3.2 × 10⁴ in standard notation?",
        options: ["320", "3,200", "32,000", "320,000"],
        correct: 2,
        explanation: "Move the decimal 4 places to the right: 3.2 → 32 → 320 → 3200 → 32,000",
    },
    QuizQuestion {
        question: "How many significant figures are in 50.00?",
        options: ["1", "2", "3", "4"],
        correct: 3,
        explanation: "All digits here are significant: the 5, the 0 between, and both \
                      trailing zeros after the decimal. Total: 4 sig figs.",
    },
    QuizQuestion {
        question: "When adding 12.5 + 1.234, how should you round your answer?",
        options: [
            "To 1 decimal place",
            "To 2 decimal places",
            "To 3 decimal places",
            "To 4 sig figs",
        ],
        correct: 0,
        explanation: "In addition/subtraction, round to the LEAST number of decimal places. \
                      12.5 has 1 decimal place, 1.234 has 3 → answer gets 1 decimal place.",
    },
    QuizQuestion {
        question: "Which number has exactly 4 significant figures?",
        options: ["0.0040", "4000", "4.000", "40.0"],
        correct: 2,
        explanation: "0.0040 has 2 (leading zeros don't count). 4000 has 1 (trailing zeros \
                      without decimal). 4.000 has 4 (all zeros after decimal count). 40.0 has 3.",
    },
];

/// Where the quiz goes after [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    Next,
    Complete,
}

/// How a finished quiz went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizRating {
    Excellent,
    Good,
    KeepStudying,
}

impl QuizRating {
    pub fn for_score(score: u32, pass_mark: u32, excellent_mark: u32) -> Self {
        if score >= excellent_mark {
            QuizRating::Excellent
        } else if score >= pass_mark {
            QuizRating::Good
        } else {
            QuizRating::KeepStudying
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            QuizRating::Excellent => "Excellent! You have a solid understanding!",
            QuizRating::Good => "Good work! A bit more practice and you'll master it.",
            QuizRating::KeepStudying => "Keep studying the rules and try again!",
        }
    }
}

/// Walks through [`QUESTIONS`] one at a time.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    index: usize,
    score: u32,
    selected: Option<usize>,
    complete: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_questions(&QUESTIONS)
    }

    pub fn with_questions(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            selected: None,
            complete: questions.is_empty(),
        }
    }

    /// The question being asked, or `None` once the quiz is complete.
    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.complete {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    /// Zero-based position of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Pick an option for the current question. Returns whether it was right.
    pub fn answer(&mut self, option: usize) -> Result<bool, QuizError> {
        let question = self.current().copied().ok_or(QuizError::Finished)?;
        if self.selected.is_some() {
            return Err(QuizError::AlreadyAnswered(self.index + 1));
        }
        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                options: question.options.len(),
            });
        }

        self.selected = Some(option);
        let correct = option == question.correct;
        if correct {
            self.score += 1;
        }
        Ok(correct)
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> Result<QuizProgress, QuizError> {
        if self.complete {
            return Err(QuizError::Finished);
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
            Ok(QuizProgress::Next)
        } else {
            self.complete = true;
            Ok(QuizProgress::Complete)
        }
    }

    /// Percentage of the quiz answered so far.
    pub fn progress_percent(&self) -> u32 {
        if self.questions.is_empty() || self.complete {
            return 100;
        }
        let done = self.index + usize::from(self.selected.is_some());
        (done * 100 / self.questions.len()) as u32
    }

    pub fn restart(&mut self) {
        *self = Self::with_questions(self.questions);
    }

    pub fn rating(&self, pass_mark: u32, excellent_mark: u32) -> QuizRating {
        QuizRating::for_score(self.score, pass_mark, excellent_mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::count_significant_figures;

    #[test]
    fn sig_fig_questions_agree_with_counter() {
        assert_eq!(count_significant_figures("0.00340"), QUESTIONS[0].correct + 2);
        assert_eq!(count_significant_figures("1000"), QUESTIONS[2].correct + 1);
        assert_eq!(count_significant_figures("50.00"), QUESTIONS[5].correct + 1);
        let four = QUESTIONS[7].options[QUESTIONS[7].correct];
        assert_eq!(count_significant_figures(four), 4);
        for option in QUESTIONS[7].options {
            if option != four {
                assert_ne!(count_significant_figures(option), 4, "{option}");
            }
        }
    }

    #[test]
    fn perfect_run() {
        let mut quiz = QuizSession::new();
        let mut asked = 0;
        while let Some(question) = quiz.current().copied() {
            assert!(quiz.answer(question.correct).unwrap());
            asked += 1;
            if quiz.advance().unwrap() == QuizProgress::Complete {
                break;
            }
        }
        assert_eq!(asked, QUESTIONS.len());
        assert!(quiz.is_complete());
        assert_eq!(quiz.score(), 8);
        assert_eq!(quiz.rating(5, 7), QuizRating::Excellent);
        assert_eq!(quiz.progress_percent(), 100);
    }

    #[test]
    fn one_answer_per_question() {
        let mut quiz = QuizSession::new();
        assert!(!quiz.answer(0).unwrap());
        assert_eq!(quiz.answer(1), Err(QuizError::AlreadyAnswered(1)));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.progress_percent(), 12);
    }

    #[test]
    fn out_of_range_option() {
        let mut quiz = QuizSession::new();
        assert_eq!(
            quiz.answer(4),
            Err(QuizError::OptionOutOfRange {
                index: 4,
                options: 4
            })
        );
        assert!(!quiz.is_answered());
    }

    #[test]
    fn finished_quiz_rejects_input() {
        let mut quiz = QuizSession::new();
        for _ in 0..QUESTIONS.len() {
            quiz.answer(0).unwrap();
            quiz.advance().unwrap();
        }
        assert!(quiz.current().is_none());
        assert_eq!(quiz.answer(0), Err(QuizError::Finished));
        assert_eq!(quiz.advance(), Err(QuizError::Finished));

        // Option 0 is right for questions 3 and 4 and 7.
        assert_eq!(quiz.score(), 3);
        assert_eq!(quiz.rating(5, 7), QuizRating::KeepStudying);

        quiz.restart();
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.is_complete());
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(QuizRating::for_score(7, 5, 7), QuizRating::Excellent);
        assert_eq!(QuizRating::for_score(6, 5, 7), QuizRating::Good);
        assert_eq!(QuizRating::for_score(5, 5, 7), QuizRating::Good);
        assert_eq!(QuizRating::for_score(4, 5, 7), QuizRating::KeepStudying);
    }
}
