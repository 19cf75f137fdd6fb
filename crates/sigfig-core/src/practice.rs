//! Practice rounds and running score.
//!
//! [`ScoreCounters`] is plain session state updated by value after each
//! verdict. [`PracticeSession`] ties it to the one live problem.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checker::{check, Verdict};
use crate::generator::generate_with;
use crate::model::{Category, Problem};

/// Default streak length at which the streak badge appears.
pub const DEFAULT_STREAK_BADGE: u32 = 3;

/// Running practice tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounters {
    pub correct: u32,
    pub total: u32,
    /// Consecutive correct answers; reset by any incorrect one.
    pub streak: u32,
}

impl ScoreCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// The counters after one more graded answer.
    #[must_use]
    pub fn record(self, correct: bool) -> Self {
        Self {
            correct: self.correct + u32::from(correct),
            total: self.total + 1,
            streak: if correct { self.streak + 1 } else { 0 },
        }
    }

    /// Share of correct answers as a rounded percentage; `None` before the
    /// first answer.
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        Some((f64::from(self.correct) / f64::from(self.total) * 100.0).round() as u32)
    }

    pub fn has_streak_badge(&self, threshold: u32) -> bool {
        threshold > 0 && self.streak >= threshold
    }
}

/// Check `raw_input` and fold the verdict into `score`.
///
/// Blank input yields no verdict and returns `score` unchanged.
pub fn submit_answer(
    score: ScoreCounters,
    problem: &Problem,
    raw_input: &str,
) -> (ScoreCounters, Option<Verdict>) {
    match check(problem, raw_input) {
        Some(verdict) => (score.record(verdict.correct), Some(verdict)),
        None => (score, None),
    }
}

/// One practice session: a category, the live problem, and the score.
pub struct PracticeSession<R: Rng> {
    rng: R,
    category: Category,
    problem: Problem,
    score: ScoreCounters,
    feedback: Option<Verdict>,
}

impl<R: Rng> PracticeSession<R> {
    pub fn new(category: Category, mut rng: R) -> Self {
        let problem = generate_with(category, &mut rng);
        Self {
            rng,
            category,
            problem,
            score: ScoreCounters::new(),
            feedback: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn score(&self) -> ScoreCounters {
        self.score
    }

    /// The verdict for the live problem, once it has been answered.
    pub fn feedback(&self) -> Option<&Verdict> {
        self.feedback.as_ref()
    }

    /// Answer the live problem.
    ///
    /// Returns `None` without touching the score when the input is blank or
    /// the problem already has a verdict.
    pub fn submit(&mut self, raw_input: &str) -> Option<&Verdict> {
        if self.feedback.is_some() {
            tracing::debug!("problem already answered; ignoring submission");
            return None;
        }
        let (score, verdict) = submit_answer(self.score, &self.problem, raw_input);
        self.score = score;
        self.feedback = verdict;
        self.feedback.as_ref()
    }

    /// Replace the live problem with a fresh one of the same category.
    pub fn next_problem(&mut self) -> &Problem {
        self.problem = generate_with(self.category, &mut self.rng);
        self.feedback = None;
        &self.problem
    }

    /// Switch category. The live problem and feedback are discarded; the
    /// score carries over.
    pub fn set_category(&mut self, category: Category) -> &Problem {
        self.category = category;
        self.next_problem()
    }
}
