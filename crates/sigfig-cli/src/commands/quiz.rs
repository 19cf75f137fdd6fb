//! The `sigfig quiz` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use sigfig_core::config::{load_config_from, SigfigConfig};
use sigfig_core::quiz::{QuizProgress, QuizSession};

const LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(QuizSession::new(), &config, stdin.lock(), stdout.lock())
}

/// Read an option as `1`-`4` or `a`-`d`.
fn parse_choice(input: &str, options: usize) -> Option<usize> {
    let input = input.trim().to_lowercase();
    let index = match input.parse::<usize>() {
        Ok(n) => n.checked_sub(1)?,
        Err(_) => {
            let mut chars = input.chars();
            let letter = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            LETTERS.iter().position(|&l| l == letter)?
        }
    };
    (index < options).then_some(index)
}

pub fn run<I: BufRead, O: Write>(
    mut quiz: QuizSession,
    config: &SigfigConfig,
    input: I,
    mut out: O,
) -> Result<()> {
    let mut lines = input.lines();

    'questions: while let Some(question) = quiz.current().copied() {
        writeln!(out)?;
        writeln!(
            out,
            "Question {} of {} ({}% done)",
            quiz.index() + 1,
            quiz.len(),
            quiz.progress_percent()
        )?;
        writeln!(out, "{}", question.question)?;
        for (letter, option) in LETTERS.iter().zip(question.options) {
            writeln!(out, "  {letter}) {option}")?;
        }

        let choice = loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                break 'questions;
            };
            let line = line.context("failed to read answer")?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_choice(&line, question.options.len()) {
                Some(choice) => break choice,
                None => writeln!(out, "Answer with 1-4 or a-d.")?,
            }
        };

        if quiz.answer(choice)? {
            writeln!(out, "✓ Correct!")?;
        } else {
            writeln!(
                out,
                "✗ Not quite. The answer is {}) {}",
                LETTERS[question.correct], question.options[question.correct]
            )?;
        }
        writeln!(out, "{}", question.explanation)?;

        if quiz.advance()? == QuizProgress::Complete {
            break;
        }
    }

    if quiz.is_complete() {
        let rating = quiz.rating(config.quiz_pass_mark, config.quiz_excellent_mark);
        writeln!(out)?;
        writeln!(out, "Quiz complete: {} / {}", quiz.score(), quiz.len())?;
        writeln!(out, "{}", rating.message())?;
    } else {
        writeln!(
            out,
            "Quiz stopped after {} of {} questions (score {}).",
            quiz.index(),
            quiz.len(),
            quiz.score()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigfig_core::quiz::QUESTIONS;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        run(
            QuizSession::new(),
            &SigfigConfig::default(),
            input.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_choice_accepts_numbers_and_letters() {
        assert_eq!(parse_choice("1", 4), Some(0));
        assert_eq!(parse_choice(" 4 ", 4), Some(3));
        assert_eq!(parse_choice("B", 4), Some(1));
        assert_eq!(parse_choice("d", 4), Some(3));
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("e", 4), None);
        assert_eq!(parse_choice("ab", 4), None);
    }

    #[test]
    fn perfect_quiz_is_excellent() {
        let input: String = QUESTIONS
            .iter()
            .map(|q| format!("{}\n", q.correct + 1))
            .collect();
        let out = transcript(&input);
        assert!(out.contains("Question 1 of 8 (0% done)"));
        assert!(out.contains("Quiz complete: 8 / 8"));
        assert!(out.contains("Excellent! You have a solid understanding!"));
        assert!(!out.contains("Not quite"));
    }

    #[test]
    fn all_first_options_keep_studying() {
        let out = transcript(&"a\n".repeat(QUESTIONS.len()));
        assert!(out.contains("Quiz complete: 3 / 8"));
        assert!(out.contains("Keep studying the rules and try again!"));
        assert!(out.contains("✗ Not quite. The answer is b) 3"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let out = transcript("z\n\n2\n");
        assert!(out.contains("Answer with 1-4 or a-d."));
        assert!(out.contains("✓ Correct!"));
        assert!(out.contains("Quiz stopped after 1 of 8 questions (score 1)."));
    }
}
