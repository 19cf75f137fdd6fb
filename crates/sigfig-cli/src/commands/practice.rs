//! The `sigfig practice` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;

use sigfig_core::config::{load_config_from, SigfigConfig};
use sigfig_core::model::Category;
use sigfig_core::practice::{PracticeSession, ScoreCounters};

use super::make_rng;

pub fn execute(
    category: Option<Category>,
    rounds: Option<u32>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let category = category.unwrap_or(config.default_category);
    anyhow::ensure!(rounds != Some(0), "--rounds must be at least 1");
    tracing::debug!(%category, ?seed, ?rounds, "starting practice");

    let session = PracticeSession::new(category, make_rng(seed));
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(session, &config, rounds, stdin.lock(), stdout.lock())
}

/// One line of user input, after trimming.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Blank,
    Quit,
    Next,
    Category(&'a str),
    Help,
    Answer(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Input::Answer(line);
    };
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((command, ""));
    match name {
        "q" | "quit" | "exit" => Input::Quit,
        "n" | "next" | "skip" => Input::Next,
        "c" | "category" => Input::Category(arg),
        _ => Input::Help,
    }
}

/// Drive a practice session over arbitrary input and output streams.
pub fn run<R: Rng, I: BufRead, O: Write>(
    mut session: PracticeSession<R>,
    config: &SigfigConfig,
    rounds: Option<u32>,
    input: I,
    mut out: O,
) -> Result<()> {
    writeln!(out, "Practice: {}", session.category().label())?;
    writeln!(
        out,
        "Commands: :next skips, :category <name> switches, :quit stops."
    )?;

    let mut lines = input.lines();
    let mut answered = 0u32;
    let mut shown = false;

    loop {
        if rounds.is_some_and(|limit| answered >= limit) {
            break;
        }

        if !shown {
            show_problem(&mut out, &session, config)?;
            shown = true;
        }
        write!(out, "{} > ", session.problem().answer_type().placeholder())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("failed to read answer")?;

        match classify(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Help => {
                writeln!(
                    out,
                    "Unknown command. Use :next, :category <name>, or :quit."
                )?;
            }
            Input::Next => {
                session.next_problem();
                shown = false;
            }
            Input::Category(name) => match name.parse::<Category>() {
                Ok(category) => {
                    tracing::debug!(%category, "switched category");
                    session.set_category(category);
                    writeln!(out, "Switched to {}.", category.label())?;
                    shown = false;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Input::Answer(text) => {
                let Some(verdict) = session.submit(text) else {
                    continue;
                };
                if verdict.correct {
                    writeln!(out, "✓ Correct!")?;
                } else {
                    writeln!(
                        out,
                        "✗ Incorrect. The answer was: {}",
                        verdict.expected_display
                    )?;
                    if let Some(hint) = &verdict.hint {
                        writeln!(out, "💡 Hint: {hint}")?;
                    }
                }
                answered += 1;
                write_score(&mut out, session.score(), config.streak_badge_threshold)?;
                session.next_problem();
                shown = false;
            }
        }
    }

    let score = session.score();
    if score.total > 0 {
        write!(out, "Final ")?;
        write_score(&mut out, score, config.streak_badge_threshold)?;
    }
    Ok(())
}

fn show_problem<R: Rng, O: Write>(
    out: &mut O,
    session: &PracticeSession<R>,
    config: &SigfigConfig,
) -> Result<()> {
    let problem = session.problem();
    writeln!(out)?;
    if session.category() == Category::Mixed {
        writeln!(out, "[{}]", problem.category.label())?;
    }
    writeln!(out, "{}", problem.question)?;
    writeln!(out, "  {}", problem.input_help())?;
    if config.show_hints {
        if let Some(hint) = &problem.hint {
            writeln!(out, "  Hint: {hint}")?;
        }
    }
    Ok(())
}

fn write_score<O: Write>(out: &mut O, score: ScoreCounters, badge_threshold: u32) -> Result<()> {
    write!(out, "Score: {} / {}", score.correct, score.total)?;
    if let Some(percent) = score.accuracy_percent() {
        write!(out, " ({percent}%)")?;
    }
    if score.has_streak_badge(badge_threshold) {
        write!(out, "  🔥 {} streak!", score.streak)?;
    }
    writeln!(out)?;
    Ok(())
}
