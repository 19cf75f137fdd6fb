//! The `sigfig check` command.

use std::path::PathBuf;

use anyhow::Result;

use sigfig_core::checker::check;
use sigfig_core::model::Problem;

pub fn execute(problem_path: PathBuf, answer: String) -> Result<()> {
    let problem = Problem::load_json(&problem_path)?;

    let Some(verdict) = check(&problem, &answer) else {
        anyhow::bail!("answer is empty");
    };

    if verdict.correct {
        println!("✓ Correct!");
    } else {
        println!("✗ Incorrect. The answer was: {}", verdict.expected_display);
        if let Some(hint) = &verdict.hint {
            println!("💡 Hint: {hint}");
        }
    }
    Ok(())
}
