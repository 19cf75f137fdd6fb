//! The `sigfig generate` command.

use anyhow::Result;

use sigfig_core::checker::expected_display;
use sigfig_core::generator::generate_with;
use sigfig_core::model::{Category, Problem};

use super::make_rng;

pub fn execute(category: Category, count: usize, seed: Option<u64>, json: bool) -> Result<()> {
    anyhow::ensure!(count > 0, "--count must be at least 1");

    let mut rng = make_rng(seed);
    let problems: Vec<Problem> = (0..count)
        .map(|_| generate_with(category, &mut rng))
        .collect();

    if json {
        // A single problem is printed bare so it can be fed straight to `check`.
        let output = if let [problem] = problems.as_slice() {
            serde_json::to_string_pretty(problem)?
        } else {
            serde_json::to_string_pretty(&problems)?
        };
        println!("{output}");
        return Ok(());
    }

    for (i, problem) in problems.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, problem.category, problem.question);
        println!("   answer: {}", expected_display(&problem.answer));
        if let Some(hint) = &problem.hint {
            println!("   hint: {hint}");
        }
    }
    Ok(())
}
