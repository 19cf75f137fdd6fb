//! The `sigfig rules` command.

use std::io::{self, Write};

use anyhow::Result;

use sigfig_core::rules::RuleSection;

pub fn execute(section: Option<RuleSection>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match section {
        Some(section) => write_section(&mut out, section),
        None => {
            for (i, section) in RuleSection::ALL.into_iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_section(&mut out, section)?;
            }
            Ok(())
        }
    }
}

fn write_section<O: Write>(out: &mut O, section: RuleSection) -> Result<()> {
    writeln!(out, "== {} ==", section.title())?;
    for rule in section.rules() {
        writeln!(out)?;
        if rule.summary.is_empty() {
            writeln!(out, "{}", rule.heading)?;
        } else {
            writeln!(out, "{}: {}", rule.heading, rule.summary)?;
        }
        for (n, step) in rule.steps.iter().enumerate() {
            writeln!(out, "  {}. {step}", n + 1)?;
        }
        for example in rule.examples {
            writeln!(out, "    {example}")?;
        }
    }
    if let Some(note) = section.note() {
        writeln!(out)?;
        writeln!(out, "{note}")?;
    }
    Ok(())
}
