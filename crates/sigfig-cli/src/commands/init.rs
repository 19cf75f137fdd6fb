//! The `sigfig init` command.

use std::path::Path;

use anyhow::{Context, Result};

use sigfig_core::config::{CONFIG_FILE_NAME, STARTER_CONFIG};

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(CONFIG_FILE_NAME, STARTER_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("Created {CONFIG_FILE_NAME}");

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to pick a default category");
    println!("  2. Run: sigfig rules");
    println!("  3. Run: sigfig practice");

    Ok(())
}
