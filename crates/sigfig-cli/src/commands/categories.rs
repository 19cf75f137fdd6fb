//! The `sigfig categories` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use sigfig_core::model::Category;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Name", "Answer"]);

    for category in Category::ALL {
        let answer = category
            .answer_type()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "any".to_string());
        table.add_row(vec![
            Cell::new(category),
            Cell::new(category.label()),
            Cell::new(answer),
        ]);
    }

    println!("{table}");
    Ok(())
}
