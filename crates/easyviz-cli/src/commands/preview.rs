//! Preview command - print the first rows of a table.

use std::path::PathBuf;

use colored::Colorize;
use easyviz::ExplorerConfig;

use super::{CommandResult, load_dataset};

pub fn run(file: PathBuf, rows: Option<usize>, config: &ExplorerConfig) -> CommandResult {
    let dataset = load_dataset(&file, config)?;
    let n = rows.unwrap_or_else(|| config.preview_rows());
    let head = dataset.preview(n);

    let headers = &dataset.table.headers;
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            head.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(headers).bold());
    for row in head {
        println!("{}", line(row));
    }

    println!();
    println!(
        "{}",
        format!(
            "Showing {} of {} rows",
            head.len(),
            dataset.profile.row_count
        )
        .dimmed()
    );

    Ok(())
}
