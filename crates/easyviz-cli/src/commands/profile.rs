//! Profile command - descriptive statistics per column.

use std::path::PathBuf;

use colored::Colorize;
use easyviz::ExplorerConfig;

use super::{CommandResult, fmt_stat, load_dataset};

pub fn run(file: PathBuf, json: bool, config: &ExplorerConfig) -> CommandResult {
    let dataset = load_dataset(&file, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    let source = &dataset.source;
    println!(
        "{} {}",
        "Profile:".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "  {} rows x {} columns ({})",
        source.row_count.to_string().white().bold(),
        source.column_count.to_string().white().bold(),
        source.format
    );
    println!(
        "  {} numeric, {} categorical",
        dataset.profile.numeric_count().to_string().green(),
        (dataset.profile.column_count() - dataset.profile.numeric_count())
            .to_string()
            .yellow()
    );

    println!();
    println!("{}", "Numeric columns:".yellow().bold());
    println!(
        "  {:20} {:>6} {:>7} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "column", "count", "null%", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for col in dataset.profile.numeric_columns() {
        let nulls = format!("{:.1}", col.null_percentage());
        let Some(stats) = &col.numeric else {
            println!(
                "  {:20} {:>6} {:>7} {}",
                col.name,
                col.count,
                nulls,
                "(all missing)".dimmed()
            );
            continue;
        };
        println!(
            "  {:20} {:>6} {:>7} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            col.name,
            col.count,
            nulls,
            fmt_stat(Some(stats.mean)),
            fmt_stat(stats.std),
            fmt_stat(Some(stats.min)),
            fmt_stat(Some(stats.q1)),
            fmt_stat(Some(stats.median)),
            fmt_stat(Some(stats.q3)),
            fmt_stat(Some(stats.max)),
        );
    }

    println!();
    println!("{}", "Categorical columns:".yellow().bold());
    println!(
        "  {:20} {:>6} {:>7} {:>8} {:20} {:>6}",
        "column", "count", "null%", "unique", "top", "freq"
    );
    for col in dataset.profile.categorical_columns() {
        let nulls = format!("{:.1}", col.null_percentage());
        match &col.categorical {
            Some(summary) => println!(
                "  {:20} {:>6} {:>7} {:>8} {:20} {:>6}",
                col.name, col.count, nulls, summary.unique, summary.top, summary.freq
            ),
            None => println!(
                "  {:20} {:>6} {:>7} {}",
                col.name,
                col.count,
                nulls,
                "(no rows)".dimmed()
            ),
        }
    }

    Ok(())
}
