//! Charts command - list chart kinds the table supports.

use std::path::PathBuf;

use colored::Colorize;
use easyviz::{ChartKind, ChartParams, ExplorerConfig};
use serde::Serialize;

use super::{CommandResult, describe_params, load_dataset};

#[derive(Serialize)]
struct ChartOption {
    kind: ChartKind,
    suggested: ChartParams,
}

pub fn run(file: PathBuf, json: bool, config: &ExplorerConfig) -> CommandResult {
    let dataset = load_dataset(&file, config)?;
    let available = dataset.available_charts();

    if json {
        let options: Vec<ChartOption> = available
            .iter()
            .map(|&kind| ChartOption {
                kind,
                suggested: dataset.suggest_params(kind),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Charts for".cyan().bold(),
        file.display().to_string().white()
    );

    if available.is_empty() {
        println!("{}", "No charts available for this table".yellow());
        return Ok(());
    }

    for kind in ChartKind::ALL {
        if available.contains(&kind) {
            println!(
                "  {} {:22} {}",
                "✓".green(),
                kind.as_str(),
                describe_params(&dataset.suggest_params(kind))
            );
        } else {
            println!("  {} {}", "✗".red(), kind.as_str().dimmed());
        }
    }

    Ok(())
}
