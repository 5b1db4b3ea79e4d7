//! Resolve command - validate a chart selection.

use std::path::PathBuf;

use colored::Colorize;
use easyviz::{ExplorerConfig, ValidationResult};

use super::{CommandResult, load_dataset, resolve_selection};
use crate::cli::SelectionArgs;

pub fn run(
    file: PathBuf,
    selection: SelectionArgs,
    json: bool,
    config: &ExplorerConfig,
) -> CommandResult {
    let dataset = load_dataset(&file, config)?;
    let result = resolve_selection(&dataset, &selection);

    if json {
        let validation = ValidationResult::from(result.clone());
        println!("{}", serde_json::to_string_pretty(&validation)?);
        return result.map(|_| ()).map_err(Into::into);
    }

    let request = result?;
    println!("{} {}", "Resolved".green().bold(), request.title().white());
    println!("  kind:     {}", request.kind);
    if let Some(x) = &request.x_column {
        println!("  x:        {x}");
    }
    if let Some(y) = &request.y_column {
        println!("  y:        {y}");
    }
    if !request.extra_columns.is_empty() {
        println!("  columns:  {}", request.extra_columns.join(", "));
    }
    if let Some(bins) = request.bin_count {
        println!("  bins:     {bins}");
    }
    println!("  export:   {}", request.export_file_name().cyan());

    Ok(())
}
