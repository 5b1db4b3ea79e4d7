//! Series command - print plot-ready data as JSON.

use std::path::PathBuf;

use easyviz::ExplorerConfig;

use super::{CommandResult, load_dataset, resolve_selection};
use crate::cli::SelectionArgs;

pub fn run(file: PathBuf, selection: SelectionArgs, config: &ExplorerConfig) -> CommandResult {
    let dataset = load_dataset(&file, config)?;
    let request = resolve_selection(&dataset, &selection)?;
    let series = dataset.series(&request)?;

    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}
