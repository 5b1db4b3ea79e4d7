//! CLI command implementations.

pub mod charts;
pub mod preview;
pub mod profile;
pub mod resolve;
pub mod series;

use std::path::Path;

use colored::Colorize;
use easyviz::{ChartKind, ChartParams, ChartRequest, Dataset, Explorer, ExplorerConfig, RejectReason};

use crate::cli::SelectionArgs;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Read `--config` if given, else the defaults.
pub fn load_config(path: Option<&Path>) -> easyviz::Result<ExplorerConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            ExplorerConfig::from_file(path)
        }
        None => Ok(ExplorerConfig::default()),
    }
}

/// Parse and profile a data file.
pub fn load_dataset(
    file: &Path,
    config: &ExplorerConfig,
) -> Result<Dataset, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    let explorer = Explorer::with_config(config.clone())?;
    Ok(explorer.load(file)?)
}

/// Resolve the selection against a dataset.
///
/// A rejection comes back as the `Err` so callers can bubble it to `main`,
/// which exits with status 2 for it.
pub fn resolve_selection(
    dataset: &Dataset,
    selection: &SelectionArgs,
) -> Result<ChartRequest, RejectReason> {
    let kind = ChartKind::from(selection.kind);
    let params = if selection.suggest {
        selection.params_or(dataset.suggest_params(kind))
    } else {
        selection.params()
    };
    tracing::debug!(%kind, ?params, "resolving selection");
    dataset.resolve(kind, &params).into_result()
}

pub(crate) fn describe_params(params: &ChartParams) -> String {
    let mut parts = Vec::new();
    if let Some(c) = &params.column {
        parts.push(format!("column={c}"));
    }
    if let Some(x) = &params.x {
        parts.push(format!("x={x}"));
    }
    if let Some(y) = &params.y {
        parts.push(format!("y={y}"));
    }
    if !params.columns.is_empty() {
        parts.push(format!("columns={}", params.columns.join(",")));
    }
    if let Some(b) = params.bin_count {
        parts.push(format!("bins={b}"));
    }
    if parts.is_empty() {
        "-".dimmed().to_string()
    } else {
        parts.join(" ")
    }
}

/// Format an optional statistic, `-` when undefined.
pub(crate) fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "-".to_string(),
    }
}
