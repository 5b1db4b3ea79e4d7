//! Chart kinds offered to the user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of chart a user may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Histogram of one numeric column.
    Distribution,
    /// Points of a numeric column against any column.
    Scatter,
    /// Numeric column against any column, joined in row order.
    Line,
    /// Grid of pairwise scatter plots over selected numeric columns.
    PairMatrix,
    /// Pearson correlation matrix of all numeric columns.
    CorrelationHeatmap,
    /// Five-number summary of one numeric column.
    BoxPlot,
    /// Numeric column aggregated per value of any column.
    Bar,
}

impl ChartKind {
    /// Every kind, in presentation order.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Distribution,
        ChartKind::Scatter,
        ChartKind::Line,
        ChartKind::PairMatrix,
        ChartKind::CorrelationHeatmap,
        ChartKind::BoxPlot,
        ChartKind::Bar,
    ];

    /// Machine name, as used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Distribution => "distribution",
            ChartKind::Scatter => "scatter",
            ChartKind::Line => "line",
            ChartKind::PairMatrix => "pair_matrix",
            ChartKind::CorrelationHeatmap => "correlation_heatmap",
            ChartKind::BoxPlot => "box_plot",
            ChartKind::Bar => "bar",
        }
    }

    /// File name the host should use when exporting the chart as an image.
    pub fn export_file_name(&self) -> &'static str {
        match self {
            ChartKind::Distribution => "distribution.png",
            ChartKind::Scatter => "scatterplot.png",
            ChartKind::Line => "lineplot.png",
            ChartKind::PairMatrix => "pairplot.png",
            ChartKind::CorrelationHeatmap => "heatmap.png",
            ChartKind::BoxPlot => "boxplot.png",
            ChartKind::Bar => "barplot.png",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised chart kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart kind '{0}'")]
pub struct ParseChartKindError(pub String);

impl FromStr for ChartKind {
    type Err = ParseChartKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "distribution" | "histogram" => Ok(ChartKind::Distribution),
            "scatter" | "scatterplot" => Ok(ChartKind::Scatter),
            "line" | "lineplot" => Ok(ChartKind::Line),
            "pair_matrix" | "pairplot" | "pairs" => Ok(ChartKind::PairMatrix),
            "correlation_heatmap" | "heatmap" | "correlation" => {
                Ok(ChartKind::CorrelationHeatmap)
            }
            "box_plot" | "boxplot" | "box" => Ok(ChartKind::BoxPlot),
            "bar" | "barplot" => Ok(ChartKind::Bar),
            _ => Err(ParseChartKindError(s.to_string())),
        }
    }
}
