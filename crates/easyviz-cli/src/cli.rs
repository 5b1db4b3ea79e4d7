//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use easyviz::{ChartKind, ChartParams};

/// EasyViz: profile a delimited dataset and configure charts
#[derive(Parser)]
#[command(name = "easyviz")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show descriptive statistics for every column
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the first rows of a data file
    Preview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of rows to show (default from config, else 5)
        #[arg(short = 'n', long)]
        rows: Option<usize>,
    },

    /// List the charts available for a data file
    Charts {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a chart selection
    Resolve {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the plot-ready data for a chart selection as JSON
    Series {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,
    },
}

/// Chart selection flags shared by `resolve` and `series`.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Chart kind
    #[arg(short, long)]
    pub kind: ChartKindChoice,

    /// Target column (distribution, box plot)
    #[arg(short, long)]
    pub column: Option<String>,

    /// X axis column (scatter, line, bar)
    #[arg(short, long)]
    pub x: Option<String>,

    /// Y axis column (scatter, line, bar)
    #[arg(short, long)]
    pub y: Option<String>,

    /// Comma-separated columns (pair matrix)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Number of histogram bins
    #[arg(short, long)]
    pub bins: Option<u32>,

    /// Fill unspecified selections with suggested defaults
    #[arg(long)]
    pub suggest: bool,
}

impl SelectionArgs {
    /// Parameters exactly as given on the command line.
    pub fn params(&self) -> ChartParams {
        ChartParams {
            column: self.column.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
            columns: self.columns.clone(),
            bin_count: self.bins,
        }
    }

    /// Parameters with gaps filled from `suggested`.
    pub fn params_or(&self, suggested: ChartParams) -> ChartParams {
        let given = self.params();
        ChartParams {
            column: given.column.or(suggested.column),
            x: given.x.or(suggested.x),
            y: given.y.or(suggested.y),
            columns: if given.columns.is_empty() {
                suggested.columns
            } else {
                given.columns
            },
            bin_count: given.bin_count.or(suggested.bin_count),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ChartKindChoice {
    /// Histogram of one numeric column
    Distribution,
    /// Numeric y against any x
    Scatter,
    /// Numeric y against any x, in row order
    Line,
    /// Pairwise scatter grid of numeric columns
    PairMatrix,
    /// Correlation matrix of all numeric columns
    Heatmap,
    /// Five-number summary of one numeric column
    Box,
    /// Mean of numeric y per x value
    Bar,
}

impl From<ChartKindChoice> for ChartKind {
    fn from(choice: ChartKindChoice) -> Self {
        match choice {
            ChartKindChoice::Distribution => ChartKind::Distribution,
            ChartKindChoice::Scatter => ChartKind::Scatter,
            ChartKindChoice::Line => ChartKind::Line,
            ChartKindChoice::PairMatrix => ChartKind::PairMatrix,
            ChartKindChoice::Heatmap => ChartKind::CorrelationHeatmap,
            ChartKindChoice::Box => ChartKind::BoxPlot,
            ChartKindChoice::Bar => ChartKind::Bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_flags() {
        let cli = Cli::try_parse_from([
            "easyviz", "resolve", "data.csv", "--kind", "pair-matrix", "--columns", "a,b,c",
        ])
        .unwrap();

        let Commands::Resolve { selection, json, .. } = cli.command else {
            panic!("expected resolve");
        };
        assert!(!json);
        assert_eq!(ChartKind::from(selection.kind), ChartKind::PairMatrix);
        assert_eq!(selection.params().columns, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "easyviz", "profile", "data.csv", "--verbose", "--config", "viz.json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("viz.json")));
    }

    #[test]
    fn test_params_or_keeps_given_values() {
        let selection = SelectionArgs {
            kind: ChartKindChoice::Scatter,
            column: None,
            x: Some("city".to_string()),
            y: None,
            columns: Vec::new(),
            bins: None,
            suggest: true,
        };
        let params = selection.params_or(ChartParams::new().with_axes("weight", "age"));

        assert_eq!(params.x.as_deref(), Some("city"));
        assert_eq!(params.y.as_deref(), Some("age"));
    }
}
