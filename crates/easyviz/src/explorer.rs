//! Main Explorer struct and public API.

use std::path::Path;

use serde::Serialize;

use crate::chart::{ChartKind, ChartParams, ChartRequest, ChartSelector, ValidationResult};
use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::input::{DataTable, Parser, SourceMetadata};
use crate::profile::{TableProfile, TableProfiler};
use crate::series::{ChartSeries, SeriesBuilder};

/// One loaded upload with its profile.
///
/// Owns the table for the lifetime of a session; a new upload replaces the
/// whole dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    /// Metadata about the upload.
    pub source: SourceMetadata,
    /// Column profiles and row count.
    pub profile: TableProfile,
    #[serde(skip)]
    pub table: DataTable,
    #[serde(skip)]
    selector: ChartSelector,
    #[serde(skip)]
    series: SeriesBuilder,
}

impl Dataset {
    /// The first `n` rows.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        self.table.head(n)
    }

    /// Chart kinds that can be drawn from this dataset.
    pub fn available_charts(&self) -> Vec<ChartKind> {
        self.selector.available_charts(&self.profile)
    }

    /// Default selection for a chart kind.
    pub fn suggest_params(&self, kind: ChartKind) -> ChartParams {
        self.selector.suggest_params(&self.profile, kind)
    }

    /// Validate a chart selection.
    pub fn resolve(&self, kind: ChartKind, params: &ChartParams) -> ValidationResult {
        self.selector.resolve(&self.profile, kind, params)
    }

    /// Plot-ready data for a resolved request.
    pub fn series(&self, request: &ChartRequest) -> Result<ChartSeries> {
        self.series.build(&self.table, request)
    }
}

/// Loads uploads and wires profiling, selection and series preparation.
pub struct Explorer {
    parser: Parser,
    profiler: TableProfiler,
    selector: ChartSelector,
}

impl Explorer {
    /// Create an Explorer with default configuration.
    pub fn new() -> Self {
        Self::build(ExplorerConfig::default())
    }

    /// Create an Explorer with custom configuration.
    pub fn with_config(config: ExplorerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ExplorerConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            profiler: TableProfiler::with_config(config.profiler),
            selector: ChartSelector::with_config(config.selector),
        }
    }

    /// Load and profile a file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let (table, source) = self.parser.parse_file(path)?;
        Ok(self.dataset(table, source))
    }

    /// Load and profile uploaded bytes.
    pub fn load_bytes(&self, bytes: &[u8], name: impl Into<String>) -> Result<Dataset> {
        let (table, source) = self.parser.parse_bytes(bytes, name)?;
        Ok(self.dataset(table, source))
    }

    /// Profile a table that was parsed elsewhere.
    pub fn profile(&self, table: &DataTable) -> TableProfile {
        self.profiler.profile(table)
    }

    fn dataset(&self, table: DataTable, source: SourceMetadata) -> Dataset {
        let profile = self.profiler.profile(&table);
        Dataset {
            source,
            profile,
            table,
            selector: self.selector.clone(),
            series: SeriesBuilder::with_profiler(self.profiler.clone()),
        }
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
