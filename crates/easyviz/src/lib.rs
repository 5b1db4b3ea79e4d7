//! EasyViz: profiling and chart configuration for uploaded tabular data.
//!
//! An upload is parsed into a [`DataTable`], profiled once into a
//! [`TableProfile`] (column kinds and descriptive statistics), and every chart
//! selection is then validated against that profile. A valid selection becomes
//! a [`ChartRequest`] for an external plotting collaborator; an invalid one a
//! typed [`RejectReason`].
//!
//! # Core Principles
//!
//! - **Profile once**: column kinds are computed at load time and dispatched on
//!   afterwards
//! - **Explicit parameters**: every call takes its full input, no ambient state
//! - **Typed rejections**: invalid selections are values, never silently dropped
//!
//! # Example
//!
//! ```
//! use easyviz::{ChartKind, ChartParams, DataTable, RejectReason, TableProfiler, ChartSelector};
//!
//! let table = DataTable::from_columns(vec![
//!     ("age", vec!["25", "30", "NA"]),
//!     ("city", vec!["NY", "LA", "NY"]),
//! ]);
//! let profile = TableProfiler::new().profile(&table);
//! let selector = ChartSelector::new();
//!
//! let ok = selector.resolve(&profile, ChartKind::Scatter, &ChartParams::new().with_axes("city", "age"));
//! assert!(ok.is_resolved());
//!
//! let bad = selector.resolve(&profile, ChartKind::Scatter, &ChartParams::new().with_axes("city", "city"));
//! assert!(matches!(bad.reason(), Some(RejectReason::MissingNumericColumn { .. })));
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod profile;
pub mod series;

mod explorer;

pub use crate::explorer::{Dataset, Explorer};
pub use chart::{
    BinRange, ChartKind, ChartParams, ChartRequest, ChartSelector, RejectReason, SelectorConfig,
    ValidationResult,
};
pub use config::ExplorerConfig;
pub use error::{EasyvizError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use profile::{
    CategoricalSummary, ColumnKind, ColumnProfile, NumericSummary, ProfilerConfig, TableProfile,
    TableProfiler,
};
pub use series::{ChartSeries, SeriesBuilder};
