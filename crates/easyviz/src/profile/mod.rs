//! Table profiling: column kinds and descriptive statistics.

mod column;
mod profiler;
mod table;
mod types;

pub use column::{CategoricalSummary, ColumnProfile, NumericSummary};
pub use profiler::{ProfilerConfig, TableProfiler};
pub use table::TableProfile;
pub use types::ColumnKind;

pub(crate) use profiler::{parse_number, quantile};
