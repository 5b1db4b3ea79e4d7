//! Column classification and descriptive statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::column::{CategoricalSummary, ColumnProfile, NumericSummary};
use super::table::TableProfile;
use super::types::ColumnKind;
use crate::input::DataTable;

// =============================================================================
// STREAMING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Streaming accumulator for count, mean, variance and extrema.
#[derive(Debug, Clone)]
struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl StreamingStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Population standard deviation, undefined below two values.
    fn std(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / self.count as f64).sqrt())
        }
    }
}

/// Parse a cell as a finite number.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Quantile of sorted values by linear interpolation between closest ranks.
///
/// `sorted` must be non-empty and ascending.
pub(crate) fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Profiler configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Extra tokens treated as missing, on top of the built-in set.
    pub null_tokens: Vec<String>,
}

impl ProfilerConfig {
    /// Treat `token` as a missing value.
    pub fn with_null_token(mut self, token: impl Into<String>) -> Self {
        self.null_tokens.push(token.into());
        self
    }
}

/// Classifies columns and computes descriptive statistics.
///
/// Profiling never fails: every well-formed [`DataTable`] has a profile.
#[derive(Debug, Clone, Default)]
pub struct TableProfiler {
    config: ProfilerConfig,
}

impl TableProfiler {
    /// Create a profiler with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProfilerConfig) -> Self {
        Self { config }
    }

    /// Check whether a cell is missing.
    pub fn is_null(&self, value: &str) -> bool {
        DataTable::is_null_value(value)
            || self
                .config
                .null_tokens
                .iter()
                .any(|t| value.trim().eq_ignore_ascii_case(t.trim()))
    }

    /// Profile every column of a table.
    pub fn profile(&self, table: &DataTable) -> TableProfile {
        let columns: Vec<ColumnProfile> = (0..table.column_count())
            .map(|idx| self.profile_column(table, idx))
            .collect();

        let profile = TableProfile::new(columns, table.row_count());
        info!(
            rows = profile.row_count,
            columns = profile.column_count(),
            numeric = profile.numeric_count(),
            "profiled table"
        );
        profile
    }

    /// Profile a single column by index.
    pub fn profile_column(&self, table: &DataTable, index: usize) -> ColumnProfile {
        let name = table.headers.get(index).cloned().unwrap_or_default();

        let mut null_count = 0;
        let mut values: Vec<&str> = Vec::new();
        for value in table.column_values(index) {
            if self.is_null(value) {
                null_count += 1;
            } else {
                values.push(value);
            }
        }

        // Every column of a zero-row table is categorical; otherwise an
        // all-null column is numeric, since no value fails to parse.
        let numbers: Option<Vec<f64>> = if table.is_empty() {
            None
        } else {
            values.iter().map(|v| parse_number(v)).collect()
        };

        let (kind, numeric, categorical) = match numbers {
            Some(numbers) if numbers.is_empty() => (ColumnKind::Numeric, None, None),
            Some(numbers) => (
                ColumnKind::Numeric,
                Some(summarize_numeric(numbers)),
                None,
            ),
            None => (ColumnKind::Categorical, None, summarize_categorical(&values)),
        };

        debug!(column = %name, %kind, nulls = null_count, "profiled column");

        ColumnProfile {
            name,
            position: index,
            kind,
            count: values.len(),
            null_count,
            numeric,
            categorical,
        }
    }
}

/// Summarize a non-empty set of numbers.
fn summarize_numeric(mut numbers: Vec<f64>) -> NumericSummary {
    let mut stats = StreamingStats::new();
    for &value in &numbers {
        stats.add(value);
    }

    numbers.sort_by(|a, b| a.total_cmp(b));

    NumericSummary {
        min: stats.min,
        max: stats.max,
        mean: stats.mean,
        std: stats.std(),
        median: quantile(&numbers, 0.5),
        q1: quantile(&numbers, 0.25),
        q3: quantile(&numbers, 0.75),
    }
}

fn summarize_categorical(values: &[&str]) -> Option<CategoricalSummary> {
    let mut value_counts: IndexMap<&str, usize> = IndexMap::new();
    for v in values {
        *value_counts.entry(v.trim()).or_insert(0) += 1;
    }

    // First seen wins on ties.
    let mut top: Option<(&str, usize)> = None;
    for (&value, &count) in &value_counts {
        if top.is_none_or(|(_, best)| count > best) {
            top = Some((value, count));
        }
    }

    top.map(|(value, freq)| CategoricalSummary {
        unique: value_counts.len(),
        top: value.to_string(),
        freq,
    })
}
