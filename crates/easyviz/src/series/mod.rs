//! Plot-ready data for resolved chart requests.
//!
//! The plotting collaborator draws these series; nothing here renders.

mod builder;
mod correlation;

pub use builder::SeriesBuilder;
pub use correlation::{correlation_matrix, pearson};

use serde::{Deserialize, Serialize};

/// Data backing one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSeries {
    Histogram(Histogram),
    Points(PointSeries),
    Bars(BarSeries),
    Pairs(PairSeries),
    Correlation(CorrelationSeries),
    Box(BoxSummary),
}

/// Equal-width histogram; `edges` has one more entry than `counts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub column: String,
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

/// Points in row order, rows with a missing x or y dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeries {
    pub x_column: String,
    pub y_column: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    /// Mean of y over rows with this label.
    pub mean: f64,
    pub count: usize,
}

/// Mean of y per distinct x, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub x_column: String,
    pub y_column: String,
    pub bars: Vec<Bar>,
}

/// Complete rows over the selected columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSeries {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Pearson correlation matrix; `None` where undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSeries {
    pub columns: Vec<String>,
    pub matrix: Vec<Vec<Option<f64>>>,
}

/// Five-number summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub column: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub count: usize,
}
