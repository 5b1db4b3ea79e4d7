//! Chart parameters, resolved requests and rejection reasons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kind::ChartKind;

/// User-selected parameters for a chart.
///
/// Which fields matter depends on the chart kind: `column` for single-column
/// charts, `x`/`y` for axis charts, `columns` for the pair matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartParams {
    /// Target column of a distribution or box plot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    /// Ordered selection for the pair matrix.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_count: Option<u32>,
}

impl ChartParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the target column.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Select both axes.
    pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x = Some(x.into());
        self.y = Some(y.into());
        self
    }

    pub fn with_x(mut self, x: impl Into<String>) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn with_y(mut self, y: impl Into<String>) -> Self {
        self.y = Some(y.into());
        self
    }

    /// Select columns for the pair matrix, in axis order.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bin_count(mut self, bins: u32) -> Self {
        self.bin_count = Some(bins);
        self
    }
}

/// A validated chart description, ready for a plotting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    /// X axis, or the target column of a distribution or box plot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_column: Option<String>,
    /// Pair matrix selection or heatmap participants, in axis order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_count: Option<u32>,
}

impl ChartRequest {
    /// A request with no column references yet.
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            x_column: None,
            y_column: None,
            extra_columns: Vec::new(),
            bin_count: None,
        }
    }

    /// Every referenced column, in axis order.
    pub fn columns(&self) -> Vec<&str> {
        self.x_column
            .iter()
            .chain(self.y_column.iter())
            .chain(self.extra_columns.iter())
            .map(String::as_str)
            .collect()
    }

    /// Human-readable chart title.
    pub fn title(&self) -> String {
        let x = self.x_column.as_deref().unwrap_or_default();
        let y = self.y_column.as_deref().unwrap_or_default();
        match self.kind {
            ChartKind::Distribution => format!("Distribution of {x}"),
            ChartKind::Scatter => format!("Scatter plot: {y} vs {x}"),
            ChartKind::Line => format!("Line chart: {y} vs {x}"),
            ChartKind::Bar => format!("Bar chart: {y} by {x}"),
            ChartKind::BoxPlot => format!("Box plot of {x}"),
            ChartKind::PairMatrix => format!("Pair plot: {}", self.extra_columns.join(", ")),
            ChartKind::CorrelationHeatmap => "Correlation matrix".to_string(),
        }
    }

    /// File name to use when the host exports this chart as an image.
    pub fn export_file_name(&self) -> &'static str {
        self.kind.export_file_name()
    }
}

/// Why a chart request could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// The table has no data rows.
    #[error("the table has no rows")]
    EmptyTable,

    /// A numeric column is required but none was available or selected.
    #[error("{}", missing_numeric_message(.column))]
    MissingNumericColumn { column: Option<String> },

    /// Too few (usable) columns were selected.
    #[error("at least {required} columns must be selected, got {selected}")]
    InsufficientColumnsSelected { required: usize, selected: usize },

    /// A selected column is not in the table, or was selected twice.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    /// Bin count outside the allowed range.
    #[error("bin count {bin_count} is outside {min}..={max}")]
    BinCountOutOfRange { bin_count: u32, min: u32, max: u32 },
}

fn missing_numeric_message(column: &Option<String>) -> String {
    match column {
        Some(name) => format!("column '{name}' is not numeric"),
        None => "a numeric column is required".to_string(),
    }
}

/// Outcome of validating a chart request against a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ValidationResult {
    Resolved(ChartRequest),
    Rejected(RejectReason),
}

impl ValidationResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ValidationResult::Resolved(_))
    }

    /// The resolved request, if any.
    pub fn request(&self) -> Option<&ChartRequest> {
        match self {
            ValidationResult::Resolved(request) => Some(request),
            ValidationResult::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            ValidationResult::Resolved(_) => None,
            ValidationResult::Rejected(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<ChartRequest, RejectReason> {
        self.into()
    }
}

impl From<Result<ChartRequest, RejectReason>> for ValidationResult {
    fn from(result: Result<ChartRequest, RejectReason>) -> Self {
        match result {
            Ok(request) => ValidationResult::Resolved(request),
            Err(reason) => ValidationResult::Rejected(reason),
        }
    }
}

impl From<ValidationResult> for Result<ChartRequest, RejectReason> {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Resolved(request) => Ok(request),
            ValidationResult::Rejected(reason) => Err(reason),
        }
    }
}
