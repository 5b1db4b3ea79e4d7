//! Column profile and summary statistics.

use serde::{Deserialize, Serialize};

use super::types::ColumnKind;

/// Descriptive statistics for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation; absent with fewer than 2 values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    pub median: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
}

/// Descriptive statistics for categorical columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Number of distinct non-null values.
    pub unique: usize,
    /// Most frequent value.
    pub top: String,
    /// Occurrences of `top`.
    pub freq: usize,
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Numeric or categorical.
    pub kind: ColumnKind,
    /// Number of non-null values.
    pub count: usize,
    /// Number of null/missing values.
    pub null_count: usize,
    /// Present for numeric columns with at least one value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    /// Present for categorical columns with at least one value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical: Option<CategoricalSummary>,
}

impl ColumnProfile {
    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// Get the null percentage.
    pub fn null_percentage(&self) -> f64 {
        let total = self.count + self.null_count;
        if total == 0 {
            0.0
        } else {
            (self.null_count as f64 / total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(count: usize, null_count: usize) -> ColumnProfile {
        ColumnProfile {
            name: "v".to_string(),
            position: 0,
            kind: ColumnKind::Numeric,
            count,
            null_count,
            numeric: None,
            categorical: None,
        }
    }

    #[test]
    fn test_null_percentage() {
        assert_eq!(column(3, 1).null_percentage(), 25.0);
        assert_eq!(column(0, 4).null_percentage(), 100.0);
        assert_eq!(column(0, 0).null_percentage(), 0.0);
    }
}
