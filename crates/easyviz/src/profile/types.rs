//! Column kind classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a profiled column.
///
/// Computed once by the profiler; chart validation dispatches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-null value parses as a finite number (`inf` and `NaN`
    /// text do not). Vacuously true for an all-null column with rows.
    Numeric,
    /// At least one non-null value is not a finite number, or the table
    /// has no rows.
    #[default]
    Categorical,
}

impl ColumnKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => f.write_str("numeric"),
            ColumnKind::Categorical => f.write_str("categorical"),
        }
    }
}
