//! Table-level profile.

use serde::{Deserialize, Serialize};

use super::column::ColumnProfile;

/// Profile of an entire table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableProfile {
    /// Profiles for each column, in table order.
    pub columns: Vec<ColumnProfile>,
    /// Number of data rows.
    pub row_count: usize,
}

impl TableProfile {
    /// Create a profile from column profiles.
    pub fn new(columns: Vec<ColumnProfile>, row_count: usize) -> Self {
        Self { columns, row_count }
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table had no data rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Numeric columns in table order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(|c| c.is_numeric())
    }

    /// Categorical columns in table order.
    pub fn categorical_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(|c| !c.is_numeric())
    }

    pub fn numeric_count(&self) -> usize {
        self.numeric_columns().count()
    }
}
