//! Explorer configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::SelectorConfig;
use crate::error::{EasyvizError, Result};
use crate::input::ParserConfig;
use crate::profile::ProfilerConfig;

/// Configuration for loading, profiling and chart selection.
///
/// Every section is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Profiler configuration.
    pub profiler: ProfilerConfig,
    /// Chart selector configuration.
    pub selector: SelectorConfig,
    /// Rows shown by a preview when none is requested.
    pub preview_rows: Option<usize>,
}

impl ExplorerConfig {
    /// Default number of preview rows.
    pub const DEFAULT_PREVIEW_ROWS: usize = 5;

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| EasyvizError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.parser.validate()?;
        self.selector.validate()
    }

    pub fn preview_rows(&self) -> usize {
        self.preview_rows.unwrap_or(Self::DEFAULT_PREVIEW_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ExplorerConfig::from_json(r#"{"selector": {"default_bins": 20}}"#).unwrap();

        assert_eq!(config.selector.default_bins, 20);
        assert_eq!(config.selector.bins.min, 5);
        assert!(config.parser.has_header);
        assert_eq!(config.preview_rows(), 5);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ExplorerConfig::from_json("{}").unwrap(), ExplorerConfig::default());
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let err = ExplorerConfig::from_json(r#"{"selector": {"default_bins": 500}}"#).unwrap_err();
        assert!(matches!(err, EasyvizError::Config(_)));
    }

    #[test]
    fn test_parser_section() {
        let config = ExplorerConfig::from_json(
            r#"{"parser": {"delimiter": ";", "max_rows": 100}, "profiler": {"null_tokens": ["?"]}}"#,
        )
        .unwrap();

        assert_eq!(config.parser.delimiter, Some(';'));
        assert_eq!(config.parser.max_rows, Some(100));
        assert_eq!(config.profiler.null_tokens, vec!["?"]);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ExplorerConfig::from_file("/nonexistent/easyviz.json").unwrap_err();
        assert!(matches!(err, EasyvizError::Io { .. }));
    }
}
