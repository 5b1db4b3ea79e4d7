//! Validation of chart parameters against a table profile.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kind::ChartKind;
use super::request::{ChartParams, ChartRequest, RejectReason, ValidationResult};
use crate::error::{EasyvizError, Result};
use crate::profile::{ColumnProfile, TableProfile};

/// Inclusive range of allowed histogram bin counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinRange {
    pub min: u32,
    pub max: u32,
}

impl BinRange {
    pub fn contains(&self, bins: u32) -> bool {
        (self.min..=self.max).contains(&bins)
    }
}

impl Default for BinRange {
    fn default() -> Self {
        Self { min: 5, max: 50 }
    }
}

/// Selector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Allowed bin counts for distributions.
    pub bins: BinRange,
    /// Bin count used when none is requested.
    pub default_bins: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            bins: BinRange::default(),
            default_bins: 10,
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bins.min == 0 {
            return Err(EasyvizError::Config(
                "bins.min must be greater than 0".to_string(),
            ));
        }
        if self.bins.min > self.bins.max {
            return Err(EasyvizError::Config(format!(
                "bins.min ({}) exceeds bins.max ({})",
                self.bins.min, self.bins.max
            )));
        }
        if !self.bins.contains(self.default_bins) {
            return Err(EasyvizError::Config(format!(
                "default_bins ({}) must lie within {}..={}",
                self.default_bins, self.bins.min, self.bins.max
            )));
        }
        Ok(())
    }
}

/// Resolves user chart selections into [`ChartRequest`]s.
///
/// Stateless: every call depends only on the profile, kind and params passed.
#[derive(Debug, Clone, Default)]
pub struct ChartSelector {
    config: SelectorConfig,
}

impl ChartSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Validate `params` for a chart of `kind` against `profile`.
    ///
    /// The first failing rule determines the rejection reason; an empty
    /// table is rejected before any other check.
    pub fn resolve(
        &self,
        profile: &TableProfile,
        kind: ChartKind,
        params: &ChartParams,
    ) -> ValidationResult {
        let result = self.check(profile, kind, params);
        match &result {
            Ok(request) => debug!(%kind, columns = ?request.columns(), "resolved chart"),
            Err(reason) => debug!(%kind, %reason, "rejected chart"),
        }
        result.into()
    }

    /// Chart kinds that resolve for some choice of parameters.
    pub fn available_charts(&self, profile: &TableProfile) -> Vec<ChartKind> {
        ChartKind::ALL
            .into_iter()
            .filter(|&kind| {
                self.resolve(profile, kind, &self.suggest_params(profile, kind))
                    .is_resolved()
            })
            .collect()
    }

    /// Default selection for a chart kind.
    ///
    /// The first numeric column is the target or y axis, the first column
    /// the x axis, and the first two numeric columns form the pair matrix.
    pub fn suggest_params(&self, profile: &TableProfile, kind: ChartKind) -> ChartParams {
        let mut numeric = profile.numeric_columns().map(|c| c.name.clone());
        let first_numeric = numeric.next();

        match kind {
            ChartKind::Distribution => ChartParams {
                column: first_numeric,
                bin_count: Some(self.config.default_bins),
                ..ChartParams::default()
            },
            ChartKind::BoxPlot => ChartParams {
                column: first_numeric,
                ..ChartParams::default()
            },
            ChartKind::Scatter | ChartKind::Line | ChartKind::Bar => {
                let x = profile.columns.first().map(|c| c.name.clone());
                ChartParams {
                    x,
                    y: first_numeric,
                    ..ChartParams::default()
                }
            }
            ChartKind::PairMatrix => ChartParams {
                columns: first_numeric.into_iter().chain(numeric.next()).collect(),
                ..ChartParams::default()
            },
            ChartKind::CorrelationHeatmap => ChartParams::default(),
        }
    }

    fn check(
        &self,
        profile: &TableProfile,
        kind: ChartKind,
        params: &ChartParams,
    ) -> std::result::Result<ChartRequest, RejectReason> {
        if profile.is_empty() {
            return Err(RejectReason::EmptyTable);
        }

        match kind {
            ChartKind::Distribution => {
                let column = single_numeric_target(profile, params)?;
                let bins = params.bin_count.unwrap_or(self.config.default_bins);
                if !self.config.bins.contains(bins) {
                    return Err(RejectReason::BinCountOutOfRange {
                        bin_count: bins,
                        min: self.config.bins.min,
                        max: self.config.bins.max,
                    });
                }
                Ok(ChartRequest {
                    x_column: Some(column.name.clone()),
                    bin_count: Some(bins),
                    ..ChartRequest::new(kind)
                })
            }
            ChartKind::BoxPlot => {
                let column = single_numeric_target(profile, params)?;
                Ok(ChartRequest {
                    x_column: Some(column.name.clone()),
                    ..ChartRequest::new(kind)
                })
            }
            ChartKind::Scatter | ChartKind::Line | ChartKind::Bar => {
                let (x, y) = match (params.x.as_deref(), params.y.as_deref()) {
                    (Some(x), Some(y)) => (x, y),
                    (x, y) => {
                        return Err(RejectReason::InsufficientColumnsSelected {
                            required: 2,
                            selected: usize::from(x.is_some()) + usize::from(y.is_some()),
                        });
                    }
                };
                let x = lookup(profile, x)?;
                let y = lookup(profile, y)?;
                require_numeric(y)?;
                Ok(ChartRequest {
                    x_column: Some(x.name.clone()),
                    y_column: Some(y.name.clone()),
                    ..ChartRequest::new(kind)
                })
            }
            ChartKind::PairMatrix => {
                if params.columns.len() < 2 {
                    return Err(RejectReason::InsufficientColumnsSelected {
                        required: 2,
                        selected: params.columns.len(),
                    });
                }

                let mut seen = HashSet::with_capacity(params.columns.len());
                let mut selected = Vec::with_capacity(params.columns.len());
                for name in &params.columns {
                    // A repeated column is a caller error, reported like an unknown one.
                    if !seen.insert(name.as_str()) {
                        return Err(RejectReason::ColumnNotFound { name: name.clone() });
                    }
                    selected.push(lookup(profile, name)?);
                }

                let numeric = selected.iter().filter(|c| c.is_numeric()).count();
                if numeric < selected.len() {
                    return Err(RejectReason::InsufficientColumnsSelected {
                        required: selected.len(),
                        selected: numeric,
                    });
                }

                Ok(ChartRequest {
                    extra_columns: params.columns.clone(),
                    ..ChartRequest::new(kind)
                })
            }
            ChartKind::CorrelationHeatmap => {
                let numeric: Vec<String> =
                    profile.numeric_columns().map(|c| c.name.clone()).collect();
                if numeric.len() < 2 {
                    return Err(RejectReason::InsufficientColumnsSelected {
                        required: 2,
                        selected: numeric.len(),
                    });
                }
                Ok(ChartRequest {
                    extra_columns: numeric,
                    ..ChartRequest::new(kind)
                })
            }
        }
    }
}

fn lookup<'a>(
    profile: &'a TableProfile,
    name: &str,
) -> std::result::Result<&'a ColumnProfile, RejectReason> {
    profile
        .column(name)
        .ok_or_else(|| RejectReason::ColumnNotFound {
            name: name.to_string(),
        })
}

fn require_numeric(column: &ColumnProfile) -> std::result::Result<(), RejectReason> {
    if column.is_numeric() {
        Ok(())
    } else {
        Err(RejectReason::MissingNumericColumn {
            column: Some(column.name.clone()),
        })
    }
}

/// Target of a distribution or box plot: one selected numeric column.
fn single_numeric_target<'a>(
    profile: &'a TableProfile,
    params: &ChartParams,
) -> std::result::Result<&'a ColumnProfile, RejectReason> {
    if profile.numeric_count() == 0 {
        return Err(RejectReason::MissingNumericColumn { column: None });
    }
    let name = params
        .column
        .as_deref()
        .ok_or(RejectReason::MissingNumericColumn { column: None })?;
    let column = lookup(profile, name)?;
    require_numeric(column)?;
    Ok(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DataTable;
    use crate::profile::TableProfiler;

    fn scenario_profile() -> TableProfile {
        let table = DataTable::from_columns(vec![
            ("age", vec!["25", "30", "NA"]),
            ("city", vec!["NY", "LA", "NY"]),
            ("score", vec!["1.5", "2.5", "3.0"]),
        ]);
        TableProfiler::new().profile(&table)
    }

    fn reason(result: ValidationResult) -> RejectReason {
        result.into_result().expect_err("expected rejection")
    }

    #[test]
    fn test_empty_table_wins_for_every_kind() {
        let table = DataTable::from_columns(vec![("x", Vec::<String>::new())]);
        let profile = TableProfiler::new().profile(&table);
        let selector = ChartSelector::new();

        for kind in ChartKind::ALL {
            let params = ChartParams::new()
                .with_column("x")
                .with_axes("x", "x")
                .with_columns(["x", "y"]);
            assert_eq!(
                reason(selector.resolve(&profile, kind, &params)),
                RejectReason::EmptyTable
            );
        }
    }

    #[test]
    fn test_distribution_defaults_bins() {
        let profile = scenario_profile();
        let result = ChartSelector::new().resolve(
            &profile,
            ChartKind::Distribution,
            &ChartParams::new().with_column("age"),
        );

        let request = result.request().unwrap();
        assert_eq!(request.x_column.as_deref(), Some("age"));
        assert_eq!(request.bin_count, Some(10));
    }

    #[test]
    fn test_distribution_bin_bounds() {
        let profile = scenario_profile();
        let selector = ChartSelector::new();

        for (bins, ok) in [(4, false), (5, true), (50, true), (51, false)] {
            let params = ChartParams::new().with_column("age").with_bin_count(bins);
            let result = selector.resolve(&profile, ChartKind::Distribution, &params);
            assert_eq!(result.is_resolved(), ok, "bins = {bins}");
        }
    }

    #[test]
    fn test_distribution_rejections() {
        let profile = scenario_profile();
        let selector = ChartSelector::new();

        assert_eq!(
            reason(selector.resolve(&profile, ChartKind::Distribution, &ChartParams::new())),
            RejectReason::MissingNumericColumn { column: None }
        );
        assert_eq!(
            reason(selector.resolve(
                &profile,
                ChartKind::Distribution,
                &ChartParams::new().with_column("height")
            )),
            RejectReason::ColumnNotFound { name: "height".into() }
        );
        assert_eq!(
            reason(selector.resolve(
                &profile,
                ChartKind::Distribution,
                &ChartParams::new().with_column("city")
            )),
            RejectReason::MissingNumericColumn { column: Some("city".into()) }
        );
    }

    #[test]
    fn test_distribution_without_numeric_columns() {
        let table = DataTable::from_columns(vec![("city", vec!["NY", "LA"])]);
        let profile = TableProfiler::new().profile(&table);
        let result = ChartSelector::new().resolve(
            &profile,
            ChartKind::Distribution,
            &ChartParams::new().with_column("missing").with_bin_count(1),
        );

        assert_eq!(reason(result), RejectReason::MissingNumericColumn { column: None });
    }

    #[test]
    fn test_axis_charts() {
        let profile = scenario_profile();
        let selector = ChartSelector::new();

        for kind in [ChartKind::Scatter, ChartKind::Line, ChartKind::Bar] {
            let ok = selector.resolve(&profile, kind, &ChartParams::new().with_axes("city", "age"));
            let request = ok.request().unwrap();
            assert_eq!(request.kind, kind);
            assert_eq!(request.x_column.as_deref(), Some("city"));
            assert_eq!(request.y_column.as_deref(), Some("age"));

            assert_eq!(
                reason(selector.resolve(&profile, kind, &ChartParams::new().with_axes("city", "city"))),
                RejectReason::MissingNumericColumn { column: Some("city".into()) }
            );
            assert_eq!(
                reason(selector.resolve(&profile, kind, &ChartParams::new().with_axes("zip", "height"))),
                RejectReason::ColumnNotFound { name: "zip".into() }
            );
            assert_eq!(
                reason(selector.resolve(&profile, kind, &ChartParams::new().with_y("age"))),
                RejectReason::InsufficientColumnsSelected { required: 2, selected: 1 }
            );
        }
    }

    #[test]
    fn test_pair_matrix() {
        let profile = scenario_profile();
        let selector = ChartSelector::new();

        let ok = selector.resolve(
            &profile,
            ChartKind::PairMatrix,
            &ChartParams::new().with_columns(["score", "age"]),
        );
        assert_eq!(ok.request().unwrap().extra_columns, vec!["score", "age"]);

        assert_eq!(
            reason(selector.resolve(
                &profile,
                ChartKind::PairMatrix,
                &ChartParams::new().with_columns(["nope"])
            )),
            RejectReason::InsufficientColumnsSelected { required: 2, selected: 1 }
        );
        assert_eq!(
            reason(selector.resolve(
                &profile,
                ChartKind::PairMatrix,
                &ChartParams::new().with_columns(["age", "age"])
            )),
            RejectReason::ColumnNotFound { name: "age".into() }
        );
        assert_eq!(
            reason(selector.resolve(
                &profile,
                ChartKind::PairMatrix,
                &ChartParams::new().with_columns(["age", "height"])
            )),
            RejectReason::ColumnNotFound { name: "height".into() }
        );
        assert_eq!(
            reason(selector.resolve(
                &profile,
                ChartKind::PairMatrix,
                &ChartParams::new().with_columns(["age", "city"])
            )),
            RejectReason::InsufficientColumnsSelected { required: 2, selected: 1 }
        );
    }

    #[test]
    fn test_repeated_table_names_are_selectable() {
        let table = DataTable::from_columns(vec![("a", vec!["x", "y"]), ("a", vec!["1", "2"])]);
        let profile = TableProfiler::new().profile(&table);
        let selector = ChartSelector::new();

        assert_eq!(profile.column_names(), vec!["a", "a.1"]);
        let scatter = selector.resolve(
            &profile,
            ChartKind::Scatter,
            &ChartParams::new().with_axes("a", "a.1"),
        );
        assert!(scatter.is_resolved());
        let dist = selector.resolve(
            &profile,
            ChartKind::Distribution,
            &ChartParams::new().with_column("a.1"),
        );
        assert_eq!(dist.request().unwrap().x_column.as_deref(), Some("a.1"));
    }

    #[test]
    fn test_all_null_column_resolves_as_numeric() {
        let table = DataTable::from_columns(vec![("v", vec!["NA", "NA", ""])]);
        let profile = TableProfiler::new().profile(&table);
        let result = ChartSelector::new().resolve(
            &profile,
            ChartKind::Distribution,
            &ChartParams::new().with_column("v"),
        );
        assert!(result.is_resolved());
    }

    #[test]
    fn test_heatmap_uses_all_numeric_columns() {
        let profile = scenario_profile();
        let result =
            ChartSelector::new().resolve(&profile, ChartKind::CorrelationHeatmap, &ChartParams::new());
        assert_eq!(result.request().unwrap().extra_columns, vec!["age", "score"]);
    }

    #[test]
    fn test_heatmap_needs_two_numeric_columns() {
        let table = DataTable::from_columns(vec![("a", vec!["1", "2"]), ("b", vec!["x", "y"])]);
        let profile = TableProfiler::new().profile(&table);
        let result =
            ChartSelector::new().resolve(&profile, ChartKind::CorrelationHeatmap, &ChartParams::new());

        assert_eq!(
            reason(result),
            RejectReason::InsufficientColumnsSelected { required: 2, selected: 1 }
        );
    }

    #[test]
    fn test_suggested_params_resolve() {
        let profile = scenario_profile();
        let selector = ChartSelector::new();

        let scatter = selector.suggest_params(&profile, ChartKind::Scatter);
        assert_eq!(scatter.x.as_deref(), Some("age"));
        assert_eq!(scatter.y.as_deref(), Some("age"));

        let table =
            DataTable::from_columns(vec![("city", vec!["NY", "LA"]), ("n", vec!["1", "2"])]);
        let bar = selector.suggest_params(&TableProfiler::new().profile(&table), ChartKind::Bar);
        assert_eq!(bar.x.as_deref(), Some("city"));
        assert_eq!(bar.y.as_deref(), Some("n"));

        let pairs = selector.suggest_params(&profile, ChartKind::PairMatrix);
        assert_eq!(pairs.columns, vec!["age", "score"]);

        assert_eq!(selector.available_charts(&profile), ChartKind::ALL.to_vec());
    }

    #[test]
    fn test_available_charts_categorical_only() {
        let table = DataTable::from_columns(vec![("city", vec!["NY", "LA"])]);
        let profile = TableProfiler::new().profile(&table);
        assert!(ChartSelector::new().available_charts(&profile).is_empty());
    }

    #[test]
    fn test_config_validation() {
        assert!(SelectorConfig::default().validate().is_ok());

        let inverted = SelectorConfig {
            bins: BinRange { min: 20, max: 10 },
            default_bins: 15,
        };
        assert!(inverted.validate().is_err());

        let outside = SelectorConfig {
            default_bins: 60,
            ..SelectorConfig::default()
        };
        assert!(outside.validate().is_err());
    }
}
