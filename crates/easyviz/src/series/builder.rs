//! Builds chart series from a table and a resolved request.

use indexmap::IndexMap;
use tracing::debug;

use super::correlation::correlation_matrix;
use super::{
    Bar, BarSeries, BoxSummary, ChartSeries, CorrelationSeries, Histogram, PairSeries, Point,
    PointSeries,
};
use crate::chart::{ChartKind, ChartRequest};
use crate::error::{EasyvizError, Result};
use crate::input::DataTable;
use crate::profile::{TableProfiler, parse_number, quantile};

/// Bin count used when a distribution request carries none.
const FALLBACK_BINS: u32 = 10;

/// Derives plot-ready data for resolved requests.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    profiler: TableProfiler,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the null tokens of an existing profiler.
    pub fn with_profiler(profiler: TableProfiler) -> Self {
        Self { profiler }
    }

    /// Build the series for `request`.
    pub fn build(&self, table: &DataTable, request: &ChartRequest) -> Result<ChartSeries> {
        debug!(kind = %request.kind, "building series");

        match request.kind {
            ChartKind::Distribution => {
                let column = required(&request.x_column, "x_column")?;
                let bins = request.bin_count.unwrap_or(FALLBACK_BINS).max(1);
                self.histogram(table, column, bins as usize)
                    .map(ChartSeries::Histogram)
            }
            ChartKind::BoxPlot => {
                let column = required(&request.x_column, "x_column")?;
                self.box_summary(table, column).map(ChartSeries::Box)
            }
            ChartKind::Scatter | ChartKind::Line => {
                let x = required(&request.x_column, "x_column")?;
                let y = required(&request.y_column, "y_column")?;
                self.points(table, x, y).map(ChartSeries::Points)
            }
            ChartKind::Bar => {
                let x = required(&request.x_column, "x_column")?;
                let y = required(&request.y_column, "y_column")?;
                self.bars(table, x, y).map(ChartSeries::Bars)
            }
            ChartKind::PairMatrix => self
                .pairs(table, &request.extra_columns)
                .map(ChartSeries::Pairs),
            ChartKind::CorrelationHeatmap => {
                let columns = request
                    .extra_columns
                    .iter()
                    .map(|name| self.numeric_column(table, name))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ChartSeries::Correlation(CorrelationSeries {
                    columns: request.extra_columns.clone(),
                    matrix: correlation_matrix(&columns),
                }))
            }
        }
    }

    /// Equal-width histogram over the non-null values of a numeric column.
    pub fn histogram(&self, table: &DataTable, column: &str, bins: usize) -> Result<Histogram> {
        let values: Vec<f64> = self
            .numeric_column(table, column)?
            .into_iter()
            .flatten()
            .collect();
        let bins = bins.max(1);

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if values.is_empty() {
            return Err(EasyvizError::InsufficientData {
                column: column.to_string(),
                required: 1,
                actual: 0,
            });
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let n = bins as f64;
        let span = hi - lo;
        // Scale before subtracting when the span overflows f64.
        let width = if span.is_finite() { span / n } else { hi / n - lo / n };
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        let mut counts = vec![0usize; bins];
        for v in values {
            // The last bin is closed on the right.
            let idx = (bin_offset(v, lo, width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Histogram {
            column: column.to_string(),
            edges,
            counts,
        })
    }

    /// Five-number summary of a numeric column.
    pub fn box_summary(&self, table: &DataTable, column: &str) -> Result<BoxSummary> {
        let mut values: Vec<f64> = self
            .numeric_column(table, column)?
            .into_iter()
            .flatten()
            .collect();
        if values.is_empty() {
            return Err(EasyvizError::InsufficientData {
                column: column.to_string(),
                required: 1,
                actual: 0,
            });
        }
        values.sort_by(|a, b| a.total_cmp(b));

        Ok(BoxSummary {
            column: column.to_string(),
            min: values[0],
            q1: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q3: quantile(&values, 0.75),
            max: values[values.len() - 1],
            count: values.len(),
        })
    }

    /// Row-ordered points of a numeric y against a raw x.
    pub fn points(&self, table: &DataTable, x: &str, y: &str) -> Result<PointSeries> {
        let points = self
            .xy_rows(table, x, y)?
            .map(|(x, y)| Point {
                x: x.to_string(),
                y,
            })
            .collect();

        Ok(PointSeries {
            x_column: x.to_string(),
            y_column: y.to_string(),
            points,
        })
    }

    /// Mean of y for each distinct x value.
    pub fn bars(&self, table: &DataTable, x: &str, y: &str) -> Result<BarSeries> {
        let mut groups: IndexMap<&str, (f64, usize)> = IndexMap::new();
        for (label, value) in self.xy_rows(table, x, y)? {
            let entry = groups.entry(label).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }

        let bars = groups
            .into_iter()
            .map(|(label, (sum, count))| Bar {
                label: label.to_string(),
                mean: sum / count as f64,
                count,
            })
            .collect();

        Ok(BarSeries {
            x_column: x.to_string(),
            y_column: y.to_string(),
            bars,
        })
    }

    /// Rows where every selected numeric column is present.
    pub fn pairs(&self, table: &DataTable, columns: &[String]) -> Result<PairSeries> {
        let values = columns
            .iter()
            .map(|name| self.numeric_column(table, name))
            .collect::<Result<Vec<_>>>()?;

        let rows = (0..table.row_count())
            .filter_map(|row| values.iter().map(|col| col[row]).collect::<Option<Vec<f64>>>())
            .collect();

        Ok(PairSeries {
            columns: columns.to_vec(),
            rows,
        })
    }

    /// Values of a numeric column per row, `None` for missing cells.
    fn numeric_column(&self, table: &DataTable, name: &str) -> Result<Vec<Option<f64>>> {
        let index = table
            .column_index(name)
            .ok_or_else(|| EasyvizError::ColumnNotFound(name.to_string()))?;

        table
            .column_values(index)
            .enumerate()
            .map(|(row, value)| {
                if self.profiler.is_null(value) {
                    return Ok(None);
                }
                parse_number(value)
                    .map(Some)
                    .ok_or_else(|| EasyvizError::NonNumericColumn {
                        column: name.to_string(),
                        row,
                        value: value.to_string(),
                    })
            })
            .collect()
    }

    fn xy_rows<'a>(
        &self,
        table: &'a DataTable,
        x: &str,
        y: &str,
    ) -> Result<impl Iterator<Item = (&'a str, f64)> + use<'a>> {
        let x_index = table
            .column_index(x)
            .ok_or_else(|| EasyvizError::ColumnNotFound(x.to_string()))?;
        let y_values = self.numeric_column(table, y)?;
        let x_nulls: Vec<bool> = table
            .column_values(x_index)
            .map(|v| self.profiler.is_null(v))
            .collect();

        Ok(table
            .column_values(x_index)
            .zip(y_values)
            .zip(x_nulls)
            .filter_map(|((x, y), x_null)| if x_null { None } else { Some((x.trim(), y?)) }))
    }
}

fn required<'a>(column: &'a Option<String>, field: &str) -> Result<&'a str> {
    column
        .as_deref()
        .ok_or_else(|| EasyvizError::Config(format!("chart request is missing {field}")))
}

/// Distance of `v` from `lo` in units of `width`.
fn bin_offset(v: f64, lo: f64, width: f64) -> f64 {
    let diff = v - lo;
    if diff.is_finite() {
        diff / width
    } else {
        v / width - lo / width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable::from_columns(vec![
            ("age", vec!["25", "30", "NA", "40"]),
            ("city", vec!["NY", "LA", "NY", "NY"]),
            ("score", vec!["1", "2", "3", "4"]),
        ])
    }

    fn request(kind: ChartKind) -> ChartRequest {
        ChartRequest::new(kind)
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let hist = SeriesBuilder::new().histogram(&table(), "score", 3).unwrap();

        assert_eq!(hist.edges.len(), 4);
        assert_eq!(hist.edges[0], 1.0);
        assert_eq!(hist.edges[3], 4.0);
        assert_eq!(hist.counts.iter().sum::<usize>(), 4);
        assert_eq!(hist.counts[2], 2);
    }

    #[test]
    fn test_histogram_constant_column() {
        let table = DataTable::from_columns(vec![("v", vec!["7", "7"])]);
        let hist = SeriesBuilder::new().histogram(&table, "v", 5).unwrap();

        assert_eq!(hist.edges[0], 6.5);
        assert_eq!(hist.edges[5], 7.5);
        assert_eq!(hist.counts.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_histogram_extreme_span_stays_finite() {
        let table = DataTable::from_columns(vec![("v", vec!["-1e308", "1e308"])]);
        let hist = SeriesBuilder::new().histogram(&table, "v", 5).unwrap();

        assert!(hist.edges.iter().all(|e| e.is_finite()));
        assert!(hist.edges.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(hist.edges[0], -1e308);
        assert_eq!(hist.edges[5], 1e308);
        assert_eq!(hist.counts, vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_histogram_of_empty_column_fails() {
        let table = DataTable::from_columns(vec![("v", vec!["NA"])]);
        let err = SeriesBuilder::new().histogram(&table, "v", 5).unwrap_err();
        assert!(matches!(err, EasyvizError::InsufficientData { .. }));
    }

    #[test]
    fn test_points_skip_missing_y() {
        let mut req = request(ChartKind::Scatter);
        req.x_column = Some("city".into());
        req.y_column = Some("age".into());

        let ChartSeries::Points(series) = SeriesBuilder::new().build(&table(), &req).unwrap() else {
            panic!("expected points");
        };
        assert_eq!(series.points.len(), 3);
        assert_eq!(series.points[1], Point { x: "LA".into(), y: 30.0 });
    }

    #[test]
    fn test_bars_average_per_label() {
        let bars = SeriesBuilder::new().bars(&table(), "city", "score").unwrap();

        assert_eq!(bars.bars.len(), 2);
        assert_eq!(bars.bars[0].label, "NY");
        assert_eq!(bars.bars[0].count, 3);
        assert!((bars.bars[0].mean - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pairs_drop_incomplete_rows() {
        let pairs = SeriesBuilder::new()
            .pairs(&table(), &["age".to_string(), "score".to_string()])
            .unwrap();
        assert_eq!(pairs.rows, vec![vec![25.0, 1.0], vec![30.0, 2.0], vec![40.0, 4.0]]);
    }

    #[test]
    fn test_correlation_series() {
        let mut req = request(ChartKind::CorrelationHeatmap);
        req.extra_columns = vec!["age".into(), "score".into()];

        let ChartSeries::Correlation(series) = SeriesBuilder::new().build(&table(), &req).unwrap()
        else {
            panic!("expected correlation");
        };
        assert_eq!(series.matrix.len(), 2);
        assert_eq!(series.matrix[0][0], Some(1.0));
        assert!(series.matrix[0][1].unwrap() > 0.9);
    }

    #[test]
    fn test_box_summary() {
        let summary = SeriesBuilder::new().box_summary(&table(), "score").unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert!((summary.median - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_non_numeric_column_errors() {
        let err = SeriesBuilder::new().histogram(&table(), "city", 5).unwrap_err();
        assert!(matches!(err, EasyvizError::NonNumericColumn { row: 0, .. }));

        let err = SeriesBuilder::new().histogram(&table(), "zip", 5).unwrap_err();
        assert!(matches!(err, EasyvizError::ColumnNotFound(_)));
    }
}
