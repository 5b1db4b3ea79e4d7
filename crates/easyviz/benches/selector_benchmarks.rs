//! Chart resolution and series benchmarks.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use easyviz::{ChartKind, ChartSelector, DataTable, SeriesBuilder, TableProfiler};

fn wide_table(rows: usize, numeric_cols: usize) -> DataTable {
    let mut columns: Vec<(String, Vec<String>)> = (0..numeric_cols)
        .map(|c| {
            let values = (0..rows)
                .map(|r| format!("{:.3}", ((r * (c + 3)) % 97) as f64 / 7.0))
                .collect();
            (format!("n{c}"), values)
        })
        .collect();
    columns.push((
        "group".to_string(),
        (0..rows).map(|r| format!("g{}", r % 5)).collect(),
    ));
    DataTable::from_columns(columns)
}

fn bench_resolve(c: &mut Criterion) {
    let table = wide_table(1_000, 20);
    let profile = TableProfiler::new().profile(&table);
    let selector = ChartSelector::new();

    c.bench_function("available_charts", |b| {
        b.iter(|| selector.available_charts(black_box(&profile)))
    });

    let params = selector.suggest_params(&profile, ChartKind::PairMatrix);
    c.bench_function("resolve_pair_matrix", |b| {
        b.iter(|| selector.resolve(black_box(&profile), ChartKind::PairMatrix, &params))
    });
}

fn bench_series(c: &mut Criterion) {
    let table = wide_table(5_000, 10);
    let profile = TableProfiler::new().profile(&table);
    let selector = ChartSelector::new();
    let builder = SeriesBuilder::new();

    for kind in [ChartKind::Distribution, ChartKind::CorrelationHeatmap] {
        let params = selector.suggest_params(&profile, kind);
        let Some(request) = selector.resolve(&profile, kind, &params).request().cloned() else {
            continue;
        };
        c.bench_function(&format!("series_{kind}"), |b| {
            b.iter(|| builder.build(black_box(&table), &request))
        });
    }
}

criterion_group!(benches, bench_resolve, bench_series);
criterion_main!(benches);
