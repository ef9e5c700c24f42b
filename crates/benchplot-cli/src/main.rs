// File: crates/benchplot-cli/src/main.rs
// Summary: Loads a benchmark CSV and renders the standard four-chart report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};

use benchplot_core::{ChartRenderer, ChartSpec, Operation, RecordStore, StyleConfig};

/// Fixed y bounds so delete/comparison charts stay on the same visual scale
/// across report generations.
const DELETE_Y_CAP_US: u64 = 150;
const COMPARATIVE_Y_CAP_US: u64 = 300;

const X_LABEL: &str = "Node count";
const Y_LABEL: &str = "Time (\u{00b5}s)";
const Y_LABEL_CUMULATIVE: &str = "Accumulated time (\u{00b5}s)";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Input path and output directory from argv, with the benchmark
    // producer's defaults.
    let input = std::env::args().nth(1).unwrap_or_else(|| "B-tree.csv".to_string());
    let out_dir = PathBuf::from(std::env::args().nth(2).unwrap_or_else(|| "charts".to_string()));

    // A format error here is fatal before any chart is attempted.
    let store = RecordStore::load_csv(&input)
        .with_context(|| format!("failed to load measurements from '{input}'"))?;
    info!(records = store.len(), input, "loaded measurements");

    let insert = store.series_for(&Operation::Insert);
    let delete = store.series_for(&Operation::Delete);

    let renderer = ChartRenderer::new(StyleConfig::default());
    let insert_color = renderer.style().color_for(&Operation::Insert);
    let delete_color = renderer.style().color_for(&Operation::Delete);

    let mut failures = 0usize;

    let mut spec = ChartSpec::new(
        "Insert performance",
        X_LABEL,
        Y_LABEL,
        out_dir.join("insert.png"),
    );
    spec.add_series("insert", insert_color, insert.prepare());
    report(renderer.render_single(&spec), &spec, &mut failures);

    let mut spec = ChartSpec::new(
        "Delete performance",
        X_LABEL,
        Y_LABEL,
        out_dir.join("delete.png"),
    )
    .with_y_cap(DELETE_Y_CAP_US);
    spec.add_series("delete", delete_color, delete.prepare());
    report(renderer.render_single(&spec), &spec, &mut failures);

    let mut spec = ChartSpec::new(
        "Insert vs delete",
        X_LABEL,
        Y_LABEL,
        out_dir.join("comparison.png"),
    )
    .with_y_cap(COMPARATIVE_Y_CAP_US);
    spec.add_series("insert", insert_color, insert.prepare());
    spec.add_series("delete", delete_color, delete.prepare());
    report(renderer.render_comparative(&spec), &spec, &mut failures);

    let mut spec = ChartSpec::new(
        "Accumulated time",
        X_LABEL,
        Y_LABEL_CUMULATIVE,
        out_dir.join("cumulative.png"),
    );
    spec.add_cumulative_series("insert", insert_color, insert.prepare_cumulative());
    spec.add_cumulative_series("delete", delete_color, delete.prepare_cumulative());
    report(renderer.render_cumulative(&spec), &spec, &mut failures);

    if failures > 0 {
        anyhow::bail!("{failures} chart(s) failed");
    }
    Ok(())
}

/// One chart failing must not stop the siblings; record it and move on.
fn report(result: benchplot_core::Result<()>, spec: &ChartSpec, failures: &mut usize) {
    match result {
        Ok(()) => info!(path = %spec.output_path.display(), "wrote chart"),
        Err(e) => {
            error!(path = %spec.output_path.display(), error = %e, "chart failed");
            *failures += 1;
        }
    }
}
