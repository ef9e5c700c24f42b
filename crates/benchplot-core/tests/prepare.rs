// File: crates/benchplot-core/tests/prepare.rs
// Purpose: Series preparation: sorting, stability, cumulation order.

use benchplot_core::{Operation, RecordSeries};
use pretty_assertions::assert_eq;

fn series(points: Vec<(u64, u64)>) -> RecordSeries {
    RecordSeries {
        operation: Operation::Insert,
        points,
    }
}

#[test]
fn prepare_sorts_by_node_count() {
    let prepared = series(vec![(3, 50), (1, 10), (2, 20)]).prepare();
    assert_eq!(prepared.points, vec![(1, 10), (2, 20), (3, 50)]);
}

#[test]
fn prepare_breaks_ties_by_original_order() {
    let prepared = series(vec![(2, 5), (1, 1), (2, 7), (1, 3)]).prepare();
    assert_eq!(prepared.points, vec![(1, 1), (1, 3), (2, 5), (2, 7)]);
}

#[test]
fn prepare_is_idempotent_on_sorted_input() {
    let once = series(vec![(5, 9), (3, 4), (4, 4), (1, 2)]).prepare();
    let twice = series(once.points.clone()).prepare();
    assert_eq!(once.points, twice.points);
}

#[test]
fn cumulative_is_running_sum_over_sorted_order() {
    let cumulative = series(vec![(3, 50), (1, 10), (2, 20)]).prepare_cumulative();
    assert_eq!(cumulative.as_prepared().points, vec![(1, 10), (2, 30), (3, 80)]);
}

#[test]
fn cumulative_total_survives_downsampling() {
    // 20_001 unit measurements: step 4, final index 20_000 is on the stride,
    // and its value must be the sum over the ENTIRE series.
    let points: Vec<(u64, u64)> = (0..20_001).map(|i| (i, 1)).collect();
    let cumulative = series(points).prepare_cumulative();

    let prepared = cumulative.as_prepared();
    assert_eq!(prepared.len(), 5_001);
    assert_eq!(prepared.points.last(), Some(&(20_000, 20_001)));
}

#[test]
fn cumulation_happens_before_downsampling() {
    // 20_000 unit measurements reduce to 5_000 points. Had the running sum
    // been computed after reduction, the last value would be 5_000; over the
    // full sorted series it is last_index + 1.
    let points: Vec<(u64, u64)> = (0..20_000).map(|i| (i, 1)).collect();
    let cumulative = series(points).prepare_cumulative();

    let prepared = cumulative.as_prepared();
    assert_eq!(prepared.len(), 5_000);
    assert_eq!(prepared.points.last(), Some(&(19_996, 19_997)));
}

#[test]
fn small_series_pass_through_untouched_after_sort() {
    let prepared = series((0..100).map(|i| (i, i * 2)).collect()).prepare();
    assert_eq!(prepared.len(), 100);
    assert_eq!(prepared.points[99], (99, 198));
}
