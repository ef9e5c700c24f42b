// File: crates/benchplot-core/src/series.rs
// Summary: Series model: filtered, prepared, and cumulative measurement series.

use crate::downsample::{reduce, TARGET_POINT_CAP};
use crate::record::Operation;

/// `(node_count, time_us)` pairs for one operation, in original file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSeries {
    pub operation: Operation,
    pub points: Vec<(u64, u64)>,
}

/// A series sorted ascending by node count and stride-reduced for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedSeries {
    pub operation: Operation,
    pub points: Vec<(u64, u64)>,
}

/// A prepared series whose time values are running totals over the full
/// sorted series. Cumulation happens before downsampling; summing the
/// reduced series instead would silently lose the discarded points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeSeries(pub PreparedSeries);

impl RecordSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stable sort by node count (ties keep file order), then stride-reduce.
    pub fn prepare(&self) -> PreparedSeries {
        let sorted = self.sorted_points();
        PreparedSeries {
            operation: self.operation.clone(),
            points: reduce(&sorted, TARGET_POINT_CAP),
        }
    }

    /// Sort, replace each time with the running total over the full sorted
    /// series, then stride-reduce the accumulated pairs.
    pub fn prepare_cumulative(&self) -> CumulativeSeries {
        let sorted = self.sorted_points();
        let mut total = 0u64;
        let accumulated: Vec<(u64, u64)> = sorted
            .into_iter()
            .map(|(node_count, time_us)| {
                total += time_us;
                (node_count, total)
            })
            .collect();
        CumulativeSeries(PreparedSeries {
            operation: self.operation.clone(),
            points: reduce(&accumulated, TARGET_POINT_CAP),
        })
    }

    fn sorted_points(&self) -> Vec<(u64, u64)> {
        let mut points = self.points.clone();
        points.sort_by_key(|&(node_count, _)| node_count);
        points
    }
}

impl PreparedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl CumulativeSeries {
    pub fn into_inner(self) -> PreparedSeries {
        self.0
    }

    pub fn as_prepared(&self) -> &PreparedSeries {
        &self.0
    }
}
