// File: crates/benchplot-core/src/downsample.rs
// Summary: Deterministic stride-based downsampling for rendering large series.

/// Series at or below this length are rendered as-is.
pub const DOWNSAMPLE_THRESHOLD: usize = 10_000;

/// Target point count for reduced series. The threshold is twice the cap so
/// the stride is always >= 2 when reduction kicks in.
pub const TARGET_POINT_CAP: usize = 5_000;

/// Stride-reduce a sorted series to roughly `target_cap` points.
///
/// Keeps indices `0, step, 2*step, ...` with `step = len / target_cap`, so
/// the result length is `ceil(len / step)`. Points past the last full stride
/// are dropped. This guarantees even spacing along the sorted index axis; it
/// is not a statistical sample and may discard the global extrema.
pub fn reduce(points: &[(u64, u64)], target_cap: usize) -> Vec<(u64, u64)> {
    let n = points.len();
    if target_cap == 0 || n <= target_cap.saturating_mul(2) {
        return points.to_vec();
    }
    let step = n / target_cap;
    points.iter().copied().step_by(step).collect()
}
