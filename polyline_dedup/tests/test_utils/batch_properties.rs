use polyline_dedup::{
    dedup::{dedup_polylines, polylines_match, DedupOptions, DedupStrategy, ShapeError},
    polyline::Polyline,
};

pub const STRATEGIES: [DedupStrategy; 2] =
    [DedupStrategy::PairwiseScan, DedupStrategy::SpatialIndex];

/// Runs dedup with every strategy, asserts they agree, and returns the shared result.
pub fn dedup_all_strategies(
    batch: &[Polyline<f64>],
    tolerance: f64,
) -> Result<Vec<Polyline<f64>>, ShapeError> {
    let mut results = STRATEGIES.iter().map(|&strategy| {
        let options = DedupOptions {
            tolerance,
            strategy,
            progress: None,
        };
        dedup_polylines(batch, &options)
    });

    let first = results.next().unwrap();
    for other in results {
        assert_eq!(first, other, "strategies disagree");
    }

    first
}

/// Returns the positions in `input` of each entry of `output` if `output` is an order preserving
/// subsequence of `input` (matched by exact equality), otherwise `None`.
pub fn subsequence_positions(
    input: &[Polyline<f64>],
    output: &[Polyline<f64>],
) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(output.len());
    let mut next = 0;
    for out in output {
        let offset = input[next..].iter().position(|p| p == out)?;
        positions.push(next + offset);
        next += offset + 1;
    }

    Some(positions)
}

/// Duplicate mask computed with a plain single threaded sweep, independent of the library
/// strategies (and of the `parallel` feature).
pub fn sequential_sweep_mask(batch: &[Polyline<f64>], tolerance: f64) -> Vec<bool> {
    let mut mask = vec![false; batch.len()];
    for i in 0..batch.len() {
        for j in (i + 1)..batch.len() {
            if !mask[j] && polylines_match(&batch[i], &batch[j], tolerance) {
                mask[j] = true;
            }
        }
    }

    mask
}
