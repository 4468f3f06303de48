use super::ShapeError;
use crate::{core::traits::Real, polyline::Polyline};

/// Check that every polyline in `batch` groups into the same number of (start, end) segment pairs.
///
/// Returns the common segment pair count (0 for an empty batch). Fails on the first polyline (in
/// batch order) with a zero or odd point count, or with a point count different from the first
/// polyline.
///
/// # Examples
///
/// ```
/// # use polyline_dedup::pline;
/// # use polyline_dedup::dedup::*;
/// let batch = vec![pline![(0.0, 0.0), (1.0, 1.0)], pline![(2.0, 2.0), (3.0, 3.0)]];
/// assert_eq!(validate_batch(&batch), Ok(1));
///
/// let bad = vec![pline![(0.0, 0.0), (1.0, 1.0)], pline![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]];
/// assert_eq!(
///     validate_batch(&bad),
///     Err(ShapeError::OddPointCount { index: 1, point_count: 3 })
/// );
/// ```
pub fn validate_batch<T>(batch: &[Polyline<T>]) -> Result<usize, ShapeError>
where
    T: Real,
{
    let mut expected = None;
    for (index, pline) in batch.iter().enumerate() {
        let point_count = pline.vertex_count();
        let pair_count = pline
            .segment_pair_count()
            .ok_or(ShapeError::OddPointCount { index, point_count })?;

        match expected {
            None => expected = Some((point_count, pair_count)),
            Some((expected_count, _)) if expected_count != point_count => {
                return Err(ShapeError::PointCountMismatch {
                    index,
                    expected: expected_count,
                    found: point_count,
                });
            }
            Some(_) => {}
        }
    }

    Ok(expected.map_or(0, |(_, pair_count)| pair_count))
}

/// Returns true if `b` traces the same segment pairs as `a` within `tolerance`, either in the same
/// direction or in the opposite direction.
///
/// Every coordinate of every point must be within `tolerance` (inclusive). Polylines that do not
/// have the same, even, non-zero point count never match.
///
/// # Examples
///
/// ```
/// # use polyline_dedup::pline;
/// # use polyline_dedup::dedup::*;
/// let a = pline![(0.0, 0.0), (1.0, 1.0)];
/// assert!(polylines_match(&a, &pline![(1.0, 1.0), (0.0, 0.0)], 0.0));
/// assert!(polylines_match(&a, &pline![(0.0, 0.009), (1.0, 1.0)], 0.01));
/// assert!(!polylines_match(&a, &pline![(0.0, 0.02), (1.0, 1.0)], 0.01));
/// ```
pub fn polylines_match<T>(a: &Polyline<T>, b: &Polyline<T>, tolerance: T) -> bool
where
    T: Real,
{
    if a.vertex_count() != b.vertex_count() {
        return false;
    }

    let (Some(a_pairs), Some(b_pairs)) = (a.segment_pairs(), b.segment_pairs()) else {
        return false;
    };

    let same_direction = a_pairs
        .clone()
        .zip(b_pairs.clone())
        .all(|(p, q)| p.tol_eq(&q, tolerance));

    same_direction
        || a_pairs
            .rev()
            .zip(b_pairs)
            .all(|(p, q)| p.reversed().tol_eq(&q, tolerance))
}
