//! Duplicate search pruned by a spatial index of the polyline extents.
//!
//! Two polylines can only match if every point of one is within the tolerance of a point of the
//! other, so their bounding boxes differ by at most the tolerance on every side. Querying the index
//! with a polyline's box grown by the tolerance therefore returns a superset of its possible
//! duplicates, the exact comparison then runs only on those candidates.
//!
//! Polylines with a non-finite coordinate never match anything so they are left out of the index.
//! If the remaining extents still cannot be indexed (coordinate range overflows) the search falls
//! back to the pairwise scan.
use super::{pairwise, polylines_match, DedupProgress};
use crate::{core::traits::Real, polyline::Polyline};
use log::{debug, trace};
use num_traits::ToPrimitive;
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder, AABB,
};

fn is_finite_box<T>(extents: &AABB<T>) -> bool
where
    T: Real,
{
    [extents.min_x, extents.min_y, extents.max_x, extents.max_y]
        .into_iter()
        .all(|v| v.to_f64().is_some_and(f64::is_finite))
}

/// Spatial index over the finite extents of a batch.
struct ExtentsIndex<T>
where
    T: Real,
{
    /// Extents in batch order, `None` for polylines with a non-finite coordinate.
    extents: Vec<Option<AABB<T>>>,
    /// Batch position of each indexed item.
    positions: Vec<usize>,
    index: Option<StaticAABB2DIndex<T>>,
}

impl<T> ExtentsIndex<T>
where
    T: Real,
{
    /// Returns `None` if the extents cannot be indexed.
    fn build(batch: &[Polyline<T>]) -> Option<Self> {
        let extents: Vec<_> = batch
            .iter()
            .map(|pline| pline.extents().filter(|e| is_finite_box(e)))
            .collect();
        let positions: Vec<usize> = extents
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|_| i))
            .collect();

        if positions.len() < extents.len() {
            debug!(
                "{} polylines with non-finite coordinates left out of the spatial index",
                extents.len() - positions.len()
            );
        }

        let index = if positions.is_empty() {
            None
        } else {
            let mut builder = StaticAABB2DIndexBuilder::new(positions.len());
            for e in extents.iter().flatten() {
                builder.add(e.min_x, e.min_y, e.max_x, e.max_y);
            }

            match builder.build() {
                Ok(x) => Some(x),
                Err(StaticAABB2DIndexBuildError::ItemCountError { .. }) => {
                    unreachable!(
                        "internal library error: count mismatch when building spatial index"
                    )
                }
                Err(e @ StaticAABB2DIndexBuildError::NumericCastError) => {
                    debug!("extents cannot be indexed: {e}");
                    return None;
                }
            }
        };

        Some(Self {
            extents,
            positions,
            index,
        })
    }

    /// Batch positions of the polylines whose extents are within `tolerance` of the extents of the
    /// polyline at `pos`. Always empty for a polyline left out of the index.
    fn candidates(&self, pos: usize, tolerance: T, stack: &mut Vec<usize>) -> Vec<usize> {
        let (Some(e), Some(index)) = (&self.extents[pos], &self.index) else {
            return Vec::new();
        };

        let q = query_box(e, tolerance);
        index
            .query_with_stack(q.min_x, q.min_y, q.max_x, q.max_y, stack)
            .into_iter()
            .map(|k| self.positions[k])
            .collect()
    }
}

/// Query box for `extents` grown by `tolerance`.
///
/// An extra few ulps of the largest coordinate magnitude are added so rounding in the subtraction
/// can never shrink the box below what the per coordinate compare accepts.
fn query_box<T>(extents: &AABB<T>, tolerance: T) -> AABB<T>
where
    T: Real,
{
    let magnitude = [extents.min_y, extents.max_x, extents.max_y, tolerance]
        .into_iter()
        .fold(extents.min_x.abs(), |acc, v| {
            num_traits::real::Real::max(acc, v.abs())
        });
    let four = T::one() + T::one() + T::one() + T::one();
    let pad = tolerance + magnitude * T::epsilon() * four;

    AABB::new(
        extents.min_x - pad,
        extents.min_y - pad,
        extents.max_x + pad,
        extents.max_y + pad,
    )
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn spatial_mask<T>(
    batch: &[Polyline<T>],
    tolerance: T,
    progress: &dyn DedupProgress,
) -> Vec<bool>
where
    T: Real,
{
    let n = batch.len();
    let steps = n.saturating_sub(1);
    let mut mask = vec![false; n];
    if n < 2 {
        return mask;
    }

    let Some(extents_index) = ExtentsIndex::build(batch) else {
        debug!("falling back to pairwise scan");
        return pairwise::pairwise_mask(batch, tolerance, progress);
    };
    let mut query_stack = Vec::new();

    for i in 0..steps {
        let pline = &batch[i];
        let candidates = extents_index.candidates(i, tolerance, &mut query_stack);

        for j in candidates {
            // only later polylines can be duplicates of i, marks never flip back
            if j <= i || mask[j] {
                continue;
            }

            if polylines_match(pline, &batch[j], tolerance) {
                trace!("polyline {j} is a duplicate of polyline {i}");
                mask[j] = true;
            }
        }

        progress.on_step(i + 1, steps);
    }

    mask
}

#[cfg(feature = "parallel")]
pub(crate) fn spatial_mask<T>(
    batch: &[Polyline<T>],
    tolerance: T,
    progress: &dyn DedupProgress,
) -> Vec<bool>
where
    T: Real,
{
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let n = batch.len();
    if n < 2 {
        return vec![false; n];
    }

    let Some(extents_index) = ExtentsIndex::build(batch) else {
        debug!("falling back to pairwise scan");
        return pairwise::pairwise_mask(batch, tolerance, progress);
    };
    let steps = n - 1;
    let completed = AtomicUsize::new(0);

    (0..n)
        .into_par_iter()
        .map_init(Vec::new, |query_stack, j| {
            if j == 0 {
                return false;
            }

            let pline = &batch[j];
            let candidates = extents_index.candidates(j, tolerance, query_stack);
            let is_dup = candidates.into_iter().any(|i| {
                let m = i < j && polylines_match(&batch[i], pline, tolerance);
                if m {
                    trace!("polyline {j} is a duplicate of polyline {i}");
                }
                m
            });

            progress.on_step(completed.fetch_add(1, Ordering::Relaxed) + 1, steps);
            is_dup
        })
        .collect()
}
