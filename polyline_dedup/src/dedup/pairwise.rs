//! Direct pairwise scan, every later polyline is compared against every earlier one.
use super::{polylines_match, DedupProgress};
use crate::{core::traits::Real, polyline::Polyline};
use log::trace;

#[cfg(not(feature = "parallel"))]
pub(crate) fn pairwise_mask<T>(
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

    // last polyline has nothing after it to mark
    for i in 0..steps {
        let pline = &batch[i];
        for j in (i + 1)..n {
            // marks never flip back so an already marked polyline needs no further compares
            if mask[j] {
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
pub(crate) fn pairwise_mask<T>(
    batch: &[Polyline<T>],
    tolerance: T,
    progress: &dyn DedupProgress,
) -> Vec<bool>
where
    T: Real,
{
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let steps = batch.len().saturating_sub(1);
    let completed = AtomicUsize::new(0);

    // each entry is computed independently: polyline j is a duplicate if any earlier polyline
    // matches it, same predicate the sequential sweep accumulates
    (0..batch.len())
        .into_par_iter()
        .map(|j| {
            if j == 0 {
                return false;
            }

            let pline = &batch[j];
            let is_dup = batch[..j].iter().enumerate().any(|(i, earlier)| {
                let m = polylines_match(earlier, pline, tolerance);
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
