//! Removal of polylines that duplicate an earlier polyline of the same batch.
//!
//! Two polylines are duplicates when every coordinate of every point is within an absolute
//! tolerance, in the same point order or in reversed point order. The first occurrence (lowest
//! batch index) always survives, later duplicates are dropped and the relative order of the
//! survivors is preserved. A polyline with a NaN or infinite coordinate never matches another
//! polyline.
//!
//! Every polyline of a batch must have the same, even, non-zero number of points so points can be
//! compared as (start, end) segment pairs. In practice this means running
//! [split_all](crate::polyline::split_all) first so every polyline is a single segment.
//!
//! # Examples
//!
//! ```
//! # use polyline_dedup::pline;
//! # use polyline_dedup::dedup::*;
//! let batch = vec![
//!     pline![(0.0, 0.0), (1.0, 1.0)],
//!     pline![(1.0, 1.0), (0.0, 0.0)],
//!     pline![(0.0, 0.009), (1.0, 1.0)],
//!     pline![(2.0, 2.0), (3.0, 3.0)],
//! ];
//!
//! let result = dedup(&batch, 0.01).unwrap();
//! assert_eq!(result, vec![pline![(0.0, 0.0), (1.0, 1.0)], pline![(2.0, 2.0), (3.0, 3.0)]]);
//! ```
mod error;
mod pairwise;
mod progress;
mod shape;
mod spatial;

pub use error::ShapeError;
pub use progress::{DedupProgress, LogProgress, NoopProgress};
pub use shape::{polylines_match, validate_batch};

use crate::{core::traits::Real, polyline::Polyline};
use log::{debug, info};
use std::fmt;

/// Default tolerance, 0.01mm expressed in CSS pixels (96 per inch), the unit plotter documents
/// are usually stored in.
pub const DEFAULT_TOLERANCE: f64 = 0.01 * 96.0 / 25.4;

/// Algorithm used to search for duplicates. Both produce the exact same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DedupStrategy {
    /// Compare every polyline with every later polyline, `O(n²)` comparisons.
    PairwiseScan,
    /// Only compare polylines whose bounding boxes are within tolerance of each other, found using
    /// a spatial index.
    #[default]
    SpatialIndex,
}

/// Struct to hold options parameters when deduplicating polylines.
#[derive(Clone)]
pub struct DedupOptions<'a, T>
where
    T: Real,
{
    /// Maximum absolute difference (inclusive) per coordinate for two points to be considered
    /// equal. Must be finite and non-negative.
    pub tolerance: T,
    /// Search algorithm to use.
    pub strategy: DedupStrategy,
    /// Optional progress observer, see [DedupProgress].
    pub progress: Option<&'a dyn DedupProgress>,
}

impl<'a, T> DedupOptions<'a, T>
where
    T: Real,
{
    /// Options with [DEFAULT_TOLERANCE], the default [DedupStrategy] and no progress observer.
    #[inline]
    pub fn new() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap(),
            strategy: DedupStrategy::default(),
            progress: None,
        }
    }

    /// Options with the given `tolerance` and all other values defaulted.
    #[inline]
    pub fn with_tolerance(tolerance: T) -> Self {
        Self {
            tolerance,
            ..Self::new()
        }
    }
}

impl<'a, T> Default for DedupOptions<'a, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> fmt::Debug for DedupOptions<'a, T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DedupOptions")
            .field("tolerance", &self.tolerance)
            .field("strategy", &self.strategy)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

/// Compute which polylines of `batch` are duplicates of an earlier polyline.
///
/// Returns one entry per polyline, `true` if the polyline would be removed. The batch is validated
/// upfront with [validate_batch], on failure no comparison is performed.
///
/// # Panics
///
/// Panics if `options.tolerance` is negative, NaN or infinite.
pub fn duplicate_mask<T>(
    batch: &[Polyline<T>],
    options: &DedupOptions<T>,
) -> Result<Vec<bool>, ShapeError>
where
    T: Real,
{
    let tolerance = options.tolerance;
    assert!(
        tolerance >= T::zero() && tolerance <= <T as num_traits::real::Real>::max_value(),
        "tolerance must be finite and non-negative, got {tolerance:?}"
    );

    let pair_count = validate_batch(batch)?;
    debug!(
        "searching {} polylines of {} segment pairs for duplicates, strategy: {:?}, tolerance: {:?}",
        batch.len(),
        pair_count,
        options.strategy,
        tolerance
    );

    let progress = options.progress.unwrap_or(&NoopProgress);
    let steps = batch.len().saturating_sub(1);
    progress.on_start(steps);
    let mask = match options.strategy {
        DedupStrategy::PairwiseScan => pairwise::pairwise_mask(batch, tolerance, progress),
        DedupStrategy::SpatialIndex => spatial::spatial_mask(batch, tolerance, progress),
    };
    progress.on_finish(steps);

    Ok(mask)
}

/// Remove every polyline of `batch` that duplicates an earlier polyline.
///
/// Returns the surviving polylines (cloned) in their original relative order, `batch` is not
/// modified. See the [module documentation](self) for the duplicate rule and
/// [duplicate_mask] for errors and panics.
///
/// # Examples
///
/// ```
/// # use polyline_dedup::pline;
/// # use polyline_dedup::dedup::*;
/// let batch = vec![
///     pline![(0.0, 0.0), (1.0, 1.0)],
///     pline![(0.0, 0.0), (1.0, 1.0)],
///     pline![(2.0, 2.0), (3.0, 3.0)],
/// ];
///
/// let options = DedupOptions {
///     tolerance: 0.0,
///     strategy: DedupStrategy::PairwiseScan,
///     ..Default::default()
/// };
/// let result = dedup_polylines(&batch, &options).unwrap();
/// assert_eq!(result, vec![batch[0].clone(), batch[2].clone()]);
///
/// // shapes must match, split paths into segments first
/// let mixed = vec![pline![(0.0, 0.0), (1.0, 1.0)], pline![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]];
/// assert!(matches!(
///     dedup_polylines(&mixed, &options),
///     Err(ShapeError::OddPointCount { index: 1, point_count: 3 })
/// ));
/// ```
pub fn dedup_polylines<T>(
    batch: &[Polyline<T>],
    options: &DedupOptions<T>,
) -> Result<Vec<Polyline<T>>, ShapeError>
where
    T: Real,
{
    let mask = duplicate_mask(batch, options)?;
    let result: Vec<_> = batch
        .iter()
        .zip(&mask)
        .filter(|(_, is_dup)| !**is_dup)
        .map(|(pline, _)| pline.clone())
        .collect();

    info!(
        "removed {} duplicate polylines, {} remaining",
        batch.len() - result.len(),
        result.len()
    );

    Ok(result)
}

/// Same as [dedup_polylines] using the default strategy, no progress observer, and the given
/// `tolerance`.
#[inline]
pub fn dedup<T>(batch: &[Polyline<T>], tolerance: T) -> Result<Vec<Polyline<T>>, ShapeError>
where
    T: Real,
{
    dedup_polylines(batch, &DedupOptions::with_tolerance(tolerance))
}
