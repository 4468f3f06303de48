use thiserror::Error;

/// Error returned when the polylines of a batch cannot be compared as (start, end) segment pairs.
///
/// This is a usage error: every polyline of a batch must have the same, even, non-zero number of
/// points. Run [split_all](crate::polyline::split_all) on the batch before deduplicating to reduce
/// every path to two point segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Polyline point count is zero or odd.
    #[error(
        "polyline at index {index} has {point_count} points which do not group into (start, end) \
         segment pairs, split paths into segments (split_all) before deduplicating"
    )]
    OddPointCount {
        /// Position of the polyline in the batch.
        index: usize,
        /// Number of points the polyline has.
        point_count: usize,
    },

    /// Polyline point count differs from the polylines before it.
    #[error(
        "polyline at index {index} has {found} points but the batch expects {expected}, split \
         paths into segments (split_all) before deduplicating"
    )]
    PointCountMismatch {
        /// Position of the polyline in the batch.
        index: usize,
        /// Point count of the first polyline in the batch.
        expected: usize,
        /// Point count of the offending polyline.
        found: usize,
    },
}

impl ShapeError {
    /// Position in the batch of the polyline that failed validation.
    pub fn index(&self) -> usize {
        match *self {
            ShapeError::OddPointCount { index, .. } => index,
            ShapeError::PointCountMismatch { index, .. } => index,
        }
    }
}
