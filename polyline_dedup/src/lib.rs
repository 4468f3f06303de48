//! Removal of near duplicate 2D polylines.
//!
//! Polylines are ordered sequences of 2D points. A polyline is a duplicate of an earlier polyline
//! in the same batch when all of their points are within an absolute per coordinate tolerance,
//! either in the same order or with one of them traversed backwards. See [dedup] for the
//! algorithm and [polyline] for the point sequence type and the segment splitting step that
//! prepares arbitrary paths for deduplication.
//!
//! # Examples
//!
//! ```
//! # use polyline_dedup::pline;
//! use polyline_dedup::{dedup::dedup, polyline::split_all};
//!
//! // square traced twice, the second time backwards, plus a lone diagonal
//! let paths = vec![
//!     pline![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
//!     pline![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)],
//!     pline![(0.0, 0.0), (1.0, 1.0)],
//! ];
//!
//! let segments = split_all(&paths);
//! assert_eq!(segments.len(), 9);
//! let unique = dedup(&segments, 1e-6).unwrap();
//! assert_eq!(unique.len(), 5);
//! ```

#[macro_use]
mod macros;
pub mod core;
pub mod dedup;
pub mod polyline;

pub use static_aabb2d_index;
pub use static_aabb2d_index::AABB;
