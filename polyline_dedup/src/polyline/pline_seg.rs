use super::Polyline;
use crate::core::{math::Vector2, traits::Real};
use std::{iter::FusedIterator, slice::ChunksExact};

/// A single straight segment of a polyline stored as its (start, end) point pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegPair<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T> SegPair<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        SegPair { start, end }
    }

    /// Same segment with start and end swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        SegPair::new(self.end, self.start)
    }

    /// Returns true if both the start and end points are within `tolerance` of `other`'s start and
    /// end points, see [Vector2::tol_eq].
    #[inline]
    pub fn tol_eq(&self, other: &Self, tolerance: T) -> bool {
        self.start.tol_eq(other.start, tolerance) && self.end.tol_eq(other.end, tolerance)
    }
}

/// Iterator over the (start, end) segment pairs of a polyline, see [Polyline::segment_pairs].
#[derive(Debug, Clone)]
pub struct SegPairIter<'a, T> {
    chunks: ChunksExact<'a, Vector2<T>>,
}

impl<'a, T> Iterator for SegPairIter<'a, T>
where
    T: Real,
{
    type Item = SegPair<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|c| SegPair::new(c[0], c[1]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for SegPairIter<'a, T>
where
    T: Real,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back().map(|c| SegPair::new(c[0], c[1]))
    }
}

impl<'a, T> ExactSizeIterator for SegPairIter<'a, T> where T: Real {}

impl<'a, T> FusedIterator for SegPairIter<'a, T> where T: Real {}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Number of (start, end) segment pairs the points group into, `None` if the point count is
    /// zero or odd.
    #[inline]
    pub fn segment_pair_count(&self) -> Option<usize> {
        let vc = self.vertex_count();
        if vc == 0 || vc % 2 != 0 {
            None
        } else {
            Some(vc / 2)
        }
    }

    /// Group the points into consecutive (start, end) segment pairs, points `[p0, p1, p2, p3]`
    /// become `[(p0, p1), (p2, p3)]`.
    ///
    /// Returns `None` if the point count is zero or odd (points cannot be grouped into whole
    /// pairs). Use [Polyline::split_segments] to turn any polyline into two point polylines first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline_dedup::pline;
    /// # use polyline_dedup::polyline::*;
    /// # use polyline_dedup::core::math::*;
    /// let polyline = pline![(0.0, 0.0), (1.0, 1.0)];
    /// let pairs: Vec<_> = polyline.segment_pairs().unwrap().collect();
    /// assert_eq!(pairs, vec![SegPair::new(vec2(0.0, 0.0), vec2(1.0, 1.0))]);
    ///
    /// let odd = pline![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
    /// assert!(odd.segment_pairs().is_none());
    /// ```
    #[inline]
    pub fn segment_pairs(&self) -> Option<SegPairIter<'_, T>> {
        self.segment_pair_count()?;
        Some(SegPairIter {
            chunks: self.point_data.chunks_exact(2),
        })
    }

    /// Split the polyline into one two point polyline per segment, in path order.
    ///
    /// A polyline with `k >= 2` points produces `k - 1` polylines. Polylines with less than 2 points
    /// have no segments and produce nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline_dedup::pline;
    /// # use polyline_dedup::polyline::*;
    /// let polyline = pline![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
    /// let split = polyline.split_segments();
    /// assert_eq!(split, vec![pline![(0.0, 0.0), (1.0, 0.0)], pline![(1.0, 0.0), (1.0, 1.0)]]);
    /// ```
    pub fn split_segments(&self) -> Vec<Polyline<T>> {
        self.point_data
            .windows(2)
            .map(|w| Polyline::from_points([w[0], w[1]]))
            .collect()
    }
}

/// Split every polyline of `plines` into two point polylines (see [Polyline::split_segments]),
/// preserving order. The result always satisfies the shape requirements of
/// [dedup_polylines](crate::dedup::dedup_polylines).
pub fn split_all<'a, T, I>(plines: I) -> Vec<Polyline<T>>
where
    T: Real,
    I: IntoIterator<Item = &'a Polyline<T>>,
{
    let mut result = Vec::new();
    for pline in plines {
        result.extend(pline.split_segments());
    }

    result
}
