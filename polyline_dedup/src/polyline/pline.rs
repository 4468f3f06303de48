use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Open 2D polyline represented as an ordered sequence of points.
///
/// Consecutive points are connected by straight segments. The point order is the traversal
/// direction of the path, see [Polyline::reversed] for the same path traversed backwards.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "points"))]
    /// Contiguous sequence of points.
    pub point_data: Vec<Vector2<T>>,
}

impl<T> Default for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Create a new empty [Polyline].
    #[inline]
    pub fn new() -> Self {
        Polyline {
            point_data: Vec::new(),
        }
    }

    /// Create a new empty [Polyline] with `capacity` points reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Polyline {
            point_data: Vec::with_capacity(capacity),
        }
    }

    /// Create a [Polyline] from an iterator of points.
    #[inline]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        Polyline {
            point_data: points.into_iter().collect(),
        }
    }

    /// Add a point to the end of the polyline.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.point_data.push(Vector2::new(x, y));
    }

    /// Add a point to the end of the polyline.
    #[inline]
    pub fn add_point(&mut self, point: Vector2<T>) {
        self.point_data.push(point);
    }

    /// Total number of points.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.point_data.len()
    }

    /// Returns true if point count is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_data.is_empty()
    }

    /// Get the point at given `index` position. Returns `None` if `index` out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<T>> {
        self.point_data.get(index).copied()
    }

    /// All points as a slice.
    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.point_data
    }

    /// Return iterator to iterate over all the polyline points.
    #[inline]
    pub fn iter_points(&self) -> impl DoubleEndedIterator<Item = Vector2<T>> + '_ {
        self.point_data.iter().copied()
    }

    /// Returns a new polyline with the point order reversed (same path, opposite direction).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline_dedup::pline;
    /// # use polyline_dedup::polyline::*;
    /// let forward = pline![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
    /// let backward = forward.reversed();
    /// assert_eq!(backward, pline![(2.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
    /// ```
    pub fn reversed(&self) -> Self {
        Polyline::from_points(self.iter_points().rev())
    }

    /// Compute the XY extents of the polyline.
    ///
    /// Returns `None` if polyline is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline_dedup::pline;
    /// # use polyline_dedup::polyline::*;
    /// let polyline = pline![(1.0, 3.0), (-2.0, 0.5), (4.0, 1.0)];
    /// let extents = polyline.extents().unwrap();
    /// assert_eq!(extents.min_x, -2.0);
    /// assert_eq!(extents.min_y, 0.5);
    /// assert_eq!(extents.max_x, 4.0);
    /// assert_eq!(extents.max_y, 3.0);
    /// ```
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.get(0)?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);

        for p in self.point_data.iter().skip(1) {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.point_data[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.point_data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn extents_of_empty_is_none() {
        assert!(Polyline::<f64>::new().extents().is_none());
    }

    #[test]
    fn extents_of_single_point() {
        let mut pline = Polyline::new();
        pline.add(2.0, 3.0);
        let extents = pline.extents().unwrap();
        assert_eq!(
            (extents.min_x, extents.min_y, extents.max_x, extents.max_y),
            (2.0, 3.0, 2.0, 3.0)
        );
    }

    #[test]
    fn index_and_index_mut() {
        let mut pline = Polyline::from_points([vec2(0.0, 0.0), vec2(1.0, 2.0)]);
        assert_eq!(pline[1], vec2(1.0, 2.0));
        pline[1] = vec2(5.0, 5.0);
        assert_eq!(pline.get(1), Some(vec2(5.0, 5.0)));
        assert_eq!(pline.get(2), None);
    }
}
