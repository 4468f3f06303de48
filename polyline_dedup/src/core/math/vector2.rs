use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point/vector with `x` and `y` components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Per coordinate (L-infinity) comparison with an inclusive absolute `tolerance`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline_dedup::core::math::*;
    /// let p = vec2(0.0, 0.0);
    /// assert!(p.tol_eq(vec2(0.01, -0.01), 0.01));
    /// assert!(!p.tol_eq(vec2(0.0, 0.02), 0.01));
    /// ```
    #[inline]
    pub fn tol_eq(&self, other: Self, tolerance: T) -> bool {
        self.x.tol_eq(other.x, tolerance) && self.y.tol_eq(other.y, tolerance)
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}
