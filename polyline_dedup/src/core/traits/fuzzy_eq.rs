/// Trait for tolerance based equality of floating point numbers.
///
/// [FuzzyEq::tol_eq] is an inclusive absolute compare (`|a - b| <= tol`), this is the coordinate
/// equality rule used when deciding if two polylines are duplicates. A tolerance of zero means exact
/// equality. Comparisons involving NaN or infinity never succeed for a finite tolerance.
///
/// # Examples
///
/// ```
/// # use polyline_dedup::core::traits::*;
/// let a: f64 = 0.1 + 0.2;
///
/// // Direct comparison fails due to floating point precision
/// assert_ne!(a, 0.3);
/// assert!(a.tol_eq(0.3, 1e-12));
///
/// // Boundary is included
/// assert!(1.5f64.tol_eq(1.0, 0.5));
/// assert!(!1.5f64.tol_eq(1.0, 0.25));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns `true` if `|self - other| <= tolerance`.
    fn tol_eq(&self, other: Self, tolerance: Self) -> bool;
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn tol_eq(&self, other: Self, tolerance: Self) -> bool {
                (*self - other).abs() <= tolerance
            }
        }
    };
}

impl_fuzzy_eq!(f32);
impl_fuzzy_eq!(f64);
