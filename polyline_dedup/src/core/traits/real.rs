use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and used as
/// the coordinate type of a spatial index.
pub trait Real:
    num_traits::real::Real
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + Send
    + Sync
    + 'static
{
}

impl Real for f32 {}

impl Real for f64 {}
