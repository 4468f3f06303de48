//! Core/common numeric traits for use in polyline_dedup.
mod fuzzy_eq;
mod real;

pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
