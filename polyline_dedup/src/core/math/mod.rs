//! Core/common math types for working with 2D points.
mod vector2;

pub use vector2::{vec2, Vector2};
