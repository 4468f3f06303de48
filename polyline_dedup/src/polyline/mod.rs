//! This module has all the types and functions associated with polylines and their (start, end)
//! segment pair form.
mod pline;
mod pline_seg;

pub use pline::*;
pub use pline_seg::*;
