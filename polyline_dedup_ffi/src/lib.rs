//! This module contains the C foreign function interface for polyline_dedup.
//!
//! Every function returns an `i32` error code, 0 means success, -1 means a panic was caught (internal
//! error), other values are documented per function under "Specific Error Codes".
#![allow(non_camel_case_types)]
pub mod error_handling;

use error_handling::{clear_last_error, set_last_error, LAST_ERROR};
use polyline_dedup::{
    core::math::Vector2,
    dedup::{dedup_polylines, DedupOptions, DedupStrategy},
    polyline::{split_all, Polyline},
};
use std::{ffi::c_char, panic, ptr, slice};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct pdd_point {
    pub x: f64,
    pub y: f64,
}

impl pdd_point {
    pub fn new(x: f64, y: f64) -> Self {
        pdd_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        pdd_point::new(v.x, v.y)
    }
}

/// Opaque type that wraps a [Polyline].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct pdd_pline(pub Polyline<f64>);

/// Opaque type that represents a list of [pdd_pline], the list owns the polylines it holds.
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
pub struct pdd_plinelist(pub Vec<*mut pdd_pline>);

impl pdd_plinelist {
    pub fn from_internal<I>(plines: I) -> *mut pdd_plinelist
    where
        I: IntoIterator<Item = Polyline<f64>>,
    {
        let r = plines
            .into_iter()
            .map(|pl| Box::into_raw(Box::new(pdd_pline(pl))))
            .collect();

        Box::into_raw(Box::new(pdd_plinelist(r)))
    }

    /// Clone all the polylines held into a new batch.
    ///
    /// # Safety
    ///
    /// All pointers held must be valid [pdd_pline] objects.
    pub unsafe fn to_internal(&self) -> Vec<Polyline<f64>> {
        self.0.iter().map(|&pl| (*pl).0.clone()).collect()
    }
}

impl Drop for pdd_plinelist {
    fn drop(&mut self) {
        for pl in self.0.drain(..) {
            if !pl.is_null() {
                drop(unsafe { Box::from_raw(pl) });
            }
        }
    }
}

/// FFI representation of [DedupOptions].
///
/// `use_spatial_index` selects [DedupStrategy::SpatialIndex] if non-zero, otherwise
/// [DedupStrategy::PairwiseScan].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct pdd_dedup_o {
    pub tolerance: f64,
    pub use_spatial_index: u8,
}

impl pdd_dedup_o {
    /// Convert FFI dedup options type to internal type.
    pub fn to_internal(&self) -> DedupOptions<'static, f64> {
        DedupOptions {
            tolerance: self.tolerance,
            strategy: if self.use_spatial_index != 0 {
                DedupStrategy::SpatialIndex
            } else {
                DedupStrategy::PairwiseScan
            },
            progress: None,
        }
    }
}

impl Default for pdd_dedup_o {
    fn default() -> Self {
        let d = DedupOptions::<f64>::default();
        Self {
            tolerance: d.tolerance,
            use_spatial_index: (d.strategy == DedupStrategy::SpatialIndex) as u8,
        }
    }
}

/// Write default option values to a [pdd_dedup_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_dedup_o_init(options: *mut pdd_dedup_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

/// Create a new polyline object.
///
/// `points` is an array of [pdd_point] to create the polyline with (may be null if `n_points`
/// is 0).
/// `n_points` contains the number of points in the array.
/// `pline` is an out parameter to hold the created polyline.
///
/// # Safety
///
/// `points` may be null if `n_points` is 0 or must point to a valid contiguous buffer of
/// [pdd_point] with length of at least `n_points`.
/// `pline` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_pline_create(
    points: *const pdd_point,
    n_points: u32,
    pline: *mut *const pdd_pline,
) -> i32 {
    ffi_catch_unwind!({
        let mut result = Polyline::new();
        if !points.is_null() && n_points != 0 {
            let data = slice::from_raw_parts(points, n_points as usize);
            result = Polyline::with_capacity(data.len());
            for p in data {
                result.add(p.x, p.y);
            }
        }

        pline.write(Box::into_raw(Box::new(pdd_pline(result))));
        0
    })
}

/// Free an existing [pdd_pline] object.
///
/// Nothing happens if `pline` is null.
///
/// # Safety
///
/// `pline` must be null or a valid pdd_pline object that was created with [pdd_pline_create],
/// has not already been freed, and is not owned by a [pdd_plinelist].
#[no_mangle]
pub unsafe extern "C" fn pdd_pline_f(pline: *mut pdd_pline) {
    if !pline.is_null() {
        drop(Box::from_raw(pline))
    }
}

/// Add a point to the end of the polyline.
///
/// ## Specific Error Codes
/// * 1 = `pline` is null.
///
/// # Safety
///
/// `pline` must be null or a valid pdd_pline object.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_pline_add(pline: *mut pdd_pline, x: f64, y: f64) -> i32 {
    ffi_catch_unwind!({
        if pline.is_null() {
            return 1;
        }

        (*pline).0.add(x, y);
        0
    })
}

/// Get the number of points in the polyline.
///
/// `count` used as out parameter to hold the point count.
///
/// ## Specific Error Codes
/// * 1 = `pline` is null.
///
/// # Safety
///
/// `pline` must be null or a valid pdd_pline object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_pline_get_point_count(pline: *const pdd_pline, count: *mut u32) -> i32 {
    ffi_catch_unwind!({
        if pline.is_null() {
            return 1;
        }

        // using try_from to catch odd case of point count greater than u32::MAX to prevent memory
        // corruption/access errors but just panic as internal error if it does occur
        count.write(u32::try_from((*pline).0.vertex_count()).unwrap());
        0
    })
}

/// Write all the point data of the polyline to a buffer.
///
/// `points` is the buffer to write to, it must be at least as long as the point count (see
/// [pdd_pline_get_point_count]).
///
/// ## Specific Error Codes
/// * 1 = `pline` is null.
///
/// # Safety
///
/// `pline` must be null or a valid pdd_pline object.
/// `points` must point to a buffer of at least the polyline's point count.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_pline_get_point_data(
    pline: *const pdd_pline,
    points: *mut pdd_point,
) -> i32 {
    ffi_catch_unwind!({
        if pline.is_null() {
            return 1;
        }

        let src = (*pline).0.points();
        let dst = slice::from_raw_parts_mut(points, src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = pdd_point::from_internal(*s);
        }
        0
    })
}

/// Create a new [pdd_plinelist] object.
///
/// `capacity` is the number of plines to pre-allocate space for. May be zero.
/// `plinelist` is an out parameter to hold the created list.
///
/// # Safety
///
/// `plinelist` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_plinelist_create(
    capacity: usize,
    plinelist: *mut *const pdd_plinelist,
) -> i32 {
    ffi_catch_unwind!({
        plinelist.write(Box::into_raw(Box::new(pdd_plinelist(Vec::with_capacity(
            capacity,
        )))));
        0
    })
}

/// Free an existing [pdd_plinelist] object and all [pdd_pline] owned by it.
///
/// Nothing happens if `plinelist` is null.
///
/// # Safety
///
/// `plinelist` must be null or a valid [pdd_plinelist] object.
#[no_mangle]
pub unsafe extern "C" fn pdd_plinelist_f(plinelist: *mut pdd_plinelist) {
    if !plinelist.is_null() {
        drop(Box::from_raw(plinelist))
    }
}

/// Get the number of polylines inside a [pdd_plinelist].
///
/// `count` used as out parameter to hold the polyline count.
///
/// ## Specific Error Codes
/// * 1 = `plinelist` is null.
///
/// # Safety
///
/// `plinelist` must be null or a valid [pdd_plinelist] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_plinelist_get_count(
    plinelist: *const pdd_plinelist,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if plinelist.is_null() {
            return 1;
        }

        count.write(u32::try_from((*plinelist).0.len()).unwrap());
        0
    })
}

/// Get a polyline at the given index position in the [pdd_plinelist].
///
/// `pline` used as out parameter to hold the polyline pointer. NOTE: This does not release
/// ownership of the [pdd_pline] from the [pdd_plinelist].
///
/// ## Specific Error Codes
/// * 1 = `plinelist` is null.
/// * 2 = `position` out of range for the [pdd_plinelist].
///
/// # Safety
///
/// `plinelist` must be null or a valid [pdd_plinelist] object.
/// `pline` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_plinelist_get_pline(
    plinelist: *const pdd_plinelist,
    position: u32,
    pline: *mut *const pdd_pline,
) -> i32 {
    ffi_catch_unwind!({
        if plinelist.is_null() {
            return 1;
        }

        match (&(*plinelist).0).get(position as usize) {
            Some(pl) => {
                pline.write(*pl);
                0
            }
            None => 2,
        }
    })
}

/// Append a [pdd_pline] to the end of a [pdd_plinelist], the [pdd_plinelist] takes ownership of
/// the polyline.
///
/// ## Specific Error Codes
/// * 1 = `plinelist` or `pline` is null.
///
/// # Safety
///
/// `plinelist` must be null or a valid [pdd_plinelist] object.
/// `pline` must be null or a valid [pdd_pline] object not owned by another list.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_plinelist_push(
    plinelist: *mut pdd_plinelist,
    pline: *mut pdd_pline,
) -> i32 {
    ffi_catch_unwind!({
        if plinelist.is_null() || pline.is_null() {
            return 1;
        }

        (*plinelist).0.push(pline);
        0
    })
}

/// Split every polyline of `plinelist` into two point polylines (one per segment).
///
/// `result` is an out parameter holding a new [pdd_plinelist] with the segments in order, the
/// caller owns it and must free it with [pdd_plinelist_f].
///
/// ## Specific Error Codes
/// * 1 = `plinelist` is null.
///
/// # Safety
///
/// `plinelist` must be null or a valid [pdd_plinelist] object.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_split_all(
    plinelist: *const pdd_plinelist,
    result: *mut *const pdd_plinelist,
) -> i32 {
    ffi_catch_unwind!({
        if plinelist.is_null() {
            return 1;
        }

        let segments = split_all((*plinelist).0.iter().map(|&pl| &(*pl).0));
        result.write(pdd_plinelist::from_internal(segments));
        0
    })
}

/// Remove every polyline of `plinelist` that duplicates an earlier polyline (same points within
/// the tolerance, in the same or reversed order).
///
/// `options` may be null, default options are used in that case (see [pdd_dedup_o_init]).
/// `result` is an out parameter holding a new [pdd_plinelist] with copies of the surviving
/// polylines in their original order, the caller owns it and must free it with
/// [pdd_plinelist_f]. Nothing is written to `result` on error.
///
/// ## Specific Error Codes
/// * 1 = `plinelist` is null.
/// * 2 = polylines do not all have the same, even, non-zero point count, split them first with
///   [pdd_split_all]. Error message available from [pdd_last_error_msg].
/// * 3 = `options.tolerance` is negative, NaN or infinite.
///
/// # Safety
///
/// `plinelist` must be null or a valid [pdd_plinelist] object.
/// `options` must be null or a valid [pdd_dedup_o] object.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_dedup(
    plinelist: *const pdd_plinelist,
    options: *const pdd_dedup_o,
    result: *mut *const pdd_plinelist,
) -> i32 {
    ffi_catch_unwind!({
        if plinelist.is_null() {
            return 1;
        }

        let o = options.as_ref().copied().unwrap_or_default();
        if !(o.tolerance >= 0.0 && o.tolerance.is_finite()) {
            set_last_error(format!("invalid tolerance: {}", o.tolerance));
            return 3;
        }

        let batch = (*plinelist).to_internal();
        match dedup_polylines(&batch, &o.to_internal()) {
            Ok(unique) => {
                clear_last_error();
                result.write(pdd_plinelist::from_internal(unique));
                0
            }
            Err(e) => {
                set_last_error(e.to_string());
                2
            }
        }
    })
}

/// Get the message of the last error that occurred on the calling thread.
///
/// `msg` is an out parameter that receives a null terminated string or null if no error message is
/// set. The string is owned by the library and is valid until the next call into the library on
/// the same thread.
///
/// ## Specific Error Codes
/// * 1 = `msg` is null.
///
/// # Safety
///
/// `msg` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pdd_last_error_msg(msg: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        if msg.is_null() {
            return 1;
        }

        let p = LAST_ERROR.with(|last| {
            last.borrow()
                .as_ref()
                .map_or(ptr::null(), |e| e.error_msg.as_ptr())
        });
        msg.write(p);
        0
    })
}
