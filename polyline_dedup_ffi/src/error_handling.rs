use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString) -> Self {
        LastErrorData { error_msg }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Set last error information.
///
/// `error_msg` is turned into a CString from bytes, interior nulls are replaced.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T) {
    let mut bytes = error_msg.into();
    bytes.retain(|&b| b != 0);
    // no interior nulls remain so construction cannot fail
    let msg = CString::new(bytes).unwrap_or_default();

    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = Some(LastErrorData::new(msg));
    });
}

/// Clear last error information.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = None;
    });
}
