//! Read-only view of the export table for hosts that register functions by name.

use std::ffi::c_char;
use std::ptr;

use crate::module;

/// Number of registered exports.
#[no_mangle]
pub extern "C" fn na_export_count() -> usize {
    module::exports().len()
}

/// Name of the export at `index`, or null if out of range.
/// The string is static and NUL-terminated.
#[no_mangle]
pub extern "C" fn na_export_name(index: usize) -> *const c_char {
    module::exports()
        .get(index)
        .map_or(ptr::null(), |e| e.c_name.as_ptr())
}

/// Arity of the export at `index`, or -1 if out of range.
#[no_mangle]
pub extern "C" fn na_export_arity(index: usize) -> i32 {
    module::exports()
        .get(index)
        .map_or(-1, |e| e.arity as i32)
}
