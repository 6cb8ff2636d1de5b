//! Status codes returned across the C boundary.

use std::ffi::c_char;

use log::debug;

use crate::error::AddError;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaStatus {
    Ok = 0,
    InvalidArgument = 1,
    NullPointer = 2,
    UnknownExport = 3,
}

impl From<&AddError> for NaStatus {
    fn from(e: &AddError) -> Self {
        match e {
            AddError::InvalidArgument { .. } => NaStatus::InvalidArgument,
            AddError::NullPointer(_) => NaStatus::NullPointer,
            AddError::UnknownExport(_) => NaStatus::UnknownExport,
        }
    }
}

/// Write `item` to `out` on success, or log the error and leave `out` alone.
///
/// # Safety
/// - `out` must be valid for writes
pub(crate) unsafe fn write_cross_boundary<T>(
    out: *mut T,
    item: crate::error::Result<T>,
) -> NaStatus {
    match item {
        Ok(v) => {
            out.write(v);
            NaStatus::Ok
        }
        Err(e) => {
            debug!("[cross_boundary_error] reason: {e}");
            NaStatus::from(&e)
        }
    }
}

/// Describes a status code. Never returns null; the string is static.
#[no_mangle]
pub extern "C" fn na_status_message(status: i32) -> *const c_char {
    let msg = match status {
        0 => c"ok",
        1 => c"invalid argument: expected two numeric values",
        2 => c"null pointer argument",
        3 => c"unknown export",
        _ => c"unknown status",
    };
    msg.as_ptr()
}
