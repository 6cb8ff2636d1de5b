//! Validated addition of tagged host values.

use super::status::{write_cross_boundary, NaStatus};
use crate::adder;
use crate::error::{AddError, Result};
use crate::value::HostValue;

unsafe fn deref<'a>(ptr: *const HostValue, what: &'static str) -> Result<&'a HostValue> {
    ptr.as_ref().ok_or(AddError::NullPointer(what))
}

/// Adds two host values, writing the sum to `out`.
///
/// # Safety
/// - `a` and `b` must be valid pointers to `HostValue`s, or null
/// - `out` must be valid for writes, or null
///
/// # Returns
/// `NaStatus::Ok` if the sum was written. On any other status `out` is not
/// touched: `NullPointer` if a pointer was null, `InvalidArgument` if either
/// value is not numeric.
#[no_mangle]
pub unsafe extern "C" fn na_add_values(
    a: *const HostValue,
    b: *const HostValue,
    out: *mut f64,
) -> NaStatus {
    if out.is_null() {
        return NaStatus::NullPointer;
    }

    let sum = deref(a, "a").and_then(|a| {
        let b = deref(b, "b")?;
        adder::add(a, b)
    });
    write_cross_boundary(out, sum)
}
