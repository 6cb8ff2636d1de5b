//! Unchecked addition for callers that have already unboxed their numbers.

use crate::adder;

/// Adds two doubles. Overflow gives infinity.
#[no_mangle]
pub extern "C" fn na_add(a: f64, b: f64) -> f64 {
    adder::add_numbers(a, b)
}
