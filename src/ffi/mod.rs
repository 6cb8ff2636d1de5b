//! C FFI layer for the host runtime.
//!
//! This module exports C ABI functions the host calls after loading the library.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `adder` and `module`. These functions are thin wrappers
//! that handle null checks, tag decoding, and error-to-status conversion.

pub mod exports;
pub mod lifecycle;
pub mod simple;
pub mod status;
pub mod values;

pub use exports::{na_export_arity, na_export_count, na_export_name};
pub use lifecycle::na_init_logging;
pub use simple::na_add;
pub use status::{na_status_message, NaStatus};
pub use values::na_add_values;
