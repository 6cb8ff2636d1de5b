//! Native Add - a minimal native extension
//!
//! This library exposes one function, `add`, to a host runtime through a C ABI.
//! Both arguments must be numeric; anything else is reported as an error
//! instead of producing a result.

pub mod adder;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod module;
pub mod value;

pub use adder::{add, add_numbers};
pub use error::{AddError, Result};
pub use module::{call, exports, lookup, Export};
pub use value::{HostValue, Numeric, Value, ValueKind};
