//! The module's exported surface.
//!
//! The host loads the library and looks functions up by name. Calls carry a
//! positional argument list: missing positions read as `undefined` and extra
//! positions are ignored, the same as a host-side function call.

use std::ffi::CStr;

use log::debug;

use crate::adder;
use crate::error::{AddError, Result};
use crate::value::Value;

pub type Callback = fn(&[Value]) -> Result<Value>;

/// A function registered on the module's exports.
#[derive(Clone, Copy)]
pub struct Export {
    pub name: &'static str,
    /// NUL-terminated copy of `name` for C callers.
    pub c_name: &'static CStr,
    pub arity: usize,
    pub callback: Callback,
}

static EXPORTS: [Export; 1] = [Export {
    name: "add",
    c_name: c"add",
    arity: 2,
    callback: add_callback,
}];

pub fn exports() -> &'static [Export] {
    &EXPORTS
}

pub fn lookup(name: &str) -> Option<&'static Export> {
    EXPORTS.iter().find(|e| e.name == name)
}

/// Invoke an export by name with positional arguments.
pub fn call(name: &str, args: &[Value]) -> Result<Value> {
    let export = lookup(name).ok_or_else(|| AddError::UnknownExport(name.to_owned()))?;
    (export.callback)(args).map_err(|e| {
        debug!("[call] {name}: {e}");
        e
    })
}

fn arg(args: &[Value], position: usize) -> &Value {
    args.get(position).unwrap_or(&Value::Undefined)
}

fn add_callback(args: &[Value]) -> Result<Value> {
    let sum = adder::add(arg(args, 0), arg(args, 1))?;
    Ok(Value::Float(sum))
}
