//! Simple addition function for static-linking proof of concept.

use std::io::{self, Write};

use crate::trace;

/// Exported symbol name, also used as the diagnostic line prefix.
pub const SYMBOL: &str = "additional_native_add2";

/// Adds two integers after printing `additional_native_add2(a, b)` to stdout.
///
/// Overflow wraps in two's complement in every build profile.
#[no_mangle]
pub extern "C" fn additional_native_add2(a: i32, b: i32) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    add2_to(&mut out, a, b)
}

/// Body of [`additional_native_add2`], writing its call line to `out`.
pub fn add2_to<W: Write>(out: &mut W, a: i32, b: i32) -> i32 {
    trace::emit_call(out, SYMBOL, a, b);
    a.wrapping_add(b)
}
