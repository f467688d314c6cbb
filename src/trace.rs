//! Diagnostic call lines written ahead of each exported call.

use std::io::{self, Write};

/// Line terminator used for every diagnostic line.
pub const LINE_END: &str = "\r\n";

/// Writes `name(a, b)` followed by [`LINE_END`].
pub fn write_call<W: Write>(out: &mut W, name: &str, a: i32, b: i32) -> io::Result<()> {
    write!(out, "{}({}, {}){}", name, a, b, LINE_END)
}

/// Writes a call line to `out` and flushes it.
///
/// Write errors are dropped: this runs behind an `extern "C"` boundary and
/// must not panic.
pub fn emit_call<W: Write>(out: &mut W, name: &str, a: i32, b: i32) {
    let _ = write_call(out, name, a, b).and_then(|_| out.flush());
}
