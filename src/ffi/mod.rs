//! C FFI layer for the static-linking harness.
//!
//! All functions are marked with `#[no_mangle]` and use `extern "C"`, so the
//! host can resolve them by name from its import table.

pub mod simple;

pub use simple::additional_native_add2;
