//! Additional Native - static-linking test library
//!
//! This library exports a C ABI symbol for use by a WebAssembly host
//! that links native code statically.

pub mod ffi;
pub mod trace;

mod tests;

pub use ffi::additional_native_add2;
