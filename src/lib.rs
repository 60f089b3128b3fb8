//! Smoke-test harness for the WASI WebGPU examples.
//!
//! Runs each prebuilt example artifact under every configured host runtime
//! (iwasm and wasmedge by default) and reports the captured output per
//! runtime. Outputs are printed for inspection, never diffed.

pub mod cli;
pub mod config;
pub mod executor;
pub mod invocation;
pub mod printer;
pub mod runtime;
pub mod scenario;
pub mod suite;
