//! Command Line Interface (CLI) layer for claudesh.
//!
//! `args` classifies the raw argument vector, `errors` holds the CLI error
//! type, and `runner` wires classification, script loading and the tool
//! invocation together. Embedders should call the `claudesh` library directly.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::{init_logging, run};
