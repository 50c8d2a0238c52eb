//! Command implementations for the `adjg` binary.

pub mod commands;

pub use commands::{exit_code, GraphSource};
