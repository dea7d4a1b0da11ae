//! Tooling & Integration Layer
//!
//! Command-line entry: startup flag parsing and session wiring.

pub mod cli;

pub use cli::{Cli, CliContext};
