//! vfsh: Virtual Filesystem Shell
//!
//! Loads a read-only tree of directories and files from an XML description and
//! lets a user navigate and inspect it through a small set of shell commands.

pub mod commands;
pub mod config;
pub mod error;
pub mod expand;
pub mod logging;
pub mod repl;
pub mod session;
pub mod shell;
pub mod tooling;
pub mod tree;
