//! Integration tests for the vfsh shell

mod content_properties;
mod path_properties;
mod shell_scenarios;
mod support;
mod tree_loading;
