//! CLI command handlers

pub mod commands;

pub use commands::{create_test_excel, init_tracing, inspect};
