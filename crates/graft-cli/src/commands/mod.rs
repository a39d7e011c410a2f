//! Command handlers. Each module owns one subcommand's execution.

pub mod completions;
pub mod generate;
