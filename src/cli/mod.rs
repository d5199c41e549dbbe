// file: src/cli/mod.rs
// version: 1.0.0
// guid: b7d5fa98-8518-432e-b3e3-b0526853c9bc

//! Command line interface for CrackTime Analyzer

pub mod args;
pub mod commands;
pub mod output;

pub use args::Cli;
pub use commands::*;
