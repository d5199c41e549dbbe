// file: src/logging/mod.rs
// version: 1.0.0
// guid: 9c048e88-8aff-4455-8f9d-b47d14175875

//! Logging system for CrackTime Analyzer

pub mod logger;

pub use logger::{init_json_logger, init_logger, with_operation_span};
